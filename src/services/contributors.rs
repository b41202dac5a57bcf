use anyhow::Result;
use log::info;

use crate::api::GitHubClient;
use crate::config::settings::AppConfig;
use crate::render;

/// Fetches and prints contributor statistics for a repository
pub struct ContributorsService {
    client: GitHubClient,
}

impl ContributorsService {
    pub fn new(config: &AppConfig) -> Result<Self> {
        Ok(Self {
            client: GitHubClient::new(&config.github)?,
        })
    }

    pub async fn run(&mut self, owner: &str, repo: &str) -> Result<()> {
        let contributors = self.client.contributor_stats(owner, repo).await?;

        if contributors.is_empty() {
            info!("No contributor statistics available for {}/{}", owner, repo);
            return Ok(());
        }

        info!("{} contributors in {}/{}", contributors.len(), owner, repo);
        println!("{}", render::lists::contributor_list(&contributors));
        Ok(())
    }
}
