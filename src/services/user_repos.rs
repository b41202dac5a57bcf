use anyhow::Result;
use log::info;

use crate::api::GitHubClient;
use crate::config::settings::AppConfig;
use crate::render;

/// Lists the public repositories of a user
pub struct UserReposService {
    client: GitHubClient,
}

impl UserReposService {
    pub fn new(config: &AppConfig) -> Result<Self> {
        Ok(Self {
            client: GitHubClient::new(&config.github)?,
        })
    }

    pub async fn run(&mut self, owner: &str) -> Result<()> {
        let names = self.client.user_repositories(owner).await?;

        if names.is_empty() {
            info!("{} has no public repositories", owner);
            return Ok(());
        }

        println!("{}", render::lists::repo_names(&names));
        Ok(())
    }
}
