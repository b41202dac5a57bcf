use anyhow::Result;
use log::{debug, info};
use url::Url;

use crate::api::GitHubClient;
use crate::config::settings::AppConfig;
use crate::errors;
use crate::pagination::{PageEntry, build_render_plan};
use crate::render;

/// Runs a repository search and prints one page of results
pub struct SearchService {
    client: GitHubClient,
}

impl SearchService {
    pub fn new(config: &AppConfig) -> Result<Self> {
        Ok(Self {
            client: GitHubClient::new(&config.github)?,
        })
    }

    pub async fn run(&mut self, query: &str, page: usize) -> Result<()> {
        let results = self.client.search_repositories(query, page).await?;
        info!("{} repositories match {:?}", results.total, query);

        if results.repos.is_empty() {
            info!("Nothing to show on page {}", page);
            return Ok(());
        }
        println!("{}", render::lists::repo_list(&results.repos));

        let plan = self.build_plan(results.total, query, page)?;
        if !plan.is_empty() {
            println!();
            println!("{}", render::pagination_bar(&plan));
            log_page_targets(&plan);
        }
        Ok(())
    }

    /// Derive the render plan from the request we just made, so every
    /// link's href is a ready-to-request path for that page.
    fn build_plan(&self, total: usize, query: &str, page: usize) -> Result<Vec<PageEntry>> {
        let request_url = self.client.search_url(query, page);
        let current_url = errors::with_parse_context(Url::parse(&request_url), "request URL")?;
        Ok(build_render_plan(
            total,
            self.client.per_page(),
            page,
            &current_url,
        ))
    }
}

fn log_page_targets(plan: &[PageEntry]) {
    for entry in plan {
        if let PageEntry::Link(link) = entry {
            if !link.is_current {
                debug!("  page {}: {}", link.page, link.href);
            }
        }
    }
}
