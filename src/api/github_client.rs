use anyhow::Result;
use log::info;
use serde_json::Value;
use urlencoding::encode;

use crate::api::parsers;
use crate::config::settings::GitHubSettings;
use crate::domain::models::{Contributor, SearchResponse, SearchResults, UserRepoResponse};
use crate::errors;
use crate::http::RateLimitedClient;

/// GitHub REST API client
pub struct GitHubClient {
    client: RateLimitedClient,
    base_url: String,
    per_page: usize,
}

impl GitHubClient {
    /// Create a new GitHub API client.
    ///
    /// Requests are sent anonymously unless a `GITHUB_TOKEN` environment
    /// variable supplies a bearer token.
    pub fn new(settings: &GitHubSettings) -> Result<Self> {
        let token = std::env::var("GITHUB_TOKEN")
            .ok()
            .filter(|token| !token.is_empty());
        let client = RateLimitedClient::new(
            settings.user_agent,
            settings.timeout_secs,
            settings.rate_limit_ms,
            token.as_deref(),
        )?;

        Ok(Self {
            client,
            base_url: settings.api_base_url.trim_end_matches('/').to_string(),
            per_page: settings.per_page,
        })
    }

    /// Fetch one page of repository search results
    pub async fn search_repositories(&mut self, query: &str, page: usize) -> Result<SearchResults> {
        let url = self.search_url(query, page);
        info!("Searching repositories for {:?} (page {})", query, page);

        let response = self.client.get(&url).await?;
        if !response.status().is_success() {
            anyhow::bail!("API returned status: {}", response.status());
        }

        let data: SearchResponse =
            errors::with_parse_context(response.json().await, "search response")?;
        Ok(parsers::search::map_search_results(data))
    }

    /// Fetch contributor statistics for a repository, sorted by
    /// contribution count.
    ///
    /// Returns an empty list while GitHub is still assembling the
    /// statistics (`202 Accepted`).
    pub async fn contributor_stats(&mut self, owner: &str, repo: &str) -> Result<Vec<Contributor>> {
        let url = self.build_stats_url(owner, repo);
        info!("Fetching contributor statistics for {}/{}", owner, repo);

        let response = self.client.get(&url).await?;
        if response.status() == reqwest::StatusCode::ACCEPTED {
            log::warn!(
                "Statistics for {}/{} are still being assembled, retry shortly",
                owner,
                repo
            );
            return Ok(Vec::new());
        }
        if !response.status().is_success() {
            anyhow::bail!("API returned status: {}", response.status());
        }

        let data: Value =
            errors::with_parse_context(response.json().await, "contributor statistics")?;
        let entries = parsers::contributors::decode_stats_payload(data)?;
        Ok(parsers::contributors::map_contributors(entries))
    }

    /// Fetch the names of a user's public repositories
    pub async fn user_repositories(&mut self, username: &str) -> Result<Vec<String>> {
        let url = self.build_user_repos_url(username);
        info!("Fetching repositories of user {}", username);

        let response = self.client.get(&url).await?;
        if !response.status().is_success() {
            anyhow::bail!("API returned status: {}", response.status());
        }

        let repos: Vec<UserRepoResponse> =
            errors::with_parse_context(response.json().await, "user repositories")?;
        Ok(repos.into_iter().map(|repo| repo.name).collect())
    }

    /// Full URL of a search request. Also the base the pagination links
    /// for that search are derived from.
    pub fn search_url(&self, query: &str, page: usize) -> String {
        format!(
            "{}/search/repositories?q={}&per_page={}&page={}",
            self.base_url,
            encode(query),
            self.per_page,
            page
        )
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    // --- Helper Methods ---

    fn build_stats_url(&self, owner: &str, repo: &str) -> String {
        format!(
            "{}/repos/{}/{}/stats/contributors",
            self.base_url,
            encode(owner),
            encode(repo)
        )
    }

    fn build_user_repos_url(&self, username: &str) -> String {
        format!("{}/users/{}/repos", self.base_url, encode(username))
    }
}
