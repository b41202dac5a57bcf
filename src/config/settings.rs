/// Settings for talking to the GitHub API
#[derive(Debug, Clone)]
pub struct GitHubSettings {
    /// Owned so tests can point the client at a local mock server.
    pub api_base_url: String,
    pub user_agent: &'static str,
    pub timeout_secs: u64,
    pub rate_limit_ms: u64,
    /// Search results per page.
    pub per_page: usize,
}

impl Default for GitHubSettings {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.github.com".to_string(),
            user_agent: "GithubExplorer/0.1",
            timeout_secs: 30,
            rate_limit_ms: 100, // 10 req/sec
            per_page: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub github: GitHubSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            github: GitHubSettings::default(),
        }
    }
}
