use serde::Deserialize;

/// Repository hit from a search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoInfo {
    pub name: String,
    /// Owner login; the API marks this nullable without documenting when.
    pub owner: Option<String>,
    pub description: Option<String>,
}

/// Contributor with aggregated commit count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contributor {
    pub name: String,
    pub avatar: String,
    pub url: String,
    pub contributions: i64,
}

/// One page of repository search results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults {
    /// Total hits across all pages, not just this one.
    pub total: usize,
    pub repos: Vec<RepoInfo>,
}

// --- API Response Structures ---

/// Raw repository search response from GitHub
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub total_count: usize,
    pub items: Vec<RepoItemResponse>,
}

#[derive(Debug, Deserialize)]
pub struct RepoItemResponse {
    pub name: String,
    #[serde(default)]
    pub owner: Option<OwnerResponse>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct OwnerResponse {
    pub login: String,
}

/// Raw contributor statistics entry from GitHub
#[derive(Debug, Deserialize)]
pub struct ContributorStatsResponse {
    /// Absent for commits whose author has no account anymore.
    #[serde(default)]
    pub author: Option<AuthorResponse>,
    pub total: i64,
}

#[derive(Debug, Deserialize)]
pub struct AuthorResponse {
    pub login: String,
    pub avatar_url: String,
    pub html_url: String,
}

/// Raw entry from the user repositories listing
#[derive(Debug, Deserialize)]
pub struct UserRepoResponse {
    pub name: String,
}
