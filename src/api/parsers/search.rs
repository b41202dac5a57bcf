use crate::domain::models::{RepoInfo, SearchResponse, SearchResults};

/// Map a raw search response into domain search results
pub fn map_search_results(response: SearchResponse) -> SearchResults {
    let repos = response
        .items
        .into_iter()
        .map(|item| RepoInfo {
            name: item.name,
            owner: item.owner.map(|owner| owner.login),
            description: item.description,
        })
        .collect();

    SearchResults {
        total: response.total_count,
        repos,
    }
}
