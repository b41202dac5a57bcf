pub mod github_client;
pub mod parsers;

pub use github_client::GitHubClient;
