use colored::Colorize;

use crate::domain::models::{Contributor, RepoInfo};

/// Render search hits, one `owner/name` headline plus description each
pub fn repo_list(repos: &[RepoInfo]) -> String {
    repos
        .iter()
        .map(render_repo)
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_repo(repo: &RepoInfo) -> String {
    let owner = repo.owner.as_deref().unwrap_or("unknown");
    let headline = format!("{}/{}", owner, repo.name).bold().to_string();

    match repo.description.as_deref() {
        Some(description) => format!("{}\n    {}", headline, description),
        None => headline,
    }
}

/// Render contributors as `name - N contributions` with the profile link
pub fn contributor_list(contributors: &[Contributor]) -> String {
    contributors
        .iter()
        .map(render_contributor)
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_contributor(contributor: &Contributor) -> String {
    format!(
        "{} - {} contributions\n    {}",
        contributor.name.bold(),
        contributor.contributions,
        contributor.url.dimmed()
    )
}

/// Render plain repository names, one per line
pub fn repo_names(names: &[String]) -> String {
    names.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn repo_lines_show_owner_name_and_description() {
        plain();
        let repos = vec![
            RepoInfo {
                name: "tokio".to_string(),
                owner: Some("tokio-rs".to_string()),
                description: Some("A runtime".to_string()),
            },
            RepoInfo {
                name: "orphan".to_string(),
                owner: None,
                description: None,
            },
        ];

        let output = repo_list(&repos);
        assert_eq!(output, "tokio-rs/tokio\n    A runtime\nunknown/orphan");
    }

    #[test]
    fn contributor_lines_show_count_and_profile() {
        plain();
        let contributors = vec![Contributor {
            name: "jdoe".to_string(),
            avatar: "https://a.example.com/jdoe".to_string(),
            url: "https://github.com/jdoe".to_string(),
            contributions: 154,
        }];

        let output = contributor_list(&contributors);
        assert_eq!(output, "jdoe - 154 contributions\n    https://github.com/jdoe");
    }

    #[test]
    fn repo_names_are_one_per_line() {
        let names = vec!["dotfiles".to_string(), "blog".to_string()];
        assert_eq!(repo_names(&names), "dotfiles\nblog");
    }
}
