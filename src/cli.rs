use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(author, version, about = "GitHub repository explorer")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Search GitHub repositories
    Search {
        /// Search query
        query: String,
        /// Result page to show (optional, defaults to 1)
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },
    /// Show contributor statistics for a repository
    Contributors {
        /// Repository owner
        owner: String,
        /// Repository name
        repo: String,
    },
    /// List the public repositories of a user
    Repos {
        /// GitHub username
        owner: String,
    },
    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn search_page_defaults_to_one() {
        let cli = Cli::parse_from(["github_explorer", "search", "rust web"]);
        assert_eq!(
            cli.command,
            Command::Search {
                query: "rust web".to_string(),
                page: 1
            }
        );
    }

    #[test]
    fn search_page_can_be_set() {
        let cli = Cli::parse_from(["github_explorer", "search", "rust", "--page", "3"]);
        let Command::Search { page, .. } = cli.command else {
            panic!("expected the search command");
        };
        assert_eq!(page, 3);
    }
}
