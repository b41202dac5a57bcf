use anyhow::Result;

use github_explorer::cli::Command;
use github_explorer::{
    handle_completions, handle_contributors, handle_repos, handle_search, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Search { query, page } => handle_search(query, *page),
        Command::Contributors { owner, repo } => handle_contributors(owner, repo),
        Command::Repos { owner } => handle_repos(owner),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
