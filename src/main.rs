use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use github_action_tool::action::GithubAction;
use github_action_tool::config::GitHubConfigParams;
use github_action_tool::env::ProcessEnv;
use github_action_tool::github;
use github_action_tool::search::WebSearch;
use github_action_tool::server;
use rmcp::{transport::stdio, ServiceExt};
use tracing_subscriber::EnvFilter;

/// MCP server for the github-action tool, configured with GitHub App credentials
#[derive(Parser)]
#[command(name = "github-action-tool", version, about)]
struct Cli {
    /// Target repository (owner/name).
    /// Can also be set via GITHUB_REPOSITORY environment variable.
    #[arg(long)]
    repository: Option<String>,

    /// GitHub App ID.
    /// Can also be set via GITHUB_APP_ID environment variable.
    #[arg(long)]
    app_id: Option<String>,

    /// GitHub App private key (PEM).
    /// Can also be set via GITHUB_APP_PRIVATE_KEY environment variable.
    #[arg(long, conflicts_with = "app_private_key_file")]
    app_private_key: Option<String>,

    /// Read the GitHub App private key from a PEM file
    #[arg(long)]
    app_private_key_file: Option<PathBuf>,

    /// Working branch (default: repository default)
    #[arg(long)]
    branch: Option<String>,

    /// Base branch for comparisons (default: repository default)
    #[arg(long)]
    base_branch: Option<String>,

    /// Search API subscription token.
    /// Can also be set via BRAVE_SEARCH_API_KEY environment variable.
    #[arg(long)]
    search_api_key: Option<String>,

    /// Read the search API key from an environment variable.
    /// Default: BRAVE_SEARCH_API_KEY
    #[arg(long = "search-api-key-env")]
    search_api_key_env: Option<String>,

    /// Per-request timeout for search calls, in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let app_private_key = match cli.app_private_key_file {
        Some(ref path) => Some(
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read private key from {}", path.display()))?,
        ),
        None => cli.app_private_key,
    };

    // Resolve API key: --search-api-key > --search-api-key-env > BRAVE_SEARCH_API_KEY
    let api_key = if let Some(k) = cli.search_api_key {
        k
    } else {
        let env_name = cli
            .search_api_key_env
            .as_deref()
            .unwrap_or("BRAVE_SEARCH_API_KEY");
        match std::env::var(env_name) {
            Ok(k) if !k.is_empty() => {
                tracing::info!(env = env_name, "Read search API key from environment variable");
                k
            }
            _ => {
                tracing::warn!("No search API key provided; search requests will be rejected");
                String::new()
            }
        }
    };

    let mut search = WebSearch::new(api_key);
    if let Some(secs) = cli.timeout_secs {
        search = search.with_timeout(Duration::from_secs(secs));
    }

    let params = GitHubConfigParams {
        repository: cli.repository,
        app_id: cli.app_id,
        app_private_key,
        branch: cli.branch,
        base_branch: cli.base_branch,
    };
    let action = GithubAction::new(params, &ProcessEnv, search)?;

    // Fail at startup on malformed credentials rather than on first use.
    github::app_client(action.config()).context("Invalid GitHub App credentials")?;

    tracing::info!(
        repository = action.config().repository(),
        app_id = action.config().app_id(),
        branch = action.config().branch().unwrap_or("default"),
        base_branch = action.config().base_branch().unwrap_or("default"),
        "Starting github-action-tool server"
    );

    let service = server::GithubActionServer::new(Arc::new(action));
    let running = service.serve(stdio()).await?;
    running.waiting().await?;

    Ok(())
}
