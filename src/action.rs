use async_trait::async_trait;

use crate::config::{GitHubConfig, GitHubConfigParams};
use crate::env::{EnvProvider, ProcessEnv};
use crate::error::GithubActionError;
use crate::search::WebSearch;
use crate::tool::Tool;

pub const GITHUB_ACTION_NAME: &str = "github-action";
pub const GITHUB_ACTION_DESCRIPTION: &str = "Tool for interacting with the GitHub API.";

/// Tool configured with GitHub App credentials.
///
/// Invocation runs a web search for the input and returns the results as a
/// JSON array of `{title, link, snippet}` objects. The GitHub configuration
/// is held for collaborators that need it (see [`crate::github::app_client`])
/// and is not consulted by `invoke`.
#[derive(Clone)]
pub struct GithubAction {
    config: GitHubConfig,
    search: WebSearch,
}

impl GithubAction {
    pub fn new(
        params: GitHubConfigParams,
        env: &impl EnvProvider,
        search: WebSearch,
    ) -> Result<Self, GithubActionError> {
        let config = GitHubConfig::resolve(params, env)?;
        tracing::debug!(repository = config.repository(), "Configured github-action tool");
        Ok(Self { config, search })
    }

    pub fn from_env(search: WebSearch) -> Result<Self, GithubActionError> {
        Self::new(GitHubConfigParams::default(), &ProcessEnv, search)
    }

    pub fn config(&self) -> &GitHubConfig {
        &self.config
    }
}

#[async_trait]
impl Tool for GithubAction {
    fn name(&self) -> &str {
        GITHUB_ACTION_NAME
    }

    fn description(&self) -> &str {
        GITHUB_ACTION_DESCRIPTION
    }

    async fn invoke(&self, input: &str) -> Result<String, GithubActionError> {
        self.search.search(input).await
    }
}
