//! GitHub App configuration, resolved once from explicit values with a
//! per-field fallback to environment variables.

use std::fmt;

use crate::env::{EnvProvider, ProcessEnv};
use crate::error::ConfigError;

pub const GITHUB_REPOSITORY: &str = "GITHUB_REPOSITORY";
pub const GITHUB_APP_ID: &str = "GITHUB_APP_ID";
pub const GITHUB_APP_PRIVATE_KEY: &str = "GITHUB_APP_PRIVATE_KEY";

/// Caller-supplied settings. Any field left `None` (or empty) is looked up
/// in the environment, except the branch names which have no fallback.
#[derive(Clone, Default)]
pub struct GitHubConfigParams {
    pub repository: Option<String>,
    pub app_id: Option<String>,
    pub app_private_key: Option<String>,
    pub branch: Option<String>,
    pub base_branch: Option<String>,
}

/// Validated GitHub App configuration.
///
/// `repository`, `app_id` and `app_private_key` are guaranteed non-empty.
/// There is no way to change a value after construction.
#[derive(Clone, PartialEq, Eq)]
pub struct GitHubConfig {
    repository: String,
    app_id: String,
    app_private_key: String,
    branch: Option<String>,
    base_branch: Option<String>,
}

impl GitHubConfig {
    pub fn resolve(params: GitHubConfigParams, env: &impl EnvProvider) -> Result<Self, ConfigError> {
        let repository = pick(params.repository, env, GITHUB_REPOSITORY);
        let app_id = pick(params.app_id, env, GITHUB_APP_ID);
        let app_private_key = pick(params.app_private_key, env, GITHUB_APP_PRIVATE_KEY);

        let app_id = app_id.ok_or(ConfigError::Missing {
            setting: "GitHub App ID",
            env_var: GITHUB_APP_ID,
        })?;
        let app_private_key = app_private_key.ok_or(ConfigError::Missing {
            setting: "GitHub App private key",
            env_var: GITHUB_APP_PRIVATE_KEY,
        })?;
        let repository = repository.ok_or(ConfigError::Missing {
            setting: "GitHub repository",
            env_var: GITHUB_REPOSITORY,
        })?;

        Ok(Self {
            repository,
            app_id,
            app_private_key,
            branch: params.branch,
            base_branch: params.base_branch,
        })
    }

    /// Resolve every field from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(GitHubConfigParams::default(), &ProcessEnv)
    }

    pub fn repository(&self) -> &str {
        &self.repository
    }

    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    pub fn app_private_key(&self) -> &str {
        &self.app_private_key
    }

    pub fn branch(&self) -> Option<&str> {
        self.branch.as_deref()
    }

    pub fn base_branch(&self) -> Option<&str> {
        self.base_branch.as_deref()
    }
}

impl fmt::Debug for GitHubConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GitHubConfig")
            .field("repository", &self.repository)
            .field("app_id", &self.app_id)
            .field("app_private_key", &"<redacted>")
            .field("branch", &self.branch)
            .field("base_branch", &self.base_branch)
            .finish()
    }
}

/// Explicit non-empty value, else non-empty env var.
fn pick(explicit: Option<String>, env: &impl EnvProvider, name: &'static str) -> Option<String> {
    if let Some(value) = explicit.filter(|v| !v.is_empty()) {
        return Some(value);
    }
    match env.var(name) {
        Some(value) if !value.is_empty() => {
            tracing::debug!(env = name, "Resolved setting from environment variable");
            Some(value)
        }
        _ => None,
    }
}
