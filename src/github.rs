use octocrab::models::AppId;
use octocrab::Octocrab;

use crate::config::GitHubConfig;
use crate::error::{ConfigError, GithubActionError};

/// Build an octocrab client that authenticates as the configured GitHub App.
///
/// Only the credential material is checked here. No request is made until
/// the client is used.
///
/// Must be called from within a Tokio runtime: the octocrab client spawns a
/// `tower::Buffer` worker on build and panics without a reactor.
pub fn app_client(config: &GitHubConfig) -> Result<Octocrab, GithubActionError> {
    let app_id = parse_app_id(config.app_id())?;
    let key = jsonwebtoken::EncodingKey::from_rsa_pem(config.app_private_key().as_bytes())
        .map_err(ConfigError::InvalidPrivateKey)?;

    let id = app_id.0;
    let client = Octocrab::builder().app(app_id, key).build()?;
    tracing::debug!(app_id = id, "Built GitHub App client");
    Ok(client)
}

fn parse_app_id(raw: &str) -> Result<AppId, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .map(AppId)
        .map_err(|_| ConfigError::InvalidAppId(raw.to_string()))
}
