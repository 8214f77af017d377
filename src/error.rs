use rmcp::model::ErrorData;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{setting} not set. Please pass it in or set it as an environment variable named \"{env_var}\".")]
    Missing {
        setting: &'static str,
        env_var: &'static str,
    },

    #[error("GitHub App ID must be numeric, got {0:?}")]
    InvalidAppId(String),

    #[error("GitHub App private key is not a valid RSA PEM key: {0}")]
    InvalidPrivateKey(#[source] jsonwebtoken::errors::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum GithubActionError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("HTTP error {status}")]
    Request { status: u16 },

    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("GitHub client error: {0}")]
    GitHub(#[from] octocrab::Error),
}

impl GithubActionError {
    pub fn to_mcp_error(&self) -> ErrorData {
        match self {
            GithubActionError::Config(_) => ErrorData::invalid_params(self.to_string(), None),
            GithubActionError::Request { .. }
            | GithubActionError::Transport(_)
            | GithubActionError::Json(_)
            | GithubActionError::GitHub(_) => ErrorData::internal_error(self.to_string(), None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_message_names_env_var() {
        let err = ConfigError::Missing {
            setting: "GitHub App ID",
            env_var: "GITHUB_APP_ID",
        };
        assert_eq!(
            err.to_string(),
            "GitHub App ID not set. Please pass it in or set it as an environment variable named \"GITHUB_APP_ID\"."
        );
    }

    #[test]
    fn test_request_error_message() {
        let err = GithubActionError::Request { status: 503 };
        assert_eq!(err.to_string(), "HTTP error 503");
    }

    #[test]
    fn test_config_error_is_transparent() {
        let err: GithubActionError = ConfigError::InvalidAppId("abc".into()).into();
        assert_eq!(err.to_string(), "GitHub App ID must be numeric, got \"abc\"");
    }

    #[test]
    fn test_to_mcp_error_codes() {
        let config: GithubActionError = ConfigError::Missing {
            setting: "GitHub repository",
            env_var: "GITHUB_REPOSITORY",
        }
        .into();
        assert_eq!(config.to_mcp_error().code, ErrorData::invalid_params("", None).code);

        let request = GithubActionError::Request { status: 500 };
        assert_eq!(request.to_mcp_error().code, ErrorData::internal_error("", None).code);
        assert!(request.to_mcp_error().message.contains("500"));
    }
}
