use async_trait::async_trait;

use crate::error::GithubActionError;

/// A string-in, string-out capability an agent host can call.
///
/// `name` and `description` are metadata the host uses to pick a tool.
#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    async fn invoke(&self, input: &str) -> Result<String, GithubActionError>;
}
