use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{schemars, tool, tool_handler, tool_router, ServerHandler};
use serde::Deserialize;

use crate::action::{GITHUB_ACTION_DESCRIPTION, GITHUB_ACTION_NAME};
use crate::tool::Tool as AgentTool;

/// MCP server exposing a single [`AgentTool`] to an agent host over stdio.
///
/// The wrapped tool is always published as [`GITHUB_ACTION_NAME`] with
/// [`GITHUB_ACTION_DESCRIPTION`], whatever its own `name()` reports. The
/// tool's name only appears in logs.
#[derive(Clone)]
pub struct GithubActionServer {
    tool: Arc<dyn AgentTool>,
    tool_router: ToolRouter<Self>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ToolInputParams {
    #[schemars(description = "Input passed to the tool, e.g. a search query")]
    pub input: String,
}

impl GithubActionServer {
    pub fn new(tool: Arc<dyn AgentTool>) -> Self {
        Self {
            tool,
            tool_router: Self::tool_router(),
        }
    }
}

#[tool_router]
impl GithubActionServer {
    // Keep in sync with GITHUB_ACTION_NAME / GITHUB_ACTION_DESCRIPTION.
    #[tool(
        name = "github-action",
        description = "Tool for interacting with the GitHub API."
    )]
    async fn github_action(
        &self,
        Parameters(params): Parameters<ToolInputParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let output = self
            .tool
            .invoke(&params.input)
            .await
            .map_err(|e| {
                tracing::warn!(tool = self.tool.name(), error = %e, "Tool invocation failed");
                e.to_mcp_error()
            })?;
        Ok(CallToolResult::success(vec![Content::text(output)]))
    }
}

#[tool_handler]
impl ServerHandler for GithubActionServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "Use {GITHUB_ACTION_NAME} with an `input` string. {GITHUB_ACTION_DESCRIPTION}"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::error::GithubActionError;

    struct EchoTool {
        seen: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl AgentTool for EchoTool {
        fn name(&self) -> &str {
            "echo"
        }

        fn description(&self) -> &str {
            "Echoes its input."
        }

        async fn invoke(&self, input: &str) -> Result<String, GithubActionError> {
            self.seen.lock().unwrap().push(input.to_string());
            Ok(format!("[{input:?}]"))
        }
    }

    struct FailingTool;

    #[async_trait]
    impl AgentTool for FailingTool {
        fn name(&self) -> &str {
            "failing"
        }

        fn description(&self) -> &str {
            "Always fails."
        }

        async fn invoke(&self, _input: &str) -> Result<String, GithubActionError> {
            Err(GithubActionError::Request { status: 502 })
        }
    }

    fn params(input: &str) -> Parameters<ToolInputParams> {
        Parameters(ToolInputParams {
            input: input.to_string(),
        })
    }

    #[tokio::test]
    async fn test_forwards_input_to_tool() {
        let tool = Arc::new(EchoTool {
            seen: Mutex::new(Vec::new()),
        });
        let server = GithubActionServer::new(tool.clone());

        let result = server.github_action(params("hello")).await.unwrap();
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(
            value.pointer("/content/0/text").and_then(|t| t.as_str()),
            Some("[\"hello\"]")
        );
        assert_eq!(*tool.seen.lock().unwrap(), vec!["hello".to_string()]);
    }

    #[tokio::test]
    async fn test_tool_error_maps_to_internal_error() {
        let server = GithubActionServer::new(Arc::new(FailingTool));
        let err = server.github_action(params("x")).await.unwrap_err();
        assert_eq!(err.code, ErrorData::internal_error("", None).code);
        assert_eq!(err.message, "HTTP error 502");
    }

    #[test]
    fn test_get_info_matches_published_tool() {
        let server = GithubActionServer::new(Arc::new(FailingTool));
        let info = server.get_info();
        let instructions = info.instructions.unwrap();
        assert!(instructions.contains(GITHUB_ACTION_NAME));
        assert!(instructions.contains(GITHUB_ACTION_DESCRIPTION));
        assert!(!instructions.contains("failing"));
        assert_eq!(info.server_info.name, "github-action-tool");
    }

    #[test]
    fn test_registered_tool_uses_action_metadata() {
        let server = GithubActionServer::new(Arc::new(FailingTool));
        let tools = server.tool_router.list_all();
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].name, GITHUB_ACTION_NAME);
        assert_eq!(tools[0].description.as_deref(), Some(GITHUB_ACTION_DESCRIPTION));
    }
}
