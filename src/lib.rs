//! Agent tool adapter configured with GitHub App credentials.
//!
//! Resolves the app id, private key and repository from explicit values or
//! the environment, and exposes a `github-action` tool over MCP whose
//! invocation runs a web search and returns reshaped JSON results.

pub mod action;
pub mod config;
pub mod env;
pub mod error;
pub mod github;
pub mod search;
pub mod server;
pub mod tool;
