//! Tool router — registers and dispatches MCP tool calls.
//!
//! Each tool is a function that takes JSON arguments and returns a
//! [`ToolCallResult`]. The router owns the profile directory path and
//! provides `list_tools()` / `call_tool()` for the MCP server.

pub mod distance;
pub mod find_profile;
pub mod rank_profiles;
pub mod register_profile;

use std::path::PathBuf;

use anyhow::{bail, Result};
use serde::Serialize;
use tracing::debug;

use crate::matcher::{levenshtein, MatchResult};
use crate::profile::Profile;
use crate::server::{ContentItem, ToolCallResult, ToolDefinition};

/// Build a single-item text result.
pub fn text_result(text: impl Into<String>, is_error: bool) -> ToolCallResult {
    ToolCallResult {
        content: vec![ContentItem {
            content_type: "text".to_owned(),
            text: text.into(),
        }],
        is_error,
    }
}

/// Reject an empty search query.
///
/// The matcher accepts an empty query, but a search box with nothing typed
/// should not return whichever profile has the shortest name.
pub fn validate_query(query: &str) -> Result<()> {
    if query.is_empty() {
        bail!("query must not be empty");
    }
    Ok(())
}

/// A scored profile as rendered back to the client.
#[derive(Debug, Serialize)]
pub struct ProfileHit<'a> {
    pub name: &'a str,
    pub code: &'a str,
    pub distance: usize,
    pub field: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similarity: Option<f64>,
}

impl<'a> ProfileHit<'a> {
    pub fn new(hit: &MatchResult<'a, Profile>) -> Self {
        Self {
            name: &hit.candidate.name,
            code: &hit.candidate.code,
            distance: hit.distance,
            field: hit.field,
            similarity: None,
        }
    }

    /// Attach the similarity of the matched field to `query`.
    #[must_use]
    pub fn with_similarity(mut self, query: &str) -> Self {
        let matched = if self.field == "code" { self.code } else { self.name };
        self.similarity = Some(levenshtein::similarity(query, matched));
        self
    }
}

/// Tool router that dispatches MCP tool calls to implementations.
pub struct ToolRouter {
    /// JSON file holding the profile directory.
    directory: PathBuf,
}

impl ToolRouter {
    /// Create a new tool router.
    pub const fn new(directory: PathBuf) -> Self {
        Self { directory }
    }

    /// List all available tools with their JSON Schema definitions.
    pub fn list_tools(&self) -> Vec<ToolDefinition> {
        vec![
            find_profile::tool_definition(),
            rank_profiles::tool_definition(),
            distance::tool_definition(),
            register_profile::tool_definition(),
        ]
    }

    /// Call a tool by name with the given JSON arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments are invalid or the tool execution fails.
    pub fn call_tool(&self, name: &str, arguments: serde_json::Value) -> Result<ToolCallResult> {
        debug!(tool = name, "dispatching tool call");

        match name {
            "find_profile" => find_profile::execute(&self.directory, arguments),
            "rank_profiles" => rank_profiles::execute(&self.directory, arguments),
            "distance" => distance::execute(arguments),
            "register_profile" => register_profile::execute(&self.directory, arguments),
            _ => Ok(text_result(format!("Unknown tool: {name}"), true)),
        }
    }
}
