//! Find tool — closest profile by name or code.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use super::{text_result, validate_query, ProfileHit};
use crate::matcher;
use crate::profile::{ProfileDirectory, PROFILE_FIELDS};
use crate::server::{ToolCallResult, ToolDefinition};

/// Parameters for the find_profile tool.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindProfileParams {
    /// Free-text search query.
    pub query: String,
    /// Reject the best match if its distance exceeds this.
    #[serde(default)]
    pub max_distance: Option<usize>,
}

pub fn tool_definition() -> ToolDefinition {
    ToolDefinition {
        name: "find_profile".to_owned(),
        description: "Find the profile whose name or code is closest to the query by edit distance. \
            Ties go to the profile listed first in the directory."
            .to_owned(),
        input_schema: serde_json::json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Name or identifier code to search for"
                },
                "maxDistance": {
                    "type": "integer",
                    "description": "Maximum accepted edit distance (default: unlimited)",
                    "minimum": 0
                }
            },
            "required": ["query"]
        }),
    }
}

/// Execute the find_profile tool.
pub fn execute(directory: &Path, arguments: serde_json::Value) -> Result<ToolCallResult> {
    let params: FindProfileParams =
        serde_json::from_value(arguments).context("invalid find_profile parameters")?;
    validate_query(&params.query)?;

    let profiles = ProfileDirectory::load_or_empty(directory);
    let best = match params.max_distance {
        Some(max) => matcher::closest_within(&params.query, profiles.profiles(), PROFILE_FIELDS, max),
        None => matcher::best_match(&params.query, profiles.profiles(), PROFILE_FIELDS),
    };

    let Some(best) = best else {
        debug!(query = params.query, searched = profiles.len(), "no profile found");
        return Ok(text_result(format!("No profile found for \"{}\"", params.query), false));
    };

    let text = serde_json::to_string(&ProfileHit::new(&best))?;
    Ok(text_result(text, false))
}
