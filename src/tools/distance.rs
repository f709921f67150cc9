//! Distance tool — raw edit distance between two strings.

use anyhow::{Context, Result};
use serde::Deserialize;

use super::text_result;
use crate::matcher::levenshtein;
use crate::server::{ToolCallResult, ToolDefinition};

#[derive(Debug, Deserialize)]
pub struct DistanceParams {
    pub a: String,
    pub b: String,
}

pub fn tool_definition() -> ToolDefinition {
    ToolDefinition {
        name: "distance".to_owned(),
        description: "Compute the case-sensitive Levenshtein distance and similarity ratio between two strings."
            .to_owned(),
        input_schema: serde_json::json!({
            "type": "object",
            "properties": {
                "a": { "type": "string", "description": "First string" },
                "b": { "type": "string", "description": "Second string" }
            },
            "required": ["a", "b"]
        }),
    }
}

pub fn execute(arguments: serde_json::Value) -> Result<ToolCallResult> {
    let params: DistanceParams =
        serde_json::from_value(arguments).context("invalid distance parameters")?;

    let result = serde_json::json!({
        "distance": levenshtein::distance(&params.a, &params.b),
        "similarity": levenshtein::similarity(&params.a, &params.b),
    });
    Ok(text_result(result.to_string(), false))
}
