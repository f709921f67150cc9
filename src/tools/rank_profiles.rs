//! Rank tool — every profile ordered by distance to the query.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use super::{text_result, validate_query, ProfileHit};
use crate::matcher;
use crate::profile::{ProfileDirectory, PROFILE_FIELDS};
use crate::server::{ToolCallResult, ToolDefinition};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankProfilesParams {
    pub query: String,
    /// Maximum number of profiles to return. Default: 10.
    #[serde(default = "default_limit")]
    pub limit: usize,
}

const fn default_limit() -> usize { 10 }

pub fn tool_definition() -> ToolDefinition {
    ToolDefinition {
        name: "rank_profiles".to_owned(),
        description: "Rank profiles by edit distance between the query and their name or code, \
            closest first. Equal distances keep directory order."
            .to_owned(),
        input_schema: serde_json::json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Name or identifier code to search for"
                },
                "limit": {
                    "type": "integer",
                    "description": "Maximum number of profiles to return (default: 10)",
                    "default": 10,
                    "minimum": 1
                }
            },
            "required": ["query"]
        }),
    }
}

pub fn execute(directory: &Path, arguments: serde_json::Value) -> Result<ToolCallResult> {
    let params: RankProfilesParams =
        serde_json::from_value(arguments).context("invalid rank_profiles parameters")?;
    validate_query(&params.query)?;

    let profiles = ProfileDirectory::load_or_empty(directory);
    let hits: Vec<ProfileHit<'_>> = matcher::rank(&params.query, profiles.profiles(), PROFILE_FIELDS)
        .into_iter()
        .take(params.limit)
        .map(|m| ProfileHit::new(&m).with_similarity(&params.query))
        .collect();

    Ok(text_result(serde_json::to_string(&hits)?, false))
}
