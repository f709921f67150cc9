//! Register tool — append a profile to the directory file.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

use super::text_result;
use crate::error::FinderError;
use crate::profile::{Profile, ProfileDirectory};
use crate::server::{ToolCallResult, ToolDefinition};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterProfileParams {
    /// Display name.
    pub name: String,
    /// Identifier code, unique within the directory.
    pub code: String,
}

pub fn tool_definition() -> ToolDefinition {
    ToolDefinition {
        name: "register_profile".to_owned(),
        description: "Add a profile to the directory. The code must be unique. \
            Creates the directory file if it doesn't exist."
            .to_owned(),
        input_schema: serde_json::json!({
            "type": "object",
            "properties": {
                "name": {
                    "type": "string",
                    "description": "Display name"
                },
                "code": {
                    "type": "string",
                    "description": "Unique identifier code"
                }
            },
            "required": ["name", "code"]
        }),
    }
}

pub fn execute(directory: &Path, arguments: serde_json::Value) -> Result<ToolCallResult> {
    let params: RegisterProfileParams =
        serde_json::from_value(arguments).context("invalid register_profile parameters")?;

    // A missing file starts a new directory; a corrupt one must not be overwritten.
    let mut profiles = match ProfileDirectory::load(directory) {
        Ok(p) => p,
        Err(FinderError::DirectoryNotFound { .. }) => ProfileDirectory::default(),
        Err(e) => return Err(e).context("failed to load profile directory"),
    };

    if let Err(e) = profiles.insert(Profile::new(&params.name, &params.code)) {
        return Ok(text_result(format!("Error: {e}"), true));
    }
    profiles
        .save(directory)
        .with_context(|| format!("failed to save {}", directory.display()))?;

    info!(code = params.code, count = profiles.len(), "registered profile");
    Ok(text_result(
        format!("Registered {}: {} ({} profiles)", params.code, params.name, profiles.len()),
        false,
    ))
}
