//! profile-finder -- standalone MCP profile search server.
//!
//! Usage: profile-finder [--directory <profiles.json>]
//!
//! Without `--directory`, falls back to `PROFILE_FINDER_DIRECTORY`, then
//! `profiles.json` in the working directory.

use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    // Initialize tracing to stderr so it does not interfere with MCP stdio.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let directory = std::env::args()
        .skip_while(|a| a != "--directory")
        .nth(1)
        .or_else(|| std::env::var("PROFILE_FINDER_DIRECTORY").ok())
        .map_or_else(|| PathBuf::from(profile_finder::server::DEFAULT_DIRECTORY), PathBuf::from);

    let config = profile_finder::server::McpServerConfig { directory };

    profile_finder::run_mcp_server(config)
}
