//! `profile-finder` — fuzzy nearest-match search over user profiles.
//!
//! Finds the profile whose display name or identifier code is closest to a
//! free-text query by Levenshtein edit distance. The matcher is a pure
//! library; the crate also exposes it as Model Context Protocol (MCP) tools
//! over stdio (JSON-RPC 2.0, newline-delimited), backed by a JSON profile
//! directory file.
//!
//! # Tools
//!
//! - `find_profile` — closest profile to a query
//! - `rank_profiles` — all profiles ordered by distance
//! - `distance` — raw edit distance between two strings
//! - `register_profile` — append a profile to the directory
//!
//! # Architecture
//!
//! ```text
//! stdin (JSON-RPC) → McpServer → ToolRouter → tools
//!                                               ↓
//!                           ProfileDirectory + matcher
//! stdout (JSON-RPC) ←───────────────────────────┘
//! ```

pub mod error;
pub mod matcher;
pub mod profile;
pub mod server;
pub mod tools;

pub use error::{FinderError, FinderResult};
pub use matcher::{best_match, find_best_match, rank, Field, FieldSelector, MatchResult};
pub use profile::{Profile, ProfileDirectory, PROFILE_FIELDS};
pub use server::run_mcp_server;
