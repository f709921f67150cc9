//! User profiles and the JSON-file-backed profile directory.
//!
//! The directory file is either a bare array of profiles or an object with a
//! `profiles` array. Attributes other than `name` and `code` are kept verbatim
//! so a directory that is loaded and saved again is unchanged.

use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{FinderError, FinderResult};
use crate::matcher::Field;

/// A user profile as stored in the directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Display name, e.g. `Zayeem Zaki`.
    pub name: String,
    /// Identifier code, e.g. `RKT001`.
    pub code: String,
    /// Any other attributes carried by the record.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Profile {
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            extra: serde_json::Map::new(),
        }
    }
}

fn profile_name(profile: &Profile) -> &str {
    &profile.name
}

fn profile_code(profile: &Profile) -> &str {
    &profile.code
}

/// Fields searched for a profile query, in tie-break order.
pub const PROFILE_FIELDS: &[Field<Profile>] = &[("name", profile_name), ("code", profile_code)];

#[derive(Deserialize)]
#[serde(untagged)]
enum DirectoryFile {
    Bare(Vec<Profile>),
    Wrapped { profiles: Vec<Profile> },
}

#[derive(Serialize)]
struct DirectoryFileRef<'a> {
    profiles: &'a [Profile],
}

/// An ordered collection of profiles.
///
/// Order is insertion order and is significant: search ties go to the
/// earlier profile.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileDirectory {
    profiles: Vec<Profile>,
}

impl ProfileDirectory {
    pub const fn new(profiles: Vec<Profile>) -> Self {
        Self { profiles }
    }

    /// Load a directory from a JSON file.
    pub fn load(path: &Path) -> FinderResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                FinderError::DirectoryNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                FinderError::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        let profiles = match serde_json::from_str(&raw)? {
            DirectoryFile::Bare(profiles) | DirectoryFile::Wrapped { profiles } => profiles,
        };
        debug!(path = %path.display(), count = profiles.len(), "loaded profile directory");
        Ok(Self { profiles })
    }

    /// Load a directory, treating any failure as an empty directory.
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::load(path) {
            Ok(dir) => dir,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "profile directory unavailable, using empty list");
                Self::default()
            }
        }
    }

    /// Atomically write the directory to `path` as `{ "profiles": [...] }`.
    ///
    /// Writes to a temporary file in the same directory, then renames it
    /// over `path`.
    pub fn save(&self, path: &Path) -> FinderResult<()> {
        let io_err = |source: std::io::Error| FinderError::Io {
            path: path.to_path_buf(),
            source,
        };

        let json = serde_json::to_string_pretty(&DirectoryFileRef {
            profiles: &self.profiles,
        })?;

        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };

        let mut tmp = tempfile::NamedTempFile::new_in(parent).map_err(io_err)?;
        tmp.write_all(json.as_bytes()).map_err(io_err)?;
        tmp.write_all(b"\n").map_err(io_err)?;
        tmp.flush().map_err(io_err)?;
        tmp.persist(path).map_err(|e| io_err(e.error))?;

        debug!(path = %path.display(), count = self.profiles.len(), "saved profile directory");
        Ok(())
    }

    /// Append a profile.
    ///
    /// Rejects an empty name or code and a code that is already registered.
    pub fn insert(&mut self, profile: Profile) -> FinderResult<()> {
        if profile.name.is_empty() {
            return Err(FinderError::InvalidProfile {
                reason: "name must not be empty".to_owned(),
            });
        }
        if profile.code.is_empty() {
            return Err(FinderError::InvalidProfile {
                reason: "code must not be empty".to_owned(),
            });
        }
        if self.profiles.iter().any(|p| p.code == profile.code) {
            return Err(FinderError::DuplicateCode { code: profile.code });
        }
        self.profiles.push(profile);
        Ok(())
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
