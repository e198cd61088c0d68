//! Lockfile (shed.lock)
//!
//! The lockfile persists the resolved shell definitions with their BLAKE3
//! digests. Serialization is stable: identical descriptor and index state
//! produce byte-identical lockfiles.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::definition::ShellDefinition;
use crate::error::{Result, ShedError};
use crate::hash;
use crate::platform::Platform;

/// Lockfile name within a workspace
pub const LOCKFILE_NAME: &str = "shed.lock";

/// Current lockfile format version
const LOCKFILE_VERSION: u32 = 1;

fn lockfile_version() -> u32 {
    LOCKFILE_VERSION
}

/// One resolved shell pinned in the lockfile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockedShell {
    /// Digest of the definition's canonical form
    pub digest: String,

    #[serde(flatten)]
    pub definition: ShellDefinition,
}

impl LockedShell {
    /// Recompute the definition digest and compare with the pinned one
    pub fn verify(&self) -> Result<bool> {
        let actual = self.definition.digest()?;
        Ok(hash::verify_digest(&self.digest, &actual))
    }
}

/// Lockfile structure (shed.lock)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Lockfile {
    /// Format version
    #[serde(default = "lockfile_version")]
    pub version: u32,

    /// Resolved shells, one per platform, in descriptor platform order
    pub shells: Vec<LockedShell>,
}

impl Lockfile {
    /// Build a lockfile from freshly evaluated definitions
    pub fn from_definitions(definitions: Vec<ShellDefinition>) -> Result<Self> {
        let mut shells = Vec::with_capacity(definitions.len());
        for definition in definitions {
            let digest = definition.digest()?;
            shells.push(LockedShell { digest, definition });
        }
        Ok(Self {
            version: LOCKFILE_VERSION,
            shells,
        })
    }

    /// Parse a lockfile from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ShedError::ConfigParseFailed {
            path: LOCKFILE_NAME.to_string(),
            reason: e.to_string(),
        })
    }

    /// Serialize the lockfile to pretty-printed JSON
    ///
    /// Trailing newline included so repeated writes are byte-identical with
    /// editor-normalized files.
    pub fn to_json(&self) -> Result<String> {
        let mut json =
            serde_json::to_string_pretty(self).map_err(|e| ShedError::ConfigParseFailed {
                path: LOCKFILE_NAME.to_string(),
                reason: e.to_string(),
            })?;
        json.push('\n');
        Ok(json)
    }

    /// Load the lockfile from a workspace directory
    pub fn load(workspace: &Path) -> Result<Self> {
        let path = workspace.join(LOCKFILE_NAME);
        if !path.exists() {
            return Err(ShedError::LockfileMissing);
        }

        let content = std::fs::read_to_string(&path).map_err(|e| ShedError::FileReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Write the lockfile into a workspace directory
    pub fn save(&self, workspace: &Path) -> Result<()> {
        let path = workspace.join(LOCKFILE_NAME);
        let json = self.to_json()?;
        std::fs::write(&path, json).map_err(|e| ShedError::FileWriteFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Whether this lockfile serializes identically to another
    pub fn matches(&self, other: &Lockfile) -> Result<bool> {
        Ok(self.to_json()? == other.to_json()?)
    }

    /// Find the locked shell for a platform
    pub fn find_shell(&self, platform: Platform) -> Option<&LockedShell> {
        self.shells
            .iter()
            .find(|s| s.definition.platform == platform)
    }
}
