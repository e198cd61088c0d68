//! Input references (name bound to a package-source locator)

use serde::{Deserialize, Serialize};

use crate::error::{Result, ShedError};

/// A named binding to an external package source
///
/// Declared once in the descriptor, resolved once per evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRef {
    /// Input name, unique within the descriptor
    pub name: String,

    /// Source coordinate (e.g. `github:NixOS/nixpkgs`)
    pub source: String,

    /// Branch or channel identifier within the source (e.g. `nixos-24.05`)
    pub channel: String,
}

impl InputRef {
    pub fn new(name: &str, source: &str, channel: &str) -> Self {
        Self {
            name: name.to_string(),
            source: source.to_string(),
            channel: channel.to_string(),
        }
    }

    /// Full locator string (source + channel)
    pub fn locator(&self) -> String {
        format!("{}/{}", self.source, self.channel)
    }

    /// Validate the reference fields
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ShedError::ConfigInvalid {
                message: "input name must be non-empty".to_string(),
            });
        }
        if self.source.trim().is_empty() || self.channel.trim().is_empty() {
            return Err(ShedError::InvalidLocator {
                locator: self.locator(),
            });
        }
        Ok(())
    }
}
