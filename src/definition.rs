//! Resolved shell definitions
//!
//! A [`ShellDefinition`] is the product of evaluating the descriptor for one
//! platform: an ordered, deduplicated set of resolved packages ready to be
//! placed in a process environment.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::hash;
use crate::platform::Platform;

/// Role a package plays in the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageKind {
    /// Base interpreter
    Interpreter,
    /// Library importable by the interpreter
    Library,
    /// Standalone tool on the search path
    Tool,
}

impl fmt::Display for PackageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackageKind::Interpreter => write!(f, "interpreter"),
            PackageKind::Library => write!(f, "library"),
            PackageKind::Tool => write!(f, "tool"),
        }
    }
}

/// One resolved package within a shell definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedPackage {
    /// Package name
    pub name: String,

    /// Resolved version
    pub version: String,

    /// Role within the shell
    pub kind: PackageKind,

    /// Input the package was resolved from
    pub input: String,

    /// Store path, when the index records one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// One resolved shell, for one platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellDefinition {
    /// Shell output name (normally `default`)
    pub shell: String,

    /// Platform this definition was resolved for
    pub platform: Platform,

    /// Resolved packages: interpreter, then libraries, then tools
    pub packages: Vec<ResolvedPackage>,
}

impl ShellDefinition {
    /// BLAKE3 digest over the canonical serialized form
    ///
    /// Field and package order are fixed, so identical inputs always yield
    /// the same digest.
    pub fn digest(&self) -> Result<String> {
        let bytes = serde_json::to_vec(self)?;
        Ok(hash::digest_bytes(&bytes))
    }

    /// Names of all resolved packages, in order
    pub fn package_names(&self) -> Vec<&str> {
        self.packages.iter().map(|p| p.name.as_str()).collect()
    }
}
