//! Shell specification (the declared bundle of packages and tools)

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ShedError};

/// Name of the default shell output
pub const DEFAULT_SHELL_NAME: &str = "default";

fn default_shell_name() -> String {
    DEFAULT_SHELL_NAME.to_string()
}

/// Interpreter package plus the libraries bundled with it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterpreterSpec {
    /// Base interpreter package (e.g. `python3`)
    pub package: String,

    /// Extension packages made importable by the interpreter
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub with: Vec<String>,
}

/// The declared bundle of packages forming one development environment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellSpec {
    /// Shell output name
    #[serde(default = "default_shell_name")]
    pub name: String,

    /// Input the packages resolve against (defaults to the first declared input)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,

    /// Interpreter group
    pub interpreter: InterpreterSpec,

    /// Standalone tools on the execution path
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<String>,
}

impl ShellSpec {
    /// Every declared package name, in resolution order:
    /// interpreter first, then its bundled libraries, then tools.
    pub fn packages(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.interpreter.package.as_str())
            .chain(self.interpreter.with.iter().map(String::as_str))
            .chain(self.tools.iter().map(String::as_str))
    }

    /// Validate shell invariants: non-empty names, no duplicates
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ShedError::ConfigInvalid {
                message: "shell name must be non-empty".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for package in self.packages() {
            if package.trim().is_empty() {
                return Err(ShedError::EmptyPackageName);
            }
            if !seen.insert(package) {
                return Err(ShedError::DuplicatePackage {
                    name: package.to_string(),
                });
            }
        }

        Ok(())
    }
}
