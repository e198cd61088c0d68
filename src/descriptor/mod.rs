//! Environment descriptor (shed.yaml)
//!
//! The descriptor declares named package-source inputs, the target platform
//! enumeration and the shell specification. It is declared once, evaluated
//! once, and immutable thereafter.

pub mod input;
pub mod serialization;
pub mod shell;

use std::collections::HashSet;
use std::path::Path;

use crate::descriptor::serialization::RawDescriptor;
use crate::error::{Result, ShedError};
use crate::platform::Platform;

pub use input::InputRef;
pub use shell::{InterpreterSpec, ShellSpec};

/// Descriptor file name within a workspace
pub const DESCRIPTOR_FILE: &str = "shed.yaml";

/// Parsed and validated environment descriptor
#[derive(Debug, Clone)]
pub struct Descriptor {
    /// Named package-source inputs, in declaration order
    pub inputs: Vec<InputRef>,

    /// Target platforms, in declaration order
    pub platforms: Vec<Platform>,

    /// The declared shell bundle
    pub shell: ShellSpec,
}

impl Descriptor {
    /// Load and validate the descriptor from a workspace directory
    pub fn load(workspace: &Path) -> Result<Self> {
        let path = workspace.join(DESCRIPTOR_FILE);
        if !path.exists() {
            return Err(ShedError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content =
            std::fs::read_to_string(&path).map_err(|e| ShedError::ConfigReadFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        Self::from_yaml(&content).map_err(|e| match e {
            // Attach the real path to parse failures from the YAML layer
            ShedError::ConfigParseFailed { reason, .. } => ShedError::ConfigParseFailed {
                path: path.display().to_string(),
                reason,
            },
            other => other,
        })
    }

    /// Parse a descriptor from YAML and validate it
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let raw: RawDescriptor = serde_yaml::from_str(yaml)?;

        let mut platforms = Vec::with_capacity(raw.platforms.len());
        for identifier in &raw.platforms {
            platforms.push(identifier.parse::<Platform>()?);
        }

        let descriptor = Self {
            inputs: raw.inputs,
            platforms,
            shell: raw.shell,
        };
        descriptor.validate()?;
        Ok(descriptor)
    }

    /// Serialize the descriptor back to YAML
    pub fn to_yaml(&self) -> Result<String> {
        let raw = RawDescriptor {
            inputs: self.inputs.clone(),
            platforms: self.platforms.iter().map(|p| p.to_string()).collect(),
            shell: self.shell.clone(),
        };
        Ok(serde_yaml::to_string(&raw)?)
    }

    /// Validate descriptor invariants
    pub fn validate(&self) -> Result<()> {
        if self.inputs.is_empty() {
            return Err(ShedError::ConfigInvalid {
                message: "descriptor declares no inputs".to_string(),
            });
        }

        let mut seen_inputs = HashSet::new();
        for input in &self.inputs {
            input.validate()?;
            if !seen_inputs.insert(input.name.as_str()) {
                return Err(ShedError::DuplicateInput {
                    name: input.name.clone(),
                });
            }
        }

        if self.platforms.is_empty() {
            return Err(ShedError::NoPlatformsDeclared);
        }

        let mut seen_platforms = HashSet::new();
        for platform in &self.platforms {
            if !seen_platforms.insert(platform) {
                return Err(ShedError::ConfigInvalid {
                    message: format!("platform declared more than once: {platform}"),
                });
            }
        }

        self.shell.validate()?;

        if let Some(ref bound) = self.shell.from {
            if !self.inputs.iter().any(|i| &i.name == bound) {
                return Err(ShedError::ConfigInvalid {
                    message: format!("shell references undeclared input: {bound}"),
                });
            }
        }

        Ok(())
    }

    /// The input the shell resolves its packages against
    ///
    /// Defaults to the first declared input when the shell does not name one.
    /// `validate` guarantees at least one input exists and a named one is
    /// declared.
    pub fn shell_input(&self) -> &InputRef {
        match self.shell.from {
            Some(ref bound) => self
                .inputs
                .iter()
                .find(|i| &i.name == bound)
                .unwrap_or(&self.inputs[0]),
            None => &self.inputs[0],
        }
    }
}
