//! Raw serialization form of the descriptor
//!
//! Platform identifiers stay plain strings here so that parsing them into
//! the closed enumeration reports `UnsupportedPlatform` instead of a
//! generic deserialization failure.

use serde::{Deserialize, Serialize};

use crate::descriptor::input::InputRef;
use crate::descriptor::shell::ShellSpec;

/// On-disk shape of shed.yaml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawDescriptor {
    pub inputs: Vec<InputRef>,

    #[serde(default)]
    pub platforms: Vec<String>,

    pub shell: ShellSpec,
}
