//! Target platform enumeration
//!
//! Shell definitions are produced per platform. The set is closed: any
//! identifier outside it fails evaluation with `UnsupportedPlatform`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ShedError;

/// An OS/architecture pair a shell must be resolvable for
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Platform {
    X86_64Linux,
    Aarch64Linux,
    X86_64Darwin,
    Aarch64Darwin,
}

impl Platform {
    /// All supported platforms, in canonical order
    pub const ALL: [Platform; 4] = [
        Platform::X86_64Linux,
        Platform::Aarch64Linux,
        Platform::X86_64Darwin,
        Platform::Aarch64Darwin,
    ];

    /// Canonical identifier (arch-os)
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::X86_64Linux => "x86_64-linux",
            Platform::Aarch64Linux => "aarch64-linux",
            Platform::X86_64Darwin => "x86_64-darwin",
            Platform::Aarch64Darwin => "aarch64-darwin",
        }
    }

    /// Operating system component
    pub fn os(&self) -> &'static str {
        match self {
            Platform::X86_64Linux | Platform::Aarch64Linux => "linux",
            Platform::X86_64Darwin | Platform::Aarch64Darwin => "darwin",
        }
    }

    /// Architecture component
    pub fn arch(&self) -> &'static str {
        match self {
            Platform::X86_64Linux | Platform::X86_64Darwin => "x86_64",
            Platform::Aarch64Linux | Platform::Aarch64Darwin => "aarch64",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Platform {
    type Err = ShedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "x86_64-linux" => Ok(Platform::X86_64Linux),
            "aarch64-linux" => Ok(Platform::Aarch64Linux),
            "x86_64-darwin" => Ok(Platform::X86_64Darwin),
            "aarch64-darwin" => Ok(Platform::Aarch64Darwin),
            _ => Err(ShedError::UnsupportedPlatform {
                platform: s.to_string(),
            }),
        }
    }
}

impl Serialize for Platform {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Platform {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
