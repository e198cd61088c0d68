//! Index-backed package resolver
//!
//! Each declared input is backed by an index file `<input-name>.yaml` in the
//! index directory: the input's source locator plus a per-platform package
//! list. The index is the snapshot an external package manager would
//! publish; shed only reads it.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::descriptor::InputRef;
use crate::error::{Result, ShedError};
use crate::platform::Platform;
use crate::resolver::{Artifact, PackageResolver};

/// Default index directory within a workspace
pub const DEFAULT_INDEX_DIR: &str = "shed-index";

/// One package entry in an input's index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    pub name: String,
    pub version: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// On-disk index for a single input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageIndex {
    /// Locator of the source this index was built from
    pub source: String,

    /// Package lists keyed by platform identifier
    #[serde(default)]
    pub packages: BTreeMap<String, Vec<IndexEntry>>,
}

impl PackageIndex {
    /// Parse an index from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Look up a package for a platform
    pub fn find(&self, package: &str, platform: Platform) -> Option<&IndexEntry> {
        self.packages
            .get(platform.as_str())
            .and_then(|entries| entries.iter().find(|e| e.name == package))
    }
}

/// Resolver backed by per-input index files loaded from a directory
#[derive(Debug)]
pub struct IndexResolver {
    indices: HashMap<String, PackageIndex>,
}

impl IndexResolver {
    /// Load indices for every declared input
    ///
    /// A missing or unreadable index file, and an index whose recorded
    /// source disagrees with the declared locator, both mean the input
    /// cannot be resolved.
    pub fn load(dir: &Path, inputs: &[InputRef]) -> Result<Self> {
        let mut indices = HashMap::new();

        for input in inputs {
            let path = dir.join(format!("{}.yaml", input.name));
            if !path.exists() {
                return Err(ShedError::UnresolvedInput {
                    name: input.name.clone(),
                    locator: input.locator(),
                });
            }

            let content =
                std::fs::read_to_string(&path).map_err(|_| ShedError::UnresolvedInput {
                    name: input.name.clone(),
                    locator: input.locator(),
                })?;

            let index = PackageIndex::from_yaml(&content).map_err(|e| match e {
                ShedError::ConfigParseFailed { reason, .. } => ShedError::ConfigParseFailed {
                    path: path.display().to_string(),
                    reason,
                },
                other => other,
            })?;

            if index.source != input.locator() {
                return Err(ShedError::UnresolvedInput {
                    name: input.name.clone(),
                    locator: input.locator(),
                });
            }

            indices.insert(input.name.clone(), index);
        }

        Ok(Self { indices })
    }
}

impl PackageResolver for IndexResolver {
    fn lookup_input(&self, input: &InputRef) -> Result<()> {
        if self.indices.contains_key(&input.name) {
            Ok(())
        } else {
            Err(ShedError::UnresolvedInput {
                name: input.name.clone(),
                locator: input.locator(),
            })
        }
    }

    fn resolve(&self, input: &str, package: &str, platform: Platform) -> Result<Option<Artifact>> {
        let Some(index) = self.indices.get(input) else {
            return Ok(None);
        };

        Ok(index.find(package, platform).map(|entry| Artifact {
            name: entry.name.clone(),
            version: entry.version.clone(),
            path: entry.path.clone(),
        }))
    }
}
