//! Package resolution seam
//!
//! Resolution is behind an explicit injected trait rather than an ambient
//! lookup, so the pure expansion in [`eval`] is testable with a fake
//! resolver. The production implementation is [`IndexResolver`], backed by
//! per-input index files on disk.

pub mod eval;
pub mod index;

use serde::{Deserialize, Serialize};

use crate::descriptor::InputRef;
use crate::error::Result;
use crate::platform::Platform;

pub use index::IndexResolver;

/// A runnable artifact returned by the resolver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    /// Package name as known to the source
    pub name: String,

    /// Resolved version
    pub version: String,

    /// Store path of the materialized artifact, when the index records one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Maps (input, package name, platform) to a runnable artifact
///
/// The collaborator behind this trait (package index, external package
/// manager) is opaque: fetching and building are out of scope.
pub trait PackageResolver {
    /// Confirm a declared input is known to this resolver
    ///
    /// Fails with `UnresolvedInput` when the input's package source cannot
    /// be consulted.
    fn lookup_input(&self, input: &InputRef) -> Result<()>;

    /// Resolve a package name against an input for a platform
    ///
    /// Returns `Ok(None)` when the package does not exist for the
    /// source/platform combination.
    fn resolve(&self, input: &str, package: &str, platform: Platform) -> Result<Option<Artifact>>;
}
