//! Error types and handling for shed
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for shed operations
#[derive(Error, Diagnostic, Debug)]
pub enum ShedError {
    // Input errors
    #[error("Unresolved input '{name}' ({locator})")]
    #[diagnostic(
        code(shed::input::unresolved),
        help("Check that the index directory contains '<input>.yaml' for every declared input")
    )]
    UnresolvedInput { name: String, locator: String },

    #[error("Duplicate input name: {name}")]
    #[diagnostic(
        code(shed::input::duplicate),
        help("Input names must be unique within the descriptor")
    )]
    DuplicateInput { name: String },

    #[error("Invalid input locator: {locator}")]
    #[diagnostic(
        code(shed::input::invalid_locator),
        help("Valid format: <source>/<channel>, e.g. github:NixOS/nixpkgs/nixos-24.05")
    )]
    InvalidLocator { locator: String },

    // Package errors
    #[error("Unresolved package '{name}' from input '{input}' for platform {platform}")]
    #[diagnostic(
        code(shed::package::unresolved),
        help("Check that the package exists in the input's index for this platform")
    )]
    UnresolvedPackage {
        name: String,
        input: String,
        platform: String,
    },

    #[error("Duplicate package name: {name}")]
    #[diagnostic(
        code(shed::package::duplicate),
        help("Each package may only be declared once across interpreter libraries and tools")
    )]
    DuplicatePackage { name: String },

    #[error("Empty package name in descriptor")]
    #[diagnostic(
        code(shed::package::empty_name),
        help("Package names must be non-empty strings")
    )]
    EmptyPackageName,

    // Platform errors
    #[error("Unsupported platform: {platform}")]
    #[diagnostic(
        code(shed::platform::unsupported),
        help("Supported platforms: x86_64-linux, aarch64-linux, x86_64-darwin, aarch64-darwin")
    )]
    UnsupportedPlatform { platform: String },

    #[error("No platforms declared in descriptor")]
    #[diagnostic(
        code(shed::platform::none_declared),
        help("Declare at least one platform (e.g. x86_64-linux) in shed.yaml")
    )]
    NoPlatformsDeclared,

    // Descriptor errors
    #[error("Descriptor not found: {path}")]
    #[diagnostic(
        code(shed::config::not_found),
        help("Run 'shed init' to scaffold a shed.yaml in the workspace")
    )]
    ConfigNotFound { path: String },

    #[error("Failed to read descriptor: {path}")]
    #[diagnostic(code(shed::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse descriptor: {path}")]
    #[diagnostic(code(shed::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid descriptor: {message}")]
    #[diagnostic(code(shed::config::invalid))]
    ConfigInvalid { message: String },

    #[error("Descriptor already exists: {path}")]
    #[diagnostic(
        code(shed::config::already_exists),
        help("Remove the existing shed.yaml before running 'shed init'")
    )]
    ConfigAlreadyExists { path: String },

    // Lockfile errors
    #[error("Lockfile is out of date")]
    #[diagnostic(
        code(shed::lockfile::outdated),
        help("Run 'shed resolve' without --frozen to update the lockfile")
    )]
    LockfileOutdated,

    #[error("Lockfile is missing")]
    #[diagnostic(
        code(shed::lockfile::missing),
        help("Run 'shed resolve' to generate a lockfile")
    )]
    LockfileMissing,

    // File system errors
    #[error("Failed to read file: {path}")]
    #[diagnostic(code(shed::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}")]
    #[diagnostic(code(shed::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(shed::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for ShedError {
    fn from(err: std::io::Error) -> Self {
        ShedError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for ShedError {
    fn from(err: serde_yaml::Error) -> Self {
        ShedError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ShedError {
    fn from(err: serde_json::Error) -> Self {
        ShedError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, ShedError>;
