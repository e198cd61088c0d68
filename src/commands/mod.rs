//! Command implementations for the shed CLI

pub mod check;
pub mod completions;
pub mod init;
pub mod resolve;
pub mod show;
pub mod version;

use std::path::PathBuf;

use crate::error::{Result, ShedError};

/// Get workspace path from CLI argument or current directory
pub(crate) fn workspace_path(workspace: Option<PathBuf>) -> Result<PathBuf> {
    match workspace {
        Some(path) => Ok(path),
        None => std::env::current_dir().map_err(|e| ShedError::IoError {
            message: format!("Failed to get current directory: {}", e),
        }),
    }
}
