//! Init command implementation
//!
//! Scaffolds a starter descriptor: a Python interpreter bundled with a PDF
//! and a syntax-highlighting library, plus a C/C++ toolchain and a build
//! configuration tool, for all supported platforms.

use std::path::PathBuf;

use console::Style;

use crate::commands::workspace_path;
use crate::descriptor::DESCRIPTOR_FILE;
use crate::error::{Result, ShedError};

const STARTER_DESCRIPTOR: &str = r#"inputs:
  - name: pkgs
    source: github:NixOS/nixpkgs
    channel: nixos-24.05
  - name: extras
    source: github:shed-index/extras
    channel: main

platforms:
  - x86_64-linux
  - aarch64-linux
  - x86_64-darwin
  - aarch64-darwin

shell:
  interpreter:
    package: python3
    with:
      - reportlab
      - pygments
  tools:
    - clang
    - cmake
"#;

/// Run init command
pub fn run(workspace: Option<PathBuf>) -> Result<()> {
    let workspace = workspace_path(workspace)?;
    let path = workspace.join(DESCRIPTOR_FILE);

    if path.exists() {
        return Err(ShedError::ConfigAlreadyExists {
            path: path.display().to_string(),
        });
    }

    std::fs::write(&path, STARTER_DESCRIPTOR).map_err(|e| ShedError::FileWriteFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    println!(
        "{} {}",
        Style::new().bold().green().apply_to("Created"),
        path.display()
    );
    println!("Edit the descriptor, then run 'shed resolve' to produce shed.lock.");

    Ok(())
}
