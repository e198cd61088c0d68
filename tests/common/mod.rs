//! Common test utilities for shed integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// Descriptor used by most integration tests: two inputs, one platform,
/// an interpreter with two libraries and two standalone tools.
pub const DESCRIPTOR: &str = r#"inputs:
  - name: pkgs
    source: github:NixOS/nixpkgs
    channel: nixos-24.05
  - name: extras
    source: github:shed-index/extras
    channel: main

platforms:
  - x86_64-linux

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

/// Index for the `pkgs` input matching [`DESCRIPTOR`]
pub const PKGS_INDEX: &str = r#"source: github:NixOS/nixpkgs/nixos-24.05
packages:
  x86_64-linux:
    - name: python3
      version: "3.12.4"
      path: store/python3-3.12.4
    - name: reportlab
      version: "4.2.0"
    - name: pygments
      version: "2.18.0"
    - name: clang
      version: "18.1.5"
    - name: cmake
      version: "3.29.2"
"#;

/// Index for the `extras` input (declared but unused by the shell)
pub const EXTRAS_INDEX: &str = r#"source: github:shed-index/extras/main
packages: {}
"#;

/// A test workspace for integration tests
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Create a workspace with the standard descriptor and both indices
    pub fn seeded() -> Self {
        let workspace = Self::new();
        workspace.write_file("shed.yaml", DESCRIPTOR);
        workspace.write_index("pkgs", PKGS_INDEX);
        workspace.write_index("extras", EXTRAS_INDEX);
        workspace
    }

    /// Write a file in the workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Write an index file for an input into shed-index/
    pub fn write_index(&self, input: &str, content: &str) {
        self.write_file(&format!("shed-index/{input}.yaml"), content);
    }

    /// Read a file from the workspace
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in the workspace
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Remove a file from the workspace
    pub fn remove_file(&self, path: &str) {
        std::fs::remove_file(self.path.join(path)).expect("Failed to remove file");
    }
}
