//! Resolve command implementation
//!
//! Loads the descriptor, builds the index-backed resolver, evaluates every
//! selected platform and writes shed.lock. With `--frozen`, fails instead
//! of changing an existing lockfile.

use std::path::PathBuf;

use console::Style;

use crate::cli::ResolveArgs;
use crate::commands::workspace_path;
use crate::descriptor::Descriptor;
use crate::error::{Result, ShedError};
use crate::lockfile::{LOCKFILE_NAME, Lockfile};
use crate::platform::Platform;
use crate::resolver::index::DEFAULT_INDEX_DIR;
use crate::resolver::{IndexResolver, eval};
use crate::ui::display;

/// Run resolve command
pub fn run(workspace: Option<PathBuf>, args: ResolveArgs, verbose: bool) -> Result<()> {
    let workspace = workspace_path(workspace)?;
    let mut descriptor = Descriptor::load(&workspace)?;

    if !args.platforms.is_empty() {
        descriptor.platforms = select_platforms(&descriptor, &args.platforms)?;
    }

    let index_dir = args
        .index
        .unwrap_or_else(|| workspace.join(DEFAULT_INDEX_DIR));
    let resolver = IndexResolver::load(&index_dir, &descriptor.inputs)?;

    let definitions = eval::evaluate(&descriptor, &resolver)?;
    let lockfile = Lockfile::from_definitions(definitions)?;

    if args.frozen {
        let existing = Lockfile::load(&workspace)?;
        // A platform-restricted run checks only the selected shells against
        // the existing lock; a full run must match it entirely.
        let current = if args.platforms.is_empty() {
            lockfile.matches(&existing)?
        } else {
            lockfile
                .shells
                .iter()
                .all(|shell| existing.find_shell(shell.definition.platform) == Some(shell))
        };
        if !current {
            return Err(ShedError::LockfileOutdated);
        }
    } else {
        lockfile.save(&workspace)?;
    }

    println!(
        "{} {} shell definition{} ({})",
        Style::new().bold().green().apply_to("Resolved"),
        lockfile.shells.len(),
        if lockfile.shells.len() == 1 { "" } else { "s" },
        LOCKFILE_NAME
    );
    println!();

    for shell in &lockfile.shells {
        display::render_definition(&shell.definition, Some(&shell.digest), verbose);
        println!();
    }

    Ok(())
}

/// Restrict evaluation to the requested platforms
///
/// Each requested platform must parse and be declared in the descriptor;
/// descriptor declaration order is preserved.
fn select_platforms(descriptor: &Descriptor, requested: &[String]) -> Result<Vec<Platform>> {
    let mut selected = Vec::with_capacity(requested.len());
    for identifier in requested {
        let platform: Platform = identifier.parse()?;
        if !descriptor.platforms.contains(&platform) {
            return Err(ShedError::ConfigInvalid {
                message: format!("platform not declared in descriptor: {platform}"),
            });
        }
        selected.push(platform);
    }

    Ok(descriptor
        .platforms
        .iter()
        .copied()
        .filter(|p| selected.contains(p))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor() -> Descriptor {
        Descriptor::from_yaml(
            r#"
inputs:
  - name: pkgs
    source: github:NixOS/nixpkgs
    channel: nixos-24.05
platforms:
  - x86_64-linux
  - aarch64-darwin
shell:
  interpreter:
    package: python3
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_select_platforms_preserves_declaration_order() {
        let selected = select_platforms(
            &descriptor(),
            &["aarch64-darwin".to_string(), "x86_64-linux".to_string()],
        )
        .unwrap();
        assert_eq!(
            selected,
            vec![Platform::X86_64Linux, Platform::Aarch64Darwin]
        );
    }

    #[test]
    fn test_select_undeclared_platform_rejected() {
        let result = select_platforms(&descriptor(), &["x86_64-darwin".to_string()]);
        assert!(matches!(result, Err(ShedError::ConfigInvalid { .. })));
    }

    #[test]
    fn test_select_unknown_platform_rejected() {
        let result = select_platforms(&descriptor(), &["riscv64-linux".to_string()]);
        assert!(matches!(
            result,
            Err(ShedError::UnsupportedPlatform { .. })
        ));
    }
}
