//! Check command implementation
//!
//! Loads and validates the descriptor without touching the resolver.

use std::path::PathBuf;

use console::Style;

use crate::commands::workspace_path;
use crate::descriptor::Descriptor;
use crate::error::Result;

/// Run check command
pub fn run(workspace: Option<PathBuf>) -> Result<()> {
    let workspace = workspace_path(workspace)?;
    let descriptor = Descriptor::load(&workspace)?;

    let package_count = descriptor.shell.packages().count();
    println!(
        "{} {}",
        Style::new().bold().green().apply_to("Descriptor OK:"),
        workspace.join(crate::descriptor::DESCRIPTOR_FILE).display()
    );
    println!(
        "  {} {}",
        Style::new().bold().apply_to("Inputs:"),
        descriptor
            .inputs
            .iter()
            .map(|i| i.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!(
        "  {} {}",
        Style::new().bold().apply_to("Platforms:"),
        descriptor
            .platforms
            .iter()
            .map(|p| p.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!(
        "  {} {} ({} packages, resolved from '{}')",
        Style::new().bold().apply_to("Shell:"),
        descriptor.shell.name,
        package_count,
        descriptor.shell_input().name
    );

    Ok(())
}
