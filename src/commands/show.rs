//! Show command implementation
//!
//! Renders resolved shell definitions from shed.lock.

use std::path::PathBuf;

use console::Style;

use crate::cli::ShowArgs;
use crate::commands::workspace_path;
use crate::error::{Result, ShedError};
use crate::lockfile::Lockfile;
use crate::platform::Platform;
use crate::ui::display;

/// Run show command
pub fn run(workspace: Option<PathBuf>, args: ShowArgs, verbose: bool) -> Result<()> {
    let workspace = workspace_path(workspace)?;
    let lockfile = Lockfile::load(&workspace)?;

    match args.platform {
        Some(identifier) => {
            let platform: Platform = identifier.parse()?;
            let shell = lockfile.find_shell(platform).ok_or_else(|| {
                ShedError::ConfigInvalid {
                    message: format!("platform not present in lockfile: {platform}"),
                }
            })?;
            render(shell, verbose)?;
        }
        None => {
            for shell in &lockfile.shells {
                render(shell, verbose)?;
                println!();
            }
        }
    }

    Ok(())
}

fn render(shell: &crate::lockfile::LockedShell, verbose: bool) -> Result<()> {
    display::render_definition(&shell.definition, Some(&shell.digest), verbose);
    if !shell.verify()? {
        println!(
            "    {}",
            Style::new()
                .bold()
                .red()
                .apply_to("Warning: digest does not match definition contents")
        );
    }
    Ok(())
}
