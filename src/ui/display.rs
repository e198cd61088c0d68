//! Styled rendering of resolved shell definitions

use console::Style;

use crate::definition::{PackageKind, ShellDefinition};

/// Render one shell definition
///
/// `detailed` adds the originating input and store path per package.
pub fn render_definition(definition: &ShellDefinition, digest: Option<&str>, detailed: bool) {
    println!(
        "  {} ({})",
        Style::new().bold().yellow().apply_to(&definition.shell),
        definition.platform
    );

    if let Some(digest) = digest {
        println!(
            "    {} {}",
            Style::new().bold().apply_to("Digest:"),
            Style::new().dim().apply_to(digest)
        );
    }

    let total = definition.packages.len();
    let label = if total == 1 { "package" } else { "packages" };
    println!(
        "    {} ({} {})",
        Style::new().bold().apply_to("Packages:"),
        total,
        label
    );

    for kind in [
        PackageKind::Interpreter,
        PackageKind::Library,
        PackageKind::Tool,
    ] {
        let group: Vec<_> = definition
            .packages
            .iter()
            .filter(|p| p.kind == kind)
            .collect();
        if group.is_empty() {
            continue;
        }

        println!(
            "      {}",
            Style::new().cyan().apply_to(kind_heading(kind, group.len()))
        );
        for package in group {
            println!(
                "        {} {}",
                package.name,
                Style::new().dim().apply_to(&package.version)
            );
            if detailed {
                println!(
                    "          {} {}",
                    Style::new().bold().apply_to("input:"),
                    package.input
                );
                if let Some(ref path) = package.path {
                    println!(
                        "          {} {}",
                        Style::new().bold().apply_to("path:"),
                        Style::new().dim().apply_to(path)
                    );
                }
            }
        }
    }
}

fn kind_heading(kind: PackageKind, count: usize) -> &'static str {
    match (kind, count) {
        (PackageKind::Interpreter, _) => "Interpreter",
        (PackageKind::Library, 1) => "Library",
        (PackageKind::Library, _) => "Libraries",
        (PackageKind::Tool, 1) => "Tool",
        (PackageKind::Tool, _) => "Tools",
    }
}
