//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// shed - declarative development shell bootstrapper
///
/// Evaluate a shed.yaml descriptor into reproducible per-platform shell
/// definitions.
#[derive(Parser, Debug)]
#[command(
    name = "shed",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Declarative development shell bootstrapper",
    long_about = "shed evaluates a declarative environment descriptor (shed.yaml) against \
                  per-input package indices and produces one resolved shell definition per \
                  target platform, pinned in shed.lock.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  shed init\n    \
                  shed check\n    \
                  shed resolve\n    \
                  shed resolve --platform x86_64-linux --frozen\n    \
                  shed show aarch64-darwin"
)]
pub struct Cli {
    /// Workspace directory (defaults to current directory)
    #[arg(long, short = 'w', global = true)]
    pub workspace: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scaffold a starter shed.yaml
    Init,

    /// Validate the descriptor
    Check,

    /// Evaluate the descriptor and write shed.lock
    Resolve(ResolveArgs),

    /// Show resolved shell definitions from shed.lock
    Show(ShowArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the resolve command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Resolve all declared platforms:\n    shed resolve\n\n\
                  Resolve a subset of platforms:\n    shed resolve --platform x86_64-linux --platform aarch64-darwin\n\n\
                  Fail if the lockfile would change (CI/CD):\n    shed resolve --frozen\n\n\
                  Use a custom index directory:\n    shed resolve --index ./indices")]
pub struct ResolveArgs {
    /// Resolve only these platforms (must be declared in the descriptor)
    #[arg(long = "platform", value_name = "PLATFORM", num_args = 1..)]
    pub platforms: Vec<String>,

    /// Fail if lockfile would change
    #[arg(long)]
    pub frozen: bool,

    /// Package index directory (defaults to shed-index/ in the workspace)
    #[arg(long, value_name = "DIR")]
    pub index: Option<PathBuf>,
}

/// Arguments for the show command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show all locked shells:\n    shed show\n\n\
                  Show one platform:\n    shed show x86_64-linux")]
pub struct ShowArgs {
    /// Platform to show (all locked platforms when omitted)
    pub platform: Option<String>,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    shed completions --shell bash > ~/.bash_completion.d/shed\n\n\
                  Generate zsh completions:\n    shed completions --shell zsh > ~/.zfunc/_shed\n\n\
                  Generate fish completions:\n    shed completions --shell fish > ~/.config/fish/completions/shed.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}
