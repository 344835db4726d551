//! Hylla: organize all your projects from the command line.
//!
//! # Usage
//!
//! ```text
//! hylla [--location <dir>] new <name> [tags...] [--commands] [--clone | --github USER REPO | --migrate PATH] [--readme-template PATH] [--no-readme]
//! hylla open <name> [--safe]
//! hylla edit <name> name|tags|commands
//! hylla remove <name>
//! hylla list [--tag <tag>] [--detailed] [--json]
//! hylla home
//! hylla docs
//! ```
//!
//! The projects root comes from `--location` or `HYLLA_LOCATION`.

mod commands;
mod config;
mod github;
mod launch;
mod logging;
mod terminal;

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{
    edit::EditArgs, list::ListArgs, new::NewArgs, open::OpenArgs, remove::RemoveArgs,
};
use hylla_core::EditField;

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "hylla",
    version,
    about = "Hylla - Organize all your projects from the command-line",
    long_about = None,
)]
struct Cli {
    /// Path to the directory where Hylla stores all the projects.
    #[arg(long, env = "HYLLA_LOCATION", global = true, value_name = "DIR")]
    location: Option<PathBuf>,

    /// Do not open directories or URLs in the platform's default application.
    #[arg(long, env = "HYLLA_NO_LAUNCH", global = true, hide = true)]
    no_launch: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create a new project.
    New(NewArgs),

    /// Open a project and run its launch commands.
    Open(OpenArgs),

    /// Edit the name, tags or launch commands of a project.
    Edit(EditArgs),

    /// Remove a project from the database (its files are kept).
    Remove(RemoveArgs),

    /// List and search for projects.
    List(ListArgs),

    /// Open the directory with all the projects.
    Home,

    /// Open the documentation in your browser.
    Docs,
}

// ---------------------------------------------------------------------------
// Shared EditField argument, parsed from CLI strings, converts to core type
// ---------------------------------------------------------------------------

/// Thin wrapper so clap can parse `EditField` from CLI args.
#[derive(Debug, Clone, Copy)]
pub struct EditFieldArg(pub EditField);

impl FromStr for EditFieldArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "name" => Ok(Self(EditField::Name)),
            "tags" => Ok(Self(EditField::Tags)),
            "commands" => Ok(Self(EditField::Commands)),
            other => Err(format!(
                "unknown field '{other}'; expected: name, tags, commands"
            )),
        }
    }
}

impl fmt::Display for EditFieldArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<EditFieldArg> for EditField {
    fn from(f: EditFieldArg) -> Self {
        f.0
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();
    let launcher = launch::Launcher::new(!cli.no_launch);

    let location = cli.location;
    let context = || config::context(location.clone());

    match cli.command {
        Commands::New(args) => args.run(&context()?),
        Commands::Open(args) => args.run(&context()?, &launcher),
        Commands::Edit(args) => args.run(&context()?),
        Commands::Remove(args) => args.run(&context()?),
        Commands::List(args) => args.run(&context()?),
        Commands::Home => commands::home::run(&context()?, &launcher),
        // The only command that works without a projects location.
        Commands::Docs => commands::docs::run(&launcher),
    }
}
