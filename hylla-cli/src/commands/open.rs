//! `hylla open <name> [--safe]`

use anyhow::{Context as _, Result};
use clap::Args;
use colored::Colorize;

use hylla_core::{
    lifecycle::{self, OpenMode},
    script::SystemShell,
    Context,
};

use crate::launch::Launcher;

/// Open a project.
#[derive(Args, Debug)]
pub struct OpenArgs {
    /// Name of the project.
    pub name: String,

    /// Open the project without executing any commands.
    #[arg(long)]
    pub safe: bool,
}

impl OpenArgs {
    pub fn run(self, ctx: &Context, launcher: &Launcher) -> Result<()> {
        let mode = if self.safe { OpenMode::Safe } else { OpenMode::RunScript };
        let opened = lifecycle::open(ctx, &self.name, mode, &mut SystemShell)
            .with_context(|| format!("failed to open '{}'", self.name))?;

        if opened.recreated_dir {
            println!("{}", " Error! The project directory is missing ".on_red().white());
            println!("{}", " Creating a new one! ".on_green().white());
        }

        println!("Project directory:");
        println!("{}", opened.project.path.display());
        launcher.launch(&opened.project.path);

        if self.safe {
            println!("Safe mode is active and no commands are therefore executed");
            return Ok(());
        }

        for outcome in &opened.commands {
            if let Some(err) = &outcome.error {
                eprintln!("{} {err}", "warning:".yellow().bold());
            }
        }
        Ok(())
    }
}
