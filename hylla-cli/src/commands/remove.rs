//! `hylla remove <name>`

use anyhow::{Context as _, Result};
use clap::Args;
use colored::Colorize;

use hylla_core::{
    lifecycle::{self, RemoveOutcome},
    Context,
};

use crate::terminal::Terminal;

/// Remove a project from the database.
#[derive(Args, Debug)]
pub struct RemoveArgs {
    /// Name of the project.
    pub name: String,
}

impl RemoveArgs {
    pub fn run(self, ctx: &Context) -> Result<()> {
        let outcome = lifecycle::remove(ctx, &self.name, &mut Terminal)
            .with_context(|| format!("failed to remove '{}'", self.name))?;

        match outcome {
            RemoveOutcome::Removed(project) => {
                println!(
                    "{}",
                    " The project has now been removed from the database! ".on_red().white()
                );
                println!(
                    "NOTE: All files are still left in {}",
                    project.path.display()
                );
            }
            RemoveOutcome::Cancelled => println!("OK, the project was not removed!"),
        }
        Ok(())
    }
}
