//! `hylla list [--tag <tag>] [--detailed] [--json]`

use anyhow::{Context as _, Result};
use clap::Args;
use colored::Colorize;

use hylla_core::{lifecycle, listing, Context, Project};

/// List and search for projects.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only projects whose tags contain this text.
    #[arg(long)]
    pub tag: Option<String>,

    /// Display detailed information about each project.
    #[arg(long, conflicts_with = "json")]
    pub detailed: bool,

    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

impl ListArgs {
    pub fn run(self, ctx: &Context) -> Result<()> {
        let projects = lifecycle::list(ctx, self.tag.as_deref()).context("failed to list projects")?;

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&projects).context("failed to serialize projects")?
            );
            return Ok(());
        }

        if projects.is_empty() {
            println!("No projects were found! :(");
            return Ok(());
        }

        for project in &projects {
            if self.detailed {
                print_detailed(project);
            } else {
                println!("{}", listing::summary_line(project));
            }
        }
        Ok(())
    }
}

fn print_detailed(project: &Project) {
    println!("{}", listing::detail_header(project).on_cyan().black());
    for line in listing::detail_body(project) {
        println!("{line}");
    }
}
