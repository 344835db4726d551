//! `hylla new <name> [tags...] [--commands] [--clone | --github USER REPO | --migrate PATH] [--no-readme]`

use std::path::PathBuf;

use anyhow::{bail, Context as _, Result};
use clap::Args;
use colored::Colorize;

use hylla_core::{
    lifecycle::{self, NewProject, Source},
    naming,
    script::LAUNCH_SCRIPT_INSTRUCTIONS,
    Context, Interaction, RegistryError,
};
use hylla_renderer::{ReadmeContext, ReadmeOutcome, ReadmeWriter, TemplateSource};

use crate::github;
use crate::terminal::Terminal;

/// Create a new project.
#[derive(Args, Debug)]
pub struct NewArgs {
    /// Project name; lower-cased, with spaces turned into underscores.
    pub name: String,

    /// Subject tags for the project.
    pub tags: Vec<String>,

    /// Template used to create the project README.md. Files ending in
    /// `.tera` are rendered; other files are copied as they are.
    #[arg(long, env = "HYLLA_README_TEMPLATE", value_name = "PATH")]
    pub readme_template: Option<PathBuf>,

    /// Open a text editor to write commands executed every time the project is opened.
    #[arg(long)]
    pub commands: bool,

    /// Clone a git repository (the URL is asked for).
    #[arg(long, conflicts_with_all = ["github", "migrate"])]
    pub clone: bool,

    /// Clone directly from a GitHub repository: username and repository name.
    #[arg(long, num_args = 2, value_names = ["USER", "REPO"], conflicts_with = "migrate")]
    pub github: Option<Vec<String>>,

    /// Copy all the files from an existing directory.
    #[arg(long, value_name = "PATH")]
    pub migrate: Option<PathBuf>,

    /// Do not create a README file.
    #[arg(long)]
    pub no_readme: bool,
}

impl NewArgs {
    pub fn run(self, ctx: &Context) -> Result<()> {
        let mut io = Terminal;

        // Fail before any prompting if the name is taken.
        let (name, directory) = naming::derive(&self.name, ctx.root())?;
        if naming::exists(&name, &directory, ctx.store())? {
            return Err(RegistryError::DuplicateProject {
                name: name.0,
                path: directory,
            }
            .into());
        }

        if let Some(from) = &self.migrate {
            if !from.is_dir() {
                bail!("cannot migrate from '{}': not a directory", from.display());
            }
        }

        let launch_script = if self.commands {
            io.edit_text(LAUNCH_SCRIPT_INSTRUCTIONS)?.unwrap_or_default()
        } else {
            String::new()
        };

        let clone_url = match (&self.github, self.clone) {
            (Some(pair), _) => {
                let [user, repo] = pair.as_slice() else {
                    bail!("--github takes exactly two values: USER REPO");
                };
                match github::resolve_clone_url(user, repo, &mut io)? {
                    Some(url) => Some(url),
                    None => {
                        println!("Clone aborted; no project was created.");
                        return Ok(());
                    }
                }
            }
            (None, true) => Some(io.prompt("Git URL")?),
            (None, false) => None,
        };

        let source = match (&self.migrate, clone_url) {
            (Some(from), _) => {
                println!("All the files from {} will be migrated to the new directory", from.display());
                Source::Migrate(from.clone())
            }
            (None, Some(url)) => Source::Clone(url),
            (None, None) => Source::Empty,
        };
        let cloned_from = match &source {
            Source::Clone(url) => Some(url.clone()),
            _ => None,
        };

        let project = lifecycle::create(
            ctx,
            NewProject {
                name: self.name.clone(),
                tags: self.tags.clone(),
                launch_script,
                source,
            },
        )
        .with_context(|| format!("failed to create project '{}'", self.name))?;

        println!("{}", " Project added to the database ".on_green().black());
        println!("Project name: {}", project.name);
        println!("Tags: {}", project.tags_text());
        println!("Project directory: {}", project.path.display());

        if self.migrate.is_some() {
            return Ok(());
        }

        if let Some(url) = cloned_from {
            println!("Project directory cloned from {url}!");
            return Ok(());
        }

        if !self.no_readme {
            let writer = ReadmeWriter::new(self.readme_template.as_deref())
                .context("failed to load README template")?;
            let outcome = writer
                .write(&ReadmeContext::from_project(&project), &project.path)
                .context("failed to write README")?;
            match outcome {
                ReadmeOutcome::Created { source: TemplateSource::Embedded, .. } => {
                    println!("Created a standard README file")
                }
                ReadmeOutcome::Created { .. } => {
                    println!("Created a README file based on the provided template")
                }
                ReadmeOutcome::AlreadyExists { .. } => {
                    println!("A README does already exist in the folder")
                }
            }
        }

        Ok(())
    }
}
