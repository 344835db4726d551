//! `hylla edit <name> name|tags|commands`

use anyhow::{Context as _, Result};
use clap::Args;

use hylla_core::{
    lifecycle::{self, EditOutcome},
    Context, EditField,
};

use crate::EditFieldArg;
use crate::terminal::Terminal;

/// Edit a project.
#[derive(Args, Debug)]
pub struct EditArgs {
    /// Name of the project.
    pub name: String,

    /// What to change: name | tags | commands.
    #[arg(value_name = "FIELD")]
    pub field: EditFieldArg,
}

impl EditArgs {
    pub fn run(self, ctx: &Context) -> Result<()> {
        let field: EditField = self.field.into();
        let outcome = lifecycle::edit_project(ctx, &self.name, field, &mut Terminal)
            .with_context(|| format!("failed to edit the {field} of '{}'", self.name))?;

        match outcome {
            EditOutcome::Applied(project) => {
                println!("The changes have been made!");
                if field == EditField::Name {
                    println!("New directory: {}", project.path.display());
                }
            }
            EditOutcome::Cancelled => println!("Ok. No changes have been made!"),
        }
        Ok(())
    }
}
