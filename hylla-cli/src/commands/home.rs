//! `hylla home`

use anyhow::Result;

use hylla_core::Context;

use crate::launch::Launcher;

pub fn run(ctx: &Context, launcher: &Launcher) -> Result<()> {
    println!("{}", ctx.root().display());
    launcher.launch(ctx.root());
    Ok(())
}
