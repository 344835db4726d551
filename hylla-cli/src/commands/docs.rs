//! `hylla docs`

use anyhow::Result;

use hylla_renderer::DOCS_URL;

use crate::launch::Launcher;

pub fn run(launcher: &Launcher) -> Result<()> {
    println!("{DOCS_URL}");
    launcher.launch(DOCS_URL);
    Ok(())
}
