//! Terminal-backed [`Interaction`]: stdin prompts and `$VISUAL` / `$EDITOR`.

use std::io::{BufRead, Write};
use std::process::Command;

use hylla_core::{Interaction, RegistryError};

#[cfg(unix)]
const FALLBACK_EDITOR: &str = "vi";
#[cfg(not(unix))]
const FALLBACK_EDITOR: &str = "notepad";

pub struct Terminal;

impl Interaction for Terminal {
    fn inform(&mut self, message: &str) {
        println!("{message}");
    }

    fn confirm(&mut self, question: &str) -> Result<bool, RegistryError> {
        let answer = read_answer(&format!("{question} [y/N]: "))?;
        Ok(is_yes(&answer))
    }

    fn prompt(&mut self, label: &str) -> Result<String, RegistryError> {
        loop {
            let answer = read_answer(&format!("{label}: "))?;
            let answer = answer.trim();
            if !answer.is_empty() {
                return Ok(answer.to_owned());
            }
        }
    }

    fn edit_text(&mut self, initial: &str) -> Result<Option<String>, RegistryError> {
        let file = tempfile::Builder::new()
            .prefix("hylla-")
            .suffix(".sh")
            .tempfile()
            .map_err(interaction_err)?;
        std::fs::write(file.path(), initial).map_err(interaction_err)?;

        let editor = editor_command();
        let mut parts = editor.split_whitespace();
        let program = parts.next().unwrap_or(FALLBACK_EDITOR);
        let status = Command::new(program)
            .args(parts)
            .arg(file.path())
            .status()
            .map_err(|e| RegistryError::Interaction(format!("cannot start editor '{editor}': {e}")))?;
        if !status.success() {
            tracing::warn!(%status, "editor exited unsuccessfully; discarding edit");
            return Ok(None);
        }

        let edited = std::fs::read_to_string(file.path()).map_err(interaction_err)?;
        if edited == initial {
            return Ok(None);
        }
        Ok(Some(edited))
    }
}

fn editor_command() -> String {
    ["VISUAL", "EDITOR"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|value| !value.trim().is_empty())
        .unwrap_or_else(|| FALLBACK_EDITOR.to_owned())
}

fn read_answer(prompt: &str) -> Result<String, RegistryError> {
    let mut stdout = std::io::stdout();
    write!(stdout, "{prompt}").map_err(interaction_err)?;
    stdout.flush().map_err(interaction_err)?;

    let mut line = String::new();
    let read = std::io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(interaction_err)?;
    if read == 0 {
        return Err(RegistryError::Interaction("input closed".into()));
    }
    Ok(line)
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

fn interaction_err(e: std::io::Error) -> RegistryError {
    RegistryError::Interaction(e.to_string())
}
