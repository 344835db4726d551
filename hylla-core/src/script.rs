//! Launch scripts: the shell lines stored with a project and run on open.
//!
//! Running stored shell lines is a deliberate capability. `hylla open --safe`
//! is the documented way to skip it.

use std::path::Path;
use std::process::Command;

use crate::error::RegistryError;

/// Initial editor contents when a launch script is written for a new project.
pub const LAUNCH_SCRIPT_INSTRUCTIONS: &str = "# All the commands executed when a project is opened";

/// Runs a single launch-script line.
pub trait ShellRunner {
    fn run(&mut self, command: &str, cwd: &Path) -> Result<(), RegistryError>;
}

/// Runs lines through the platform shell (`sh -c` or `cmd /C`).
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemShell;

impl ShellRunner for SystemShell {
    fn run(&mut self, command: &str, cwd: &Path) -> Result<(), RegistryError> {
        let status = shell_command(command)
            .current_dir(cwd)
            .status()
            .map_err(|e| RegistryError::CommandExecution {
                command: command.to_owned(),
                reason: e.to_string(),
            })?;
        if status.success() {
            Ok(())
        } else {
            Err(RegistryError::CommandExecution {
                command: command.to_owned(),
                reason: status.to_string(),
            })
        }
    }
}

#[cfg(unix)]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(command);
    cmd
}

#[cfg(not(unix))]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg(command);
    cmd
}

/// Result of running one launch-script line.
#[derive(Debug)]
pub struct CommandOutcome {
    pub command: String,
    pub error: Option<RegistryError>,
}

impl CommandOutcome {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Lines that would be executed: blank lines and `#` comments are skipped.
pub fn executable_lines(script: &str) -> impl Iterator<Item = &str> {
    script.lines().filter(|line| {
        let trimmed = line.trim();
        !trimmed.is_empty() && !trimmed.starts_with('#')
    })
}

/// Run every executable line in `cwd`, one at a time.
///
/// A failing line is logged and recorded; the remaining lines still run.
pub fn run_script(script: &str, cwd: &Path, runner: &mut dyn ShellRunner) -> Vec<CommandOutcome> {
    executable_lines(script)
        .map(|line| {
            tracing::info!(command = line, "running launch command");
            let error = runner.run(line, cwd).err();
            if let Some(err) = &error {
                tracing::warn!(error = %err, "launch command failed; continuing");
            }
            CommandOutcome {
                command: line.to_owned(),
                error,
            }
        })
        .collect()
}
