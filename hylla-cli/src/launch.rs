//! Opening paths and URLs in the platform's default application.

use std::ffi::OsStr;

use colored::Colorize;

/// Launches things with `open::that`, unless launching is switched off.
pub struct Launcher {
    enabled: bool,
}

impl Launcher {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Best effort: a failure to launch is reported, never fatal.
    pub fn launch(&self, target: impl AsRef<OsStr>) {
        let target = target.as_ref();
        if !self.enabled {
            tracing::debug!(what = ?target, "launching disabled");
            return;
        }
        if let Err(err) = open::that(target) {
            tracing::warn!(what = ?target, error = %err, "failed to launch");
            eprintln!(
                "{} could not open {}: {err}",
                "warning:".yellow().bold(),
                target.to_string_lossy()
            );
        }
    }
}
