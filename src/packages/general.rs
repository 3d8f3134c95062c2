//! Single-command package manager
//!
//! Covers tools whose whole update is one fixed command line, such as
//! `brew update` or `gcloud components update`.

use crate::core::types::CommandLine;
use crate::error::{Result, UpdaterError};
use crate::packages::traits::Plugin;
use crate::utils::command::CommandRunner;
use crate::utils::paths;
use std::sync::Arc;

pub struct GeneralManager {
    name: String,
    command: CommandLine,
    sudo_required: bool,
    runner: Arc<dyn CommandRunner>,
}

impl GeneralManager {
    /// Named after the program it runs.
    pub fn new(command: CommandLine, sudo_required: bool, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            name: command.program().to_string(),
            command,
            sudo_required,
            runner,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl Plugin for GeneralManager {
    fn name(&self) -> &str {
        &self.name
    }

    fn command_summary(&self) -> String {
        self.command.to_string()
    }

    fn requires_sudo(&self) -> bool {
        self.sudo_required
    }

    fn is_installed(&self) -> bool {
        paths::command_exists(self.command.program())
    }

    fn update(&self) -> Result<()> {
        self.runner
            .run(&self.command)
            .map_err(|e| UpdaterError::UpdateFailed {
                source: Box::new(e),
            })?;
        Ok(())
    }
}
