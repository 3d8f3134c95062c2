//! Update command
//!
//! Runs every installed plugin's update, all privileged plugins first, and
//! stops at the first failure.

use crate::error::{Result, UpdaterError};
use crate::packages::{Plugin, default_plugins};
use crate::utils::command::SystemRunner;
use std::sync::Arc;

/// Tiers in execution order: privileged first.
const TIERS: [bool; 2] = [true, false];

pub fn run() -> Result<()> {
    let plugins = default_plugins(Arc::new(SystemRunner))?;
    update_all(&plugins)
}

/// Update `plugins` tier by tier, keeping list order inside each tier.
pub fn update_all(plugins: &[Box<dyn Plugin>]) -> Result<()> {
    for sudo_tier in TIERS {
        for plugin in plugins.iter().filter(|p| p.requires_sudo() == sudo_tier) {
            if !plugin.is_installed() {
                tracing::debug!(plugin = plugin.name(), "command not installed, skipping");
                continue;
            }

            tracing::debug!(plugin = plugin.name(), sudo = sudo_tier, "updating");
            plugin.update().map_err(|e| UpdaterError::PluginFailed {
                plugin: plugin.name().to_string(),
                source: Box::new(e),
            })?;
        }
    }

    Ok(())
}
