//! List command
//!
//! Shows the built-in plugins without running any of them.

use crate::error::Result;
use crate::packages::{Plugin, default_plugins};
use crate::ui as output;
use crate::utils::command::SystemRunner;
use std::sync::Arc;

pub fn run() -> Result<()> {
    let plugins = default_plugins(Arc::new(SystemRunner))?;

    output::header("Plugins");
    for plugin in &plugins {
        let row = describe(plugin.as_ref());
        output::plugin_row(row.installed, &row.name, row.tier, &row.detail);
    }

    Ok(())
}

struct PluginRow {
    name: String,
    tier: &'static str,
    installed: bool,
    detail: String,
}

fn describe(plugin: &dyn Plugin) -> PluginRow {
    let installed = plugin.is_installed();
    let mut detail = plugin.command_summary();
    if !installed {
        detail.push_str(" (not installed)");
    }

    PluginRow {
        name: plugin.name().to_string(),
        tier: if plugin.requires_sudo() { "sudo" } else { "user" },
        installed,
        detail,
    }
}
