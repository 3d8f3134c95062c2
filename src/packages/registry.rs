//! Built-in plugin list
//!
//! Order matters only within a privilege tier.

use crate::core::types::CommandLine;
use crate::error::Result;
use crate::packages::apt::AptManager;
use crate::packages::general::GeneralManager;
use crate::packages::traits::Plugin;
use crate::utils::command::CommandRunner;
use std::sync::Arc;

pub fn default_plugins(runner: Arc<dyn CommandRunner>) -> Result<Vec<Box<dyn Plugin>>> {
    let general = |parts: &[&str], name: &str| -> Result<Box<dyn Plugin>> {
        let command = CommandLine::new(parts.iter().copied())?;
        Ok(Box::new(
            GeneralManager::new(command, false, runner.clone()).with_name(name),
        ))
    };

    let apt: Box<dyn Plugin> = Box::new(AptManager::new(true, runner.clone()));

    Ok(vec![
        general(&["gcloud", "components", "update"], "gcloud")?,
        apt,
        general(&["fish", "-c", "fisher update"], "fisher")?,
        general(&["kubectl", "krew", "upgrade"], "krew")?,
        general(&["brew", "update"], "brew")?,
    ])
}
