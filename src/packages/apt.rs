//! APT package manager
//!
//! Updating apt is a fixed sequence: autoremove, refresh the index, list what
//! can be upgraded, then upgrade exactly those packages.

use crate::core::types::CommandLine;
use crate::error::Result;
use crate::packages::traits::Plugin;
use crate::utils::command::CommandRunner;
use crate::utils::paths;
use std::sync::Arc;

const LIST_UPGRADABLE: &[&str] = &["apt", "list", "--upgradable", "--manual-installed"];
const UPGRADE: &[&str] = &["sudo", "apt", "upgrade", "--only-upgrade", "--yes"];
const UPDATE_INDEX: &[&str] = &["sudo", "apt", "update"];
const AUTOREMOVE: &[&str] = &["sudo", "apt", "autoremove"];

pub struct AptManager {
    sudo_required: bool,
    runner: Arc<dyn CommandRunner>,
}

impl AptManager {
    pub fn new(sudo_required: bool, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            sudo_required,
            runner,
        }
    }

    fn run(&self, parts: &[&str]) -> Result<String> {
        let command = CommandLine::new(parts.iter().copied())?;
        Ok(self.runner.run(&command)?.stdout)
    }

    pub fn list_upgradable_packages(&self) -> Result<Vec<String>> {
        let stdout = self.run(LIST_UPGRADABLE)?;
        Ok(parse_upgradable_packages(&stdout))
    }

    /// Upgrade only the given packages. Returns apt's stdout.
    pub fn upgrade_all_packages(&self, packages: &[String]) -> Result<String> {
        let command = CommandLine::new(UPGRADE.iter().copied())?.with_args(packages.iter().cloned());
        Ok(self.runner.run(&command)?.stdout)
    }

    pub fn update_package_list(&self) -> Result<String> {
        self.run(UPDATE_INDEX)
    }

    pub fn remove_unused_packages(&self) -> Result<String> {
        self.run(AUTOREMOVE)
    }
}

impl Plugin for AptManager {
    fn name(&self) -> &str {
        "apt"
    }

    fn command_summary(&self) -> String {
        "sudo apt autoremove, sudo apt update, sudo apt upgrade --only-upgrade".to_string()
    }

    fn requires_sudo(&self) -> bool {
        self.sudo_required
    }

    fn is_installed(&self) -> bool {
        paths::command_exists("apt")
    }

    fn update(&self) -> Result<()> {
        self.remove_unused_packages()?;
        self.update_package_list()?;

        let packages = self.list_upgradable_packages()?;
        tracing::debug!(?packages, "apt upgradable packages");
        if packages.is_empty() {
            return Ok(());
        }

        self.upgrade_all_packages(&packages)?;
        Ok(())
    }
}

/// Extract package names from `apt list --upgradable` output.
///
/// apt prints a bare newline when nothing is upgradable. Otherwise the first
/// line is always the `Listing...` banner and each following line looks like
/// `name/suite version arch [upgradable from: ...]`.
///
/// The banner is dropped without checking its text, so a future apt that
/// omits it would lose the first package.
pub fn parse_upgradable_packages(output: &str) -> Vec<String> {
    let output = output.trim();
    if output.is_empty() {
        return Vec::new();
    }

    output
        .lines()
        .skip(1)
        .map(|line| line.split('/').next().unwrap_or(line).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UpdaterError;
    use crate::utils::command::fake::FakeRunner;

    const LIST_CMD: &str = "apt list --upgradable --manual-installed";

    #[test]
    fn test_parse_empty_output() {
        assert!(parse_upgradable_packages("").is_empty());
        assert!(parse_upgradable_packages("\n").is_empty());
        assert!(parse_upgradable_packages("  \n\t\n").is_empty());
    }

    #[test]
    fn test_parse_banner_only() {
        assert!(parse_upgradable_packages("Listing...\n").is_empty());
    }

    #[test]
    fn test_parse_keeps_order() {
        let packages = parse_upgradable_packages("Listing...\nfoo/stable 1.0\nbar/stable 2.0\n");
        assert_eq!(packages, vec!["foo", "bar"]);
    }

    #[test]
    fn test_parse_real_apt_line() {
        let output = "Listing... Done\n\
            curl/jammy-updates,jammy-security 7.81.0-1ubuntu1.16 amd64 [upgradable from: 7.81.0-1ubuntu1.15]\n";
        assert_eq!(parse_upgradable_packages(output), vec!["curl"]);
    }

    #[test]
    fn test_update_runs_steps_in_order() {
        let runner = Arc::new(FakeRunner::new().succeed(
            LIST_CMD,
            "Listing...\ngit/stable 2.43 amd64\nvim/stable 9.1 amd64\n",
        ));
        let apt = AptManager::new(true, runner.clone());

        apt.update().unwrap();

        assert_eq!(
            runner.calls(),
            vec![
                "sudo apt autoremove",
                "sudo apt update",
                LIST_CMD,
                "sudo apt upgrade --only-upgrade --yes git vim",
            ]
        );
    }

    #[test]
    fn test_update_skips_upgrade_when_nothing_upgradable() {
        let runner = Arc::new(FakeRunner::new().succeed(LIST_CMD, "\n"));
        let apt = AptManager::new(true, runner.clone());

        apt.update().unwrap();

        let calls = runner.calls();
        assert_eq!(calls.len(), 3);
        assert!(!calls.iter().any(|c| c.contains("apt upgrade")));
    }

    #[test]
    fn test_failed_step_aborts_sequence_unwrapped() {
        let runner = Arc::new(FakeRunner::new().fail("sudo apt update", "could not get lock"));
        let apt = AptManager::new(true, runner.clone());

        let err = apt.update().unwrap_err();

        assert!(matches!(err, UpdaterError::CommandFailed { .. }));
        assert!(err.to_string().contains("could not get lock"));
        assert_eq!(runner.calls(), vec!["sudo apt autoremove", "sudo apt update"]);
    }

    #[test]
    fn test_list_failure_skips_upgrade() {
        let runner = Arc::new(FakeRunner::new().fail(LIST_CMD, "unable to read package lists"));
        let apt = AptManager::new(true, runner.clone());

        let err = apt.update().unwrap_err();

        match &err {
            UpdaterError::CommandFailed { command, stderr, .. } => {
                assert_eq!(command, LIST_CMD);
                assert_eq!(stderr, "unable to read package lists");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(
            runner.calls(),
            vec!["sudo apt autoremove", "sudo apt update", LIST_CMD]
        );
    }

    #[test]
    fn test_upgrade_failure_carries_stderr() {
        let runner = Arc::new(
            FakeRunner::new()
                .succeed(LIST_CMD, "Listing...\nfoo/stable 1.0\n")
                .fail("sudo apt upgrade --only-upgrade --yes foo", "dpkg was interrupted"),
        );
        let apt = AptManager::new(true, runner);

        match apt.update().unwrap_err() {
            UpdaterError::CommandFailed { stderr, .. } => {
                assert_eq!(stderr, "dpkg was interrupted");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_sudo_flag_is_reported() {
        let runner = Arc::new(FakeRunner::new());
        assert!(AptManager::new(true, runner.clone()).requires_sudo());
        assert!(!AptManager::new(false, runner).requires_sudo());
    }
}
