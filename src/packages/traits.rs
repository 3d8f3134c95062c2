use crate::error::Result;

/// One package manager's update workflow, driven uniformly by the orchestrator.
pub trait Plugin: Send + Sync {
    /// Short name used in logs and error context.
    fn name(&self) -> &str;

    /// Human-readable description of the command(s) the update runs.
    fn command_summary(&self) -> String;

    /// Whether this plugin belongs to the elevated-privilege tier.
    fn requires_sudo(&self) -> bool;

    /// Whether the underlying binary resolves on `PATH`.
    fn is_installed(&self) -> bool;

    fn update(&self) -> Result<()>;
}
