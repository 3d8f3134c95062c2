use std::process::ExitStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UpdaterError {
    #[error("Command line must contain at least the program name")]
    EmptyCommandLine,

    #[error("failed to run [{command}]. Error [{source}]. Stdout: [{stdout}], Stderr: [{stderr}]")]
    CommandFailed {
        command: String,
        #[source]
        source: ExecFailure,
        stdout: String,
        stderr: String,
    },

    /// A single-command plugin could not complete its update
    #[error("failed to update: {source}")]
    UpdateFailed {
        #[source]
        source: Box<UpdaterError>,
    },

    /// The orchestrator stopped because a plugin failed
    #[error("failed to update {plugin}: {source}")]
    PluginFailed {
        plugin: String,
        #[source]
        source: Box<UpdaterError>,
    },
}

/// Why an external command did not succeed.
#[derive(Error, Debug)]
pub enum ExecFailure {
    #[error("{0}")]
    Spawn(#[from] std::io::Error),

    #[error("{0}")]
    Exit(ExitStatus),
}

pub type Result<T> = std::result::Result<T, UpdaterError>;
