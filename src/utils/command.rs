//! External command execution
//!
//! Every package manager call goes through [`CommandRunner`], so plugins can be
//! driven by [`SystemRunner`] in production and by a scripted fake in tests.

use crate::core::types::CommandLine;
use crate::error::{ExecFailure, Result, UpdaterError};
use std::process::{Command, Stdio};

/// Captured output of a command that exited successfully.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Output {
    pub stdout: String,
    pub stderr: String,
}

pub trait CommandRunner: Send + Sync {
    /// Run `command` to completion and capture both streams.
    fn run(&self, command: &CommandLine) -> Result<Output>;
}

/// Spawns real child processes and blocks until they exit.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, command: &CommandLine) -> Result<Output> {
        let result = Command::new(command.program())
            .args(command.args())
            .stdin(Stdio::null())
            .output();

        let (stdout, stderr, failure) = match result {
            Ok(output) => {
                let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
                let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
                let failure = (!output.status.success()).then_some(ExecFailure::Exit(output.status));
                (stdout, stderr, failure)
            }
            Err(e) => (String::new(), String::new(), Some(ExecFailure::Spawn(e))),
        };

        let err = failure.as_ref().map(ToString::to_string).unwrap_or_default();
        tracing::info!(
            command = %command,
            stdout = %stdout,
            stderr = %stderr,
            err = %err,
            "command execute"
        );

        match failure {
            Some(source) => Err(UpdaterError::CommandFailed {
                command: command.to_string(),
                source,
                stdout,
                stderr,
            }),
            None => Ok(Output { stdout, stderr }),
        }
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Records every command it is asked to run and answers from a script.
    ///
    /// Commands without a scripted answer succeed with empty output.
    #[derive(Default)]
    pub struct FakeRunner {
        calls: Mutex<Vec<String>>,
        script: Mutex<HashMap<String, std::result::Result<String, String>>>,
    }

    impl FakeRunner {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn succeed(self, command: &str, stdout: &str) -> Self {
            self.script
                .lock()
                .unwrap()
                .insert(command.to_string(), Ok(stdout.to_string()));
            self
        }

        pub fn fail(self, command: &str, stderr: &str) -> Self {
            self.script
                .lock()
                .unwrap()
                .insert(command.to_string(), Err(stderr.to_string()));
            self
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl CommandRunner for FakeRunner {
        fn run(&self, command: &CommandLine) -> Result<Output> {
            let rendered = command.to_string();
            self.calls.lock().unwrap().push(rendered.clone());

            match self.script.lock().unwrap().get(&rendered) {
                Some(Ok(stdout)) => Ok(Output {
                    stdout: stdout.clone(),
                    stderr: String::new(),
                }),
                Some(Err(stderr)) => Err(UpdaterError::CommandFailed {
                    command: rendered,
                    source: ExecFailure::Spawn(std::io::Error::other("scripted failure")),
                    stdout: String::new(),
                    stderr: stderr.clone(),
                }),
                None => Ok(Output::default()),
            }
        }
    }
}
