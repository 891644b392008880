use crate::error::{Result, UmountError};
use crate::platform::common::SHELL;
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::{debug, trace};

/// Captured output of a command that exited successfully
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Executes a shell command string as a child process
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `command` to completion.
    ///
    /// A spawn failure yields [`UmountError::Spawn`] and a non-zero exit
    /// yields [`UmountError::CommandFailed`] carrying both streams.
    async fn run(&self, command: &str) -> Result<CommandOutput>;
}

/// Runs commands through `sh -c`, so globs, redirections and `||` in the
/// command string are interpreted by the shell
#[derive(Debug, Clone)]
pub struct ShellRunner {
    shell: PathBuf,
}

impl Default for ShellRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl ShellRunner {
    pub fn new() -> Self {
        Self {
            shell: PathBuf::from(SHELL),
        }
    }

    pub fn with_shell(shell: impl Into<PathBuf>) -> Self {
        Self {
            shell: shell.into(),
        }
    }
}

#[async_trait]
impl CommandRunner for ShellRunner {
    async fn run(&self, command: &str) -> Result<CommandOutput> {
        debug!("Running: {} -c {}", self.shell.display(), command);

        let output = tokio::process::Command::new(&self.shell)
            .arg("-c")
            .arg(command)
            .output()
            .await
            .map_err(|source| UmountError::Spawn {
                command: command.to_string(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        trace!(
            "{} exited with {}: {} bytes stdout, {} bytes stderr",
            command,
            output.status,
            stdout.len(),
            stderr.len()
        );

        if !output.status.success() {
            return Err(UmountError::CommandFailed {
                command: command.to_string(),
                code: output.status.code(),
                stdout,
                stderr,
            });
        }

        Ok(CommandOutput { stdout, stderr })
    }
}
