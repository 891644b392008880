use super::runner::{CommandOutput, CommandRunner};
use crate::error::{Result, UmountError};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Mock command runner for testing
#[derive(Clone, Default)]
pub struct MockRunner {
    commands: Arc<Mutex<Vec<String>>>,
    stdout: Arc<Mutex<String>>,
    stderr: Arc<Mutex<String>>,
    exit_code: Arc<Mutex<Option<i32>>>,
}

impl MockRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output(self, stdout: &str, stderr: &str) -> Self {
        *self.stdout.lock().unwrap() = stdout.to_string();
        *self.stderr.lock().unwrap() = stderr.to_string();
        self
    }

    pub fn set_exit_code(&self, code: Option<i32>) {
        *self.exit_code.lock().unwrap() = code;
    }

    pub fn commands(&self) -> Vec<String> {
        self.commands.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommandRunner for MockRunner {
    async fn run(&self, command: &str) -> Result<CommandOutput> {
        self.commands.lock().unwrap().push(command.to_string());

        let stdout = self.stdout.lock().unwrap().clone();
        let stderr = self.stderr.lock().unwrap().clone();

        if let Some(code) = *self.exit_code.lock().unwrap() {
            return Err(UmountError::CommandFailed {
                command: command.to_string(),
                code: Some(code),
                stdout,
                stderr,
            });
        }

        Ok(CommandOutput { stdout, stderr })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_runner() {
        let runner = MockRunner::new().with_output("hello", "");

        let out = runner.run("echo hello").await.unwrap();
        assert_eq!(out.stdout, "hello");
        assert_eq!(runner.commands(), vec!["echo hello".to_string()]);

        // Test failure mode
        runner.set_exit_code(Some(1));
        assert!(runner.run("false").await.is_err());
        assert_eq!(runner.commands().len(), 2);
    }
}
