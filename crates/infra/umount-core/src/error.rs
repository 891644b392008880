use thiserror::Error;

#[derive(Error, Debug)]
pub enum UmountError {
    #[error("Missing device")]
    MissingDevice,

    #[error("Failed to spawn `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Command failed: {command} (exit code: {}){}", fmt_code(.code.as_ref()), fmt_stderr(.stderr))]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stdout: String,
        stderr: String,
    },

    #[error("{stderr}")]
    UnexpectedStderr { stderr: String },

    #[error("Invalid configuration: {message}")]
    ConfigInvalid { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl UmountError {
    /// True for argument errors raised before any process is spawned.
    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::MissingDevice)
    }
}

fn fmt_code(code: Option<&i32>) -> String {
    code.map_or_else(|| "signal".to_string(), |c| c.to_string())
}

fn fmt_stderr(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(": {trimmed}")
    }
}

pub type Result<T> = std::result::Result<T, UmountError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precondition_classification() {
        assert!(UmountError::MissingDevice.is_precondition());
        assert!(
            !UmountError::UnexpectedStderr {
                stderr: "oops".into()
            }
            .is_precondition()
        );
    }

    #[test]
    fn test_command_failed_message() {
        let err = UmountError::CommandFailed {
            command: "umount \"/dev/sdb\"".into(),
            code: Some(32),
            stdout: String::new(),
            stderr: "umount: /dev/sdb: not mounted.\n".into(),
        };
        assert_eq!(
            err.to_string(),
            "Command failed: umount \"/dev/sdb\" (exit code: 32): umount: /dev/sdb: not mounted."
        );

        let killed = UmountError::CommandFailed {
            command: "mount".into(),
            code: None,
            stdout: String::new(),
            stderr: String::new(),
        };
        assert_eq!(killed.to_string(), "Command failed: mount (exit code: signal)");
    }

    #[test]
    fn test_unexpected_stderr_message_is_stderr() {
        let err = UmountError::UnexpectedStderr {
            stderr: "mount: warning".into(),
        };
        assert_eq!(err.to_string(), "mount: warning");
    }
}
