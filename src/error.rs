//! Error handling for the energy monitor crate.

use std::time::Duration;

/// A specialized `Result` type for energy monitor operations.
pub type Result<T> = std::result::Result<T, MonitorError>;

/// The main error type for energy monitor operations.
#[derive(Debug, thiserror::Error)]
pub enum MonitorError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// External command could not be started
    #[error("Failed to spawn `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// External command did not finish in time and was killed
    #[error("`{command}` timed out after {timeout:?}")]
    Timeout { command: String, timeout: Duration },

    /// External command exited unsuccessfully
    #[error("`{command}` exited with status {}", describe_exit(.code))]
    CommandFailed { command: String, code: Option<i32> },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Terminal output error
    #[error("Terminal error: {0}")]
    Terminal(String),
}

fn describe_exit(code: &Option<i32>) -> String {
    code.map_or_else(|| "signal".to_string(), |c| c.to_string())
}

impl MonitorError {
    /// Create a new spawn error
    pub fn spawn_error(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::Spawn {
            command: command.into(),
            source,
        }
    }

    /// Create a new timeout error
    pub fn timeout_error(command: impl Into<String>, timeout: Duration) -> Self {
        Self::Timeout {
            command: command.into(),
            timeout,
        }
    }

    /// Create a new command failure error
    pub fn command_failed(command: impl Into<String>, code: Option<i32>) -> Self {
        Self::CommandFailed {
            command: command.into(),
            code,
        }
    }

    /// Create a new configuration error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new terminal error
    pub fn terminal_error(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }
}
