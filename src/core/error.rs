//! Error types for the logging facility

pub type Result<T> = std::result::Result<T, LogError>;

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// IO error with context
    #[error("IO error while {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// Formatting-engine failure, caught inside the emit path
    #[error("formatting failed: {0}")]
    Format(String),

    /// Second initialization of the process-wide logger
    #[error("global logger already initialized")]
    AlreadyInitialized,

    /// Unrecognized severity level name
    #[error("invalid severity level: '{0}'")]
    InvalidLevel(String),
}

impl LogError {
    /// Create an IO error with context
    pub fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        LogError::Io {
            operation: operation.into(),
            source,
        }
    }

    /// Create a formatting error
    pub fn format(message: impl Into<String>) -> Self {
        LogError::Format(message.into())
    }
}
