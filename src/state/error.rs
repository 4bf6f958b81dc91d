//! State management-specific error types.

/// Errors that can occur during state operations.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// Field name does not match any job field
    #[error("Unknown job field: {0}")]
    UnknownField(String),

    /// Job listing not found on the board
    #[error("Job not found: {id}")]
    JobNotFound { id: String },

    /// Action requires an authenticated session
    #[error("Not authenticated: {0}")]
    NotAuthenticated(String),

    /// Jobs file could not be read
    #[error("Failed to read jobs file {path}: {source}")]
    JobsFileRead {
        path: std::path::PathBuf,
        source: std::io::Error,
    },

    /// Jobs file could not be parsed
    #[error("Failed to parse jobs file: {0}")]
    JobsFileParse(String),
}
