//! Error types for kcmrun
//!
//! Provides standardized error handling across the crate.

use thiserror::Error;

/// Errors that can occur in kcmrun
#[derive(Debug, Error)]
pub enum KcmError {
    /// Desktop notification errors
    #[error("Notification error: {0}")]
    Notify(String),

    /// Launch errors (failed to spawn or wait on the module process)
    #[error("Launch error: {0}")]
    Launch(String),

    /// The module process ran but exited with a non-zero status
    #[error("`{command}` exited with status {code}")]
    LaunchExit { command: String, code: i32 },

    /// The module process did not finish before the deadline
    #[error("`{command}` timed out after {timeout_secs}s")]
    LaunchTimeout { command: String, timeout_secs: u64 },
}

/// Result type alias for kcmrun operations
pub type KcmResult<T> = Result<T, KcmError>;
