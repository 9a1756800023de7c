//! Error types for the calgrid ecosystem.

use thiserror::Error;

/// Errors that can occur in calgrid operations.
///
/// Store operations never return these: update/delete on an unknown id is a
/// silent no-op, and keys are matched exactly without validation. Errors
/// only arise at the date-key parsing boundary.
#[derive(Error, Debug)]
pub enum CalGridError {
    #[error("Invalid date key '{0}'. Expected YYYY-MM-DD")]
    InvalidDateKey(String),
}

/// Result type alias for calgrid operations.
pub type CalGridResult<T> = Result<T, CalGridError>;
