//! Errors surfaced by the terminal front end.

use std::io;

use lanceur_core::LanceurError;

/// Errors that stop the terminal UI.
#[derive(Debug, thiserror::Error)]
pub enum TuiError {
    /// Terminal or file I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The widget could not be built.
    #[error(transparent)]
    Core(#[from] LanceurError),

    /// The log subscriber could not be installed.
    #[error("logging error: {0}")]
    Logging(String),
}

/// Convenience result type for the terminal front end.
pub type TuiResult<T> = Result<T, TuiError>;
