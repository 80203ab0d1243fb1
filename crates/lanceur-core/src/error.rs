//! Error types for the Lanceur core.

/// Errors that can occur while driving the widget.
#[derive(Debug, thiserror::Error)]
pub enum LanceurError {
    /// A panel name does not match any panel declared in the markup.
    #[error("unknown panel: {0}")]
    UnknownPanel(String),

    /// A skill value outside 0..=100 was given to a skill test.
    #[error("skill must be between 0 and 100, got {0}")]
    InvalidSkill(i32),

    /// A weapon class name could not be parsed.
    #[error("unknown weapon class: {0}")]
    UnknownWeapon(String),

    /// The static markup violates its contract.
    #[error("invalid markup: {0}")]
    Markup(String),
}

/// Convenience result type for core operations.
pub type LanceurResult<T> = Result<T, LanceurError>;
