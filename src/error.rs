use thiserror::Error;

/// Errors surfaced at the boundary between the engine and its front end.
///
/// Stepping never fails; these only come from user-directed edits,
/// persisted data and settings.
#[derive(Debug, Error)]
pub enum Error {
    #[error("cell ({row}, {col}) is outside a {size}x{size} grid")]
    OutOfBounds { row: usize, col: usize, size: usize },

    #[error("corrupt state: {0}")]
    CorruptState(String),

    #[error("unknown pattern: {0}")]
    UnknownPattern(String),

    #[error("invalid settings: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
