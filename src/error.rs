//! Error type shared by the grid builder, navigation and CLI layers.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CalError {
    /// Month index outside 0-11.
    #[error("invalid month index: {0} (must be 0-11)")]
    InvalidMonth(u32),

    /// Year whose neighbouring month cannot be represented.
    #[error("year out of range: {0}")]
    YearOutOfRange(i32),

    /// Command-line input that could not be interpreted.
    #[error("{0}")]
    InvalidArgument(String),

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CalError>;
