use thiserror::Error;

pub type Result<T> = std::result::Result<T, GenerationError>;

// Every failure is a precondition violation caught before the grid is touched
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("detail level must be at least 1, got {detail_level}")]
    InvalidDetailLevel { detail_level: u32 },

    #[error("detail level {detail_level} gives a grid too large to address")]
    GridTooLarge { detail_level: u32 },

    #[error("grid side length must be at least 1, got {side_length}")]
    InvalidSideLength { side_length: usize },

    #[error("corner bounds must satisfy min < max, got [{min}, {max})")]
    InvalidBounds { min: i64, max: i64 },
}
