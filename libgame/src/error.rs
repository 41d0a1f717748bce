use thiserror::Error;

use crate::pos::Position;

/// The requested initial configuration can't be laid out on the board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// Width or height is zero.
    #[error("board dimensions must be positive, got {width}x{height}")]
    EmptyBoard { width: usize, height: usize },

    /// The cell count of the board doesn't fit in memory addressing.
    #[error("board dimensions {width}x{height} are too large")]
    TooLarge { width: usize, height: usize },

    /// A live cell lies outside the board.
    #[error("position {position} is outside the {width}x{height} board")]
    OutOfBounds {
        position: Position,
        width: usize,
        height: usize,
    },

    /// More live cells were requested than the board has cells.
    #[error("requested {requested} alive cells but the board only holds {capacity}")]
    OverCapacity { requested: usize, capacity: usize },
}
