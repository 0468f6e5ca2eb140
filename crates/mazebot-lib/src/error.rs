use thiserror::Error;

use crate::maze::Point;

/// Convenient result alias for the mazebot library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// The frontier emptied before the exit was reached. An expected
    /// outcome for sealed mazes, not a fault.
    #[error("no path found from {start} to {exit}")]
    NoPathFound { start: Point, exit: Point },

    /// The maze's declared dimensions do not match its cell array.
    #[error("maze dimensions {width}x{height} do not match the cell array")]
    DimensionMismatch { width: i32, height: i32 },

    /// The start position lies outside the maze bounds.
    #[error("start {0} lies outside the maze bounds")]
    StartOutOfBounds(Point),

    /// The exit position lies outside the maze bounds.
    #[error("exit {0} lies outside the maze bounds")]
    ExitOutOfBounds(Point),

    /// Reconstruction found two chain-adjacent points that are not one
    /// cardinal step apart. Indicates a corrupted predecessor chain.
    #[error("corrupt path chain: {from} -> {to} is not a unit step")]
    CorruptPathChain { from: Point, to: Point },

    /// The maze service returned a payload we could not turn into a maze.
    #[error("malformed maze response: {reason}")]
    MalformedResponse { reason: String },

    /// Wrapper for HTTP client errors.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
