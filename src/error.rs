use thiserror::Error;

/// Failures surfaced by the maze model and its solvers.
///
/// All variants are deterministic, input-driven failures returned to the
/// immediate caller; nothing here is retryable. A solver finding no path is
/// not an error (it returns an empty path).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("maze dimensions {width}x{height} are outside the supported range")]
    InvalidDimension { width: u8, height: u8 },

    #[error("cell coordinate ({x}, {y}) is outside the maze")]
    InvalidCoordinate { x: u8, y: u8 },

    #[error("position ({x}, {y}) is out of bounds or on a wall")]
    InvalidPosition { x: u16, y: u16 },

    #[error("unknown algorithm: {0:?}")]
    UnknownAlgorithm(String),
}
