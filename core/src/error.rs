use thiserror::Error;

use crate::{CellCount, Color, Coord};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Cell ({row}, {col}) is out of range")]
    OutOfRange { row: Coord, col: Coord },
    #[error("Cell index {0} is out of range")]
    IndexOutOfRange(CellCount),
    #[error("Expected {expected} values, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("Palette needs {expected} colors, got {actual}")]
    PaletteSize { expected: CellCount, actual: usize },
    #[error("Palette contains {0} more than once")]
    DuplicateColor(Color),
    #[error("Solution must use palette colors and match the board width")]
    InvalidSolution,
}

pub type Result<T> = core::result::Result<T, GameError>;
