#![no_std]

extern crate alloc;

use core::ops::BitOr;
use serde::{Deserialize, Serialize};

pub use color::*;
pub use cursor::*;
pub use engine::*;
pub use error::*;
pub use feedback::*;
pub use generator::*;
pub use grid::*;
pub use input::*;
pub use layout::*;
pub use palette::*;
pub use snapshot::*;
pub use types::*;

mod color;
mod cursor;
mod engine;
mod error;
mod feedback;
mod generator;
mod grid;
mod input;
mod layout;
mod palette;
mod snapshot;
mod types;

/// Widest board still addressable with the digit keys `1..=9`.
pub const MAX_BOARD_COLS: Coord = 9;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board `(rows, cols)`, rows are turns and cols are the solution length.
    pub board: Coord2,
    /// Palette `(rows, cols)`.
    pub palette: Coord2,
    pub cell_size: Pixel,
    pub board_origin: Point,
    /// Whether a new engine waits in the menu before the first round.
    pub start_in_menu: bool,
}

impl GameConfig {
    pub const fn new_unchecked(board: Coord2, palette: Coord2) -> Self {
        Self {
            board,
            palette,
            cell_size: 50.0,
            board_origin: (300.0, 170.0),
            start_in_menu: true,
        }
    }

    pub fn new(board: Coord2, palette: Coord2) -> Self {
        Self::new_unchecked(board, palette).normalized()
    }

    /// Clamps every dimension into its usable range.
    pub fn normalized(self) -> Self {
        let (rows, cols) = self.board;
        let (palette_rows, palette_cols) = self.palette;
        let cell_size = if self.cell_size.is_finite() && self.cell_size > 0.0 {
            self.cell_size
        } else {
            Self::default().cell_size
        };
        Self {
            board: (rows.max(1), cols.clamp(1, MAX_BOARD_COLS)),
            palette: (palette_rows.max(1), palette_cols.max(1)),
            cell_size,
            ..self
        }
    }

    pub const fn with_menu(self, start_in_menu: bool) -> Self {
        Self {
            start_in_menu,
            ..self
        }
    }

    pub const fn with_geometry(self, cell_size: Pixel, board_origin: Point) -> Self {
        Self {
            cell_size,
            board_origin,
            ..self
        }
    }

    pub const fn rows(&self) -> Coord {
        self.board.0
    }

    pub const fn cols(&self) -> Coord {
        self.board.1
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked((8, 4), (2, 3))
    }
}

/// What a command did to the engine.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    NoChange,
    /// Cell or cursor changed without scoring anything.
    Updated,
    RoundStarted,
    /// Row completed, round continues on the next row.
    Scored(Feedback),
    Won(Feedback),
    Lost(Feedback),
}

impl Outcome {
    /// Whether this outcome could have changed anything a renderer shows
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }

    pub const fn feedback(self) -> Option<Feedback> {
        match self {
            Self::Scored(feedback) | Self::Won(feedback) | Self::Lost(feedback) => Some(feedback),
            _ => None,
        }
    }

    pub const fn ends_round(self) -> bool {
        matches!(self, Self::Won(_) | Self::Lost(_))
    }
}

/// Merges outcomes when one input triggers several commands
impl BitOr for Outcome {
    type Output = Outcome;

    fn bitor(self, rhs: Self) -> Self::Output {
        use Outcome::*;
        match (self, rhs) {
            // round end has priority
            (end @ (Won(_) | Lost(_)), _) => end,
            (_, end @ (Won(_) | Lost(_))) => end,
            (scored @ Scored(_), _) => scored,
            (_, scored @ Scored(_)) => scored,
            (RoundStarted, _) | (_, RoundStarted) => RoundStarted,
            (Updated, _) | (_, Updated) => Updated,
            (NoChange, NoChange) => NoChange,
        }
    }
}
