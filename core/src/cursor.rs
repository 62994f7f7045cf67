use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Selected palette entry, moved in two dimensions over the palette layout.
///
/// Moves that would leave the palette do nothing, the cursor never wraps.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionCursor {
    index: CellCount,
    layout: Coord2,
}

impl SelectionCursor {
    pub const fn new(layout: Coord2) -> Self {
        Self { index: 0, layout }
    }

    pub const fn index(&self) -> CellCount {
        self.index
    }

    pub const fn coords(&self) -> Coord2 {
        let cols = self.layout.1 as CellCount;
        match (self.index.checked_div(cols), self.index.checked_rem(cols)) {
            (Some(row), Some(col)) => (row as Coord, col as Coord),
            // zero-width layout has no cells to point at
            _ => (0, 0),
        }
    }

    const fn size(&self) -> CellCount {
        mult(self.layout.0, self.layout.1)
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }

    pub fn move_up(&mut self) -> bool {
        match self.index.checked_sub(self.layout.1.into()) {
            Some(index) => self.jump_to(index),
            None => false,
        }
    }

    pub fn move_down(&mut self) -> bool {
        self.jump_to(self.index + CellCount::from(self.layout.1))
    }

    pub fn move_left(&mut self) -> bool {
        match self.index.checked_sub(1) {
            Some(index) => self.jump_to(index),
            None => false,
        }
    }

    pub fn move_right(&mut self) -> bool {
        self.jump_to(self.index + 1)
    }

    pub fn step(&mut self, direction: Direction) -> bool {
        use Direction::*;
        match direction {
            Up => self.move_up(),
            Down => self.move_down(),
            Left => self.move_left(),
            Right => self.move_right(),
        }
    }

    /// Selects the palette cell `(row, col)`, ignored when outside the palette.
    pub fn select_at(&mut self, (row, col): Coord2) -> bool {
        if row >= self.layout.0 || col >= self.layout.1 {
            return false;
        }
        self.jump_to(mult(row, self.layout.1) + CellCount::from(col))
    }

    fn jump_to(&mut self, index: CellCount) -> bool {
        if index < self.size() {
            self.index = index;
            true
        } else {
            false
        }
    }
}
