use serde::{Deserialize, Serialize};

use crate::*;

/// Pixel placement of everything the engine hit-tests, derived from the config.
///
/// The palette sits two cells to the right of the board, bottom-aligned with it.
/// The solution row is revealed two cells above the board, and the menu's play
/// button covers the board's top row.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub cell_size: Pixel,
    pub board_origin: Point,
    pub palette_origin: Point,
    pub solution_origin: Point,
    pub play_button: Rect,
}

impl Layout {
    pub fn from_config(config: &GameConfig) -> Self {
        let cell = config.cell_size;
        let (board_x, board_y) = config.board_origin;
        let board_width = Pixel::from(config.cols()) * cell;
        let board_height = Pixel::from(config.rows()) * cell;
        let palette_height = Pixel::from(config.palette.0) * cell;

        Self {
            cell_size: cell,
            board_origin: config.board_origin,
            palette_origin: (
                board_x + board_width + 2.0 * cell,
                board_y + board_height - palette_height,
            ),
            solution_origin: (board_x, board_y - 2.0 * cell),
            play_button: Rect::new(config.board_origin, (board_width, cell)),
        }
    }

    pub fn board_grid<T: Copy + Default + PartialEq>(&self, config: &GameConfig) -> Grid<T> {
        Grid::new(config.board, self.cell_size, self.board_origin)
    }

    pub fn palette_grid<T: Copy + Default + PartialEq>(&self, config: &GameConfig) -> Grid<T> {
        Grid::new(config.palette, self.cell_size, self.palette_origin)
    }

    pub fn solution_grid<T: Copy + Default + PartialEq>(&self, config: &GameConfig) -> Grid<T> {
        Grid::new((1, config.cols()), self.cell_size, self.solution_origin)
    }
}
