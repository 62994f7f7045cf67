use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Everything a renderer needs for one frame, detached from the engine.
///
/// The solution is only filled in once the round has ended.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub config: GameConfig,
    pub state: RoundState,
    pub active_row: Coord,
    pub selected: CellCount,
    pub board: Vec<Vec<Option<Color>>>,
    pub palette: Vec<Color>,
    pub feedback: Vec<Feedback>,
    pub solution: Option<Vec<Color>>,
}

impl Snapshot {
    pub fn from_engine<G: RoundGenerator>(engine: &GameEngine<G>) -> Self {
        let board = engine.board();
        let board = (0..board.rows())
            .map(|row| {
                board
                    .row_values(row)
                    .unwrap_or_default()
                    .into_iter()
                    .map(Peg::color)
                    .collect()
            })
            .collect();

        Self {
            config: *engine.config(),
            state: engine.state(),
            active_row: engine.active_row(),
            selected: engine.cursor().index(),
            board,
            palette: engine.palette().colors().to_vec(),
            feedback: engine.feedback().to_vec(),
            solution: engine.solution().map(<[Color]>::to_vec),
        }
    }

    pub fn cell(&self, (row, col): Coord2) -> Option<Color> {
        self.board
            .get(usize::from(row))
            .and_then(|cells| cells.get(usize::from(col)))
            .copied()
            .flatten()
    }
}
