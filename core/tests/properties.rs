//! Property-based invariant tests for scoring, grids, the selection cursor and
//! the round state machine.

use hueguess_core::*;
use proptest::collection::vec;
use proptest::prelude::*;

const COLS: Coord = 4;
const ROWS: Coord = 4;

// ── Helpers ─────────────────────────────────────────────────────────────

/// Few distinct values so that repeats are common.
fn color_strategy() -> impl Strategy<Value = Color> {
    (0u8..6).prop_map(|n| Color::rgb(n * 40, 0, 255 - n * 40))
}

fn guess_pair_strategy() -> impl Strategy<Value = (Vec<Color>, Vec<Color>)> {
    (1usize..10).prop_flat_map(|n| (vec(color_strategy(), n), vec(color_strategy(), n)))
}

fn direction_strategy() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Up),
        Just(Direction::Down),
        Just(Direction::Left),
        Just(Direction::Right),
    ]
}

/// Everything except round starts, those reset the invariants being checked.
fn command_strategy() -> impl Strategy<Value = Command> {
    prop_oneof![
        4 => (0..COLS + 1).prop_map(Command::PlaceColor),
        2 => direction_strategy().prop_map(Command::MoveSelection),
        2 => (0u8..3, 0u8..4).prop_map(Command::SelectPalette),
    ]
}

fn palette_colors() -> Vec<Color> {
    (0..6).map(|n| Color::rgb(n * 40, 0, 255 - n * 40)).collect()
}

fn engine_with(solution: Vec<CellCount>) -> GameEngine<FixedRoundGenerator> {
    let config = GameConfig::new((ROWS, COLS), (2, 3)).with_menu(false);
    GameEngine::new(config, FixedRoundGenerator::new(palette_colors(), solution)).unwrap()
}

// ═════════════════════════════════════════════════════════════════════════
// Scoring
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn score_is_symmetric((a, b) in guess_pair_strategy()) {
        prop_assert_eq!(score(&a, &b).unwrap(), score(&b, &a).unwrap());
    }

    #[test]
    fn score_against_self_is_all_exact(a in vec(color_strategy(), 1..10)) {
        let feedback = score(&a, &a).unwrap();
        prop_assert_eq!(feedback, Feedback::new(a.len() as Coord, 0));
    }

    #[test]
    fn score_is_bounded((a, b) in guess_pair_strategy()) {
        let feedback = score(&a, &b).unwrap();
        let n = a.len();
        prop_assert!(usize::from(feedback.exact) <= n);
        prop_assert!(usize::from(feedback.exact) + usize::from(feedback.color_only) <= n);
    }

    #[test]
    fn exact_plus_color_is_multiset_overlap((a, b) in guess_pair_strategy()) {
        // exact + color_only is the multiset intersection size
        let feedback = score(&a, &b).unwrap();
        let mut remaining = b.clone();
        let mut common = 0usize;
        for color in &a {
            if let Some(pos) = remaining.iter().position(|other| other == color) {
                remaining.swap_remove(pos);
                common += 1;
            }
        }
        prop_assert_eq!(usize::from(feedback.exact) + usize::from(feedback.color_only), common);
    }

    #[test]
    fn score_rejects_unequal_lengths(a in vec(color_strategy(), 1..6), extra in color_strategy()) {
        let mut b = a.clone();
        b.push(extra);
        let is_length_mismatch = matches!(score(&a, &b), Err(GameError::LengthMismatch { .. }));
        prop_assert!(is_length_mismatch);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// Grid addressing
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn linear_index_is_a_bijection(rows in 1u8..20, cols in 1u8..20) {
        let grid: Grid<Peg> = Grid::new((rows, cols), 10.0, (5.0, 5.0));
        for index in 0..grid.len() {
            let coords = grid.coord_of(index).unwrap();
            prop_assert_eq!(grid.linear_index(coords).unwrap(), index);
        }
        prop_assert!(grid.coord_of(grid.len()).is_err());
    }

    #[test]
    fn cell_at_is_total_and_consistent(x in any::<f32>(), y in any::<f32>()) {
        let grid: Grid<Peg> = Grid::new((8, 4), 50.0, (300.0, 170.0));
        if let Some(coords) = grid.cell_at((x, y)) {
            let (left, top) = grid.cell_corner(coords).unwrap();
            prop_assert!(x >= left && x < left + 50.0);
            prop_assert!(y >= top && y < top + 50.0);
        }
    }

    #[test]
    fn out_of_range_lookups_fail(row in 8u8..=255, col in 4u8..=255) {
        let grid: Grid<Peg> = Grid::new((8, 4), 50.0, (0.0, 0.0));
        prop_assert_eq!(grid.cell_corner((row, 0)), Err(GameError::OutOfRange { row, col: 0 }));
        prop_assert_eq!(grid.cell_center((0, col)), Err(GameError::OutOfRange { row: 0, col }));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// Selection cursor
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn cursor_clamps_at_edges(
        rows in 1u8..6,
        cols in 1u8..6,
        moves in vec(direction_strategy(), 0..40),
    ) {
        let mut cursor = SelectionCursor::new((rows, cols));
        let size = i32::from(rows) * i32::from(cols);
        for direction in moves {
            let before = i32::from(cursor.index());
            let delta = match direction {
                Direction::Up => -i32::from(cols),
                Direction::Down => i32::from(cols),
                Direction::Left => -1,
                Direction::Right => 1,
            };
            let expected = if (0..size).contains(&(before + delta)) { before + delta } else { before };

            let moved = cursor.step(direction);

            prop_assert_eq!(i32::from(cursor.index()), expected);
            prop_assert_eq!(moved, expected != before);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// Round state machine
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn commands_respect_round_invariants(
        solution in vec(0u16..6, COLS as usize),
        commands in vec(command_strategy(), 0..120),
    ) {
        let mut engine = engine_with(solution);

        for command in commands {
            let board = engine.board().clone();
            let feedback = engine.feedback().to_vec();
            let row = engine.active_row();
            let state = engine.state();

            let outcome = engine.apply(command).unwrap();

            // only the active row is ever written
            for ((cell_row, col), peg) in engine.board().iter() {
                if cell_row != row {
                    prop_assert_eq!(peg, board.get((cell_row, col)).unwrap());
                }
            }

            // the active row only moves up, one row per scored guess
            prop_assert!(engine.active_row() <= row);
            if engine.active_row() < row {
                prop_assert_eq!(engine.active_row(), row - 1);
                prop_assert!(matches!(outcome, Outcome::Scored(_)));
                prop_assert!(engine.board().row_is_full(row).unwrap());
            }

            // finished rounds stay finished and untouched
            if state.is_finished() {
                prop_assert_eq!(engine.state(), state);
                prop_assert_eq!(outcome, Outcome::NoChange);
                prop_assert_eq!(engine.board(), &board);
                prop_assert_eq!(engine.feedback(), &feedback[..]);
            }

            match engine.state() {
                RoundState::Lost => {
                    prop_assert_eq!(engine.active_row(), 0);
                    prop_assert!(engine.feedback_at(0).unwrap().exact < COLS);
                    prop_assert!(engine.solution().is_some());
                }
                RoundState::Won => {
                    prop_assert_eq!(engine.feedback_at(engine.active_row()).unwrap().exact, COLS);
                    prop_assert!(engine.solution().is_some());
                }
                RoundState::Playing => prop_assert!(engine.solution().is_none()),
                RoundState::Menu => prop_assert!(false, "engine returned to the menu"),
            }

            for record in engine.feedback() {
                prop_assert!(record.exact + record.color_only <= COLS);
            }
        }
    }

    #[test]
    fn restart_resets_everything(
        solution in vec(0u16..6, COLS as usize),
        commands in vec(command_strategy(), 0..80),
    ) {
        let mut engine = engine_with(solution);
        for command in commands {
            engine.apply(command).unwrap();
        }

        prop_assert_eq!(engine.apply(Command::Restart).unwrap(), Outcome::RoundStarted);

        prop_assert!(engine.board().is_cleared());
        prop_assert!(engine.feedback().iter().all(|&record| record == Feedback::default()));
        prop_assert_eq!(engine.active_row(), ROWS - 1);
        prop_assert_eq!(engine.cursor().index(), 0);
        prop_assert_eq!(engine.state(), RoundState::Playing);
        prop_assert!(engine.solution().is_none());
    }
}
