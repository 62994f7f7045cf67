use alloc::vec;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Menu -> Playing
/// - Playing -> Won
/// - Playing -> Lost
/// - any -> Playing, on restart
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundState {
    Menu,
    Playing,
    Won,
    Lost,
}

impl RoundState {
    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    /// Indicates the round has ended and only a restart is accepted
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for RoundState {
    fn default() -> Self {
        Self::Menu
    }
}

/// Turn-based guessing game, from the menu through any number of rounds.
///
/// Guesses are entered bottom-up: the active row starts at the last board row and
/// moves up by one after every scored row that did not win.
#[derive(Clone, Debug)]
pub struct GameEngine<G = RandomRoundGenerator> {
    config: GameConfig,
    layout: Layout,
    generator: G,
    board: Grid<Peg>,
    palette: ColorPalette,
    secret: Vec<Color>,
    solution_grid: Grid<Peg>,
    feedback: Vec<Feedback>,
    active_row: Coord,
    cursor: SelectionCursor,
    state: RoundState,
    rounds_started: u32,
}

impl<G: RoundGenerator> GameEngine<G> {
    /// Creates the engine with its first round generated.
    ///
    /// The engine waits in [`RoundState::Menu`] when the config asks for a menu,
    /// otherwise the first round is already being played.
    pub fn new(config: GameConfig, mut generator: G) -> Result<Self> {
        let config = config.normalized();
        let layout = Layout::from_config(&config);
        let (palette, secret) = Self::generate_round(&mut generator, &config, &layout)?;

        let mut solution_grid: Grid<Peg> = layout.solution_grid(&config);
        solution_grid.fill_from(&pegs(&secret))?;

        let (state, rounds_started) = if config.start_in_menu {
            (RoundState::Menu, 0)
        } else {
            (RoundState::Playing, 1)
        };

        Ok(Self {
            config,
            layout,
            generator,
            board: layout.board_grid(&config),
            palette,
            secret,
            solution_grid,
            feedback: vec![Feedback::default(); usize::from(config.rows())],
            active_row: config.rows() - 1,
            cursor: SelectionCursor::new(config.palette),
            state,
            rounds_started,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn board(&self) -> &Grid<Peg> {
        &self.board
    }

    pub fn palette(&self) -> &ColorPalette {
        &self.palette
    }

    pub fn active_row(&self) -> Coord {
        self.active_row
    }

    pub fn cursor(&self) -> SelectionCursor {
        self.cursor
    }

    pub fn selected_color(&self) -> Option<Color> {
        self.palette.color(self.cursor.index())
    }

    pub fn feedback(&self) -> &[Feedback] {
        &self.feedback
    }

    pub fn feedback_at(&self, row: Coord) -> Option<Feedback> {
        self.feedback.get(usize::from(row)).copied()
    }

    /// The hidden colors, only observable once the round has ended.
    pub fn solution(&self) -> Option<&[Color]> {
        self.state.is_finished().then_some(self.secret.as_slice())
    }

    /// Reveal row laid out above the board, only observable once the round has ended.
    pub fn solution_grid(&self) -> Option<&Grid<Peg>> {
        self.state.is_finished().then_some(&self.solution_grid)
    }

    pub fn rounds_started(&self) -> u32 {
        self.rounds_started
    }

    /// Rows scored in the current round.
    pub fn attempts(&self) -> Coord {
        let rows = self.config.rows();
        match self.state {
            RoundState::Menu => 0,
            RoundState::Playing => rows - 1 - self.active_row,
            RoundState::Won | RoundState::Lost => rows - self.active_row,
        }
    }

    /// Rows still available for guesses, the active one included.
    pub fn rows_remaining(&self) -> Coord {
        if self.state.is_playing() {
            self.active_row + 1
        } else {
            0
        }
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    pub fn generator_mut(&mut self) -> &mut G {
        &mut self.generator
    }

    /// Leaves the menu and starts the first round, ignored outside the menu.
    pub fn play(&mut self) -> Result<Outcome> {
        if !matches!(self.state, RoundState::Menu) {
            return Ok(Outcome::NoChange);
        }
        self.start_round()?;
        Ok(Outcome::RoundStarted)
    }

    /// Abandons whatever is going on and starts a fresh round.
    pub fn restart(&mut self) -> Result<Outcome> {
        self.start_round()?;
        Ok(Outcome::RoundStarted)
    }

    /// Puts the selected palette color into column `col` of the active row.
    ///
    /// Completing the row scores it right away. Columns outside the board and
    /// rounds that are not being played are ignored.
    pub fn place_color(&mut self, col: Coord) -> Result<Outcome> {
        if !self.state.is_playing() || col >= self.config.cols() {
            return Ok(Outcome::NoChange);
        }
        let Some(color) = self.selected_color() else {
            return Ok(Outcome::NoChange);
        };

        let coords = (self.active_row, col);
        let peg = Peg::Filled(color);
        if self.board.get(coords)? == peg {
            return Ok(Outcome::NoChange);
        }
        self.board.set(coords, peg)?;
        log::trace!("placed {} at {:?}", color, coords);

        if self.board.row_is_full(self.active_row)? {
            self.complete_row()
        } else {
            Ok(Outcome::Updated)
        }
    }

    pub fn move_selection(&mut self, direction: Direction) -> Outcome {
        if !self.state.is_playing() {
            return Outcome::NoChange;
        }
        if self.cursor.step(direction) {
            log::trace!("selection moved {:?} to {}", direction, self.cursor.index());
            Outcome::Updated
        } else {
            Outcome::NoChange
        }
    }

    pub fn select_palette(&mut self, coords: Coord2) -> Outcome {
        if !self.state.is_playing() {
            return Outcome::NoChange;
        }
        let before = self.cursor.index();
        if self.cursor.select_at(coords) && self.cursor.index() != before {
            log::trace!("selected palette cell {:?}", coords);
            Outcome::Updated
        } else {
            Outcome::NoChange
        }
    }

    pub fn apply(&mut self, command: Command) -> Result<Outcome> {
        use Command::*;
        match command {
            Play => self.play(),
            Restart => self.restart(),
            PlaceColor(col) => self.place_color(col),
            MoveSelection(direction) => Ok(self.move_selection(direction)),
            SelectPalette(coords) => Ok(self.select_palette(coords)),
        }
    }

    /// Scores the full active row and moves on, or ends the round
    fn complete_row(&mut self) -> Result<Outcome> {
        let row = self.active_row;
        let guess: Vec<Color> = self
            .board
            .row_values(row)?
            .into_iter()
            .filter_map(Peg::color)
            .collect();
        let feedback = score(&self.secret, &guess)?;
        self.feedback[usize::from(row)] = feedback;
        log::debug!(
            "row {} scored {} exact, {} color",
            row,
            feedback.exact,
            feedback.color_only
        );

        Ok(if feedback.is_solved(self.config.cols()) {
            self.state = RoundState::Won;
            log::debug!("round {} won on row {}", self.rounds_started, row);
            Outcome::Won(feedback)
        } else if row == 0 {
            self.state = RoundState::Lost;
            log::debug!("round {} lost", self.rounds_started);
            Outcome::Lost(feedback)
        } else {
            self.active_row -= 1;
            Outcome::Scored(feedback)
        })
    }

    /// Generates new colors and resets every piece of round state.
    ///
    /// Nothing changes when the generator fails.
    fn start_round(&mut self) -> Result<()> {
        let (palette, secret) =
            Self::generate_round(&mut self.generator, &self.config, &self.layout)?;
        self.solution_grid.fill_from(&pegs(&secret))?;
        self.palette = palette;
        self.secret = secret;

        self.board.clear();
        self.feedback.fill(Feedback::default());
        self.active_row = self.config.rows() - 1;
        self.cursor.reset();
        self.state = RoundState::Playing;
        self.rounds_started += 1;
        log::debug!(
            "round {} started, {} rows of {} from {} colors",
            self.rounds_started,
            self.config.rows(),
            self.config.cols(),
            self.palette.len()
        );
        Ok(())
    }

    fn generate_round(
        generator: &mut G,
        config: &GameConfig,
        layout: &Layout,
    ) -> Result<(ColorPalette, Vec<Color>)> {
        let colors = generator.palette(config.palette)?;
        let palette = ColorPalette::new(colors, layout.palette_grid(config))?;
        let secret = generator.solution(&palette, config.cols())?;

        if secret.len() != usize::from(config.cols())
            || !secret.iter().all(|&color| palette.contains(color))
        {
            return Err(GameError::InvalidSolution);
        }
        Ok((palette, secret))
    }
}

fn pegs(colors: &[Color]) -> Vec<Peg> {
    colors.iter().copied().map(Peg::from).collect()
}
