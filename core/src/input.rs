use serde::{Deserialize, Serialize};

use crate::*;

/// Discrete command delivered by an input layer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Play,
    Restart,
    PlaceColor(Coord),
    MoveSelection(Direction),
    SelectPalette(Coord2),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Digit(u8),
    Up,
    Down,
    Left,
    Right,
    Enter,
    Space,
    Char(char),
}

impl Key {
    pub fn from_char(c: char) -> Self {
        match c {
            '0'..='9' => Self::Digit(c as u8 - b'0'),
            ' ' => Self::Space,
            '\n' | '\r' => Self::Enter,
            _ => Self::Char(c),
        }
    }
}

/// What the pointer is over, for highlighting.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Hover {
    Nothing,
    Board(Coord2),
    /// Board cell in the active row, clicking it places a color.
    ActiveRow(Coord),
    Palette(Coord2),
    PlayButton,
}

impl<G: RoundGenerator> GameEngine<G> {
    /// Command bound to `key`, if any.
    ///
    /// Digits `1..=cols` place into the matching column, arrows move the selection,
    /// `r` restarts and enter or space leave the menu.
    pub fn command_for_key(&self, key: Key) -> Option<Command> {
        use Key::*;
        match key {
            Digit(digit @ 1..) if digit <= self.config().cols() => {
                Some(Command::PlaceColor(digit - 1))
            }
            Up => Some(Command::MoveSelection(Direction::Up)),
            Down => Some(Command::MoveSelection(Direction::Down)),
            Left => Some(Command::MoveSelection(Direction::Left)),
            Right => Some(Command::MoveSelection(Direction::Right)),
            Enter | Space => Some(Command::Play),
            Char('r' | 'R') => Some(Command::Restart),
            _ => None,
        }
    }

    pub fn key_pressed(&mut self, key: Key) -> Result<Outcome> {
        match self.command_for_key(key) {
            Some(command) => self.apply(command),
            None => Ok(Outcome::NoChange),
        }
    }

    /// Hit test for the pointer position, never changes the engine.
    pub fn pointer_moved(&self, point: Point) -> Hover {
        if self.state() == RoundState::Menu {
            return if self.layout().play_button.contains(point) {
                Hover::PlayButton
            } else {
                Hover::Nothing
            };
        }

        if let Some((row, col)) = self.board().cell_at(point) {
            if self.state().is_playing() && row == self.active_row() {
                Hover::ActiveRow(col)
            } else {
                Hover::Board((row, col))
            }
        } else if let Some(coords) = self.palette().grid().cell_at(point) {
            Hover::Palette(coords)
        } else {
            Hover::Nothing
        }
    }

    /// Click at `point`.
    ///
    /// In the menu only the play button reacts. While playing, a click on the
    /// active row places the selected color and a click on the palette selects a
    /// color. Once the round is over any click starts the next one.
    pub fn pointer_clicked(&mut self, point: Point) -> Result<Outcome> {
        match self.state() {
            RoundState::Menu => match self.pointer_moved(point) {
                Hover::PlayButton => self.play(),
                _ => Ok(Outcome::NoChange),
            },
            RoundState::Won | RoundState::Lost => self.restart(),
            RoundState::Playing => match self.pointer_moved(point) {
                Hover::ActiveRow(col) => self.place_color(col),
                Hover::Palette(coords) => Ok(self.select_palette(coords)),
                _ => Ok(Outcome::NoChange),
            },
        }
    }
}
