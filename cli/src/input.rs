use anyhow::{Context, bail};
use hueguess_core::{Coord, Coord2, Key, Pixel, Point};

/// One line typed by the player.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Line {
    Key(Key),
    Click(Point),
    Hover(Point),
    Pick(Coord2),
    Show,
    Json,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  1..9              place the selected color into that column
  up/down/left/right move the palette selection
  pick ROW COL      select a palette cell directly
  click X Y         click at a pixel position
  hover X Y         show what is under a pixel position
  play, enter       start a round from the menu
  r, restart        start a new round
  show, json        print the game, as text or as JSON
  help, quit";

impl Line {
    pub fn parse(line: &str) -> anyhow::Result<Self> {
        let mut words = line.split_whitespace();
        let Some(word) = words.next() else {
            return Ok(Self::Key(Key::Enter));
        };

        let parsed = match word.to_ascii_lowercase().as_str() {
            "up" | "k" => Self::Key(Key::Up),
            "down" | "j" => Self::Key(Key::Down),
            "left" | "h" => Self::Key(Key::Left),
            "right" | "l" => Self::Key(Key::Right),
            "play" | "enter" => Self::Key(Key::Enter),
            "restart" => Self::Key(Key::Char('r')),
            "click" => Self::Click(point(&mut words)?),
            "hover" => Self::Hover(point(&mut words)?),
            "pick" => Self::Pick((coord(&mut words)?, coord(&mut words)?)),
            "show" => Self::Show,
            "json" => Self::Json,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            _ => {
                let mut chars = word.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::Key(Key::from_char(c)),
                    _ => bail!("Unknown command `{word}`, type `help`"),
                }
            }
        };

        if let Some(extra) = words.next() {
            bail!("Unexpected `{extra}` after `{word}`");
        }
        Ok(parsed)
    }
}

fn point<'a>(words: &mut impl Iterator<Item = &'a str>) -> anyhow::Result<Point> {
    Ok((pixel(words)?, pixel(words)?))
}

fn pixel<'a>(words: &mut impl Iterator<Item = &'a str>) -> anyhow::Result<Pixel> {
    let word = words.next().context("Missing pixel coordinate")?;
    word.parse()
        .with_context(|| format!("`{word}` is not a pixel coordinate"))
}

fn coord<'a>(words: &mut impl Iterator<Item = &'a str>) -> anyhow::Result<Coord> {
    let word = words.next().context("Missing row or column")?;
    word.parse()
        .with_context(|| format!("`{word}` is not a row or column"))
}
