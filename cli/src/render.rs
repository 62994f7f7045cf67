use std::io::{self, Write};

use hueguess_core::{Color, RoundState, Snapshot};

const EMPTY: &str = "·······";

/// Draws the snapshot as plain text, board rows top to bottom.
pub fn render<W: Write>(snapshot: &Snapshot, out: &mut W) -> io::Result<()> {
    match snapshot.state {
        RoundState::Menu => {
            writeln!(out, "Guess the colors! Press enter or type `play` to start.")?;
            return Ok(());
        }
        RoundState::Playing => writeln!(out, "Guess the colors!")?,
        RoundState::Won => writeln!(out, "Hooray! You won! Type `r` to restart.")?,
        RoundState::Lost => writeln!(out, "Too bad! You lost! Type `r` to restart.")?,
    }

    if let Some(solution) = &snapshot.solution {
        writeln!(out, "Correct solution was: {}", row_text(solution.iter().copied().map(Some)))?;
    }

    writeln!(out, "  pos color")?;
    for (row, cells) in snapshot.board.iter().enumerate() {
        let marker = if snapshot.state == RoundState::Playing
            && row == usize::from(snapshot.active_row)
        {
            '>'
        } else {
            ' '
        };
        let feedback = snapshot.feedback.get(row).copied().unwrap_or_default();
        writeln!(
            out,
            "{} {:>3} {:>5}  {}",
            marker,
            feedback.exact,
            feedback.color_only,
            row_text(cells.iter().copied())
        )?;
    }

    let palette_cols = usize::from(snapshot.config.palette.1);
    writeln!(out, "palette:")?;
    for (index, chunk) in snapshot.palette.chunks(palette_cols).enumerate() {
        let line: Vec<String> = chunk
            .iter()
            .enumerate()
            .map(|(col, color)| {
                if index * palette_cols + col == usize::from(snapshot.selected) {
                    format!("[{color}]")
                } else {
                    format!(" {color} ")
                }
            })
            .collect();
        writeln!(out, "  {}", line.join(""))?;
    }
    Ok(())
}

fn row_text(cells: impl Iterator<Item = Option<Color>>) -> String {
    cells
        .map(|cell| cell.map_or_else(|| EMPTY.to_string(), |color| color.to_string()))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use hueguess_core::*;

    fn engine(start_in_menu: bool) -> GameEngine<FixedRoundGenerator> {
        let colors = (1..=6).map(|n| Color::rgb(n * 16, 0, 0)).collect();
        let config = GameConfig::new((2, 2), (2, 3)).with_menu(start_in_menu);
        GameEngine::new(config, FixedRoundGenerator::new(colors, vec![1, 2])).unwrap()
    }

    fn text(engine: &GameEngine<FixedRoundGenerator>) -> String {
        let mut out = Vec::new();
        render(&Snapshot::from_engine(engine), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn menu_only_shows_prompt() {
        let text = text(&engine(true));

        assert!(text.contains("type `play`"));
        assert!(!text.contains("palette"));
    }

    #[test]
    fn board_marks_active_row_and_selection() {
        let mut engine = engine(false);
        engine.place_color(1).unwrap();
        engine.move_selection(Direction::Right);

        let text = text(&engine);

        assert!(text.contains(">   0     0  ······· #100000"));
        assert!(text.contains("[#200000]"));
        assert!(!text.contains("Correct solution"));
    }

    #[test]
    fn finished_round_reveals_solution() {
        let mut engine = engine(false);
        engine.select_palette((0, 1));
        engine.place_color(0).unwrap();
        engine.select_palette((0, 2));
        engine.place_color(1).unwrap();

        let text = text(&engine);

        assert!(text.contains("You won!"));
        assert!(text.contains("Correct solution was: #200000 #300000"));
        assert!(text.contains("    2     0  #200000 #300000"));
    }
}
