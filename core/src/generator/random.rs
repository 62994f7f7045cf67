use alloc::vec::Vec;
use hashbrown::HashSet;
use rand::prelude::*;
use rand::rngs::SmallRng;

use super::*;

/// Largest value of a packed `0xRRGGBB` color.
const COLOR_SPACE: u32 = 0xff_ffff;

/// Purely random rounds: uniform RGB palette colors and a uniformly drawn solution.
#[derive(Clone, Debug)]
pub struct RandomRoundGenerator {
    seed: u64,
    rng: SmallRng,
}

impl RandomRoundGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RoundGenerator for RandomRoundGenerator {
    fn palette(&mut self, layout: Coord2) -> Result<Vec<Color>> {
        let size = usize::from(mult(layout.0, layout.1));
        let mut seen = HashSet::with_capacity(size);
        let mut colors = Vec::with_capacity(size);
        let mut redraws = 0usize;

        while colors.len() < size {
            let color = Color::from_u32(self.rng.random_range(0..=COLOR_SPACE));
            if seen.insert(color) {
                colors.push(color);
            } else {
                redraws += 1;
            }
        }

        if redraws > size {
            log::warn!(
                "Palette needed {} redraws for {} distinct colors",
                redraws,
                size
            );
        }
        Ok(colors)
    }

    fn solution(&mut self, palette: &ColorPalette, width: Coord) -> Result<Vec<Color>> {
        if palette.is_empty() {
            return Err(GameError::InvalidSolution);
        }
        (0..width)
            .map(|_| {
                let index = self.rng.random_range(0..palette.len());
                palette.color(index).ok_or(GameError::InvalidSolution)
            })
            .collect()
    }
}
