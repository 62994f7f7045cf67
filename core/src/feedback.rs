use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::*;

/// Score of a single guess row.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Feedback {
    /// Right color in the right position.
    pub exact: Coord,
    /// Right color in the wrong position, each solution slot used at most once.
    pub color_only: Coord,
}

impl Feedback {
    pub const fn new(exact: Coord, color_only: Coord) -> Self {
        Self { exact, color_only }
    }

    pub const fn is_solved(self, width: Coord) -> bool {
        self.exact == width
    }
}

/// Scores `guess` against `solution`.
///
/// Exact matches are counted and set aside first, the leftovers are then matched as
/// multisets so repeated colors are never counted more often than the solution holds
/// them. The result does not depend on which argument is the solution.
pub fn score<C>(solution: &[C], guess: &[C]) -> Result<Feedback>
where
    C: Copy + Eq + core::hash::Hash,
{
    if solution.len() != guess.len() {
        return Err(GameError::LengthMismatch {
            expected: solution.len(),
            actual: guess.len(),
        });
    }

    let mut exact: usize = 0;
    let mut unmatched: HashMap<C, usize> = HashMap::new();
    for (&wanted, &given) in solution.iter().zip(guess) {
        if wanted == given {
            exact += 1;
        } else {
            *unmatched.entry(wanted).or_default() += 1;
        }
    }

    let mut color_only: usize = 0;
    for (&wanted, &given) in solution.iter().zip(guess) {
        if wanted == given {
            continue;
        }
        if let Some(count) = unmatched.get_mut(&given).filter(|count| **count > 0) {
            *count -= 1;
            color_only += 1;
        }
    }

    Ok(Feedback {
        exact: saturate(exact),
        color_only: saturate(color_only),
    })
}

fn saturate(count: usize) -> Coord {
    count.try_into().unwrap_or(Coord::MAX)
}
