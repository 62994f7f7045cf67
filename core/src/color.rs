use core::fmt;
use serde::{Deserialize, Serialize};

/// Structural RGB color value.
///
/// Two colors are the same color exactly when all three channels are equal, so a
/// color created once per round can be compared against board cells forever after.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn from_u32(packed: u32) -> Self {
        Self::rgb((packed >> 16) as u8, (packed >> 8) as u8, packed as u8)
    }

    pub const fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

/// Formats as `#rrggbb`, the notation renderers expect.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Content of a single board or palette cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Peg {
    Empty,
    Filled(Color),
}

impl Peg {
    pub const fn color(self) -> Option<Color> {
        match self {
            Self::Empty => None,
            Self::Filled(color) => Some(color),
        }
    }
}

impl Default for Peg {
    fn default() -> Self {
        Self::Empty
    }
}

impl From<Color> for Peg {
    fn from(color: Color) -> Self {
        Self::Filled(color)
    }
}
