/// Single coordinate axis used for grid rows, columns and positions.
pub type Coord = u8;

/// Count type used for cell counts and flat cell indices.
pub type CellCount = u16;

/// Two-dimensional grid address `(row, col)`.
pub type Coord2 = (Coord, Coord);

/// Pixel measure used for cell sizes, offsets and pointer positions.
pub type Pixel = f32;

/// Pixel position `(x, y)`.
pub type Point = (Pixel, Pixel);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Axis-aligned pixel rectangle, used for regions that are not grids.
#[derive(Copy, Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Point,
}

impl Rect {
    pub const fn new(origin: Point, size: Point) -> Self {
        Self { origin, size }
    }

    pub fn right_edge(&self) -> Pixel {
        self.origin.0 + self.size.0
    }

    pub fn bottom_edge(&self) -> Pixel {
        self.origin.1 + self.size.1
    }

    /// Half-open containment: the top-left edge is inside, the bottom-right one is not.
    pub fn contains(&self, (x, y): Point) -> bool {
        x >= self.origin.0 && x < self.right_edge() && y >= self.origin.1 && y < self.bottom_edge()
    }
}
