use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Addressable `rows × cols` grid of cells placed at a pixel offset.
///
/// Cells are stored row-major, so the flat index of `(row, col)` is
/// `row * cols + col`. The default value of `T` is the empty sentinel: [`Grid::clear`]
/// resets to it and [`Grid::row_is_full`] looks for it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid<T> {
    size: Coord2,
    cell_size: Pixel,
    origin: Point,
    cells: Array2<T>,
}

impl<T: Copy + Default + PartialEq> Grid<T> {
    pub fn new(size: Coord2, cell_size: Pixel, origin: Point) -> Self {
        Self {
            size,
            cell_size,
            origin,
            cells: Array2::default(size.to_nd_index()),
        }
    }

    pub fn size(&self) -> Coord2 {
        self.size
    }

    pub fn rows(&self) -> Coord {
        self.size.0
    }

    pub fn cols(&self) -> Coord {
        self.size.1
    }

    pub fn len(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let (row, col) = coords;
        if row < self.size.0 && col < self.size.1 {
            Ok(coords)
        } else {
            Err(GameError::OutOfRange { row, col })
        }
    }

    pub fn linear_index(&self, coords: Coord2) -> Result<CellCount> {
        let (row, col) = self.validate_coords(coords)?;
        Ok(mult(row, self.size.1) + CellCount::from(col))
    }

    pub fn coord_of(&self, index: CellCount) -> Result<Coord2> {
        if index >= self.len() {
            return Err(GameError::IndexOutOfRange(index));
        }
        let cols = CellCount::from(self.size.1);
        // both quotient and remainder fit, the index is below rows * cols
        Ok(((index / cols) as Coord, (index % cols) as Coord))
    }

    /// Top-left pixel of a cell.
    pub fn cell_corner(&self, coords: Coord2) -> Result<Point> {
        let (row, col) = self.validate_coords(coords)?;
        Ok((
            self.origin.0 + Pixel::from(col) * self.cell_size,
            self.origin.1 + Pixel::from(row) * self.cell_size,
        ))
    }

    /// Center pixel of a cell.
    pub fn cell_center(&self, coords: Coord2) -> Result<Point> {
        let (x, y) = self.cell_corner(coords)?;
        let half = self.cell_size / 2.0;
        Ok((x + half, y + half))
    }

    /// Cell under a pixel position, `None` when the position is off the grid.
    ///
    /// Called on every pointer movement, so it accepts any input, NaN included.
    pub fn cell_at(&self, (x, y): Point) -> Option<Coord2> {
        let dx = (x - self.origin.0) / self.cell_size;
        let dy = (y - self.origin.1) / self.cell_size;
        if !(dx >= 0.0 && dy >= 0.0) {
            return None;
        }
        // truncation is flooring for non-negative values, overflow saturates
        let (col, row) = (dx as u32, dy as u32);
        if row < u32::from(self.size.0) && col < u32::from(self.size.1) {
            Some((row as Coord, col as Coord))
        } else {
            None
        }
    }

    pub fn right_edge(&self) -> Pixel {
        self.origin.0 + Pixel::from(self.size.1) * self.cell_size
    }

    pub fn bottom_edge(&self) -> Pixel {
        self.origin.1 + Pixel::from(self.size.0) * self.cell_size
    }

    /// Strict interior test, points on the outer border are not contained.
    pub fn contains(&self, (x, y): Point) -> bool {
        x > self.origin.0 && x < self.right_edge() && y > self.origin.1 && y < self.bottom_edge()
    }

    pub fn get(&self, coords: Coord2) -> Result<T> {
        let coords = self.validate_coords(coords)?;
        Ok(self.cells[coords.to_nd_index()])
    }

    pub fn set(&mut self, coords: Coord2, value: T) -> Result<()> {
        let coords = self.validate_coords(coords)?;
        self.cells[coords.to_nd_index()] = value;
        Ok(())
    }

    /// Resets a single cell to the empty sentinel.
    pub fn remove(&mut self, coords: Coord2) -> Result<()> {
        self.set(coords, T::default())
    }

    pub fn clear(&mut self) {
        self.cells.fill(T::default());
    }

    /// Loads every cell, row-major.
    pub fn fill_from(&mut self, values: &[T]) -> Result<()> {
        let expected = usize::from(self.len());
        if values.len() != expected {
            return Err(GameError::LengthMismatch {
                expected,
                actual: values.len(),
            });
        }
        for (cell, &value) in self.cells.iter_mut().zip(values) {
            *cell = value;
        }
        Ok(())
    }

    pub fn row_values(&self, row: Coord) -> Result<Vec<T>> {
        self.validate_coords((row, 0))?;
        Ok(self.cells.row(row.into()).to_vec())
    }

    pub fn row_is_full(&self, row: Coord) -> Result<bool> {
        self.validate_coords((row, 0))?;
        let empty = T::default();
        Ok(self.cells.row(row.into()).iter().all(|&cell| cell != empty))
    }

    pub fn is_cleared(&self) -> bool {
        let empty = T::default();
        self.cells.iter().all(|&cell| cell == empty)
    }

    /// All cells with their addresses, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Coord2, T)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((row, col), &cell)| ((row as Coord, col as Coord), cell))
    }

    pub fn values(&self) -> Vec<T> {
        self.cells.iter().copied().collect()
    }
}
