use std::ops::Index;

use log::trace;
use rand::Rng;

use crate::error::{GenerationError, Result};
use crate::geometry::Coord;

pub const DEFAULT_CORNER_MIN: i64 = 0;
pub const DEFAULT_CORNER_MAX: i64 = 10;

// Square height field, row-major flat buffer of side_length × side_length.
// Read-only to consumers; only the generator writes into it.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    side_length: usize,
    cells: Vec<f64>,
}

impl Grid {
    pub fn side_length(&self) -> usize {
        self.side_length
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.side_length && col < self.side_length {
            Some(self.cells[row * self.side_length + col])
        } else {
            None
        }
    }

    // Flattened row-major view, length side_length²
    pub fn as_slice(&self) -> &[f64] {
        &self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.cells.chunks(self.side_length)
    }

    // Nested copy for consumers that expect map[row][col]
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.rows().map(<[f64]>::to_vec).collect()
    }

    // [top_left, top_right, bottom_left, bottom_right]
    pub fn corners(&self) -> [f64; 4] {
        let edge = self.side_length - 1;
        [
            self[(0, 0)],
            self[(0, edge)],
            self[(edge, 0)],
            self[(edge, edge)],
        ]
    }

    pub(crate) fn set(&mut self, at: Coord, value: f64) {
        let idx = self.offset(at);
        self.cells[idx] = value;
    }

    #[inline]
    fn offset(&self, at: Coord) -> usize {
        assert!(
            at.row < self.side_length && at.col < self.side_length,
            "cell ({}, {}) outside a grid of side {}",
            at.row,
            at.col,
            self.side_length
        );
        at.row * self.side_length + at.col
    }
}

impl Index<Coord> for Grid {
    type Output = f64;

    fn index(&self, at: Coord) -> &f64 {
        &self.cells[self.offset(at)]
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self[Coord::new(row, col)]
    }
}

// All-zero square grid
pub fn create_grid(side_length: usize) -> Result<Grid> {
    if side_length < 1 {
        return Err(GenerationError::InvalidSideLength { side_length });
    }
    let count = side_length
        .checked_mul(side_length)
        .ok_or(GenerationError::InvalidSideLength { side_length })?;
    let mut cells = Vec::new();
    cells
        .try_reserve_exact(count)
        .map_err(|_| GenerationError::InvalidSideLength { side_length })?;
    cells.resize(count, 0.0);
    Ok(Grid { side_length, cells })
}

// Draw four integers uniformly from [min, max) and place them on the
// extreme corners in the order top-left, top-right, bottom-left, bottom-right.
pub fn set_corners<R: Rng + ?Sized>(
    grid: &mut Grid,
    min: i64,
    max: i64,
    rng: &mut R,
) -> Result<[f64; 4]> {
    if min >= max {
        return Err(GenerationError::InvalidBounds { min, max });
    }
    let values: [f64; 4] = std::array::from_fn(|_| rng.gen_range(min..max) as f64);
    write_corners(grid, values);
    trace!("seeded corners {:?}", values);
    Ok(values)
}

pub(crate) fn write_corners(grid: &mut Grid, values: [f64; 4]) {
    let edge = grid.side_length - 1;
    grid.set(Coord::new(0, 0), values[0]);
    grid.set(Coord::new(0, edge), values[1]);
    grid.set(Coord::new(edge, 0), values[2]);
    grid.set(Coord::new(edge, edge), values[3]);
}
