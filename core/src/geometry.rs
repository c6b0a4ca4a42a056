// Coordinate arithmetic for the subdivision: midpoints, the step-length
// schedule and the squares that tile the grid at one step length.
// All offsets use integer division, so odd spans are truncated.

use crate::error::{GenerationError, Result};

// (row, col), zero based
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

// One cell of the current subdivision level.
// t_l, t_r
// b_l, b_r
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Square {
    pub top_left: Coord,
    pub top_right: Coord,
    pub bottom_left: Coord,
    pub bottom_right: Coord,
}

impl Square {
    pub fn corners(&self) -> [Coord; 4] {
        [
            self.top_left,
            self.top_right,
            self.bottom_left,
            self.bottom_right,
        ]
    }

    pub fn center(&self) -> Coord {
        midpoint_of_square(self.top_left, self.bottom_right)
    }

    // Edges in write order: top, left, bottom, right.
    // The first endpoint is always the top or left one.
    pub fn edges(&self) -> [(Coord, Coord, Orientation); 4] {
        [
            (self.top_left, self.top_right, Orientation::Horizontal),
            (self.top_left, self.bottom_left, Orientation::Vertical),
            (self.bottom_left, self.bottom_right, Orientation::Horizontal),
            (self.top_right, self.bottom_right, Orientation::Vertical),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

// Center of the square spanned by top_left and bottom_right
pub fn midpoint_of_square(top_left: Coord, bottom_right: Coord) -> Coord {
    Coord {
        row: (bottom_right.row - top_left.row) / 2 + top_left.row,
        col: (bottom_right.col - top_left.col) / 2 + top_left.col,
    }
}

// Midpoint of the edge from c0 (top or left) to c1 (bottom or right).
// Only the axis along the edge moves; the other is taken from c0.
pub fn midpoint_of_edge(c0: Coord, c1: Coord, orientation: Orientation) -> Coord {
    match orientation {
        Orientation::Vertical => Coord {
            row: (c1.row - c0.row) / 2 + c0.row,
            col: c0.col,
        },
        Orientation::Horizontal => Coord {
            row: c0.row,
            col: (c1.col - c0.col) / 2 + c0.col,
        },
    }
}

// [2^n, 2^(n-1), ..., 2^1]
pub fn step_lengths(detail_level: u32) -> Result<Vec<usize>> {
    if detail_level < 1 {
        return Err(GenerationError::InvalidDetailLevel { detail_level });
    }
    (1..=detail_level)
        .rev()
        .map(|exp| {
            1usize
                .checked_shl(exp)
                .ok_or(GenerationError::GridTooLarge { detail_level })
        })
        .collect()
}

// Squares of side `step_length` tiling top_left..bottom_right in row-major order.
// A span that `step_length` does not divide is truncated; the remainder is skipped.
pub fn internal_squares(top_left: Coord, bottom_right: Coord, step_length: usize) -> Vec<Square> {
    if step_length == 0 {
        return Vec::new();
    }
    let row_blocks = bottom_right.row.saturating_sub(top_left.row) / step_length;
    let col_blocks = bottom_right.col.saturating_sub(top_left.col) / step_length;

    let mut squares = Vec::with_capacity(row_blocks * col_blocks);
    for i in 0..row_blocks {
        let top = top_left.row + i * step_length;
        let bottom = top + step_length;
        for j in 0..col_blocks {
            let left = top_left.col + j * step_length;
            let right = left + step_length;
            squares.push(Square {
                top_left: Coord::new(top, left),
                top_right: Coord::new(top, right),
                bottom_left: Coord::new(bottom, left),
                bottom_right: Coord::new(bottom, right),
            });
        }
    }
    squares
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(row: usize, col: usize) -> Coord {
        Coord::new(row, col)
    }

    #[test]
    fn step_lengths_descend_by_powers_of_two() {
        assert_eq!(step_lengths(3).unwrap(), vec![8, 4, 2]);
        assert_eq!(step_lengths(2).unwrap(), vec![4, 2]);
        assert_eq!(step_lengths(1).unwrap(), vec![2]);
    }

    #[test]
    fn step_lengths_reject_level_zero() {
        assert_eq!(
            step_lengths(0),
            Err(GenerationError::InvalidDetailLevel { detail_level: 0 })
        );
    }

    #[test]
    fn step_lengths_reject_overflowing_level() {
        assert_eq!(
            step_lengths(usize::BITS),
            Err(GenerationError::GridTooLarge {
                detail_level: usize::BITS
            })
        );
    }

    #[test]
    fn midpoints() {
        assert_eq!(midpoint_of_square(c(0, 0), c(8, 8)), c(4, 4));
        assert_eq!(
            midpoint_of_edge(c(0, 0), c(0, 8), Orientation::Horizontal),
            c(0, 4)
        );
        assert_eq!(
            midpoint_of_edge(c(0, 0), c(8, 0), Orientation::Vertical),
            c(4, 0)
        );
    }

    #[test]
    fn midpoints_truncate_odd_spans() {
        assert_eq!(midpoint_of_square(c(1, 2), c(4, 7)), c(2, 4));
        assert_eq!(
            midpoint_of_edge(c(3, 3), c(3, 6), Orientation::Horizontal),
            c(3, 4)
        );
        assert_eq!(
            midpoint_of_edge(c(3, 5), c(6, 5), Orientation::Vertical),
            c(4, 5)
        );
    }

    #[test]
    fn squares_tile_side_nine_at_step_four() {
        let squares = internal_squares(c(0, 0), c(8, 8), 4);
        let corners: Vec<[Coord; 4]> = squares.iter().map(Square::corners).collect();
        assert_eq!(
            corners,
            vec![
                [c(0, 0), c(0, 4), c(4, 0), c(4, 4)],
                [c(0, 4), c(0, 8), c(4, 4), c(4, 8)],
                [c(4, 0), c(4, 4), c(8, 0), c(8, 4)],
                [c(4, 4), c(4, 8), c(8, 4), c(8, 8)],
            ]
        );
    }

    #[test]
    fn squares_truncate_uneven_extent() {
        // 10 / 4 = 2 blocks per axis, last two rows/cols left alone
        let squares = internal_squares(c(0, 0), c(10, 10), 4);
        assert_eq!(squares.len(), 4);
        assert!(squares.iter().all(|sq| sq.bottom_right.row <= 8));
        assert!(squares.iter().all(|sq| sq.bottom_right.col <= 8));
    }

    #[test]
    fn squares_use_independent_origin_axes() {
        let squares = internal_squares(c(2, 6), c(6, 10), 2);
        assert_eq!(squares.len(), 4);
        assert_eq!(squares[0].top_left, c(2, 6));
        assert_eq!(squares[1].top_left, c(2, 8));
        assert_eq!(squares[3].bottom_right, c(6, 10));
    }

    #[test]
    fn zero_step_yields_nothing() {
        assert!(internal_squares(c(0, 0), c(8, 8), 0).is_empty());
    }

    #[test]
    fn edges_in_write_order() {
        let sq = internal_squares(c(0, 0), c(4, 4), 4)[0];
        let mids: Vec<Coord> = sq
            .edges()
            .iter()
            .map(|&(a, b, o)| midpoint_of_edge(a, b, o))
            .collect();
        assert_eq!(mids, vec![c(0, 2), c(2, 0), c(4, 2), c(2, 4)]);
        assert_eq!(sq.center(), c(2, 2));
    }
}
