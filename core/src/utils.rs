// Helpers for consumers that draw or export a finished grid.
// Heights are unbounded, so renderers usually want them squeezed into [0, 1].

use crate::grid::Grid;

// Smallest and largest height in the grid
pub fn value_range(grid: &Grid) -> (f64, f64) {
    grid.as_slice()
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), &v| {
            (min.min(v), max.max(v))
        })
}

// Row-major copy mapped linearly onto [0, 1].
// A flat grid maps to 0.5 everywhere.
pub fn normalize(grid: &Grid) -> Vec<f32> {
    let (min, max) = value_range(grid);
    let range = max - min;
    grid.as_slice()
        .iter()
        .map(|&v| {
            if range.abs() < f64::EPSILON {
                0.5
            } else {
                ((v - min) / range) as f32
            }
        })
        .collect()
}
