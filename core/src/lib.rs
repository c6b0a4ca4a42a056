// core holds the diamond-square height field generator
pub mod config;
pub mod diamond_square;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod noise;
pub mod utils;

pub use config::GeneratorConfig;
pub use diamond_square::{DiamondSquare2D, generate, generate_with_rng};
pub use error::{GenerationError, Result};
pub use geometry::{Coord, Orientation, Square};
pub use grid::{Grid, create_grid, set_corners};
pub use utils::{normalize, value_range};
