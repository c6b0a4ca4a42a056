use log::{debug, trace};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::GeneratorConfig;
use crate::error::{GenerationError, Result};
use crate::geometry::{Coord, Square, internal_squares, midpoint_of_edge, step_lengths};
use crate::grid::{Grid, create_grid, set_corners, write_corners};
use crate::noise::{generate_noise, level_intensity};

// 2D terrain generator using Diamond–Square midpoint subdivision.
// Corners are seeded with random integers, then every pass halves the step
// length and fills square centers (diamond step) followed by edge midpoints
// (square step).
#[derive(Debug, Clone, PartialEq)]
pub struct DiamondSquare2D {
    config: GeneratorConfig,
}

impl DiamondSquare2D {
    pub fn new(detail_level: u32, seed: u64, noisiness: f64) -> Self {
        Self {
            config: GeneratorConfig {
                detail_level,
                noisiness,
                seed: Some(seed),
                ..GeneratorConfig::default()
            },
        }
    }

    pub fn from_config(config: GeneratorConfig) -> Self {
        Self { config }
    }

    // Corner seeds are drawn from [min, max)
    pub fn with_corner_bounds(mut self, min: i64, max: i64) -> Self {
        self.config.corner_min = min;
        self.config.corner_max = max;
        self
    }

    // Multiply the noise amplitude by `decay` after every pass
    pub fn with_decay(mut self, decay: f64) -> Self {
        self.config.decay = decay;
        self
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn side_length(&self) -> Result<usize> {
        side_length_for(self.config.detail_level)
    }

    // Generate using the configured seed, or OS entropy when there is none
    pub fn generate(&self) -> Result<Grid> {
        let mut rng = match self.config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        self.generate_with(&mut rng)
    }

    // Generate drawing corners and noise from `rng`.
    // Draw order: 4 corners, then per level and per square (row-major) the
    // center followed by the top, left, bottom and right edge midpoints.
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Grid> {
        self.config.validate()?;
        let side_length = self.side_length()?;
        let mut grid = allocate(self.config.detail_level, side_length)?;
        set_corners(
            &mut grid,
            self.config.corner_min,
            self.config.corner_max,
            rng,
        )?;
        self.subdivide(&mut grid, rng)?;
        Ok(grid)
    }

    // Generate from fixed corner values [top_left, top_right, bottom_left, bottom_right];
    // `rng` is only consulted for noise.
    pub fn generate_from_corners<R: Rng + ?Sized>(
        &self,
        corners: [f64; 4],
        rng: &mut R,
    ) -> Result<Grid> {
        let side_length = self.side_length()?;
        let mut grid = allocate(self.config.detail_level, side_length)?;
        write_corners(&mut grid, corners);
        self.subdivide(&mut grid, rng)?;
        Ok(grid)
    }

    fn subdivide<R: Rng + ?Sized>(&self, grid: &mut Grid, rng: &mut R) -> Result<()> {
        let GeneratorConfig {
            detail_level,
            noisiness,
            decay,
            ..
        } = self.config;
        let edge = grid.side_length() - 1;
        debug!(
            "diamond-square: detail level {}, side {}, noisiness {}",
            detail_level,
            grid.side_length(),
            noisiness
        );

        // Coarse to fine: every pass reads only cells settled by earlier passes
        for (pass, step_length) in step_lengths(detail_level)?.into_iter().enumerate() {
            let intensity = level_intensity(noisiness, decay, pass);
            let squares = internal_squares(Coord::new(0, 0), Coord::new(edge, edge), step_length);
            trace!(
                "pass {}: step length {}, {} squares, intensity {}",
                pass,
                step_length,
                squares.len(),
                intensity
            );

            for square in &squares {
                diamond_step(grid, square, intensity, rng);
                square_step(grid, square, intensity, rng);
            }
        }

        debug!("diamond-square: done, corners {:?}", grid.corners());
        Ok(())
    }
}

// Largest cell count whose f64 buffer still fits in an allocation
const MAX_CELLS: usize = isize::MAX as usize / std::mem::size_of::<f64>();

// (2^n) + 1, rejecting levels whose grid cannot be addressed
pub fn side_length_for(detail_level: u32) -> Result<usize> {
    if detail_level < 1 {
        return Err(GenerationError::InvalidDetailLevel { detail_level });
    }
    1usize
        .checked_shl(detail_level)
        .and_then(|span| span.checked_add(1))
        .filter(|side| side.checked_mul(*side).is_some_and(|cells| cells <= MAX_CELLS))
        .ok_or(GenerationError::GridTooLarge { detail_level })
}

// Sizes are already bounded, so a failure here is the allocator refusing
fn allocate(detail_level: u32, side_length: usize) -> Result<Grid> {
    create_grid(side_length).map_err(|_| GenerationError::GridTooLarge { detail_level })
}

// Set the square's center to the average of its four corners plus noise
pub fn diamond_step<R: Rng + ?Sized>(
    grid: &mut Grid,
    square: &Square,
    noisiness: f64,
    rng: &mut R,
) {
    let [t_l, t_r, b_l, b_r] = square.corners();
    let avg = (grid[t_l] + grid[t_r] + grid[b_l] + grid[b_r]) / 4.0;
    grid.set(square.center(), avg + generate_noise(noisiness, rng));
}

// Set each edge midpoint to the average of the edge's endpoints and the
// square's center plus noise. Expects the diamond step to have run already.
pub fn square_step<R: Rng + ?Sized>(
    grid: &mut Grid,
    square: &Square,
    noisiness: f64,
    rng: &mut R,
) {
    let center = grid[square.center()];
    for (c0, c1, orientation) in square.edges() {
        let avg = (grid[c0] + grid[c1] + center) / 3.0;
        grid.set(
            midpoint_of_edge(c0, c1, orientation),
            avg + generate_noise(noisiness, rng),
        );
    }
}

// Generate a (2^detail_level + 1)² grid with corners in [0, 10) and
// constant noise amplitude, seeded from OS entropy.
pub fn generate(detail_level: u32, noisiness: f64) -> Result<Grid> {
    generate_with_rng(detail_level, noisiness, &mut ChaCha8Rng::from_entropy())
}

pub fn generate_with_rng<R: Rng + ?Sized>(
    detail_level: u32,
    noisiness: f64,
    rng: &mut R,
) -> Result<Grid> {
    DiamondSquare2D::from_config(GeneratorConfig {
        detail_level,
        noisiness,
        ..GeneratorConfig::default()
    })
    .generate_with(rng)
}
