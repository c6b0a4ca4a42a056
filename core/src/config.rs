use serde::{Deserialize, Serialize};

use crate::error::{GenerationError, Result};
use crate::grid::{DEFAULT_CORNER_MAX, DEFAULT_CORNER_MIN};

// Parameters for one generation run.
// Missing fields fall back to Default when deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    // n; side length = 2^n + 1
    pub detail_level: u32,
    // multiplier on the per-midpoint gaussian perturbation
    pub noisiness: f64,
    // corner seeds are drawn from [corner_min, corner_max)
    pub corner_min: i64,
    pub corner_max: i64,
    // per-pass factor on noisiness, 1.0 = constant amplitude
    pub decay: f64,
    // None = seed from OS entropy
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            detail_level: 7, // 2^7 + 1 = 129
            noisiness: 0.0,
            corner_min: DEFAULT_CORNER_MIN,
            corner_max: DEFAULT_CORNER_MAX,
            decay: 1.0,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<()> {
        if self.detail_level < 1 {
            return Err(GenerationError::InvalidDetailLevel {
                detail_level: self.detail_level,
            });
        }
        if self.corner_min >= self.corner_max {
            return Err(GenerationError::InvalidBounds {
                min: self.corner_min,
                max: self.corner_max,
            });
        }
        Ok(())
    }
}
