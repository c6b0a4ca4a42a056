use rand::Rng;
use rand_distr::StandardNormal;

// Standard deviation of a single perturbation before scaling by intensity
pub const NOISE_STD_DEV: f64 = 0.01;

// Zero-mean Gaussian perturbation with std-dev NOISE_STD_DEV, scaled by `intensity`.
// Zero intensity returns 0 without touching the rng, so a noiseless run
// consumes no random numbers past the corner seeds.
pub fn generate_noise<R: Rng + ?Sized>(intensity: f64, rng: &mut R) -> f64 {
    if intensity == 0.0 {
        return 0.0;
    }
    let z: f64 = rng.sample(StandardNormal);
    z * NOISE_STD_DEV * intensity
}

// Intensity applied at the given pass (0 = coarsest).
// A decay of 1.0 keeps the amplitude constant across all passes.
pub fn level_intensity(noisiness: f64, decay: f64, pass: usize) -> f64 {
    if decay == 1.0 {
        return noisiness;
    }
    noisiness * decay.powi(pass.min(i32::MAX as usize) as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn zero_intensity_is_silent() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let before = rng.clone();
        for _ in 0..100 {
            assert_eq!(generate_noise(0.0, &mut rng), 0.0);
        }
        // rng state untouched
        assert_eq!(rng, before);
    }

    #[test]
    fn noise_scales_with_intensity() {
        let mut a = ChaCha8Rng::seed_from_u64(5);
        let mut b = ChaCha8Rng::seed_from_u64(5);
        let base = generate_noise(1.0, &mut a);
        let scaled = generate_noise(3.0, &mut b);
        assert!((scaled - 3.0 * base).abs() < 1e-15);
    }

    #[test]
    fn noise_is_small_and_centred() {
        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        let n = 20_000;
        let samples: Vec<f64> = (0..n).map(|_| generate_noise(1.0, &mut rng)).collect();
        let mean = samples.iter().sum::<f64>() / n as f64;
        let var = samples.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n as f64;
        assert!(mean.abs() < 1e-3, "mean {}", mean);
        assert!((var.sqrt() - NOISE_STD_DEV).abs() < 1e-3, "std {}", var.sqrt());
    }

    #[test]
    fn level_intensity_decays_geometrically() {
        assert_eq!(level_intensity(2.0, 1.0, 7), 2.0);
        assert_eq!(level_intensity(2.0, 0.5, 0), 2.0);
        assert_eq!(level_intensity(2.0, 0.5, 2), 0.5);
        assert_eq!(level_intensity(0.0, 0.5, 3), 0.0);
    }
}
