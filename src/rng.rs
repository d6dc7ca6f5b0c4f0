use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A random value that drifts instead of jumping.
///
/// Each call picks a fresh uniform target in `[min, max]` and moves the
/// current value a `smoothing` fraction of the way toward it, which gives
/// ambient forcing a wandering direction rather than white noise. The
/// generator state is owned by the instance, so a fixed seed reproduces the
/// same forcing sequence.
#[derive(Debug, Clone)]
pub struct SmoothRandom {
    min: f32,
    max: f32,
    smoothing: f32,
    current: f32,
    rng: StdRng,
}

impl SmoothRandom {
    pub const DEFAULT_SMOOTHING: f32 = 0.1;

    pub fn from_seed(min: f32, max: f32, smoothing: f32, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let current = rng.gen_range(min..max);
        Self {
            min,
            max,
            smoothing,
            current,
            rng,
        }
    }

    pub fn from_entropy(min: f32, max: f32, smoothing: f32) -> Self {
        let mut rng = StdRng::from_entropy();
        let current = rng.gen_range(min..max);
        Self {
            min,
            max,
            smoothing,
            current,
            rng,
        }
    }

    pub fn next_value(&mut self) -> f32 {
        let target = self.rng.gen_range(self.min..self.max);
        self.current += self.smoothing * (target - self.current);
        self.current
    }
}
