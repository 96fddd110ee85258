use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use wd_core::ports::RandomSourcePort;

/// `StdRng`-backed randomness for suggestions.
pub struct StdRandomSource {
    rng: StdRng,
}

impl StdRandomSource {
    /// Seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible sequence, e.g. for `suggest --seed`.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for StdRandomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSourcePort for StdRandomSource {
    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    fn pick_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}
