use crate::Side;
use rand::{rngs::StdRng, Rng, SeedableRng};

const RUNNER_STREAM_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

#[derive(Debug, Clone)]
pub struct RngState {
    seed: u64,
    rng: StdRng,
}

impl RngState {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Independent stream per side. Corp keeps the master seed so a Corp
    /// pool only depends on the seed the user typed.
    pub fn for_side(master_seed: u64, side: Side) -> Self {
        let seed = match side {
            Side::Corp => master_seed,
            Side::Runner => master_seed ^ RUNNER_STREAM_SALT,
        };
        Self::from_seed(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    pub fn index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}
