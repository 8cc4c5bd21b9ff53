use crate::{pool_file_name, ExclusionRules, Side};
use serde::Serialize;
use std::path::PathBuf;

pub const DEFAULT_POOL_SIZE: usize = 75;
pub const DEFAULT_SEED: i64 = 34_384_239_482;
pub const DEFAULT_CATALOG_PATH: &str = "./data/cards.json";
pub const DEFAULT_OUTPUT_DIR: &str = "pools";

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PoolConfig {
    pub pool_size: usize,
    /// Signed so any 64-bit seed typed on the command line is accepted.
    pub seed: i64,
    pub catalog_path: PathBuf,
    pub output_dir: PathBuf,
    pub rules: ExclusionRules,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            pool_size: DEFAULT_POOL_SIZE,
            seed: DEFAULT_SEED,
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            rules: ExclusionRules::default(),
        }
    }
}

impl PoolConfig {
    /// Bit-for-bit reinterpretation of `seed` for the RNG streams.
    pub fn rng_seed(&self) -> u64 {
        self.seed as u64
    }

    pub fn output_path(&self, side: Side) -> PathBuf {
        self.output_dir
            .join(pool_file_name(side, self.pool_size, self.seed))
    }
}
