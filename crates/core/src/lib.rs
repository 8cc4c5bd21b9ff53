//! Sealed pool logic: card model, exclusion filtering, seeded sampling and
//! report rendering. Keep this crate free of filesystem concerns.

pub mod candidates;
pub mod cards;
pub mod config;
pub mod error;
pub mod pool;
pub mod report;
pub mod rng;
pub mod rules;

pub use candidates::*;
pub use cards::*;
pub use config::*;
pub use error::*;
pub use pool::*;
pub use report::*;
pub use rng::*;
pub use rules::*;
