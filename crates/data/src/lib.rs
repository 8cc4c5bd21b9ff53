//! Catalog loading and pool file output.

pub mod load;
pub mod output;

pub use load::*;
pub use output::*;
