use crate::Side;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PoolError {
    #[error("no candidates to draw {requested} cards from")]
    EmptyCandidates { requested: usize },
    #[error("no {} candidates to draw {requested} cards from", .side.slug())]
    EmptySide { side: Side, requested: usize },
    #[error("unknown side {0:?}")]
    UnknownSide(String),
}
