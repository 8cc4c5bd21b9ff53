use crate::{CandidateLists, Card, PoolError, RngState, Side};
use std::collections::BTreeMap;

/// Drawn titles with their copy counts. Titles are kept sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pool {
    counts: BTreeMap<String, usize>,
}

impl Pool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, title: &str) {
        if let Some(count) = self.counts.get_mut(title) {
            *count += 1;
        } else {
            self.counts.insert(title.to_string(), 1);
        }
    }

    pub fn count(&self, title: &str) -> usize {
        self.counts.get(title).copied().unwrap_or(0)
    }

    /// Number of distinct titles.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total copies across all titles.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts
            .iter()
            .map(|(title, count)| (title.as_str(), *count))
    }
}

/// Draws `size` cards with replacement, each uniformly over `candidates`.
pub fn sample(candidates: &[Card], size: usize, rng: &mut RngState) -> Result<Pool, PoolError> {
    let mut pool = Pool::new();
    if size == 0 {
        return Ok(pool);
    }
    if candidates.is_empty() {
        return Err(PoolError::EmptyCandidates { requested: size });
    }
    for _ in 0..size {
        let card = &candidates[rng.index(candidates.len())];
        pool.add(&card.title);
    }
    Ok(pool)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SealedPools {
    pub corp: Pool,
    pub runner: Pool,
}

impl SealedPools {
    /// Samples both sides, each from its own stream derived from `seed`.
    /// Fails on the first side with nothing to draw from.
    pub fn draw(candidates: &CandidateLists, size: usize, seed: u64) -> Result<Self, PoolError> {
        let draw_side = |side: Side| {
            let mut rng = RngState::for_side(seed, side);
            sample(candidates.side(side), size, &mut rng).map_err(|err| match err {
                PoolError::EmptyCandidates { requested } => {
                    PoolError::EmptySide { side, requested }
                }
                other => other,
            })
        };
        let corp = draw_side(Side::Corp)?;
        let runner = draw_side(Side::Runner)?;
        Ok(Self { corp, runner })
    }

    pub fn side(&self, side: Side) -> &Pool {
        match side {
            Side::Corp => &self.corp,
            Side::Runner => &self.runner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_initializes_then_increments() {
        let mut pool = Pool::new();
        pool.add("Hedge Fund");
        pool.add("Hedge Fund");
        pool.add("Enigma");
        assert_eq!(pool.count("Hedge Fund"), 2);
        assert_eq!(pool.count("Enigma"), 1);
        assert_eq!(pool.count("Wall of Static"), 0);
        assert_eq!(pool.len(), 2);
        assert_eq!(pool.total(), 3);
    }

    #[test]
    fn iteration_is_title_ordered() {
        let mut pool = Pool::new();
        for title in ["b", "C", "a", "B"] {
            pool.add(title);
        }
        let titles: Vec<&str> = pool.iter().map(|(title, _)| title).collect();
        assert_eq!(titles, vec!["B", "C", "a", "b"]);
    }
}
