use crate::{Card, ExclusionRules, Side};

/// Per-side draw lists, in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateLists {
    pub corp: Vec<Card>,
    pub runner: Vec<Card>,
}

impl CandidateLists {
    pub fn side(&self, side: Side) -> &[Card] {
        match side {
            Side::Corp => &self.corp,
            Side::Runner => &self.runner,
        }
    }

    pub fn len(&self, side: Side) -> usize {
        self.side(side).len()
    }

    pub fn titles(&self, side: Side) -> Vec<&str> {
        self.side(side)
            .iter()
            .map(|card| card.title.as_str())
            .collect()
    }
}

pub fn partition<I>(cards: I, rules: &ExclusionRules) -> CandidateLists
where
    I: IntoIterator<Item = Card>,
{
    let mut lists = CandidateLists::default();
    for card in cards {
        let Some(side) = card.side() else {
            continue;
        };
        if rules.excludes(&card) {
            continue;
        }
        match side {
            Side::Corp => lists.corp.push(card),
            Side::Runner => lists.runner.push(card),
        }
    }
    lists
}
