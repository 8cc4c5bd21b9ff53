use crate::Card;
use serde::Serialize;
use std::collections::BTreeSet;

/// Identity cards are dealt separately from the pool.
pub const DEFAULT_EXCLUDED_TYPE_CODES: &[&str] = &["identity"];
/// Special and alternate-art printings.
pub const DEFAULT_EXCLUDED_SET_CODES: &[&str] = &["special", "alt"];
/// Unreleased cycle.
pub const DEFAULT_EXCLUDED_CYCLES: &[i64] = &[6];

/// Cards matching any entry on any criterion are never drawn.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ExclusionRules {
    pub type_codes: BTreeSet<String>,
    pub set_codes: BTreeSet<String>,
    pub cycle_numbers: BTreeSet<i64>,
}

impl Default for ExclusionRules {
    fn default() -> Self {
        Self {
            type_codes: DEFAULT_EXCLUDED_TYPE_CODES
                .iter()
                .map(|code| code.to_string())
                .collect(),
            set_codes: DEFAULT_EXCLUDED_SET_CODES
                .iter()
                .map(|code| code.to_string())
                .collect(),
            cycle_numbers: DEFAULT_EXCLUDED_CYCLES.iter().copied().collect(),
        }
    }
}

impl ExclusionRules {
    pub fn empty() -> Self {
        Self {
            type_codes: BTreeSet::new(),
            set_codes: BTreeSet::new(),
            cycle_numbers: BTreeSet::new(),
        }
    }

    pub fn with_type_code(mut self, code: impl Into<String>) -> Self {
        self.type_codes.insert(code.into());
        self
    }

    pub fn with_set_code(mut self, code: impl Into<String>) -> Self {
        self.set_codes.insert(code.into());
        self
    }

    pub fn with_cycle(mut self, cycle: i64) -> Self {
        self.cycle_numbers.insert(cycle);
        self
    }

    pub fn excludes(&self, card: &Card) -> bool {
        self.type_codes.contains(&card.type_code)
            || self.set_codes.contains(&card.set_code)
            || self.cycle_numbers.contains(&card.cycle_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Side;

    #[test]
    fn defaults_exclude_each_criterion_independently() {
        let rules = ExclusionRules::default();
        assert!(rules.excludes(&Card::new("Id", Side::Corp, "identity", "core", 1)));
        assert!(rules.excludes(&Card::new("Promo", Side::Corp, "agenda", "special", 1)));
        assert!(rules.excludes(&Card::new("Art", Side::Runner, "event", "alt", 1)));
        assert!(rules.excludes(&Card::new("Later", Side::Runner, "event", "core", 6)));
        assert!(!rules.excludes(&Card::new("Fine", Side::Runner, "event", "core", 1)));
    }

    #[test]
    fn empty_rules_keep_everything() {
        let rules = ExclusionRules::empty();
        assert!(!rules.excludes(&Card::new("Id", Side::Corp, "identity", "alt", 6)));
    }

    #[test]
    fn builders_extend_the_sets() {
        let rules = ExclusionRules::empty()
            .with_type_code("agenda")
            .with_set_code("draft")
            .with_cycle(2)
            .with_cycle(-3);
        assert!(rules.excludes(&Card::new("A", Side::Corp, "agenda", "core", 1)));
        assert!(rules.excludes(&Card::new("B", Side::Corp, "ice", "draft", 1)));
        assert!(rules.excludes(&Card::new("C", Side::Corp, "ice", "core", 2)));
        assert!(rules.excludes(&Card::new("E", Side::Corp, "ice", "core", -3)));
        assert!(!rules.excludes(&Card::new("D", Side::Corp, "identity", "core", 6)));
    }
}
