use anyhow::{bail, Context};
use sealpool_core::{partition, CandidateLists, Card, ExclusionRules};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Parses a JSON array of cards. One bad entry rejects the whole catalog.
pub fn parse_catalog(bytes: &[u8]) -> anyhow::Result<Vec<Card>> {
    let raw: Value = serde_json::from_slice(bytes).context("parse catalog")?;
    let Value::Array(entries) = raw else {
        bail!("parse catalog: expected a JSON array of cards");
    };
    let mut cards = Vec::with_capacity(entries.len());
    for (idx, entry) in entries.into_iter().enumerate() {
        let label = describe_entry(idx, &entry);
        let card: Card = serde_json::from_value(entry).with_context(|| format!("parse {label}"))?;
        cards.push(card);
    }
    Ok(cards)
}

pub fn load_catalog(path: &Path) -> anyhow::Result<Vec<Card>> {
    let raw = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    parse_catalog(&raw).with_context(|| format!("load {}", path.display()))
}

pub fn load_candidates(path: &Path, rules: &ExclusionRules) -> anyhow::Result<CandidateLists> {
    let cards = load_catalog(path)?;
    Ok(partition(cards, rules))
}

fn describe_entry(idx: usize, entry: &Value) -> String {
    match entry.get("title").and_then(Value::as_str) {
        Some(title) => format!("card #{idx} ({title})"),
        None => format!("card #{idx}"),
    }
}
