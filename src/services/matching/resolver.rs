use tracing::debug;

use super::distance::distance;
use super::normalize::{normalize, tokenize};
use crate::model::catalog::CatalogEntry;
use crate::services::catalog::Catalog;

/// Outcome of reconciling one authoritative name against a catalog.
///
/// `NoMatch` is an expected result: the caller renders the building without
/// an asset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatchResult<'a> {
    Matched { entry: &'a CatalogEntry, score: f64 },
    NoMatch,
}

impl<'a> MatchResult<'a> {
    pub fn is_match(&self) -> bool {
        matches!(self, MatchResult::Matched { .. })
    }

    pub fn entry(&self) -> Option<&'a CatalogEntry> {
        match self {
            MatchResult::Matched { entry, .. } => Some(entry),
            MatchResult::NoMatch => None,
        }
    }

    pub fn score(&self) -> Option<f64> {
        match self {
            MatchResult::Matched { score, .. } => Some(*score),
            MatchResult::NoMatch => None,
        }
    }

    pub fn asset_reference(&self) -> Option<&'a str> {
        self.entry().map(|e| e.asset_reference.as_str())
    }
}

/// Binds a catalog to an acceptance threshold.
///
/// Holds only shared references, so one resolver can serve any number of
/// threads at once.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    catalog: &'a Catalog,
    threshold: f64,
}

impl<'a> Resolver<'a> {
    pub fn new(catalog: &'a Catalog, threshold: f64) -> Self {
        Self { catalog, threshold }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn resolve(&self, authoritative_name: &str) -> MatchResult<'a> {
        resolve(authoritative_name, self.catalog.entries(), self.threshold)
    }
}

/// Decides which catalog entry, if any, `authoritative_name` refers to.
///
/// An exact case-insensitive name match wins with score 0 regardless of
/// `threshold`. Otherwise every input word is aligned to its closest word in
/// each entry, the per-word distances are averaged, and the lowest average
/// is accepted when strictly below `threshold`. Ties keep the earlier entry.
pub fn resolve<'a>(
    authoritative_name: &str,
    catalog: &'a [CatalogEntry],
    threshold: f64,
) -> MatchResult<'a> {
    let norm = normalize(authoritative_name);

    if let Some(entry) = catalog
        .iter()
        .find(|e| normalize(&e.canonical_name) == norm)
    {
        debug!(name = authoritative_name, entry = %entry.canonical_name, "exact catalog match");
        return MatchResult::Matched { entry, score: 0.0 };
    }

    let words = tokenize(&norm);
    if words.is_empty() {
        debug!(name = authoritative_name, "name has no words, skipping fuzzy match");
        return MatchResult::NoMatch;
    }

    let mut best: Option<(&'a CatalogEntry, f64)> = None;

    for entry in catalog {
        let Some(score) = score_entry(&words, entry) else {
            continue;
        };

        let better = match best {
            None => true,
            Some((_, best_score)) => score < best_score,
        };
        if better {
            best = Some((entry, score));
        }
    }

    match best {
        Some((entry, score)) if score < threshold => {
            debug!(name = authoritative_name, entry = %entry.canonical_name, score, "fuzzy catalog match");
            MatchResult::Matched { entry, score }
        }
        Some((entry, score)) => {
            debug!(
                name = authoritative_name,
                closest = %entry.canonical_name,
                score,
                threshold,
                "closest catalog entry above threshold"
            );
            MatchResult::NoMatch
        }
        None => MatchResult::NoMatch,
    }
}

/// Average over `words` of the distance to the closest word of `entry`.
/// `None` when the entry name has no words to align against.
fn score_entry(words: &[&str], entry: &CatalogEntry) -> Option<f64> {
    let entry_norm = normalize(&entry.canonical_name);
    let entry_words = tokenize(&entry_norm);
    if entry_words.is_empty() {
        return None;
    }

    let total: usize = words
        .iter()
        .map(|w| {
            entry_words
                .iter()
                .map(|ew| distance(w, ew))
                .min()
                .unwrap_or(0)
        })
        .sum();

    Some(total as f64 / words.len() as f64)
}
