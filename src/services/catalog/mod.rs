pub mod builtin;
pub mod hash;
pub mod store;

use crate::error::{CoreError, CoreResult};
use crate::model::catalog::CatalogEntry;

/// Ordered, read-only photo catalog. Entry order is the tie-break order
/// when several entries score the same.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    fingerprint: String,
}

impl Catalog {
    pub fn builtin() -> Self {
        Self::build(builtin::entries())
    }

    pub fn from_entries(entries: Vec<CatalogEntry>) -> CoreResult<Self> {
        for (i, e) in entries.iter().enumerate() {
            if e.canonical_name.trim().is_empty() {
                return Err(CoreError::Catalog(format!(
                    "entry at index {i} has an empty canonical_name"
                )));
            }
        }
        Ok(Self::build(entries))
    }

    fn build(entries: Vec<CatalogEntry>) -> Self {
        let fingerprint = hash::fingerprint(&entries);
        Self {
            entries,
            fingerprint,
        }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
