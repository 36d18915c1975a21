use serde::{Deserialize, Serialize};

/// One photo-catalog row. Identity is the row's position in its catalog.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    #[serde(alias = "name")]
    pub canonical_name: String,

    /// Opaque key into the generated image variants.
    #[serde(alias = "image")]
    pub asset_reference: String,
}

impl CatalogEntry {
    pub fn new(canonical_name: impl Into<String>, asset_reference: impl Into<String>) -> Self {
        Self {
            canonical_name: canonical_name.into(),
            asset_reference: asset_reference.into(),
        }
    }
}
