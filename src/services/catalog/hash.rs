use sha2::{Digest, Sha256};

use crate::model::catalog::CatalogEntry;

/// Hex SHA-256 over the ordered `(name, asset)` pairs. Reordering the
/// catalog changes the fingerprint because order decides ties.
pub fn fingerprint(entries: &[CatalogEntry]) -> String {
    let mut hasher = Sha256::new();
    for e in entries {
        hasher.update(e.canonical_name.as_bytes());
        hasher.update([0u8]);
        hasher.update(e.asset_reference.as_bytes());
        hasher.update(b"\n");
    }
    hex::encode(hasher.finalize())
}
