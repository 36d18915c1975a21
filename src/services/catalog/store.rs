use std::fs;
use std::path::Path;

use chardetng::EncodingDetector;
use encoding_rs::UTF_8;
use tracing::{info, warn};

use super::Catalog;
use crate::error::{CoreError, CoreResult};
use crate::model::catalog::CatalogEntry;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Loads an ordered catalog from a JSON array of entries.
///
/// Rows may use either `canonical_name`/`asset_reference` or the
/// `name`/`image` field names. Files saved in a legacy encoding are decoded
/// before parsing.
pub fn load_file(path: &Path) -> CoreResult<Catalog> {
    let bytes = fs::read(path)?;
    let text = decode(&bytes);

    let entries: Vec<CatalogEntry> = serde_json::from_str(&text)
        .map_err(|e| CoreError::Catalog(format!("failed to parse {}: {e}", path.display())))?;

    let catalog = Catalog::from_entries(entries)?;
    info!(
        path = %path.display(),
        entries = catalog.len(),
        fingerprint = catalog.fingerprint(),
        "catalog loaded"
    );
    Ok(catalog)
}

fn decode(bytes: &[u8]) -> String {
    if let Some(rest) = bytes.strip_prefix(UTF8_BOM) {
        return String::from_utf8_lossy(rest).into_owned();
    }

    if let Ok(s) = std::str::from_utf8(bytes) {
        return s.to_string();
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let encoding = detector.guess(None, true);

    let (text, _, had_errors) = encoding.decode(bytes);
    if had_errors {
        warn!(encoding = encoding.name(), "catalog file decoded with replacement characters");
    } else if encoding != UTF_8 {
        info!(encoding = encoding.name(), "catalog file is not utf-8, transcoded");
    }
    text.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_tmp(bytes: &[u8]) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(bytes).unwrap();
        f
    }

    #[test]
    fn loads_canonical_field_names_in_order() {
        let f = write_tmp(
            br#"[
                {"canonical_name": "Jones Tower", "asset_reference": "/img/jones.jpg"},
                {"canonical_name": "Archer House", "asset_reference": "/img/archer.jpg"}
            ]"#,
        );
        let catalog = load_file(f.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.entries()[0].canonical_name, "Jones Tower");
        assert_eq!(catalog.entries()[1].asset_reference, "/img/archer.jpg");
    }

    #[test]
    fn accepts_name_and_image_aliases() {
        let f = write_tmp(br#"[{"name": "Mack Hall", "image": "/img/mack.jpg"}]"#);
        let catalog = load_file(f.path()).unwrap();
        assert_eq!(catalog.entries()[0], CatalogEntry::new("Mack Hall", "/img/mack.jpg"));
    }

    #[test]
    fn strips_utf8_bom() {
        let mut bytes = UTF8_BOM.to_vec();
        bytes.extend_from_slice(br#"[{"name": "Scott House", "image": "s.jpg"}]"#);
        let f = write_tmp(&bytes);
        assert_eq!(load_file(f.path()).unwrap().len(), 1);
    }

    #[test]
    fn decodes_windows_1252_apostrophe() {
        // 0x92 is a right single quotation mark in windows-1252.
        let mut bytes = br#"[{"name": "Veteran"#.to_vec();
        bytes.push(0x92);
        bytes.extend_from_slice(br#"s House", "image": "v.jpg"}]"#);
        let f = write_tmp(&bytes);
        let catalog = load_file(f.path()).unwrap();
        let name = &catalog.entries()[0].canonical_name;
        assert!(name.starts_with("Veteran") && name.ends_with("s House"), "{name}");
        assert!(!name.contains('\u{FFFD}'));
    }

    #[test]
    fn rejects_malformed_json() {
        let f = write_tmp(b"{not json");
        assert!(matches!(load_file(f.path()), Err(CoreError::Catalog(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_file(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, CoreError::Io(_)));
    }
}
