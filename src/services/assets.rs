use std::path::Path;

use serde::Serialize;

/// Widths the image pipeline renders for every source photo.
pub const VARIANT_WIDTHS: [u32; 4] = [400, 640, 960, 1280];
const VARIANT_EXT: &str = "webp";

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct AssetVariant {
    pub width: u32,
    pub path: String,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct AssetVariants {
    pub fallback: String,
    pub variants: Vec<AssetVariant>,
    pub srcset: String,
}

/// Maps a catalog asset reference to the generated files under `asset_dir`.
/// Only the reference's file stem is used. Returns `None` when the
/// reference has no file name.
pub fn variants(reference: &str, asset_dir: &str) -> Option<AssetVariants> {
    let stem = Path::new(reference.trim())
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())?;

    let dir = asset_dir.trim_end_matches('/');

    let variants: Vec<AssetVariant> = VARIANT_WIDTHS
        .iter()
        .map(|&width| AssetVariant {
            width,
            path: format!("{dir}/{stem}-{width}.{VARIANT_EXT}"),
        })
        .collect();

    let srcset = variants
        .iter()
        .map(|v| format!("{} {}w", v.path, v.width))
        .collect::<Vec<_>>()
        .join(", ");

    Some(AssetVariants {
        fallback: format!("{dir}/{stem}.{VARIANT_EXT}"),
        variants,
        srcset,
    })
}
