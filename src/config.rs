use std::path::PathBuf;
use std::time::Duration;

use crate::error::{CoreError, CoreResult};

pub const DEFAULT_MATCH_THRESHOLD: f64 = 3.5;
pub const DEFAULT_ASSET_DIR: &str = "/generated/dorms";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// Upstream status API base URL. API commands fail when unset.
    pub api_url: Option<String>,
    /// Maximum accepted average per-word edit distance.
    pub match_threshold: f64,
    /// Catalog file replacing the built-in catalog at start-up.
    pub catalog_path: Option<PathBuf>,
    /// Directory the asset pipeline writes generated variants into.
    pub asset_dir: String,
    pub http_timeout: Duration,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            api_url: None,
            match_threshold: DEFAULT_MATCH_THRESHOLD,
            catalog_path: None,
            asset_dir: DEFAULT_ASSET_DIR.to_string(),
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}

impl CoreConfig {
    pub fn from_env() -> CoreResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> CoreResult<Self> {
        let mut cfg = Self::default();

        if let Some(url) = non_empty(lookup("LAUNDRY_API_URL")) {
            cfg.api_url = Some(url.trim_end_matches('/').to_string());
        }

        if let Some(raw) = non_empty(lookup("LAUNDRY_MATCH_THRESHOLD")) {
            cfg.match_threshold = parse_threshold(&raw)?;
        }

        if let Some(path) = non_empty(lookup("LAUNDRY_CATALOG_PATH")) {
            cfg.catalog_path = Some(PathBuf::from(path));
        }

        if let Some(dir) = non_empty(lookup("LAUNDRY_ASSET_DIR")) {
            cfg.asset_dir = dir;
        }

        if let Some(raw) = non_empty(lookup("LAUNDRY_HTTP_TIMEOUT_SECS")) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                CoreError::Config(format!("LAUNDRY_HTTP_TIMEOUT_SECS is not an integer: {raw}"))
            })?;
            cfg.http_timeout = Duration::from_secs(secs);
        }

        Ok(cfg)
    }
}

pub fn parse_threshold(raw: &str) -> CoreResult<f64> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| CoreError::Config(format!("threshold is not a number: {raw}")))?;
    validate_threshold(value)
}

pub fn validate_threshold(value: f64) -> CoreResult<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(CoreError::Config(format!(
            "threshold must be a finite non-negative number, got {value}"
        )));
    }
    Ok(value)
}

fn non_empty(v: Option<String>) -> Option<String> {
    v.filter(|s| !s.trim().is_empty())
}
