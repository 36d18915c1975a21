use crate::error::{CoreError, CoreResult};
use crate::model::building::{ApiResponse, Building, BuildingMachines};

use rand::{thread_rng, Rng};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use std::{thread, time::Duration};

const MAX_RETRIES: usize = 3;
const BASE_DELAY_MS: u64 = 500;

fn backoff(attempt: usize) -> Duration {
    let jitter: u64 = thread_rng().gen_range(0..200);
    let ms = BASE_DELAY_MS * (2_u64.pow(attempt as u32)) + jitter;
    Duration::from_millis(ms)
}

/// Blocking client for the upstream laundry status API.
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> CoreResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn list_buildings(&self) -> CoreResult<Vec<Building>> {
        self.get_data("/api/buildings")
    }

    pub fn building_machines(&self, building_id: &str) -> CoreResult<BuildingMachines> {
        self.get_data(&format!("/api/buildings/{building_id}/machines"))
    }

    fn get_data<T: DeserializeOwned>(&self, path: &str) -> CoreResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let mut last_err = CoreError::Http(format!("no attempt made for {url}"));

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                let delay = backoff(attempt - 1);
                warn!(%url, attempt, delay_ms = delay.as_millis() as u64, "retrying upstream request");
                thread::sleep(delay);
            }

            let resp = match self.client.get(&url).send() {
                Ok(r) => r,
                Err(e) => {
                    last_err = CoreError::Http(e.to_string());
                    if e.is_timeout() || e.is_connect() {
                        continue;
                    }
                    return Err(last_err);
                }
            };

            let status = resp.status();

            // Read as text first so an error body is not lost when it is not JSON.
            let text = match resp.text() {
                Ok(t) => t,
                Err(e) => {
                    last_err = CoreError::Http(e.to_string());
                    continue;
                }
            };

            if status == StatusCode::NOT_FOUND {
                return Err(CoreError::NotFound(extract_error_message(status, &text)));
            }

            if !status.is_success() {
                last_err = CoreError::Http(extract_error_message(status, &text));
                if should_retry_http(status) {
                    continue;
                }
                return Err(last_err);
            }

            let envelope: ApiResponse<T> = serde_json::from_str(&text)
                .map_err(|e| CoreError::Http(format!("invalid response from {url}: {e}")))?;
            info!(%url, status = status.as_u16(), "upstream request ok");
            return Ok(envelope.data);
        }

        Err(last_err)
    }
}

fn should_retry_http(status: StatusCode) -> bool {
    status == StatusCode::REQUEST_TIMEOUT
        || status == StatusCode::TOO_MANY_REQUESTS
        || status.is_server_error()
}

fn extract_error_message(status: StatusCode, body_text: &str) -> String {
    if let Ok(v) = serde_json::from_str::<serde_json::Value>(body_text) {
        if let Some(msg) = v
            .get("error")
            .and_then(|e| e.get("message"))
            .and_then(|m| m.as_str())
        {
            return format!("HTTP {}: {}", status.as_u16(), msg);
        }
        if let Some(msg) = v.get("message").and_then(|m| m.as_str()) {
            return format!("HTTP {}: {}", status.as_u16(), msg);
        }
    }

    let trimmed = body_text.trim();
    let snippet: String = if trimmed.chars().count() > 400 {
        let head: String = trimmed.chars().take(400).collect();
        format!("{head}...")
    } else {
        trimmed.to_string()
    };

    format!("HTTP {}: {}", status.as_u16(), snippet)
}
