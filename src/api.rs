use std::time::Duration;

use reqwest::StatusCode;
use serde_json::Value;
use tracing::debug;

use crate::error::PollError;

/// Homework review API endpoint.
pub const ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the homework review API.
pub struct StatusClient {
    client: reqwest::Client,
    endpoint: String,
    token: String,
}

impl StatusClient {
    pub fn new(token: String) -> reqwest::Result<Self> {
        Self::with_endpoint(token, ENDPOINT.to_string())
    }

    /// Point the client at a different endpoint (tests use a local server).
    pub fn with_endpoint(token: String, endpoint: String) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            endpoint,
            token,
        })
    }

    /// One poll of the review API: everything published since `from_date`.
    ///
    /// Returns the raw body; shape checking is the caller's job
    /// (see [`crate::homework::validate`]).
    pub async fn fetch(&self, from_date: i64) -> Result<Value, PollError> {
        let from_date = clamp_cursor(from_date);
        debug!("Requesting homework statuses since {}", from_date);

        let response = self
            .client
            .get(&self.endpoint)
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|source| PollError::Fetch {
                endpoint: self.endpoint.clone(),
                source,
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            let body: Value = response.json().await.unwrap_or(Value::Null);
            return Err(PollError::BadStatus {
                endpoint: self.endpoint.clone(),
                status,
                detail: error_detail(&body),
            });
        }

        response.json().await.map_err(|source| PollError::Fetch {
            endpoint: self.endpoint.clone(),
            source,
        })
    }
}

/// The API expects `from_date` to be a past Unix timestamp; anything
/// negative or in the future falls back to the current time.
fn clamp_cursor(cursor: i64) -> i64 {
    let now = chrono::Utc::now().timestamp();
    if (0..=now).contains(&cursor) {
        cursor
    } else {
        now
    }
}

/// Pull the optional `error`/`code` fields out of an API error body.
fn error_detail(body: &Value) -> String {
    let mut detail = String::new();
    if let Some(error) = body.get("error") {
        detail.push_str(&format!(", error: {}", error));
    }
    if let Some(code) = body.get("code") {
        detail.push_str(&format!(", code: {}", code));
    }
    detail
}
