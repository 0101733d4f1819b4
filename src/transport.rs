//! HTTP transport shared by every gateway operation

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

use crate::error::{LiPayError, Result, DEFAULT_ERROR_MESSAGE};

/// JSON-over-POST transport for the gateway API
#[derive(Debug, Clone)]
pub struct Transport {
    base_url: String,
    client: Client,
}

impl Transport {
    /// Create a transport for the given base URL and request timeout
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            base_url: base_url.into(),
            client,
        }
    }

    /// Base URL this transport talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn join_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// POST `body` as JSON to `path`, attaching a bearer token when given.
    ///
    /// The response body is decoded before the status check, so a non-JSON
    /// body always maps to `ResponseFormat`; for a parseable body an HTTP
    /// status >= 400 then wins over whatever the body claims. A 2xx response
    /// with missing business fields is left for the caller to interpret.
    pub async fn post_json<Req, Res>(
        &self,
        path: &str,
        body: &Req,
        token: Option<&str>,
    ) -> Result<Res>
    where
        Req: Serialize + ?Sized,
        Res: DeserializeOwned,
    {
        let url = self.join_url(path);
        debug!("POST {}", url);

        let mut request = self
            .client
            .post(&url)
            .header("Accept", "application/json")
            .json(body);

        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        let parsed: Value = serde_json::from_str(&text)?;

        if status.as_u16() >= 400 {
            let message = parsed
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or(DEFAULT_ERROR_MESSAGE);
            warn!("gateway returned HTTP {} for {}: {}", status, url, message);
            return Err(LiPayError::api(status.as_u16(), message));
        }

        Ok(serde_json::from_value(parsed)?)
    }
}
