//! `reqwest`-backed implementation of [`ApiTransport`].

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use url::Url;

use crate::config::ClientConfig;

use super::{ApiError, ApiTransport, Method};

/// Error body shape the backend uses for rejected requests.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error_code: Option<String>,
    message: Option<String>,
}

/// HTTP transport over a shared `reqwest` client.
///
/// GET parameters are sent as the query string; POST/PUT/DELETE
/// parameters are sent as a JSON body, matching what the backend's
/// request wrapper expects.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpTransport {
    /// Create a new transport against the configured API base URL.
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.api_url.clone(),
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        Ok(self.base_url.join(path)?)
    }
}

#[async_trait]
impl ApiTransport for HttpTransport {
    async fn request(
        &self,
        method: Method,
        path: &str,
        params: Option<Value>,
    ) -> Result<Value, ApiError> {
        let url = self.endpoint(path)?;

        let mut builder = match method {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
            Method::Put => self.client.put(url),
            Method::Delete => self.client.delete(url),
        };

        if let Some(params) = params {
            builder = match method {
                Method::Get => builder.query(&query_pairs(&params)),
                _ => builder.json(&params),
            };
        }

        let response = builder.send().await?;
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(server_error(status, &text));
        }

        Ok(response.json().await?)
    }
}

/// Flatten a JSON parameter object into query pairs.
///
/// Scalar values lose their JSON quoting (`{"idusers": 3}` becomes
/// `idusers=3`, `{"q": "ana"}` becomes `q=ana`); anything nested is sent
/// as its JSON text.
fn query_pairs(params: &Value) -> Vec<(String, String)> {
    match params {
        Value::Object(map) => map
            .iter()
            .map(|(key, value)| {
                let rendered = match value {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                (key.clone(), rendered)
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// Map a non-success response to [`ApiError::Server`].
///
/// The backend puts `error_code`/`message` in the body of rejected
/// requests; bodies that are not that shape fall back to the status line.
fn server_error(status: reqwest::StatusCode, body: &str) -> ApiError {
    let parsed: Option<ErrorBody> = serde_json::from_str(body).ok();
    let (code, message) = match parsed {
        Some(parsed) => (
            parsed.error_code,
            parsed.message.unwrap_or_else(|| status.to_string()),
        ),
        None => (None, status.to_string()),
    };

    tracing::warn!(%status, code = code.as_deref(), "API request rejected");

    ApiError::Server { code, message }
}
