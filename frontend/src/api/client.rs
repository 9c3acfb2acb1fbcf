use reqwest::Client;
use serde_json::Value;

use crate::{api::types::ApiError, config};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    /// Pins the base URL instead of resolving it from the runtime config.
    /// Tests point this at a mock server.
    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    /// GET a collection endpoint and hand back the raw JSON body. Callers
    /// validate the payload shape themselves; the service is known to wrap
    /// or mis-shape some collections.
    pub(crate) async fn get_value(&self, path: &str) -> Result<Value, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .client
            .get(format!("{}{}", base_url, path))
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::request_failed(format!("Failed to parse response: {}", e)))
        } else {
            let error = response
                .json::<ApiError>()
                .await
                .unwrap_or_else(|_| ApiError::request_failed(format!("HTTP {}", status)));
            Err(error)
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
