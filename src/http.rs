//! Shared HTTP client for the study-planner backend
//!
//! One pre-configured `reqwest::Client` is shared by every API call: fixed
//! base URL, connect/read timeouts, JSON content type. No retry and no auth;
//! failures surface as [`ClientError`].

use std::time::Duration;

use reqwest::{
    Client, Response, StatusCode,
    header::{CONTENT_TYPE, HeaderMap, HeaderValue},
};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, error};

use crate::config::HttpClientConfig;
use crate::error::{ClientError, Result};

/// Pre-configured HTTP client shared by all API operations
pub struct StudyPlanHttpClient {
    client: Client,
    config: HttpClientConfig,
}

impl StudyPlanHttpClient {
    /// Create a new HTTP client
    pub fn new(config: HttpClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .timeout(Duration::from_millis(config.read_timeout_ms))
            .default_headers(headers)
            .build()?;

        Ok(Self { client, config })
    }

    /// Configuration this client was built with
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// Build full URL for a path
    fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.build_url(path);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        self.handle_response(response).await
    }

    /// Make a POST request with a JSON body
    pub async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.build_url(path);
        debug!("POST {}", url);

        let response = self.client.post(&url).json(body).send().await?;
        self.handle_response(response).await
    }

    /// Make a DELETE request, discarding the response body
    pub async fn delete(&self, path: &str) -> Result<()> {
        let url = self.build_url(path);
        debug!("DELETE {}", url);

        let response = self.client.delete(&url).send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(())
        } else {
            Err(self.status_error(status, response).await)
        }
    }

    /// Handle response and parse JSON
    async fn handle_response<T: DeserializeOwned>(&self, response: Response) -> Result<T> {
        let status = response.status();

        if status.is_success() {
            let result = response.json::<T>().await?;
            Ok(result)
        } else {
            Err(self.status_error(status, response).await)
        }
    }

    async fn status_error(&self, status: StatusCode, response: Response) -> ClientError {
        let body = response.text().await.unwrap_or_default();
        error!("request failed with status {}: {}", status, body);
        ClientError::RequestFailed {
            status: status.as_u16(),
            body,
        }
    }
}
