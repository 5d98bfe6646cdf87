use std::time::Duration;

use serde::Serialize;
use tracing::debug;

use super::dto::{PredictRequest, SeriesPoint, StaffingRequest};
use crate::error::ApiError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Thin HTTP client for the external forecasting/staffing service. Each call
/// is a single request/response exchange with no retries.
#[derive(Clone)]
pub struct ForecastClient {
    http: reqwest::Client,
    base_url: String,
}

impl ForecastClient {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Ships the full survey history to the ingestion endpoint. The service
    /// takes a bare JSON array of points.
    pub async fn receive_data(&self, points: &[SeriesPoint]) -> Result<String, ApiError> {
        self.post_json("/receive-data", points).await
    }

    pub async fn predict(&self, data: Vec<SeriesPoint>, periods: u32) -> Result<String, ApiError> {
        self.post_json("/predict", &PredictRequest { data, periods })
            .await
    }

    pub async fn staffing(&self, max_staff: i32, day: String) -> Result<String, ApiError> {
        self.post_json("/staffing", &StaffingRequest { max_staff, day })
            .await
    }

    async fn post_json<T: Serialize + ?Sized>(
        &self,
        path: &str,
        payload: &T,
    ) -> Result<String, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "calling forecast service");

        let response = self
            .http
            .post(&url)
            .json(payload)
            .send()
            .await
            .map_err(|e| ApiError::UpstreamUnreachable(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::UpstreamUnreachable(e.to_string()))?;

        if !status.is_success() {
            return Err(ApiError::UpstreamRejected {
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped_from_base_url() {
        let client = ForecastClient::new("http://localhost:5002/").expect("client");
        assert_eq!(client.base_url(), "http://localhost:5002");
    }
}
