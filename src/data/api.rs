use std::time::Duration;

use chrono::NaiveDate;
use reqwest::{Client, StatusCode};

use super::shared_booking::{AvailabilityResponse, ReservationRequest, ReservationResponse};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("backend responded with status {0}")]
    Status(StatusCode),

    #[error("request to backend failed: {0}")]
    Transport(reqwest::Error),

    #[error("could not decode backend response: {0}")]
    Decode(reqwest::Error),

    #[error("could not build http client: {0}")]
    Client(reqwest::Error),
}

/// Thin client for the reservation backend.
#[derive(Debug, Clone)]
pub struct ReservationClient {
    http: Client,
    base_url: String,
}

impl ReservationClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(timeout);
        #[cfg(target_arch = "wasm32")]
        let _ = timeout;

        Ok(Self {
            http: builder.build().map_err(ApiError::Client)?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn availability_url(&self, date: NaiveDate) -> String {
        let date = date.format("%Y-%m-%d").to_string();
        format!(
            "{}/reservations/availability?date={}",
            self.base_url,
            urlencoding::encode(&date)
        )
    }

    pub fn reservations_url(&self) -> String {
        format!("{}/reservations", self.base_url)
    }

    pub async fn fetch_availability(&self, date: NaiveDate) -> Result<AvailabilityResponse, ApiError> {
        let response = self
            .http
            .get(self.availability_url(date))
            .send()
            .await
            .map_err(ApiError::Transport)?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }

        response.json().await.map_err(ApiError::Decode)
    }

    pub async fn create_reservation(
        &self,
        request: &ReservationRequest,
    ) -> Result<ReservationResponse, ApiError> {
        let response = self
            .http
            .post(self.reservations_url())
            .json(request)
            .send()
            .await
            .map_err(ApiError::Transport)?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }

        response.json().await.map_err(ApiError::Decode)
    }
}
