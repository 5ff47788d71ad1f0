use std::sync::OnceLock;

use super::api::{ApiError, ReservationClient};
use crate::settings::Settings;

static RESERVATION_CLIENT: OnceLock<ReservationClient> = OnceLock::new();

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("reservation backend is not configured")]
    NotConfigured,

    #[error("reservation backend already configured")]
    AlreadyConfigured,

    #[error(transparent)]
    Api(#[from] ApiError),
}

pub struct ReservationBackend;

impl ReservationBackend {
    /// Installs the process-wide client. Called once at server start.
    pub fn init(settings: &Settings) -> Result<&'static ReservationClient, BackendError> {
        let client = ReservationClient::new(&settings.api_base_url, settings.request_timeout())?;
        RESERVATION_CLIENT
            .set(client)
            .map_err(|_| BackendError::AlreadyConfigured)?;
        Self::client()
    }

    pub fn client() -> Result<&'static ReservationClient, BackendError> {
        RESERVATION_CLIENT.get().ok_or(BackendError::NotConfigured)
    }
}
