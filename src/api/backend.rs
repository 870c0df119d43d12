use std::fmt;

use async_trait::async_trait;

use super::types::{
    AuroraForecast, DailyEntry, HourlyEntry, Mood, PathData, ServiceRequest, VibeResponse,
    WeatherSnapshot,
};

/// Errors that can occur talking to the guest API.
///
/// None of these are retried. Callers convert them into fallback data or a
/// screen-level message.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Transport failure (DNS, connection refused, reset).
    Network(String),
    /// Server answered outside 200-299.
    Status { status: u16, body: String },
    /// Body was not the JSON we expected.
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Status { status, body } => write!(f, "HTTP {status}: {body}"),
            ApiError::Decode(msg) => write!(f, "decode error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Everything the screens need from the remote API.
///
/// Implementations unwrap response envelopes; callers always get the inner
/// record or list.
#[async_trait]
pub trait GuestApi: Send + Sync {
    /// Returns the name of the backend (for logging).
    fn name(&self) -> &str;

    async fn current_weather(&self) -> Result<WeatherSnapshot, ApiError>;

    async fn hourly_forecast(&self) -> Result<Vec<HourlyEntry>, ApiError>;

    async fn daily_forecast(&self) -> Result<Vec<DailyEntry>, ApiError>;

    async fn aurora_forecast(&self) -> Result<AuroraForecast, ApiError>;

    async fn path_conditions(&self) -> Result<PathData, ApiError>;

    async fn service_requests(&self) -> Result<Vec<ServiceRequest>, ApiError>;

    /// Response body is ignored on success.
    async fn submit_request(&self, request: &ServiceRequest) -> Result<(), ApiError>;

    async fn update_vibe(&self, mood: Mood) -> Result<VibeResponse, ApiError>;
}
