//! reqwest implementation of [`GuestApi`].
//!
//! Most endpoints hang off the configured base URL. The current-weather and
//! ice-status endpoints have their own absolute URLs because the deployed
//! backend serves them from a different host; both default to the base URL
//! when not configured separately.

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;

use super::backend::{ApiError, GuestApi};
use super::types::{
    AuroraEnvelope, AuroraForecast, CurrentWeatherEnvelope, DailyEntry, DailyEnvelope,
    HourlyEntry, HourlyEnvelope, Mood, PathData, ServiceRequest, ServicesEnvelope, VibeRequest,
    VibeResponse, WeatherSnapshot,
};

pub const SERVICES_PATH: &str = "/api/guest/services";
pub const SUBMIT_SERVICE_PATH: &str = "/api/guest/service";
pub const HOURLY_PATH: &str = "/api/weather/hourly";
pub const DAILY_PATH: &str = "/api/weather/daily";
pub const AURORA_PATH: &str = "/api/aurora/forecast";
pub const CURRENT_WEATHER_PATH: &str = "/api/weather/current";
pub const ICE_STATUS_PATH: &str = "/api/temperature/ice-status";
pub const VIBE_PATH: &str = "/api/vibe/update";

/// Resolved endpoint locations.
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoints {
    pub base_url: String,
    pub current_weather_url: String,
    pub ice_status_url: String,
}

impl Endpoints {
    /// All endpoints under one base URL.
    pub fn from_base(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/').to_string();
        Self {
            current_weather_url: format!("{base}{CURRENT_WEATHER_PATH}"),
            ice_status_url: format!("{base}{ICE_STATUS_PATH}"),
            base_url: base,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Guest API over HTTP. No auth, no retries, transport-default timeouts.
pub struct HttpClient {
    endpoints: Endpoints,
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new(endpoints: Endpoints) -> Self {
        info!(
            "HTTP client: base={}, current_weather={}, ice_status={}",
            endpoints.base_url, endpoints.current_weather_url, endpoints.ice_status_url
        );
        Self {
            endpoints,
            client: reqwest::Client::new(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(check_status(response).await?).await
    }

    async fn post_json<B: serde::Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<reqwest::Response, ApiError> {
        debug!("POST {}", url);
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(response).await
    }
}

/// Turns a non-2xx response into `ApiError::Status`, keeping the body text
/// for the log.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "unknown error".to_string());
    warn!("API error: {} - {}", status.as_u16(), body);
    Err(ApiError::Status {
        status: status.as_u16(),
        body,
    })
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let bytes = response
        .bytes()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait]
impl GuestApi for HttpClient {
    fn name(&self) -> &str {
        "http"
    }

    async fn current_weather(&self) -> Result<WeatherSnapshot, ApiError> {
        let envelope: CurrentWeatherEnvelope =
            self.get_json(&self.endpoints.current_weather_url).await?;
        Ok(envelope.into_inner())
    }

    async fn hourly_forecast(&self) -> Result<Vec<HourlyEntry>, ApiError> {
        let envelope: HourlyEnvelope = self.get_json(&self.endpoints.url(HOURLY_PATH)).await?;
        Ok(envelope.into_inner())
    }

    async fn daily_forecast(&self) -> Result<Vec<DailyEntry>, ApiError> {
        let envelope: DailyEnvelope = self.get_json(&self.endpoints.url(DAILY_PATH)).await?;
        Ok(envelope.into_inner())
    }

    async fn aurora_forecast(&self) -> Result<AuroraForecast, ApiError> {
        let envelope: AuroraEnvelope = self.get_json(&self.endpoints.url(AURORA_PATH)).await?;
        Ok(envelope.aurora)
    }

    async fn path_conditions(&self) -> Result<PathData, ApiError> {
        self.get_json(&self.endpoints.ice_status_url).await
    }

    async fn service_requests(&self) -> Result<Vec<ServiceRequest>, ApiError> {
        let envelope: ServicesEnvelope =
            self.get_json(&self.endpoints.url(SERVICES_PATH)).await?;
        envelope
            .into_inner()
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn submit_request(&self, request: &ServiceRequest) -> Result<(), ApiError> {
        info!("Submitting service request {} ({})", request.id, request.title);
        self.post_json(&self.endpoints.url(SUBMIT_SERVICE_PATH), request)
            .await
            .map(|_| ())
    }

    async fn update_vibe(&self, mood: Mood) -> Result<VibeResponse, ApiError> {
        info!("Requesting music for mood: {}", mood.as_str());
        let response = self
            .post_json(&self.endpoints.url(VIBE_PATH), &VibeRequest { mood })
            .await?;
        decode(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_from_base_trims_slash() {
        let endpoints = Endpoints::from_base("http://example.test/");
        assert_eq!(endpoints.base_url, "http://example.test");
        assert_eq!(
            endpoints.current_weather_url,
            "http://example.test/api/weather/current"
        );
        assert_eq!(
            endpoints.ice_status_url,
            "http://example.test/api/temperature/ice-status"
        );
        assert_eq!(
            endpoints.url(SERVICES_PATH),
            "http://example.test/api/guest/services"
        );
    }
}
