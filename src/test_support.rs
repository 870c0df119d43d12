//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;

use crate::api::{
    ApiError, AuroraForecast, AuroraHour, DailyEntry, GuestApi, HourlyEntry, Mood, PathData,
    ServiceRequest, VibeResponse, WeatherSnapshot,
};

/// A backend for tests that don't need real API calls. Every read
/// fails with a network error; writes succeed.
pub struct StubApi;

fn offline<T>() -> Result<T, ApiError> {
    Err(ApiError::Network("stub backend".to_string()))
}

#[async_trait]
impl GuestApi for StubApi {
    fn name(&self) -> &str {
        "stub"
    }

    async fn current_weather(&self) -> Result<WeatherSnapshot, ApiError> {
        offline()
    }

    async fn hourly_forecast(&self) -> Result<Vec<HourlyEntry>, ApiError> {
        offline()
    }

    async fn daily_forecast(&self) -> Result<Vec<DailyEntry>, ApiError> {
        offline()
    }

    async fn aurora_forecast(&self) -> Result<AuroraForecast, ApiError> {
        offline()
    }

    async fn path_conditions(&self) -> Result<PathData, ApiError> {
        offline()
    }

    async fn service_requests(&self) -> Result<Vec<ServiceRequest>, ApiError> {
        offline()
    }

    async fn submit_request(&self, _request: &ServiceRequest) -> Result<(), ApiError> {
        Ok(())
    }

    async fn update_vibe(&self, _mood: Mood) -> Result<VibeResponse, ApiError> {
        Ok(VibeResponse::default())
    }
}

/// Creates a test App with a StubApi.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(Arc::new(StubApi))
}

pub fn sample_weather() -> WeatherSnapshot {
    WeatherSnapshot {
        temp: -4.0,
        high: -1.0,
        low: -9.0,
        condition: "Light Snow".to_string(),
    }
}

pub fn sample_aurora() -> AuroraForecast {
    AuroraForecast {
        kp_index: 5.0,
        visibility: "Good".to_string(),
        best_time: "22:00 - 02:00".to_string(),
        location: "Syväjärvi".to_string(),
        forecast: vec![
            AuroraHour {
                time: "21:00".to_string(),
                intensity: 3.0,
            },
            AuroraHour {
                time: "23:00".to_string(),
                intensity: 8.0,
            },
        ],
    }
}
