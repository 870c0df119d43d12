pub mod backend;
pub mod client;
pub mod types;

pub use backend::{ApiError, GuestApi};
pub use client::{Endpoints, HttpClient};
pub use types::{
    AuroraForecast, AuroraHour, DailyEntry, HourlyEntry, Mood, PathData, RequestStatus,
    ServiceRequest, VibeResponse, WeatherSnapshot,
};
