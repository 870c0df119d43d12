//! Wire types for the guest API.
//!
//! Field names follow the server's camelCase JSON. Envelope enums accept both
//! the wrapped (`{"hourly": [...]}`) and bare (`[...]`) shapes the server has
//! been seen to return.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Weather
// ============================================================================

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WeatherSnapshot {
    pub temp: f64,
    pub high: f64,
    pub low: f64,
    pub condition: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HourlyEntry {
    pub time: String,
    pub temp: f64,
    #[serde(default)]
    pub icon: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DailyEntry {
    pub day: String,
    pub high: f64,
    pub low: f64,
    #[serde(default)]
    pub icon: String,
}

/// `{"weather": {...}}` or the bare record.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum CurrentWeatherEnvelope {
    Wrapped { weather: WeatherSnapshot },
    Bare(WeatherSnapshot),
}

impl CurrentWeatherEnvelope {
    pub fn into_inner(self) -> WeatherSnapshot {
        match self {
            Self::Wrapped { weather } => weather,
            Self::Bare(weather) => weather,
        }
    }
}

#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum HourlyEnvelope {
    Wrapped { hourly: Vec<HourlyEntry> },
    Bare(Vec<HourlyEntry>),
}

impl HourlyEnvelope {
    pub fn into_inner(self) -> Vec<HourlyEntry> {
        match self {
            Self::Wrapped { hourly } => hourly,
            Self::Bare(hourly) => hourly,
        }
    }
}

#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum DailyEnvelope {
    Wrapped { daily: Vec<DailyEntry> },
    Bare(Vec<DailyEntry>),
}

impl DailyEnvelope {
    pub fn into_inner(self) -> Vec<DailyEntry> {
        match self {
            Self::Wrapped { daily } => daily,
            Self::Bare(daily) => daily,
        }
    }
}

// ============================================================================
// Aurora
// ============================================================================

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuroraForecast {
    pub kp_index: f64,
    pub visibility: String,
    pub best_time: String,
    pub location: String,
    #[serde(default)]
    pub forecast: Vec<AuroraHour>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AuroraHour {
    pub time: String,
    /// 0-10 scale.
    pub intensity: f64,
}

#[derive(Deserialize, Debug)]
pub struct AuroraEnvelope {
    pub aurora: AuroraForecast,
}

// ============================================================================
// Frozen path
// ============================================================================

/// Ice status of the lakeside path.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PathData {
    pub temperature: f64,
    pub warning: bool,
    pub timestamp: String,
}

impl Default for PathData {
    fn default() -> Self {
        Self {
            temperature: 0.0,
            warning: false,
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

impl PathData {
    /// "Jan 5, 3:04 PM" style, or the raw string if it isn't RFC 3339.
    pub fn updated_label(&self) -> String {
        match DateTime::parse_from_rfc3339(&self.timestamp) {
            Ok(ts) => ts
                .with_timezone(&Local)
                .format("%b %-d, %-I:%M %p")
                .to_string(),
            Err(_) => self.timestamp.clone(),
        }
    }
}

// ============================================================================
// Guest services
// ============================================================================

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Processing,
    Completed,
}

impl RequestStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Processing => "Processing",
            Self::Completed => "Completed",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ServiceRequest {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: RequestStatus,
    pub time: String,
}

/// `{"requests": [...]}`, a bare array, or anything else (treated as empty).
///
/// Records stay raw until [`ServicesEnvelope::into_inner`] so a list with a
/// bad record is reported instead of falling through to `Other`.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum ServicesEnvelope {
    Wrapped { requests: Vec<serde_json::Value> },
    Bare(Vec<serde_json::Value>),
    Other(serde_json::Value),
}

impl ServicesEnvelope {
    pub fn into_inner(self) -> Result<Vec<ServiceRequest>, serde_json::Error> {
        match self {
            Self::Wrapped { requests } | Self::Bare(requests) => requests
                .into_iter()
                .map(serde_json::from_value)
                .collect(),
            Self::Other(_) => Ok(Vec::new()),
        }
    }
}

// ============================================================================
// Vibe
// ============================================================================

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Fun,
    Energetic,
    Romantic,
    Calm,
}

impl Mood {
    pub const ALL: [Mood; 4] = [Mood::Fun, Mood::Energetic, Mood::Romantic, Mood::Calm];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fun => "fun",
            Self::Energetic => "energetic",
            Self::Romantic => "romantic",
            Self::Calm => "calm",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Fun => "Fun",
            Self::Energetic => "Energetic",
            Self::Romantic => "Romantic",
            Self::Calm => "Calm",
        }
    }
}

#[derive(Serialize, Debug)]
pub struct VibeRequest {
    pub mood: Mood,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VibeResponse {
    #[serde(default)]
    pub music_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_services_envelope_accepts_wrapper() {
        let json = r#"{"requests":[{"id":"a","title":"t","description":"d","status":"processing","time":"Now"}]}"#;
        let env: ServicesEnvelope = serde_json::from_str(json).unwrap();
        let requests = env.into_inner().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].status, RequestStatus::Processing);
    }

    #[test]
    fn test_services_envelope_accepts_bare_array() {
        let json = r#"[{"id":"a","title":"t","description":"d","status":"completed","time":"Now"}]"#;
        let env: ServicesEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(env.into_inner().unwrap()[0].id, "a");
    }

    #[test]
    fn test_services_envelope_unknown_shape_is_empty() {
        let env: ServicesEnvelope = serde_json::from_str(r#"{"items": 3}"#).unwrap();
        assert!(env.into_inner().unwrap().is_empty());
    }

    #[test]
    fn test_services_list_with_bad_record_is_an_error() {
        let json = r#"{"requests":[
            {"id":"a","title":"t","description":"d","status":"pending","time":"Now"},
            {"id":"b","title":"t","description":"d","status":"cancelled","time":"Now"}
        ]}"#;
        let env: ServicesEnvelope = serde_json::from_str(json).unwrap();
        assert!(env.into_inner().is_err());

        let missing_time = r#"[{"id":"a","title":"t","description":"d","status":"pending"}]"#;
        let env: ServicesEnvelope = serde_json::from_str(missing_time).unwrap();
        assert!(env.into_inner().is_err());
    }

    #[test]
    fn test_current_weather_wrapped_and_bare() {
        let wrapped = r#"{"weather":{"temp":-3,"high":0,"low":-8,"condition":"Snow"}}"#;
        let bare = r#"{"temp":-3,"high":0,"low":-8,"condition":"Snow"}"#;
        let a: CurrentWeatherEnvelope = serde_json::from_str(wrapped).unwrap();
        let b: CurrentWeatherEnvelope = serde_json::from_str(bare).unwrap();
        assert_eq!(a.into_inner(), b.into_inner());
    }

    #[test]
    fn test_daily_entry_missing_icon_defaults_empty() {
        let env: DailyEnvelope =
            serde_json::from_str(r#"{"daily":[{"day":"Mon","high":5,"low":-2}]}"#).unwrap();
        let daily = env.into_inner();
        assert_eq!(daily[0].day, "Mon");
        assert!(daily[0].icon.is_empty());
    }

    #[test]
    fn test_aurora_camel_case_fields() {
        let json = r#"{"aurora":{"kpIndex":5,"visibility":"High","bestTime":"22:00 - 02:00","location":"Ukkohalla","forecast":[{"time":"21:00","intensity":4}]}}"#;
        let env: AuroraEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(env.aurora.kp_index, 5.0);
        assert_eq!(env.aurora.best_time, "22:00 - 02:00");
        assert_eq!(env.aurora.forecast.len(), 1);
    }

    #[test]
    fn test_vibe_response_empty_object() {
        let resp: VibeResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(resp.music_url, None);
    }

    #[test]
    fn test_mood_serializes_lowercase() {
        let body = serde_json::to_string(&VibeRequest { mood: Mood::Energetic }).unwrap();
        assert_eq!(body, r#"{"mood":"energetic"}"#);
    }

    #[test]
    fn test_path_updated_label_falls_back_to_raw() {
        let path = PathData {
            temperature: -1.0,
            warning: true,
            timestamp: "yesterday".to_string(),
        };
        assert_eq!(path.updated_label(), "yesterday");
    }
}
