//! Weather and aurora presentation rules that don't depend on the renderer.

use crate::api::DailyEntry;

/// The daily card only ever shows this many days.
pub const DAILY_LIMIT: usize = 3;

/// Entries the "3-Day Forecast" card renders.
pub fn visible_daily(forecast: &[DailyEntry]) -> &[DailyEntry] {
    &forecast[..forecast.len().min(DAILY_LIMIT)]
}

/// Coarse weather condition picked from the free-text condition string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionKind {
    Rain,
    Drizzle,
    Snow,
    Thunder,
    Fog,
    PartlyCloudy,
    Cloudy,
    Clear,
    /// Anything unrecognised.
    Mild,
}

impl ConditionKind {
    /// Keyword match, first hit wins. Order matters: "partly cloudy" must be
    /// checked before "cloud".
    pub fn from_condition(condition: &str) -> Self {
        let c = condition.to_lowercase();
        if c.contains("rain") {
            Self::Rain
        } else if c.contains("drizzle") {
            Self::Drizzle
        } else if c.contains("snow") {
            Self::Snow
        } else if c.contains("thunder") || c.contains("lightning") {
            Self::Thunder
        } else if c.contains("fog") || c.contains("mist") {
            Self::Fog
        } else if c.contains("cloud") && c.contains("part") {
            Self::PartlyCloudy
        } else if c.contains("cloud") {
            Self::Cloudy
        } else if c.contains("clear") || c.contains("sun") {
            Self::Clear
        } else {
            Self::Mild
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::Rain => "🌧",
            Self::Drizzle => "🌦",
            Self::Snow => "🌨",
            Self::Thunder => "⛈",
            Self::Fog => "🌫",
            Self::PartlyCloudy | Self::Mild => "⛅",
            Self::Cloudy => "☁",
            Self::Clear => "☀",
        }
    }
}

/// "5", "-2.5". Whole numbers drop the decimal.
pub fn format_temp(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}°", value as i64)
    } else {
        format!("{value:.1}°")
    }
}

/// Viewing likelihood for a KP index (0-9).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KpBand {
    Excellent,
    Good,
    Possible,
    Unlikely,
}

impl KpBand {
    pub fn from_kp(kp: f64) -> Self {
        if kp >= 7.0 {
            Self::Excellent
        } else if kp >= 5.0 {
            Self::Good
        } else if kp >= 3.0 {
            Self::Possible
        } else {
            Self::Unlikely
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Possible => "Possible",
            Self::Unlikely => "Unlikely",
        }
    }
}

/// Colour band of an hourly aurora intensity (0-10).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntensityBand {
    Strong,
    Moderate,
    Weak,
}

impl IntensityBand {
    pub fn from_intensity(intensity: f64) -> Self {
        if intensity >= 7.0 {
            Self::Strong
        } else if intensity >= 4.0 {
            Self::Moderate
        } else {
            Self::Weak
        }
    }
}

/// Fraction of a bar to fill for an intensity on the 0-10 scale, clamped.
pub fn intensity_fill(intensity: f64) -> f64 {
    (intensity / 10.0).clamp(0.0, 1.0)
}

pub const VIEWING_TIP: &str = "For best viewing, find a location away from city lights with clear skies and a good view of the northern horizon.";

#[cfg(test)]
mod tests {
    use super::*;

    fn day(name: &str) -> DailyEntry {
        DailyEntry {
            day: name.to_string(),
            high: 5.0,
            low: -2.0,
            icon: "x".to_string(),
        }
    }

    #[test]
    fn test_visible_daily_caps_at_three() {
        let forecast: Vec<_> = ["Mon", "Tue", "Wed", "Thu", "Fri"].map(day).into();
        let visible = visible_daily(&forecast);
        assert_eq!(visible.len(), 3);
        assert_eq!(visible[2].day, "Wed");
    }

    #[test]
    fn test_visible_daily_short_list_untouched() {
        let forecast = vec![day("Mon")];
        assert_eq!(visible_daily(&forecast).len(), 1);
        assert!(visible_daily(&[]).is_empty());
    }

    #[test]
    fn test_condition_keywords() {
        assert_eq!(ConditionKind::from_condition("Light Rain"), ConditionKind::Rain);
        assert_eq!(ConditionKind::from_condition("Partly Cloudy"), ConditionKind::PartlyCloudy);
        assert_eq!(ConditionKind::from_condition("Cloudy"), ConditionKind::Cloudy);
        assert_eq!(ConditionKind::from_condition("Mist"), ConditionKind::Fog);
        assert_eq!(ConditionKind::from_condition("Sunny"), ConditionKind::Clear);
        assert_eq!(ConditionKind::from_condition("Lightning"), ConditionKind::Thunder);
        assert_eq!(ConditionKind::from_condition(""), ConditionKind::Mild);
    }

    #[test]
    fn test_format_temp() {
        assert_eq!(format_temp(5.0), "5°");
        assert_eq!(format_temp(-2.0), "-2°");
        assert_eq!(format_temp(-2.5), "-2.5°");
    }

    #[test]
    fn test_kp_bands() {
        assert_eq!(KpBand::from_kp(8.0).label(), "Excellent");
        assert_eq!(KpBand::from_kp(7.0).label(), "Excellent");
        assert_eq!(KpBand::from_kp(5.5).label(), "Good");
        assert_eq!(KpBand::from_kp(3.0).label(), "Possible");
        assert_eq!(KpBand::from_kp(2.9).label(), "Unlikely");
    }

    #[test]
    fn test_intensity_fill_clamped() {
        assert_eq!(intensity_fill(5.0), 0.5);
        assert_eq!(intensity_fill(12.0), 1.0);
        assert_eq!(intensity_fill(-1.0), 0.0);
        assert_eq!(IntensityBand::from_intensity(4.0), IntensityBand::Moderate);
    }
}
