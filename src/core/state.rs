//! # Application State
//!
//! Core state for Lumo. Domain data and selections only; focus and scroll
//! positions live in the `tui` module.
//!
//! ```text
//! App
//! ├── api: Arc<dyn GuestApi>       // remote backend
//! ├── screen: Screen               // which page is showing
//! ├── home: HomeState              // weather, aurora, frozen path
//! ├── info: InfoState              // amenity accordion
//! ├── services: ServicesState      // request list + form
//! ├── vibe: VibeState              // mood + playback
//! └── status_message: String       // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::api::{
    AuroraForecast, DailyEntry, GuestApi, HourlyEntry, PathData, ServiceRequest, WeatherSnapshot,
};
use crate::core::catalog::{DEFAULT_CATEGORY, Icon};
use crate::core::config::ResolvedConfig;
use crate::core::fetch::FetchState;
use crate::core::selection::{TabGroup, Toggle};
use crate::core::services::{RequestForm, ServiceCategory};
use crate::core::vibe::VibeState;

/// Top-level pages, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Home,
    Vibe,
    Info,
    Guest,
}

impl Screen {
    pub const ALL: [Screen; 4] = [Screen::Home, Screen::Vibe, Screen::Info, Screen::Guest];

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Vibe => "Vibe",
            Self::Info => "Info",
            Self::Guest => "Guest",
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            Self::Home => Icon::Feather("home"),
            Self::Vibe => Icon::Feather("music"),
            Self::Info => Icon::Feather("monitor"),
            Self::Guest => Icon::Feather("users"),
        }
    }

    /// Number key (1-4) for this screen.
    pub fn number(self) -> u8 {
        match self {
            Self::Home => 1,
            Self::Vibe => 2,
            Self::Info => 3,
            Self::Guest => 4,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.number() == n)
    }

    /// Parse a screen name from config or CLI. Case-insensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.label().eq_ignore_ascii_case(name.trim()))
    }

    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let i = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Current conditions plus the aurora outlook, fetched together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overview {
    pub weather: Option<WeatherSnapshot>,
    pub aurora: Option<AuroraForecast>,
}

/// Hourly and daily forecasts, fetched together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Forecast {
    pub hourly: Vec<HourlyEntry>,
    pub daily: Vec<DailyEntry>,
}

#[derive(Debug, Default)]
pub struct HomeState {
    pub mounted: bool,
    pub tabs: TabGroup,
    pub overview: FetchState<Overview>,
    pub forecast: FetchState<Forecast>,
    pub path: FetchState<PathData>,
}

#[derive(Debug)]
pub struct InfoState {
    pub expanded_category: Toggle<&'static str>,
    pub expanded_amenity: Toggle<&'static str>,
}

impl Default for InfoState {
    fn default() -> Self {
        Self {
            expanded_category: Toggle::open(DEFAULT_CATEGORY),
            expanded_amenity: Toggle::default(),
        }
    }
}

#[derive(Debug, Default)]
pub struct ServicesState {
    pub mounted: bool,
    pub requests: FetchState<Vec<ServiceRequest>>,
    pub active_category: Toggle<ServiceCategory>,
    pub form: RequestForm,
    /// A submission is in flight.
    pub submitting: bool,
}

impl ServicesState {
    /// The form is open whenever a category is active.
    pub fn show_form(&self) -> bool {
        self.active_category.get().is_some()
    }
}

pub struct App {
    pub api: Arc<dyn GuestApi>,
    pub screen: Screen,
    pub home: HomeState,
    pub info: InfoState,
    pub services: ServicesState,
    pub vibe: VibeState,
    pub status_message: String,
}

impl App {
    pub fn new(api: Arc<dyn GuestApi>) -> Self {
        Self {
            api,
            screen: Screen::default(),
            home: HomeState::default(),
            info: InfoState::default(),
            services: ServicesState::default(),
            vibe: VibeState::default(),
            status_message: String::from("Welcome!"),
        }
    }

    /// Create an App using settings from a resolved config.
    pub fn from_config(api: Arc<dyn GuestApi>, config: &ResolvedConfig) -> Self {
        let mut app = Self::new(api);
        app.screen = config.start_screen;
        app
    }
}
