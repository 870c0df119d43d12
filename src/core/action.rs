//! # Actions
//!
//! Everything that can happen in Lumo becomes an `Action`.
//! Guest presses Enter on a mood? That's `Action::SelectMood(mood)`.
//! The forecast arrives? That's `Action::ForecastLoaded { .. }`.
//!
//! The `update()` function applies an action to the state and returns an
//! `Effect` describing any I/O the adapter should start. No side effects here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use chrono::Local;
use log::{debug, info, warn};

use crate::api::{
    ApiError, AuroraForecast, DailyEntry, HourlyEntry, Mood, PathData, ServiceRequest,
    VibeResponse, WeatherSnapshot,
};
use crate::core::fetch::Fetched;
use crate::core::selection::HomeTab;
use crate::core::services::{ServiceCategory, build_request};
use crate::core::state::{App, Screen};

pub const AURORA_ERROR: &str = "Failed to fetch aurora data";
pub const WEATHER_ERROR: &str = "Failed to fetch weather data";
pub const HOURLY_ERROR: &str = "Failed to fetch hourly weather data";
pub const DAILY_ERROR: &str = "Failed to fetch daily weather data";
pub const PATH_ERROR: &str = "Could not load path data. Please try again later.";
pub const SERVICES_ERROR: &str = "Failed to fetch service requests";

/// Which request-form field an edit applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    RequestType,
    Details,
    PreferredTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    Insert(char),
    Paste(String),
    Backspace,
    /// Next option (request type only).
    Next,
    /// Previous option (request type only).
    Prev,
}

#[derive(Debug)]
pub enum Action {
    Quit,
    ShowScreen(Screen),
    /// Re-run the current screen's fetches.
    Refresh,

    // Home
    SelectTab(HomeTab),
    RetryPath,

    // Info
    ToggleCategory(&'static str),
    ToggleAmenity(&'static str),

    // Guest services
    SelectServiceCategory(ServiceCategory),
    CancelRequestForm,
    EditForm { field: FormField, edit: FieldEdit },
    SubmitRequest,

    // Vibe
    SelectMood(Mood),
    TogglePlayback,

    // Results from background tasks
    OverviewLoaded {
        generation: u64,
        aurora: Result<AuroraForecast, ApiError>,
        weather: Result<WeatherSnapshot, ApiError>,
    },
    ForecastLoaded {
        generation: u64,
        hourly: Result<Vec<HourlyEntry>, ApiError>,
        daily: Result<Vec<DailyEntry>, ApiError>,
    },
    PathLoaded {
        generation: u64,
        result: Result<PathData, ApiError>,
    },
    ServicesLoaded {
        generation: u64,
        fetched: Fetched<Vec<ServiceRequest>>,
    },
    RequestSubmitted(Result<(), ApiError>),
    MusicGenerated {
        mood: Mood,
        result: Result<VibeResponse, ApiError>,
    },
}

/// What a fetch task should load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchTarget {
    /// Aurora + current weather, joined.
    Overview,
    /// Hourly + daily forecast, joined.
    Forecast,
    Path,
    Services,
}

/// A fetch to start, tagged with the attempt it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub target: FetchTarget,
    pub generation: u64,
}

/// I/O the adapter must perform after an update.
#[derive(Debug, PartialEq)]
pub enum Effect {
    None,
    Quit,
    Fetch(Vec<FetchTicket>),
    Submit(ServiceRequest),
    GenerateMusic(Mood),
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Quit => Effect::Quit,

        Action::ShowScreen(screen) => {
            if app.screen != screen {
                debug!("Screen: {:?} -> {:?}", app.screen, screen);
            }
            app.screen = screen;
            app.status_message = screen.label().to_string();
            mount(app, screen)
        }

        Action::Refresh => {
            info!("Refreshing {:?}", app.screen);
            let screen = app.screen;
            fetch_screen(app, screen)
        }

        Action::SelectTab(tab) => {
            app.home.tabs.select(tab);
            Effect::None
        }

        Action::RetryPath => {
            if app.home.path.loading {
                return Effect::None;
            }
            let generation = app.home.path.begin();
            Effect::Fetch(vec![FetchTicket {
                target: FetchTarget::Path,
                generation,
            }])
        }

        Action::ToggleCategory(id) => {
            app.info.expanded_category.toggle(id);
            Effect::None
        }

        Action::ToggleAmenity(id) => {
            app.info.expanded_amenity.toggle(id);
            Effect::None
        }

        Action::SelectServiceCategory(category) => {
            let services = &mut app.services;
            if services.submitting {
                return Effect::None;
            }
            if let Some(active) = services.active_category.toggle(category)
                && !active.options().contains(&services.form.request_type.as_str())
            {
                services.form.request_type.clear();
            }
            Effect::None
        }

        Action::CancelRequestForm => {
            if !app.services.submitting {
                app.services.active_category.clear();
            }
            Effect::None
        }

        Action::EditForm { field, edit } => {
            edit_form(app, field, edit);
            Effect::None
        }

        Action::SubmitRequest => {
            let services = &mut app.services;
            let Some(category) = services.active_category.get() else {
                return Effect::None;
            };
            if services.submitting {
                return Effect::None;
            }
            services.submitting = true;
            app.status_message = "Submitting request...".to_string();
            Effect::Submit(build_request(category, &services.form, Local::now()))
        }

        Action::SelectMood(mood) => match app.vibe.select(mood) {
            Some(mood) => {
                app.status_message = format!("{} Vibes", mood.label());
                Effect::GenerateMusic(mood)
            }
            None => Effect::None,
        },

        Action::TogglePlayback => {
            app.vibe.toggle_playback();
            Effect::None
        }

        Action::OverviewLoaded {
            generation,
            aurora,
            weather,
        } => {
            let overview = &mut app.home.overview;
            if !overview.is_current(generation) {
                debug!("Dropping stale overview (generation {})", generation);
                return Effect::None;
            }
            match aurora {
                Ok(data) => overview.data.aurora = Some(data),
                Err(e) => {
                    warn!("Error fetching aurora data: {}", e);
                    overview.fail(AURORA_ERROR);
                }
            }
            match weather {
                Ok(data) => overview.data.weather = Some(data),
                Err(e) => {
                    warn!("Error fetching weather data: {}", e);
                    overview.fail(WEATHER_ERROR);
                }
            }
            overview.finish();
            Effect::None
        }

        Action::ForecastLoaded {
            generation,
            hourly,
            daily,
        } => {
            let forecast = &mut app.home.forecast;
            if !forecast.is_current(generation) {
                debug!("Dropping stale forecast (generation {})", generation);
                return Effect::None;
            }
            match hourly {
                Ok(data) => forecast.data.hourly = data,
                Err(e) => {
                    warn!("Error fetching hourly weather data: {}", e);
                    forecast.fail(HOURLY_ERROR);
                }
            }
            match daily {
                Ok(data) => forecast.data.daily = data,
                Err(e) => {
                    warn!("Error fetching daily weather data: {}", e);
                    forecast.fail(DAILY_ERROR);
                }
            }
            forecast.finish();
            Effect::None
        }

        Action::PathLoaded { generation, result } => {
            let path = &mut app.home.path;
            if !path.is_current(generation) {
                return Effect::None;
            }
            match result {
                Ok(data) => path.data = data,
                Err(e) => {
                    warn!("Failed to fetch path data: {}", e);
                    path.fail(PATH_ERROR);
                }
            }
            path.finish();
            Effect::None
        }

        Action::ServicesLoaded {
            generation,
            fetched,
        } => {
            let requests = &mut app.services.requests;
            if !requests.is_current(generation) {
                return Effect::None;
            }
            requests.data = fetched.data;
            if fetched.error.is_some() {
                requests.fail(SERVICES_ERROR);
            }
            requests.finish();
            Effect::None
        }

        Action::RequestSubmitted(result) => {
            let services = &mut app.services;
            services.submitting = false;
            match result {
                Ok(()) => {
                    info!("Service request submitted");
                    services.active_category.clear();
                    services.form.clear();
                    app.status_message = "Request submitted".to_string();
                    let generation = services.requests.begin();
                    Effect::Fetch(vec![FetchTicket {
                        target: FetchTarget::Services,
                        generation,
                    }])
                }
                Err(e) => {
                    warn!("Failed to submit request: {}", e);
                    app.status_message = "Failed to submit request".to_string();
                    Effect::None
                }
            }
        }

        Action::MusicGenerated { mood, result } => {
            app.vibe.apply_generated(mood, result);
            Effect::None
        }
    }
}

/// First visit to a screen starts its fetches. Later visits don't.
fn mount(app: &mut App, screen: Screen) -> Effect {
    let mounted = match screen {
        Screen::Home => &mut app.home.mounted,
        Screen::Guest => &mut app.services.mounted,
        Screen::Vibe | Screen::Info => return Effect::None,
    };
    if *mounted {
        return Effect::None;
    }
    *mounted = true;
    fetch_screen(app, screen)
}

fn fetch_screen(app: &mut App, screen: Screen) -> Effect {
    let tickets = match screen {
        Screen::Home => vec![
            FetchTicket {
                target: FetchTarget::Overview,
                generation: app.home.overview.begin(),
            },
            FetchTicket {
                target: FetchTarget::Forecast,
                generation: app.home.forecast.begin(),
            },
            FetchTicket {
                target: FetchTarget::Path,
                generation: app.home.path.begin(),
            },
        ],
        Screen::Guest => vec![FetchTicket {
            target: FetchTarget::Services,
            generation: app.services.requests.begin(),
        }],
        Screen::Vibe | Screen::Info => return Effect::None,
    };
    Effect::Fetch(tickets)
}

fn edit_form(app: &mut App, field: FormField, edit: FieldEdit) {
    let services = &mut app.services;
    let Some(category) = services.active_category.get() else {
        return;
    };
    if services.submitting {
        return;
    }
    let form = &mut services.form;
    let text = match field {
        FormField::RequestType => {
            match edit {
                FieldEdit::Next => form.cycle_request_type(category, true),
                FieldEdit::Prev => form.cycle_request_type(category, false),
                _ => {}
            }
            return;
        }
        FormField::Details => &mut form.request_details,
        FormField::PreferredTime => &mut form.preferred_time,
    };
    match edit {
        FieldEdit::Insert(c) => text.push(c),
        FieldEdit::Paste(s) => text.push_str(&s),
        FieldEdit::Backspace => {
            text.pop();
        }
        FieldEdit::Next | FieldEdit::Prev => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::RequestStatus;
    use crate::core::catalog::DEFAULT_CATEGORY;
    use crate::core::fetch::with_fallback;
    use crate::core::services::fallback_requests;
    use crate::test_support::{sample_aurora, sample_weather, test_app};

    fn tickets(effect: Effect) -> Vec<FetchTicket> {
        match effect {
            Effect::Fetch(tickets) => tickets,
            other => panic!("expected Fetch, got {:?}", other),
        }
    }

    fn ticket_for(tickets: &[FetchTicket], target: FetchTarget) -> u64 {
        tickets
            .iter()
            .find(|t| t.target == target)
            .map(|t| t.generation)
            .expect("ticket missing")
    }

    fn open_form(app: &mut App, category: ServiceCategory) {
        update(app, Action::SelectServiceCategory(category));
    }

    fn type_text(app: &mut App, field: FormField, text: &str) {
        for c in text.chars() {
            update(
                app,
                Action::EditForm {
                    field,
                    edit: FieldEdit::Insert(c),
                },
            );
        }
    }

    #[test]
    fn test_show_home_mounts_once() {
        let mut app = test_app();
        let first = tickets(update(&mut app, Action::ShowScreen(Screen::Home)));
        assert_eq!(first.len(), 3);
        assert!(app.home.overview.loading);
        assert!(app.home.forecast.loading);
        assert!(app.home.path.loading);

        update(&mut app, Action::ShowScreen(Screen::Info));
        let again = update(&mut app, Action::ShowScreen(Screen::Home));
        assert_eq!(again, Effect::None);
    }

    #[test]
    fn test_info_and_vibe_need_no_fetch() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::ShowScreen(Screen::Info)), Effect::None);
        assert_eq!(update(&mut app, Action::ShowScreen(Screen::Vibe)), Effect::None);
        assert_eq!(update(&mut app, Action::Refresh), Effect::None);
    }

    #[test]
    fn test_overview_first_error_wins() {
        let mut app = test_app();
        let t = tickets(update(&mut app, Action::ShowScreen(Screen::Home)));
        update(
            &mut app,
            Action::OverviewLoaded {
                generation: ticket_for(&t, FetchTarget::Overview),
                aurora: Err(ApiError::Status {
                    status: 500,
                    body: String::new(),
                }),
                weather: Err(ApiError::Network("down".into())),
            },
        );
        assert!(!app.home.overview.loading);
        assert_eq!(app.home.overview.error.as_deref(), Some(AURORA_ERROR));
    }

    #[test]
    fn test_overview_partial_success_keeps_data_and_error() {
        let mut app = test_app();
        let t = tickets(update(&mut app, Action::ShowScreen(Screen::Home)));
        update(
            &mut app,
            Action::OverviewLoaded {
                generation: ticket_for(&t, FetchTarget::Overview),
                aurora: Ok(sample_aurora()),
                weather: Err(ApiError::Decode("bad".into())),
            },
        );
        assert!(app.home.overview.data.aurora.is_some());
        assert_eq!(app.home.overview.error.as_deref(), Some(WEATHER_ERROR));
        assert!(!app.home.overview.loading);
    }

    #[test]
    fn test_stale_overview_dropped() {
        let mut app = test_app();
        let first = tickets(update(&mut app, Action::ShowScreen(Screen::Home)));
        let stale = ticket_for(&first, FetchTarget::Overview);
        let second = tickets(update(&mut app, Action::Refresh));
        update(
            &mut app,
            Action::OverviewLoaded {
                generation: stale,
                aurora: Ok(sample_aurora()),
                weather: Ok(sample_weather()),
            },
        );
        assert!(app.home.overview.loading);
        assert!(app.home.overview.data.weather.is_none());

        update(
            &mut app,
            Action::OverviewLoaded {
                generation: ticket_for(&second, FetchTarget::Overview),
                aurora: Ok(sample_aurora()),
                weather: Ok(sample_weather()),
            },
        );
        assert!(!app.home.overview.loading);
        assert_eq!(app.home.overview.data.weather, Some(sample_weather()));
    }

    #[test]
    fn test_forecast_errors() {
        let mut app = test_app();
        let t = tickets(update(&mut app, Action::ShowScreen(Screen::Home)));
        update(
            &mut app,
            Action::ForecastLoaded {
                generation: ticket_for(&t, FetchTarget::Forecast),
                hourly: Ok(vec![]),
                daily: Err(ApiError::Network("x".into())),
            },
        );
        assert_eq!(app.home.forecast.error.as_deref(), Some(DAILY_ERROR));
        assert!(!app.home.forecast.loading);
    }

    #[test]
    fn test_path_failure_keeps_default_record_and_retry_clears_error() {
        let mut app = test_app();
        let t = tickets(update(&mut app, Action::ShowScreen(Screen::Home)));
        update(
            &mut app,
            Action::PathLoaded {
                generation: ticket_for(&t, FetchTarget::Path),
                result: Err(ApiError::Network("x".into())),
            },
        );
        assert_eq!(app.home.path.error.as_deref(), Some(PATH_ERROR));
        assert_eq!(app.home.path.data.temperature, 0.0);
        assert!(!app.home.path.data.warning);

        let retry = tickets(update(&mut app, Action::RetryPath));
        assert_eq!(retry[0].target, FetchTarget::Path);
        assert!(app.home.path.error.is_none());
        assert!(app.home.path.loading);

        // A second retry while loading is ignored
        assert_eq!(update(&mut app, Action::RetryPath), Effect::None);
    }

    #[test]
    fn test_services_failure_shows_pending_fallback() {
        let mut app = test_app();
        let t = tickets(update(&mut app, Action::ShowScreen(Screen::Guest)));
        let fetched = with_fallback(
            Err(ApiError::Network("refused".into())),
            "service requests",
            fallback_requests,
        );
        update(
            &mut app,
            Action::ServicesLoaded {
                generation: ticket_for(&t, FetchTarget::Services),
                fetched,
            },
        );
        let requests = &app.services.requests;
        assert!(!requests.loading);
        assert!(!requests.data.is_empty());
        assert!(requests.data.iter().any(|r| r.status == RequestStatus::Pending));
        assert_eq!(requests.error.as_deref(), Some(SERVICES_ERROR));
    }

    #[test]
    fn test_submit_success_clears_form_and_refetches() {
        let mut app = test_app();
        update(&mut app, Action::ShowScreen(Screen::Guest));
        open_form(&mut app, ServiceCategory::Housekeeping);
        update(
            &mut app,
            Action::EditForm {
                field: FormField::RequestType,
                edit: FieldEdit::Next,
            },
        );
        type_text(&mut app, FormField::Details, "Extra pillows");
        type_text(&mut app, FormField::PreferredTime, "20:00");

        let request = match update(&mut app, Action::SubmitRequest) {
            Effect::Submit(request) => request,
            other => panic!("expected Submit, got {:?}", other),
        };
        assert!(request.id.starts_with("req-"));
        assert_eq!(request.description, "Extra pillows");
        assert_eq!(request.status, RequestStatus::Pending);
        assert!(app.services.submitting);

        let refetch = tickets(update(&mut app, Action::RequestSubmitted(Ok(()))));
        assert_eq!(refetch[0].target, FetchTarget::Services);
        assert!(app.services.form.request_type.is_empty());
        assert!(app.services.form.request_details.is_empty());
        assert!(app.services.form.preferred_time.is_empty());
        assert_eq!(app.services.active_category.get(), None);
        assert!(!app.services.submitting);
        assert!(app.services.requests.loading);
    }

    #[test]
    fn test_submit_failure_keeps_form() {
        let mut app = test_app();
        open_form(&mut app, ServiceCategory::Concierge);
        type_text(&mut app, FormField::Details, "Taxi at 9");
        update(&mut app, Action::SubmitRequest);
        let effect = update(
            &mut app,
            Action::RequestSubmitted(Err(ApiError::Status {
                status: 502,
                body: "bad gateway".into(),
            })),
        );
        assert_eq!(effect, Effect::None);
        assert!(app.services.show_form());
        assert_eq!(app.services.form.request_details, "Taxi at 9");
        assert_eq!(app.services.active_category.get(), Some(ServiceCategory::Concierge));
    }

    #[test]
    fn test_submit_without_category_is_noop() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::SubmitRequest), Effect::None);
    }

    #[test]
    fn test_double_submit_ignored() {
        let mut app = test_app();
        open_form(&mut app, ServiceCategory::Room);
        assert!(matches!(update(&mut app, Action::SubmitRequest), Effect::Submit(_)));
        assert_eq!(update(&mut app, Action::SubmitRequest), Effect::None);
    }

    #[test]
    fn test_service_category_toggle() {
        let mut app = test_app();
        open_form(&mut app, ServiceCategory::Room);
        assert!(app.services.show_form());
        open_form(&mut app, ServiceCategory::Room);
        assert!(!app.services.show_form());
        open_form(&mut app, ServiceCategory::Room);
        open_form(&mut app, ServiceCategory::Maintenance);
        assert_eq!(app.services.active_category.get(), Some(ServiceCategory::Maintenance));
    }

    #[test]
    fn test_switching_category_drops_foreign_request_type() {
        let mut app = test_app();
        open_form(&mut app, ServiceCategory::Room);
        update(
            &mut app,
            Action::EditForm {
                field: FormField::RequestType,
                edit: FieldEdit::Next,
            },
        );
        assert_eq!(app.services.form.request_type, "Breakfast");
        open_form(&mut app, ServiceCategory::Maintenance);
        assert!(app.services.form.request_type.is_empty());
    }

    #[test]
    fn test_form_backspace_and_paste() {
        let mut app = test_app();
        open_form(&mut app, ServiceCategory::Room);
        update(
            &mut app,
            Action::EditForm {
                field: FormField::PreferredTime,
                edit: FieldEdit::Paste("7:30".into()),
            },
        );
        update(
            &mut app,
            Action::EditForm {
                field: FormField::PreferredTime,
                edit: FieldEdit::Backspace,
            },
        );
        assert_eq!(app.services.form.preferred_time, "7:3");
    }

    #[test]
    fn test_cancel_closes_form() {
        let mut app = test_app();
        open_form(&mut app, ServiceCategory::Room);
        update(&mut app, Action::CancelRequestForm);
        assert!(!app.services.show_form());
    }

    #[test]
    fn test_info_toggles() {
        let mut app = test_app();
        update(&mut app, Action::ToggleCategory(DEFAULT_CATEGORY));
        assert_eq!(app.info.expanded_category.get(), None);
        update(&mut app, Action::ToggleCategory("tech"));
        update(&mut app, Action::ToggleCategory("outdoor"));
        assert_eq!(app.info.expanded_category.get(), Some("outdoor"));

        update(&mut app, Action::ToggleAmenity("kota"));
        update(&mut app, Action::ToggleAmenity("kota"));
        assert_eq!(app.info.expanded_amenity.get(), None);
    }

    #[test]
    fn test_tab_toggle_via_action() {
        let mut app = test_app();
        update(&mut app, Action::SelectTab(HomeTab::Aurora));
        assert_eq!(app.home.tabs.active(), HomeTab::Aurora);
        update(&mut app, Action::SelectTab(HomeTab::Aurora));
        assert_eq!(app.home.tabs.active(), HomeTab::Weather);
    }

    #[test]
    fn test_mood_flow() {
        let mut app = test_app();
        assert_eq!(
            update(&mut app, Action::SelectMood(Mood::Romantic)),
            Effect::GenerateMusic(Mood::Romantic)
        );
        update(
            &mut app,
            Action::MusicGenerated {
                mood: Mood::Romantic,
                result: Ok(VibeResponse::default()),
            },
        );
        assert_eq!(app.vibe.current_music.as_deref(), Some("romantic"));
        update(&mut app, Action::TogglePlayback);
        assert!(!app.vibe.is_playing);
        assert_eq!(update(&mut app, Action::SelectMood(Mood::Romantic)), Effect::None);
        assert_eq!(app.vibe.selected.get(), None);
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
