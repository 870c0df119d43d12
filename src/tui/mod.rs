//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! translates keyboard events into core::Action values and performs the
//! I/O described by each `Effect`.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Focus
//!
//! Focus is either on the menu rail or inside the current screen. Arrow keys
//! and Enter go to whichever holds focus. `q`, `r` and `1`-`4` are global
//! shortcuts unless a text field in the request form is being edited.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (any fetch in flight, music generating or playing): draws
//!   every ~80ms so spinners and the visualizer move.
//! - **Idle**: sleeps up to 500ms and only redraws on events, background
//!   results, or when the title bar clock changes minute.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use chrono::Local;
use crossterm::cursor::{Hide, Show};
use crossterm::event::{
    DisableBracketedPaste, EnableBracketedPaste, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;

use crate::api::{GuestApi, HttpClient};
use crate::core::action::{Action, Effect, FetchTarget, FetchTicket, update};
use crate::core::config::ResolvedConfig;
use crate::core::fetch::with_fallback;
use crate::core::services::fallback_requests;
use crate::core::state::{App, Screen};
use crate::tui::component::{EventHandler, ScreenEvent, ScreenView};
use crate::tui::components::{HomeView, InfoView, MenuEvent, MenuState, ServicesView, VibeView};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub menu: MenuState,
    /// Arrow keys drive the menu rail rather than the screen.
    pub menu_focused: bool,
    // Persistent per-screen focus
    pub home: HomeView,
    pub info: InfoView,
    pub services: ServicesView,
    pub vibe: VibeView,
}

impl TuiState {
    pub fn new(screen: Screen) -> Self {
        Self {
            menu: MenuState::new(screen),
            menu_focused: true,
            home: HomeView::default(),
            info: InfoView::default(),
            services: ServicesView::default(),
            vibe: VibeView::default(),
        }
    }

    fn view(&self, screen: Screen) -> &dyn ScreenView {
        match screen {
            Screen::Home => &self.home,
            Screen::Vibe => &self.vibe,
            Screen::Info => &self.info,
            Screen::Guest => &self.services,
        }
    }

    fn view_mut(&mut self, screen: Screen) -> &mut dyn ScreenView {
        match screen {
            Screen::Home => &mut self.home,
            Screen::Vibe => &mut self.vibe,
            Screen::Info => &mut self.info,
            Screen::Guest => &mut self.services,
        }
    }

    /// True when printable keys belong to a text field.
    fn captures_text(&self, app: &App) -> bool {
        !self.menu_focused && self.view(app.screen).captures_text(app)
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Keyboard enhancement lets Esc arrive without the alt-prefix delay;
        // terminals that don't support it ignore the request
        execute!(
            stdout(),
            EnableBracketedPaste,
            Hide,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!("Terminal modes enabled (bracketed paste, hidden cursor, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableBracketedPaste,
            Show
        );
    }
}

/// Translate one key event into at most one action, updating focus on the way.
pub fn route_event(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::ForceQuit => return Some(Action::Quit),
        TuiEvent::Resize => return None,
        TuiEvent::NextScreen => return Some(show(tui, app.screen.next())),
        TuiEvent::PrevScreen => return Some(show(tui, app.screen.prev())),
        _ => {}
    }

    if !tui.captures_text(app)
        && let TuiEvent::InputChar(c) = event
    {
        match *c {
            'q' | 'Q' => return Some(Action::Quit),
            'r' | 'R' => return Some(Action::Refresh),
            _ => {}
        }
        if let Some(screen) = c
            .to_digit(10)
            .and_then(|n| Screen::from_number(n as u8))
        {
            return Some(show(tui, screen));
        }
    }

    if tui.menu_focused {
        return match tui.menu.handle_event(event)? {
            MenuEvent::Open(screen) => {
                tui.menu_focused = false;
                Some(Action::ShowScreen(screen))
            }
            MenuEvent::FocusContent => {
                tui.menu_focused = false;
                None
            }
        };
    }

    match tui.view_mut(app.screen).handle_event(event, app)? {
        ScreenEvent::Dispatch(action) => Some(action),
        ScreenEvent::FocusMenu => {
            tui.menu_focused = true;
            tui.menu.follow(app.screen);
            None
        }
    }
}

fn show(tui: &mut TuiState, screen: Screen) -> Action {
    tui.menu.follow(screen);
    Action::ShowScreen(screen)
}

/// Anything on screen that needs a moving frame.
fn is_animating(app: &App) -> bool {
    app.home.overview.loading
        || app.home.forecast.loading
        || app.home.path.loading
        || app.services.requests.loading
        || app.services.submitting
        || app.vibe.loading
        || app.vibe.is_playing
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let api: Arc<dyn GuestApi> = Arc::new(HttpClient::new(config.endpoints()));
    let mut app = App::from_config(api, &config);
    let mut tui = TuiState::new(app.screen);
    info!("Starting on {:?} using {} backend", app.screen, app.api.name());

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();
    let start_screen = app.screen;
    let effect = update(&mut app, Action::ShowScreen(start_screen));
    perform(effect, &app, &tx);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame
    let mut clock = Local::now().format("%H:%M").to_string();

    'outer: loop {
        let animating = is_animating(&app);
        if animating {
            needs_redraw = true;
        }
        let now = Local::now().format("%H:%M").to_string();
        if now != clock {
            clock = now;
            needs_redraw = true;
        }

        if needs_redraw {
            let tick = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, tick))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let Some(action) = route_event(&app, &mut tui, &event) else {
                continue;
            };
            debug!("Key action: {:?}", action);
            let effect = update(&mut app, action);
            if perform(effect, &app, &tx) {
                break 'outer;
            }
        }

        // Results from background tasks
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effect = update(&mut app, action);
            if perform(effect, &app, &tx) {
                break 'outer;
            }
        }
    }

    info!("Shutting down");
    ratatui::restore();
    Ok(())
}

/// Start the I/O an effect asks for. Returns true when the app should quit.
fn perform(effect: Effect, app: &App, tx: &mpsc::Sender<Action>) -> bool {
    match effect {
        Effect::None => false,
        Effect::Quit => true,
        Effect::Fetch(tickets) => {
            for ticket in tickets {
                spawn_fetch(app.api.clone(), ticket, tx.clone());
            }
            false
        }
        Effect::Submit(request) => {
            info!(
                "Submitting {} request ({})",
                request.title, request.id
            );
            let api = app.api.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let result = api.submit_request(&request).await;
                send(&tx, Action::RequestSubmitted(result));
            });
            false
        }
        Effect::GenerateMusic(mood) => {
            info!("Generating {} music", mood.as_str());
            let api = app.api.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let result = api.update_vibe(mood).await;
                send(&tx, Action::MusicGenerated { mood, result });
            });
            false
        }
    }
}

fn spawn_fetch(api: Arc<dyn GuestApi>, ticket: FetchTicket, tx: mpsc::Sender<Action>) {
    let FetchTicket { target, generation } = ticket;
    debug!("Spawning {:?} fetch (generation {})", target, generation);
    tokio::spawn(async move {
        let action = match target {
            FetchTarget::Overview => {
                let (aurora, weather) = tokio::join!(api.aurora_forecast(), api.current_weather());
                Action::OverviewLoaded {
                    generation,
                    aurora,
                    weather,
                }
            }
            FetchTarget::Forecast => {
                let (hourly, daily) = tokio::join!(api.hourly_forecast(), api.daily_forecast());
                Action::ForecastLoaded {
                    generation,
                    hourly,
                    daily,
                }
            }
            FetchTarget::Path => Action::PathLoaded {
                generation,
                result: api.path_conditions().await,
            },
            FetchTarget::Services => Action::ServicesLoaded {
                generation,
                fetched: with_fallback(
                    api.service_requests().await,
                    "service requests",
                    fallback_requests,
                ),
            },
        };
        send(&tx, action);
    });
}

fn send(tx: &mpsc::Sender<Action>, action: Action) {
    if let Err(mpsc::SendError(action)) = tx.send(action) {
        warn!("Failed to deliver {:?}: receiver dropped", action);
    }
}
