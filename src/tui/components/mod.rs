//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as fields:
//! - `TitleBar`: top status bar with screen, status and clock
//! - `WeatherPanel`, `AuroraPanel`, `PathCard`: home screen cards
//!
//! ### Stateful Components (Event-Driven)
//!
//! Each screen keeps a persistent `*View` (focus, cursor, scroll offset) in
//! `TuiState` and is drawn through a transient wrapper borrowing it:
//! - `MenuState` / `Menu`: navigation rail
//! - `HomeView` / `Home`
//! - `InfoView` / `Info`
//! - `ServicesView` / `Services`
//! - `VibeView` / `Vibe`
//!
//! Views never mutate core state directly. They return a `ScreenEvent`
//! carrying an `Action`, and the event loop runs it through `core::update`.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs        (this file)
//! ├── layout.rs     (shared styles, truncation, wrapping, spinner)
//! ├── title_bar.rs  (top status bar)
//! ├── menu.rs       (navigation rail)
//! ├── home.rs       (tabs + path card)
//! ├── weather.rs    (weather tab)
//! ├── aurora.rs     (aurora tab)
//! ├── info.rs       (amenity accordion)
//! ├── services.rs   (request grid, recent requests, form)
//! └── vibe.rs       (mood picker + player)
//! ```

pub mod aurora;
pub mod home;
pub mod info;
pub mod layout;
pub mod menu;
pub mod services;
mod title_bar;
pub mod vibe;
pub mod weather;

pub use home::{Home, HomeView};
pub use info::{Info, InfoView};
pub use menu::{Menu, MenuEvent, MenuState};
pub use services::{Services, ServicesView};
pub use title_bar::TitleBar;
pub use vibe::{Vibe, VibeView};
