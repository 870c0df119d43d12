//! # Core Application Logic
//!
//! This module contains Lumo's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │ Effect
//!                    ┌───────────┴─────────────┐
//!                    ▼                         ▼
//!             ┌────────────┐            ┌────────────┐
//!             │    TUI     │  ───────►  │    API     │
//!             │  Adapter   │            │  (reqwest) │
//!             │ (ratatui)  │  ◄───────  │            │
//!             └────────────┘   Action   └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`fetch`]: Loading/error/data triples with stale-result guarding
//! - [`selection`]: Toggle selections and the home tab group
//! - [`catalog`]: Static amenity catalog
//! - [`services`]: Guest service categories, request form, ordering
//! - [`forecast`]: Weather and aurora display rules
//! - [`vibe`]: Mood player
//! - [`config`]: Config file and override resolution

pub mod action;
pub mod catalog;
pub mod config;
pub mod fetch;
pub mod forecast;
pub mod selection;
pub mod services;
pub mod state;
pub mod vibe;
