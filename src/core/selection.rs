//! # Exclusive Selection
//!
//! Every "only one open at a time" choice in the app (home tab, expanded
//! category, expanded amenity, selected mood, active service category) is a
//! [`Toggle`]. Picking the current value clears it; picking a different value
//! replaces it.
//!
//! ```text
//! None ──select(a)──▶ Some(a) ──select(a)──▶ None
//!                        │
//!                        └──select(b)──▶ Some(b)
//! ```

/// A single nullable choice with collapse-on-reselect semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toggle<T> {
    current: Option<T>,
}

impl<T> Default for Toggle<T> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<T: Copy + PartialEq> Toggle<T> {
    /// Start with `value` already open.
    pub fn open(value: T) -> Self {
        Self {
            current: Some(value),
        }
    }

    /// Select `value`, or clear it if it is already selected.
    /// Returns the new selection.
    pub fn toggle(&mut self, value: T) -> Option<T> {
        self.current = if self.current == Some(value) {
            None
        } else {
            Some(value)
        };
        self.current
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn get(&self) -> Option<T> {
        self.current
    }

    pub fn is(&self, value: T) -> bool {
        self.current == Some(value)
    }
}

/// Tabs on the home dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HomeTab {
    #[default]
    Weather,
    Aurora,
}

impl HomeTab {
    pub const ALL: [HomeTab; 2] = [HomeTab::Weather, HomeTab::Aurora];

    pub fn label(self) -> &'static str {
        match self {
            Self::Weather => "Weather",
            Self::Aurora => "Aurora",
        }
    }
}

/// Home tab selection. A cleared toggle shows the default tab, so toggling
/// any tab twice lands back on Weather.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TabGroup {
    toggle: Toggle<HomeTab>,
}

impl TabGroup {
    pub fn select(&mut self, tab: HomeTab) {
        self.toggle.toggle(tab);
    }

    pub fn active(&self) -> HomeTab {
        self.toggle.get().unwrap_or_default()
    }
}
