use ratatui::Frame;
use ratatui::layout::Rect;

use crate::core::action::Action;
use crate::core::state::App;
use crate::tui::event::TuiEvent;

/// Something that draws itself into a `Rect`.
///
/// Render wrappers are built per frame from borrowed state (`Home`,
/// `Vibe`, the cards on the home screen). `render` takes `&mut self` so a
/// wrapper holding `&mut` view state can move its scroll offset while
/// drawing, the same way a ratatui `StatefulWidget` would.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// Self-contained input handling that needs no core state (the menu rail).
pub trait EventHandler {
    /// What the handler reports upward.
    type Event;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event>;
}

/// What a screen did with a D-pad event.
#[derive(Debug)]
pub enum ScreenEvent {
    /// Dispatch to `core::update`.
    Dispatch(Action),
    /// Focus walked off the left edge; hand it to the menu.
    FocusMenu,
}

/// Persistent focus state of one screen.
///
/// Unlike [`EventHandler`], screens read core state to know what is
/// focusable (which rows are expanded, whether the form is open).
pub trait ScreenView {
    fn handle_event(&mut self, event: &TuiEvent, app: &App) -> Option<ScreenEvent>;

    /// True when printable keys should be typed rather than treated as shortcuts.
    fn captures_text(&self, _app: &App) -> bool {
        false
    }
}
