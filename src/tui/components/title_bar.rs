//! # TitleBar Component
//!
//! Top status bar: property name, current screen, status message on the
//! left and a wall clock on the right.
//!
//! ## Design Decisions
//!
//! ### Stateless Component
//!
//! TitleBar is purely presentational. It receives all data as props and has no
//! internal state:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new("Guest", "Request submitted", "21:04");
//! title_bar.render(frame, area);
//! ```
//!
//! ## Conditional Formatting
//!
//! 1. **Status message**: `"Lumo | Guest | Request submitted"`
//! 2. **Default**: `"Lumo | Guest"`
//!
//! The clock is right-aligned and dropped first when the terminal is too
//! narrow for both.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

/// Top status bar component.
pub struct TitleBar {
    /// Label of the screen being shown
    pub screen: String,
    /// Transient status (e.g. "Submitting request...")
    pub status_message: String,
    /// Preformatted local time
    pub clock: String,
}

impl TitleBar {
    pub fn new(
        screen: impl Into<String>,
        status_message: impl Into<String>,
        clock: impl Into<String>,
    ) -> Self {
        Self {
            screen: screen.into(),
            status_message: status_message.into(),
            clock: clock.into(),
        }
    }

    fn title_text(&self) -> String {
        if self.status_message.is_empty() || self.status_message == self.screen {
            format!("Lumo | {}", self.screen)
        } else {
            format!("Lumo | {} | {}", self.screen, self.status_message)
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title = self.title_text();
        let style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);

        let clock_width = self.clock.width() as u16;
        if title.width() as u16 + clock_width + 1 > area.width {
            frame.render_widget(Span::styled(title, style), area);
            return;
        }

        let [title_area, clock_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(clock_width)]).areas(area);
        frame.render_widget(Span::styled(title, style), title_area);
        frame.render_widget(
            Line::from(self.clock.as_str()).style(Style::default().fg(Color::Gray)),
            clock_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_text(title_bar: &mut TitleBar, width: u16) -> String {
        let backend = TestBackend::new(width, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_title_bar_with_status_message() {
        let mut title_bar = TitleBar::new("Guest", "Request submitted", "21:04");
        let text = render_text(&mut title_bar, 80);
        assert!(text.contains("Lumo | Guest | Request submitted"));
        assert!(text.trim_end().ends_with("21:04"));
    }

    #[test]
    fn test_title_bar_hides_status_equal_to_screen() {
        let mut title_bar = TitleBar::new("Info", "Info", "09:00");
        let text = render_text(&mut title_bar, 80);
        assert!(text.contains("Lumo | Info"));
        assert_eq!(text.matches('|').count(), 1);
    }

    #[test]
    fn test_title_bar_narrow_drops_clock() {
        let mut title_bar = TitleBar::new("Home", "Welcome!", "09:00");
        let text = render_text(&mut title_bar, 20);
        assert!(text.starts_with("Lumo | Home"));
        assert!(!text.contains("09:00"));
    }
}
