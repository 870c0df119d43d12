//! # Menu Component
//!
//! Left-hand navigation rail listing the four screens.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `MenuState` lives in `TuiState`
//! - `Menu` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding};

use crate::core::state::Screen;
use crate::tui::component::EventHandler;
use crate::tui::components::layout::{focus_style, selected_style};
use crate::tui::event::TuiEvent;

/// Persistent state for the menu rail.
pub struct MenuState {
    pub selected: usize,
    pub list_state: ListState,
}

impl MenuState {
    pub fn new(screen: Screen) -> Self {
        let mut state = Self {
            selected: 0,
            list_state: ListState::default(),
        };
        state.follow(screen);
        state
    }

    /// Move the highlight to `screen` (after a number key or Tab switch).
    pub fn follow(&mut self, screen: Screen) {
        self.selected = Screen::ALL.iter().position(|s| *s == screen).unwrap_or(0);
        self.list_state.select(Some(self.selected));
    }

    pub fn highlighted(&self) -> Screen {
        Screen::ALL[self.selected.min(Screen::ALL.len() - 1)]
    }
}

/// Events emitted by the menu.
#[derive(Debug, PartialEq, Eq)]
pub enum MenuEvent {
    /// Open the screen and move focus into it.
    Open(Screen),
    /// Move focus into the current screen without switching.
    FocusContent,
}

impl EventHandler for MenuState {
    type Event = MenuEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<MenuEvent> {
        match event {
            TuiEvent::Up => {
                self.selected = self.selected.saturating_sub(1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::Down => {
                self.selected = (self.selected + 1).min(Screen::ALL.len() - 1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::Select => Some(MenuEvent::Open(self.highlighted())),
            TuiEvent::Right => Some(MenuEvent::FocusContent),
            _ => None,
        }
    }
}

/// Transient render wrapper for the menu rail.
pub struct Menu<'a> {
    state: &'a mut MenuState,
    active: Screen,
    focused: bool,
}

impl<'a> Menu<'a> {
    pub fn new(state: &'a mut MenuState, active: Screen, focused: bool) -> Self {
        Self {
            state,
            active,
            focused,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_color = if self.focused {
            Color::Cyan
        } else {
            Color::DarkGray
        };
        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_style(Style::default().fg(border_color))
            .padding(Padding::vertical(1));

        let items: Vec<ListItem> = Screen::ALL
            .iter()
            .enumerate()
            .map(|(i, screen)| {
                let style = if self.focused && i == self.state.selected {
                    focus_style()
                } else if *screen == self.active {
                    selected_style()
                } else {
                    Style::default().fg(Color::Gray)
                };
                let marker = if *screen == self.active { "▌" } else { " " };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, Style::default().fg(Color::Cyan)),
                    Span::styled(
                        format!(
                            "{} {} {}",
                            screen.number(),
                            screen.icon().glyph(),
                            screen.label()
                        ),
                        style,
                    ),
                ]))
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}
