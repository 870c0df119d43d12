//! # Home Screen
//!
//! Tab buttons (Weather / Aurora) across the top, the active tab's panel
//! below. The frozen-path card belongs to the Weather tab and sits beside
//! the buttons only while that tab is active.
//!
//! Focus walks left/right across the tab buttons and, when the path fetch
//! failed on the Weather tab, the path card's Retry button.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::api::PathData;
use crate::core::action::Action;
use crate::core::fetch::FetchState;
use crate::core::forecast::format_temp;
use crate::core::selection::HomeTab;
use crate::core::state::{App, HomeState};
use crate::tui::component::{Component, ScreenEvent, ScreenView};
use crate::tui::components::aurora::AuroraPanel;
use crate::tui::components::layout::{
    dim_style, error_style, focus_style, selected_style, spinner,
};
use crate::tui::components::weather::WeatherPanel;
use crate::tui::event::TuiEvent;

const TAB_WIDTH: u16 = 14;
const PATH_CARD_WIDTH: u16 = 34;

/// Something on the home screen that can hold focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeFocus {
    Tab(HomeTab),
    Retry,
}

/// Persistent focus state for the home screen.
#[derive(Debug, Default)]
pub struct HomeView {
    pub focused: usize,
}

impl HomeView {
    /// Focus targets in left-to-right order.
    pub fn targets(home: &HomeState) -> Vec<HomeFocus> {
        let mut targets: Vec<HomeFocus> = HomeTab::ALL.into_iter().map(HomeFocus::Tab).collect();
        if home.tabs.active() == HomeTab::Weather
            && home.path.error.is_some()
            && !home.path.loading
        {
            targets.push(HomeFocus::Retry);
        }
        targets
    }

    pub fn current(&self, home: &HomeState) -> HomeFocus {
        let targets = Self::targets(home);
        targets[self.focused.min(targets.len() - 1)]
    }
}

impl ScreenView for HomeView {
    fn handle_event(&mut self, event: &TuiEvent, app: &App) -> Option<ScreenEvent> {
        let targets = Self::targets(&app.home);
        self.focused = self.focused.min(targets.len() - 1);
        match event {
            TuiEvent::Left if self.focused == 0 => Some(ScreenEvent::FocusMenu),
            TuiEvent::Left => {
                self.focused -= 1;
                None
            }
            TuiEvent::Right => {
                self.focused = (self.focused + 1).min(targets.len() - 1);
                None
            }
            TuiEvent::Back | TuiEvent::Backspace => Some(ScreenEvent::FocusMenu),
            TuiEvent::Select => match targets[self.focused] {
                HomeFocus::Tab(tab) => Some(ScreenEvent::Dispatch(Action::SelectTab(tab))),
                HomeFocus::Retry => Some(ScreenEvent::Dispatch(Action::RetryPath)),
            },
            _ => None,
        }
    }
}

/// Transient render wrapper for the home screen.
pub struct Home<'a> {
    pub view: &'a HomeView,
    pub home: &'a HomeState,
    pub focused: bool,
    pub tick: usize,
}

impl Component for Home<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [top_area, body_area] =
            Layout::vertical([Constraint::Length(7), Constraint::Min(0)]).areas(area);
        let [tabs_area, path_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(PATH_CARD_WIDTH)])
                .areas(top_area);

        let focus = self.focused.then(|| self.view.current(self.home));
        self.render_tabs(frame, tabs_area, focus);
        if self.home.tabs.active() == HomeTab::Weather {
            PathCard {
                path: &self.home.path,
                retry_focused: focus == Some(HomeFocus::Retry),
                tick: self.tick,
            }
            .render(frame, path_area);
        }

        // A failed overview replaces both tabs' content
        if let Some(error) = &self.home.overview.error
            && !self.home.overview.loading
        {
            let notice = Paragraph::new(vec![
                Line::styled(error.clone(), error_style()),
                Line::default(),
                Line::styled("Press r to try again", dim_style()),
            ])
            .block(Block::bordered().border_style(dim_style()));
            frame.render_widget(notice, body_area);
            return;
        }

        match self.home.tabs.active() {
            HomeTab::Weather => WeatherPanel {
                overview: &self.home.overview,
                forecast: &self.home.forecast,
                tick: self.tick,
            }
            .render(frame, body_area),
            HomeTab::Aurora => AuroraPanel {
                overview: &self.home.overview,
                tick: self.tick,
            }
            .render(frame, body_area),
        }
    }
}

impl Home<'_> {
    fn render_tabs(&self, frame: &mut Frame, area: Rect, focus: Option<HomeFocus>) {
        let [_, row, _] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .areas(area);
        let cells =
            Layout::horizontal(vec![Constraint::Length(TAB_WIDTH); HomeTab::ALL.len()]).split(row);

        let active = self.home.tabs.active();
        for (tab, cell) in HomeTab::ALL.into_iter().zip(cells.iter()) {
            let style = if focus == Some(HomeFocus::Tab(tab)) {
                focus_style()
            } else if tab == active {
                selected_style()
            } else {
                Style::default().fg(Color::Gray)
            };
            let border = if tab == active {
                Style::default().fg(Color::Cyan)
            } else {
                dim_style()
            };
            let button = Paragraph::new(Line::styled(tab.label(), style).centered())
                .block(Block::bordered().border_style(border));
            frame.render_widget(button, *cell);
        }
    }
}

/// Ice status card with its own loading / error / retry states.
pub struct PathCard<'a> {
    pub path: &'a FetchState<PathData>,
    pub retry_focused: bool,
    pub tick: usize,
}

impl Component for PathCard<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let data = &self.path.data;
        let border_color = if self.path.error.is_some() || self.path.loading {
            Color::DarkGray
        } else if data.warning {
            Color::Red
        } else {
            Color::Green
        };
        let block = Block::bordered()
            .title(" Frozen Path ")
            .border_style(Style::default().fg(border_color));

        let lines = if let Some(error) = &self.path.error {
            let retry_style = if self.retry_focused {
                focus_style()
            } else {
                Style::default().fg(Color::White)
            };
            vec![
                Line::styled(error.clone(), error_style()),
                Line::default(),
                Line::styled("[ Retry ]", retry_style),
            ]
        } else if self.path.loading {
            vec![Line::from(format!(
                "{} Loading path conditions...",
                spinner(self.tick)
            ))]
        } else {
            let (status, color) = if data.warning {
                ("Warning", Color::Red)
            } else {
                ("Clear", Color::Green)
            };
            vec![
                Line::from(vec![
                    Span::styled("Path conditions  ", dim_style()),
                    Span::styled(
                        status,
                        Style::default().fg(color).add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::styled(
                    format_temp(data.temperature),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Line::from(vec![
                    Span::styled("Updated ", dim_style()),
                    Span::raw(data.updated_label()),
                ]),
            ]
        };
        frame.render_widget(
            Paragraph::new(lines)
                .block(block)
                .wrap(ratatui::widgets::Wrap { trim: true }),
            area,
        );
    }
}
