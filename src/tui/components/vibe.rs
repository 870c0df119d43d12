//! # Vibe Screen
//!
//! Four mood buttons and, once music exists, a player row with a play/pause
//! button and a 30-bar visualizer.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Paragraph};

use crate::api::Mood;
use crate::core::action::Action;
use crate::core::catalog::Icon;
use crate::core::state::App;
use crate::core::vibe::VibeState;
use crate::tui::component::{Component, ScreenEvent, ScreenView};
use crate::tui::components::layout::{dim_style, focus_style, spinner};
use crate::tui::event::TuiEvent;

pub const VISUALIZER_BARS: usize = 30;
const MIN_BAR: u64 = 15;
const MAX_BAR: u64 = 100;

pub fn mood_color(mood: Mood) -> Color {
    match mood {
        Mood::Fun => Color::Yellow,
        Mood::Energetic => Color::LightRed,
        Mood::Romantic => Color::Magenta,
        Mood::Calm => Color::LightBlue,
    }
}

/// Bar heights (percent, 15-100) for animation frame `tick`.
///
/// Each bar is a sine with its own speed and phase so the pattern doesn't
/// visibly repeat across the row.
pub fn bar_heights(tick: usize, count: usize) -> Vec<u64> {
    let t = tick as f64 * 0.35;
    (0..count)
        .map(|i| {
            let i = i as f64;
            let wave = (t * (1.0 + (i * 0.37) % 1.3) + i * 1.7).sin() * 0.5 + 0.5;
            let height = MIN_BAR as f64 + wave * (MAX_BAR - MIN_BAR) as f64;
            (height.round() as u64).clamp(MIN_BAR, MAX_BAR)
        })
        .collect()
}

/// Focus targets: the four moods, then the play button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VibeFocus {
    Mood(Mood),
    Play,
}

/// Persistent focus state for the vibe screen.
#[derive(Debug, Default)]
pub struct VibeView {
    pub mood: usize,
    pub on_player: bool,
}

impl VibeView {
    pub fn current(&self, vibe: &VibeState) -> VibeFocus {
        if self.on_player && vibe.current_music.is_some() {
            VibeFocus::Play
        } else {
            VibeFocus::Mood(Mood::ALL[self.mood.min(Mood::ALL.len() - 1)])
        }
    }
}

impl ScreenView for VibeView {
    fn handle_event(&mut self, event: &TuiEvent, app: &App) -> Option<ScreenEvent> {
        if app.vibe.current_music.is_none() {
            self.on_player = false;
        }
        match (self.current(&app.vibe), event) {
            (_, TuiEvent::InputChar(' ')) => Some(ScreenEvent::Dispatch(Action::TogglePlayback)),
            (_, TuiEvent::Back | TuiEvent::Backspace) => Some(ScreenEvent::FocusMenu),
            (VibeFocus::Mood(_), TuiEvent::Left) if self.mood == 0 => Some(ScreenEvent::FocusMenu),
            (VibeFocus::Mood(_), TuiEvent::Left) => {
                self.mood -= 1;
                None
            }
            (VibeFocus::Mood(_), TuiEvent::Right) => {
                self.mood = (self.mood + 1).min(Mood::ALL.len() - 1);
                None
            }
            (VibeFocus::Mood(_), TuiEvent::Down) => {
                self.on_player = app.vibe.current_music.is_some();
                None
            }
            (VibeFocus::Mood(mood), TuiEvent::Select) => {
                Some(ScreenEvent::Dispatch(Action::SelectMood(mood)))
            }
            (VibeFocus::Play, TuiEvent::Up) => {
                self.on_player = false;
                None
            }
            (VibeFocus::Play, TuiEvent::Left) => Some(ScreenEvent::FocusMenu),
            (VibeFocus::Play, TuiEvent::Select) => {
                Some(ScreenEvent::Dispatch(Action::TogglePlayback))
            }
            _ => None,
        }
    }
}

/// Transient render wrapper for the vibe screen.
pub struct Vibe<'a> {
    pub view: &'a VibeView,
    pub vibe: &'a VibeState,
    pub focused: bool,
    pub tick: usize,
}

impl Component for Vibe<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [header_area, moods_area, player_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Min(0),
        ])
        .areas(area);

        let header = Paragraph::new(vec![
            Line::styled(
                format!("{} Music Vibes", Icon::Feather("music").glyph()),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::styled(
                "Select a mood to generate music that matches your vibe",
                dim_style(),
            ),
        ]);
        frame.render_widget(header, header_area);

        let focus = self.focused.then(|| self.view.current(self.vibe));
        self.render_moods(frame, moods_area, focus);
        if self.vibe.current_music.is_some() {
            self.render_player(frame, player_area, focus == Some(VibeFocus::Play));
        }
    }
}

impl Vibe<'_> {
    fn render_moods(&self, frame: &mut Frame, area: Rect, focus: Option<VibeFocus>) {
        let cells =
            Layout::horizontal(vec![Constraint::Ratio(1, Mood::ALL.len() as u32); Mood::ALL.len()])
                .split(area);
        for (mood, cell) in Mood::ALL.into_iter().zip(cells.iter()) {
            let color = mood_color(mood);
            let selected = self.vibe.selected.is(mood);
            let label_style = if focus == Some(VibeFocus::Mood(mood)) {
                focus_style()
            } else {
                Style::default().fg(color).add_modifier(Modifier::BOLD)
            };
            let subtext = if self.vibe.is_loading(mood) {
                format!("{} Generating...", spinner(self.tick))
            } else {
                "Tap to play".to_string()
            };
            let border = if selected {
                Style::default().fg(color).add_modifier(Modifier::BOLD)
            } else {
                dim_style()
            };
            let button = Paragraph::new(vec![
                Line::styled(mood.label(), label_style).centered(),
                Line::styled(subtext, dim_style()).centered(),
            ])
            .block(Block::bordered().border_style(border));
            frame.render_widget(button, *cell);
        }
    }

    fn render_player(&self, frame: &mut Frame, area: Rect, play_focused: bool) {
        let color = self.vibe.selected.get().map(mood_color).unwrap_or(Color::Cyan);
        let title = self
            .vibe
            .selected
            .get()
            .map(|m| format!(" {} Vibes ", m.label()))
            .unwrap_or_else(|| " Now Playing ".to_string());
        let block = Block::bordered()
            .title(title)
            .border_style(Style::default().fg(color));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [info_area, bars_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(inner);

        let button = if self.vibe.loading {
            format!("[ {} ]", spinner(self.tick))
        } else if self.vibe.is_playing {
            "[ ❚❚ Pause ]".to_string()
        } else {
            "[ ▶ Play ]".to_string()
        };
        let button_style = if play_focused {
            focus_style()
        } else {
            Style::default().fg(Color::White)
        };
        let source = self.vibe.current_music.as_deref().unwrap_or_default();
        frame.render_widget(
            Paragraph::new(vec![
                Line::styled("AI Generated Music", dim_style()),
                Line::styled(source.to_string(), dim_style()),
                Line::styled(button, button_style),
            ]),
            info_area,
        );

        // Frozen pattern while paused
        let frame_tick = if self.vibe.is_playing { self.tick } else { 0 };
        let bar_style = if self.vibe.is_playing {
            Style::default().fg(color)
        } else {
            dim_style()
        };
        let bars: Vec<Bar> = bar_heights(frame_tick, VISUALIZER_BARS)
            .into_iter()
            .map(|h| Bar::default().value(h).text_value(String::new()).style(bar_style))
            .collect();
        let chart = BarChart::default()
            .data(BarGroup::default().bars(&bars))
            .bar_width(1)
            .bar_gap(1)
            .max(MAX_BAR);
        frame.render_widget(chart, bars_area);
    }
}
