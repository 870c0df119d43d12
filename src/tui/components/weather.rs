//! # Weather Panel
//!
//! Current conditions, an hourly strip and the 3-day outlook.

use chrono::Local;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::api::WeatherSnapshot;
use crate::core::fetch::FetchState;
use crate::core::forecast::{ConditionKind, format_temp, visible_daily};
use crate::core::state::{Forecast, Overview};
use crate::tui::component::Component;
use crate::tui::components::layout::{dim_style, error_style, spinner, truncate_to_width};

/// Width of one hourly column.
const HOUR_COLUMN: u16 = 8;
/// Columns taken by a daily row before its range bar.
const DAILY_LABEL: u16 = 26;

pub struct WeatherPanel<'a> {
    pub overview: &'a FetchState<Overview>,
    pub forecast: &'a FetchState<Forecast>,
    pub tick: usize,
}

impl Component for WeatherPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [current_area, hourly_area, daily_area] = Layout::vertical([
            Constraint::Length(5),
            Constraint::Length(5),
            Constraint::Min(0),
        ])
        .areas(area);

        self.render_current(frame, current_area);
        self.render_hourly(frame, hourly_area);
        self.render_daily(frame, daily_area);
    }
}

impl WeatherPanel<'_> {
    fn render_current(&self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title(" Current Weather ")
            .border_style(dim_style());

        let mut lines = vec![Line::styled(
            Local::now().format("%A, %B %-d  %H:%M").to_string(),
            dim_style(),
        )];
        lines.extend(match &self.overview.data.weather {
            Some(weather) => current_lines(weather),
            None if self.overview.loading => vec![Line::from(format!(
                "{} Loading weather...",
                spinner(self.tick)
            ))],
            None => vec![Line::styled(
                self.overview
                    .error
                    .clone()
                    .unwrap_or_else(|| "No weather data".to_string()),
                error_style(),
            )],
        });
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_hourly(&self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title(" Hourly ")
            .border_style(dim_style());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let hourly = &self.forecast.data.hourly;
        if hourly.is_empty() {
            frame.render_widget(self.forecast_placeholder(), inner);
            return;
        }

        let columns = (inner.width / HOUR_COLUMN).max(1) as usize;
        let constraints = vec![Constraint::Length(HOUR_COLUMN); columns.min(hourly.len())];
        let cells = Layout::horizontal(constraints).split(inner);
        for (entry, cell) in hourly.iter().zip(cells.iter()) {
            let lines = vec![
                Line::styled(
                    truncate_to_width(&entry.time, HOUR_COLUMN as usize - 1),
                    dim_style(),
                ),
                Line::from(ConditionKind::from_condition(&entry.icon).glyph()),
                Line::styled(format_temp(entry.temp), Style::default().fg(Color::White)),
            ];
            frame.render_widget(Paragraph::new(lines), *cell);
        }
    }

    fn render_daily(&self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title(" 3-Day Forecast ")
            .border_style(dim_style());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let daily = visible_daily(&self.forecast.data.daily);
        if daily.is_empty() {
            frame.render_widget(self.forecast_placeholder(), inner);
            return;
        }

        // Bars share one scale so the days can be compared
        let floor = daily.iter().map(|d| d.low).fold(f64::INFINITY, f64::min);
        let ceil = daily.iter().map(|d| d.high).fold(f64::NEG_INFINITY, f64::max);
        let bar_width = inner.width.saturating_sub(DAILY_LABEL) as usize;

        let lines: Vec<Line> = daily
            .iter()
            .map(|day| {
                let (lead, fill) = range_bar(day.low, day.high, floor, ceil, bar_width);
                Line::from(vec![
                    Span::styled(
                        format!("{:<10}", truncate_to_width(&day.day, 9)),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(format!(
                        "{}  ",
                        ConditionKind::from_condition(&day.icon).glyph()
                    )),
                    Span::styled(format_temp(day.high), Style::default().fg(Color::White)),
                    Span::styled(" / ", dim_style()),
                    Span::styled(format_temp(day.low), dim_style()),
                    Span::raw(" ".repeat(2 + lead)),
                    Span::styled("━".repeat(fill), Style::default().fg(Color::LightBlue)),
                ])
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn forecast_placeholder(&self) -> Paragraph<'static> {
        if self.forecast.loading {
            Paragraph::new(format!("{} Loading forecast...", spinner(self.tick)))
        } else if let Some(error) = &self.forecast.error {
            Paragraph::new(error.clone()).style(error_style())
        } else {
            Paragraph::new("No forecast available").style(dim_style())
        }
    }
}

/// Offset and length of a day's low..high span on a `floor..ceil` scale
/// drawn `width` columns wide. Always at least one column when there is room.
fn range_bar(low: f64, high: f64, floor: f64, ceil: f64, width: usize) -> (usize, usize) {
    if width == 0 {
        return (0, 0);
    }
    let span = (ceil - floor).max(f64::EPSILON);
    let scale = |t: f64| (((t - floor) / span) * width as f64).round() as usize;
    let lead = scale(low).min(width - 1);
    let end = scale(high).clamp(lead + 1, width);
    (lead, end - lead)
}

fn current_lines(weather: &WeatherSnapshot) -> Vec<Line<'static>> {
    let kind = ConditionKind::from_condition(&weather.condition);
    vec![
        Line::from(vec![
            Span::raw(format!("{}  ", kind.glyph())),
            Span::styled(
                format_temp(weather.temp),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("  {}", weather.condition)),
        ]),
        Line::from(vec![
            Span::styled("H ", dim_style()),
            Span::raw(format_temp(weather.high)),
            Span::styled("  L ", dim_style()),
            Span::raw(format_temp(weather.low)),
        ]),
    ]
}
