//! # Aurora Panel
//!
//! KP index with its viewing band, best time, and an hourly intensity chart.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::api::AuroraForecast;
use crate::core::fetch::FetchState;
use crate::core::forecast::{IntensityBand, KpBand, VIEWING_TIP, intensity_fill};
use crate::core::state::Overview;
use crate::tui::component::Component;
use crate::tui::components::layout::{dim_style, error_style, spinner, truncate_to_width};

const TIME_COLUMN: usize = 8;

pub struct AuroraPanel<'a> {
    pub overview: &'a FetchState<Overview>,
    pub tick: usize,
}

impl Component for AuroraPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title(" Aurora Forecast ")
            .border_style(dim_style());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some(aurora) = &self.overview.data.aurora else {
            let placeholder = if self.overview.loading {
                Paragraph::new(format!("{} Loading aurora forecast...", spinner(self.tick)))
            } else {
                Paragraph::new(
                    self.overview
                        .error
                        .clone()
                        .unwrap_or_else(|| "No aurora data".to_string()),
                )
                .style(error_style())
            };
            frame.render_widget(placeholder, inner);
            return;
        };

        let [summary_area, chart_area, tip_area] = Layout::vertical([
            Constraint::Length(4),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .areas(inner);

        frame.render_widget(Paragraph::new(summary_lines(aurora)), summary_area);

        let bar_width = chart_area.width.saturating_sub(TIME_COLUMN as u16 + 4) as usize;
        let chart: Vec<Line> = aurora
            .forecast
            .iter()
            .take(chart_area.height as usize)
            .map(|hour| intensity_line(&hour.time, hour.intensity, bar_width))
            .collect();
        frame.render_widget(Paragraph::new(chart), chart_area);

        frame.render_widget(
            Paragraph::new(VIEWING_TIP)
                .style(dim_style())
                .wrap(Wrap { trim: true }),
            tip_area,
        );
    }
}

pub fn kp_color(band: KpBand) -> Color {
    match band {
        KpBand::Excellent => Color::Magenta,
        KpBand::Good => Color::Green,
        KpBand::Possible => Color::Yellow,
        KpBand::Unlikely => Color::Gray,
    }
}

fn intensity_color(band: IntensityBand) -> Color {
    match band {
        IntensityBand::Strong => Color::Green,
        IntensityBand::Moderate => Color::Yellow,
        IntensityBand::Weak => Color::Blue,
    }
}

fn summary_lines(aurora: &AuroraForecast) -> Vec<Line<'static>> {
    let band = KpBand::from_kp(aurora.kp_index);
    vec![
        Line::from(vec![
            Span::styled("KP ", dim_style()),
            Span::styled(
                format!("{:.1}", aurora.kp_index),
                Style::default()
                    .fg(kp_color(band))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(band.label(), Style::default().fg(kp_color(band))),
        ]),
        Line::from(vec![
            Span::styled("Visibility ", dim_style()),
            Span::raw(aurora.visibility.clone()),
        ]),
        Line::from(vec![
            Span::styled("Best time  ", dim_style()),
            Span::raw(aurora.best_time.clone()),
        ]),
        Line::from(vec![
            Span::styled("Location   ", dim_style()),
            Span::raw(aurora.location.clone()),
        ]),
    ]
}

fn intensity_line(time: &str, intensity: f64, bar_width: usize) -> Line<'static> {
    let filled = (intensity_fill(intensity) * bar_width as f64).round() as usize;
    let color = intensity_color(IntensityBand::from_intensity(intensity));
    Line::from(vec![
        Span::styled(
            format!(
                "{:<width$}",
                truncate_to_width(time, TIME_COLUMN - 1),
                width = TIME_COLUMN
            ),
            dim_style(),
        ),
        Span::styled("█".repeat(filled), Style::default().fg(color)),
        Span::styled("░".repeat(bar_width - filled), dim_style()),
        Span::raw(format!(" {intensity:.0}")),
    ])
}
