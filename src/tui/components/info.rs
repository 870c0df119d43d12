//! # Info Screen
//!
//! Amenity accordion. Categories are rows; the expanded category lists its
//! amenities beneath it, and the expanded amenity shows its description,
//! hours and location.
//!
//! Rows are laid out into a `ScrollView` whose offset follows the cursor.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::action::Action;
use crate::core::catalog::{Amenity, CATEGORIES, Category};
use crate::core::state::{App, InfoState};
use crate::tui::component::{ScreenEvent, ScreenView};
use crate::tui::components::layout::{
    dim_style, focus_style, scroll_into_view, selected_style, truncate_to_width, wrap_lines,
};
use crate::tui::event::TuiEvent;

/// Columns amenity rows are indented under their category.
const INDENT: u16 = 4;

/// One visible row of the accordion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoRow {
    Category(&'static Category),
    Amenity(&'static Amenity),
}

/// Visible rows for the current expansion state.
pub fn rows(info: &InfoState) -> Vec<InfoRow> {
    let mut rows = Vec::new();
    for category in CATEGORIES {
        rows.push(InfoRow::Category(category));
        if info.expanded_category.is(category.id) {
            rows.extend(category.members().map(InfoRow::Amenity));
        }
    }
    rows
}

/// Persistent cursor and scroll state for the info screen.
#[derive(Debug, Default)]
pub struct InfoView {
    pub cursor: usize,
    pub scroll: ScrollViewState,
    /// Category row to put the cursor on once its toggle has been applied.
    anchor: Option<&'static str>,
}

impl InfoView {
    /// Re-seat the cursor after the row list changed.
    fn settle(&mut self, rows: &[InfoRow]) {
        if let Some(id) = self.anchor.take()
            && let Some(i) = rows
                .iter()
                .position(|r| matches!(r, InfoRow::Category(c) if c.id == id))
        {
            self.cursor = i;
        }
        self.cursor = self.cursor.min(rows.len().saturating_sub(1));
    }
}

impl ScreenView for InfoView {
    fn handle_event(&mut self, event: &TuiEvent, app: &App) -> Option<ScreenEvent> {
        let rows = rows(&app.info);
        self.settle(&rows);
        match event {
            TuiEvent::Up => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            TuiEvent::Down => {
                self.cursor = (self.cursor + 1).min(rows.len().saturating_sub(1));
                None
            }
            TuiEvent::Left => Some(ScreenEvent::FocusMenu),
            TuiEvent::Select => match rows.get(self.cursor)? {
                InfoRow::Category(category) => {
                    self.anchor = Some(category.id);
                    Some(ScreenEvent::Dispatch(Action::ToggleCategory(category.id)))
                }
                InfoRow::Amenity(amenity) => {
                    Some(ScreenEvent::Dispatch(Action::ToggleAmenity(amenity.id)))
                }
            },
            TuiEvent::Back | TuiEvent::Backspace => {
                let visible_amenity = app.info.expanded_amenity.get().filter(|id| {
                    rows.iter()
                        .any(|r| matches!(r, InfoRow::Amenity(a) if a.id == *id))
                });
                if let Some(id) = visible_amenity {
                    Some(ScreenEvent::Dispatch(Action::ToggleAmenity(id)))
                } else if let Some(id) = app.info.expanded_category.get() {
                    self.anchor = Some(id);
                    Some(ScreenEvent::Dispatch(Action::ToggleCategory(id)))
                } else {
                    Some(ScreenEvent::FocusMenu)
                }
            }
            _ => None,
        }
    }
}

/// Transient render wrapper for the info screen.
pub struct Info<'a> {
    pub view: &'a mut InfoView,
    pub info: &'a InfoState,
    pub focused: bool,
}

impl Info<'_> {
    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title(" Amenities ")
            .border_style(dim_style());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = rows(self.info);
        self.view.settle(&rows);

        // One column for the scrollbar
        let width = inner.width.saturating_sub(1);
        let rendered: Vec<Paragraph> = rows
            .iter()
            .enumerate()
            .map(|(i, row)| self.row_paragraph(row, self.focused && i == self.view.cursor, width))
            .collect();
        let heights: Vec<u16> = rows
            .iter()
            .map(|row| self.row_height(row, width))
            .collect();
        let total: u16 = heights.iter().sum();

        let mut scroll_view = ScrollView::new(Size::new(width, total.max(1)))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y = 0;
        let mut cursor_top = 0;
        for (i, (paragraph, height)) in rendered.into_iter().zip(&heights).enumerate() {
            if i == self.view.cursor {
                cursor_top = y;
            }
            scroll_view.render_widget(paragraph, Rect::new(0, y, width, *height));
            y += height;
        }

        let cursor_height = heights.get(self.view.cursor).copied().unwrap_or(1);
        let offset = scroll_into_view(
            self.view.scroll.offset().y,
            cursor_top,
            cursor_height,
            inner.height,
        );
        self.view.scroll.set_offset(Position::new(0, offset));
        frame.render_stateful_widget(scroll_view, inner, &mut self.view.scroll);
    }

    fn amenity_expanded(&self, amenity: &Amenity) -> bool {
        self.info.expanded_amenity.is(amenity.id)
    }

    fn row_height(&self, row: &InfoRow, width: u16) -> u16 {
        match row {
            InfoRow::Amenity(amenity) if self.amenity_expanded(amenity) => {
                let text_width = width.saturating_sub(INDENT + 2);
                // title + description + hours + location + spacer
                1 + wrap_lines(amenity.description, text_width).len() as u16 + 3
            }
            _ => 1,
        }
    }

    fn row_paragraph(&self, row: &InfoRow, focused: bool, width: u16) -> Paragraph<'static> {
        match row {
            InfoRow::Category(category) => {
                let expanded = self.info.expanded_category.is(category.id);
                let arrow = if expanded { "▾" } else { "▸" };
                let style = if focused {
                    focus_style()
                } else if expanded {
                    selected_style()
                } else {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD)
                };
                let label = format!(
                    "{} {} {} ({})",
                    arrow,
                    category.icon.glyph(),
                    category.title,
                    category.amenities.len()
                );
                Paragraph::new(Line::styled(
                    truncate_to_width(&label, width as usize),
                    style,
                ))
            }
            InfoRow::Amenity(amenity) => {
                let indent = " ".repeat(INDENT as usize);
                let style = if focused {
                    focus_style()
                } else {
                    Style::default().fg(Color::Gray)
                };
                let title = format!("{} {}", amenity.icon.glyph(), amenity.title);
                let mut lines = vec![Line::from(vec![
                    Span::raw(indent.clone()),
                    Span::styled(
                        truncate_to_width(&title, width.saturating_sub(INDENT) as usize),
                        style,
                    ),
                ])];
                if self.amenity_expanded(amenity) {
                    let pad = format!("{indent}  ");
                    let text_width = width.saturating_sub(INDENT + 2);
                    for line in wrap_lines(amenity.description, text_width) {
                        lines.push(Line::from(format!("{pad}{line}")));
                    }
                    lines.push(Line::from(vec![
                        Span::raw(pad.clone()),
                        Span::styled("Hours: ", dim_style()),
                        Span::raw(amenity.hours),
                    ]));
                    lines.push(Line::from(vec![
                        Span::raw(pad),
                        Span::styled("Location: ", dim_style()),
                        Span::raw(amenity.location),
                    ]));
                    lines.push(Line::default());
                }
                Paragraph::new(lines)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::update;
    use crate::core::catalog::DEFAULT_CATEGORY;
    use crate::test_support::test_app;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn dispatch(app: &mut App, view: &mut InfoView, event: TuiEvent) {
        if let Some(ScreenEvent::Dispatch(action)) = view.handle_event(&event, app) {
            update(app, action);
        }
    }

    fn render(app: &App, view: &mut InfoView) -> String {
        let backend = TestBackend::new(70, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                Info {
                    view,
                    info: &app.info,
                    focused: true,
                }
                .render(f, f.area());
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
    fn test_default_category_open() {
        let app = test_app();
        let rows = rows(&app.info);
        // 4 categories + 3 wellness amenities
        assert_eq!(rows.len(), 7);
        assert!(matches!(rows[0], InfoRow::Category(c) if c.id == DEFAULT_CATEGORY));
        assert!(matches!(rows[1], InfoRow::Amenity(a) if a.id == "sauna"));
    }

    #[test]
    fn test_select_amenity_expands_details() {
        let mut app = test_app();
        let mut view = InfoView::default();
        dispatch(&mut app, &mut view, TuiEvent::Down);
        dispatch(&mut app, &mut view, TuiEvent::Select);
        assert!(app.info.expanded_amenity.is("sauna"));

        let text = render(&app, &mut view);
        assert!(text.contains("Lakeside Sauna"));
        assert!(text.contains("Hours:"));
        assert!(text.contains("Separate lakeside sauna building"));
    }

    #[test]
    fn test_opening_another_category_replaces() {
        let mut app = test_app();
        let mut view = InfoView::default();
        // Cursor to "tech", the last category row
        for _ in 0..10 {
            dispatch(&mut app, &mut view, TuiEvent::Down);
        }
        dispatch(&mut app, &mut view, TuiEvent::Select);
        assert!(app.info.expanded_category.is("tech"));

        // Cursor follows the toggled category row
        let rows = rows(&app.info);
        view.settle(&rows);
        assert!(matches!(rows[view.cursor], InfoRow::Category(c) if c.id == "tech"));
    }

    #[test]
    fn test_back_collapses_amenity_then_category_then_leaves() {
        let mut app = test_app();
        let mut view = InfoView::default();
        dispatch(&mut app, &mut view, TuiEvent::Down);
        dispatch(&mut app, &mut view, TuiEvent::Select);

        dispatch(&mut app, &mut view, TuiEvent::Back);
        assert_eq!(app.info.expanded_amenity.get(), None);
        dispatch(&mut app, &mut view, TuiEvent::Back);
        assert_eq!(app.info.expanded_category.get(), None);
        assert!(matches!(
            view.handle_event(&TuiEvent::Back, &app),
            Some(ScreenEvent::FocusMenu)
        ));
    }

    #[test]
    fn test_cursor_scrolls_into_view() {
        let mut app = test_app();
        let mut view = InfoView::default();
        update(&mut app, Action::ToggleCategory("outdoor"));
        let total = rows(&app.info).len();
        for _ in 0..total {
            dispatch(&mut app, &mut view, TuiEvent::Down);
        }
        let backend = TestBackend::new(50, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                Info {
                    view: &mut view,
                    info: &app.info,
                    focused: true,
                }
                .render(f, f.area());
            })
            .unwrap();
        assert!(view.scroll.offset().y > 0);
    }
}
