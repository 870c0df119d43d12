//! # Guest Services Screen
//!
//! A 2x2 grid of service categories above the guest's recent requests.
//! Selecting a category opens the request form as an overlay; selecting
//! the same category again (or Back) closes it.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ServicesView` lives in `TuiState`
//! - `Services` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::api::{RequestStatus, ServiceRequest};
use crate::core::action::{Action, FieldEdit, FormField};
use crate::core::services::{ServiceCategory, sort_recent};
use crate::core::state::{App, ServicesState};
use crate::tui::component::{ScreenEvent, ScreenView};
use crate::tui::components::layout::{
    centered_rect, dim_style, error_style, focus_style, selected_style, spinner,
    truncate_to_width,
};
use crate::tui::event::TuiEvent;

const GRID_COLUMNS: usize = 2;
const CARD_HEIGHT: u16 = 4;
/// Rows one request takes in the list.
const REQUEST_HEIGHT: u16 = 3;

/// Focusable elements of the request form, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    RequestType,
    Details,
    PreferredTime,
    Submit,
    Cancel,
}

impl FormFocus {
    pub const ALL: [FormFocus; 5] = [
        FormFocus::RequestType,
        FormFocus::Details,
        FormFocus::PreferredTime,
        FormFocus::Submit,
        FormFocus::Cancel,
    ];

    fn text_field(self) -> Option<FormField> {
        match self {
            Self::Details => Some(FormField::Details),
            Self::PreferredTime => Some(FormField::PreferredTime),
            _ => None,
        }
    }
}

/// Where focus sits while the form is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridFocus {
    #[default]
    Categories,
    /// Up/Down scroll the request list.
    Requests,
}

/// Persistent focus and scroll state for the services screen.
#[derive(Debug, Default)]
pub struct ServicesView {
    pub grid: GridFocus,
    pub category: usize,
    pub field: usize,
    pub scroll: ScrollViewState,
    /// Category the form was last opened for; a change resets `field`.
    form_for: Option<ServiceCategory>,
}

impl ServicesView {
    fn sync(&mut self, services: &ServicesState) {
        let active = services.active_category.get();
        if active != self.form_for {
            self.form_for = active;
            self.field = 0;
        }
    }

    pub fn form_focus(&self) -> FormFocus {
        FormFocus::ALL[self.field.min(FormFocus::ALL.len() - 1)]
    }

    pub fn focused_category(&self) -> ServiceCategory {
        ServiceCategory::ALL[self.category.min(ServiceCategory::ALL.len() - 1)]
    }

    fn handle_grid(&mut self, event: &TuiEvent) -> Option<ScreenEvent> {
        let count = ServiceCategory::ALL.len();
        let column = self.category % GRID_COLUMNS;
        if self.grid == GridFocus::Requests {
            return match event {
                TuiEvent::Up if self.scroll.offset().y == 0 => {
                    self.grid = GridFocus::Categories;
                    None
                }
                TuiEvent::Up => {
                    self.scroll.scroll_up();
                    None
                }
                TuiEvent::Down => {
                    self.scroll.scroll_down();
                    None
                }
                TuiEvent::Left | TuiEvent::Back | TuiEvent::Backspace => {
                    self.grid = GridFocus::Categories;
                    None
                }
                _ => None,
            };
        }
        match event {
            TuiEvent::Left if column == 0 => Some(ScreenEvent::FocusMenu),
            TuiEvent::Left => {
                self.category -= 1;
                None
            }
            TuiEvent::Right => {
                if column + 1 < GRID_COLUMNS && self.category + 1 < count {
                    self.category += 1;
                }
                None
            }
            TuiEvent::Up => {
                self.category = self.category.saturating_sub(GRID_COLUMNS);
                None
            }
            TuiEvent::Down if self.category + GRID_COLUMNS < count => {
                self.category += GRID_COLUMNS;
                None
            }
            TuiEvent::Down => {
                self.grid = GridFocus::Requests;
                None
            }
            TuiEvent::Select => Some(ScreenEvent::Dispatch(Action::SelectServiceCategory(
                self.focused_category(),
            ))),
            TuiEvent::Back | TuiEvent::Backspace => Some(ScreenEvent::FocusMenu),
            _ => None,
        }
    }

    fn handle_form(&mut self, event: &TuiEvent) -> Option<ScreenEvent> {
        let focus = self.form_focus();
        let edit = |field, change| {
            Some(ScreenEvent::Dispatch(Action::EditForm {
                field,
                edit: change,
            }))
        };
        match (focus, event) {
            (_, TuiEvent::Back) => Some(ScreenEvent::Dispatch(Action::CancelRequestForm)),
            (_, TuiEvent::Up) => {
                self.field = self.field.saturating_sub(1);
                None
            }
            (_, TuiEvent::Down) => {
                self.field = (self.field + 1).min(FormFocus::ALL.len() - 1);
                None
            }
            (FormFocus::RequestType, TuiEvent::Right | TuiEvent::Select) => {
                edit(FormField::RequestType, FieldEdit::Next)
            }
            (FormFocus::RequestType, TuiEvent::Left) => {
                edit(FormField::RequestType, FieldEdit::Prev)
            }
            (FormFocus::Submit, TuiEvent::Right) => {
                self.field += 1;
                None
            }
            (FormFocus::Cancel, TuiEvent::Left) => {
                self.field -= 1;
                None
            }
            (FormFocus::Submit, TuiEvent::Select) => {
                Some(ScreenEvent::Dispatch(Action::SubmitRequest))
            }
            (FormFocus::Cancel, TuiEvent::Select | TuiEvent::Backspace) => {
                Some(ScreenEvent::Dispatch(Action::CancelRequestForm))
            }
            (FormFocus::Details | FormFocus::PreferredTime, TuiEvent::Select) => {
                self.field += 1;
                None
            }
            (focus, TuiEvent::InputChar(c)) => {
                edit(focus.text_field()?, FieldEdit::Insert(*c))
            }
            (focus, TuiEvent::Paste(text)) => {
                // Fields are single-line
                let text = text.replace(['\r', '\n'], " ");
                edit(focus.text_field()?, FieldEdit::Paste(text))
            }
            (focus, TuiEvent::Backspace) => edit(focus.text_field()?, FieldEdit::Backspace),
            _ => None,
        }
    }
}

impl ScreenView for ServicesView {
    fn handle_event(&mut self, event: &TuiEvent, app: &App) -> Option<ScreenEvent> {
        self.sync(&app.services);
        if app.services.show_form() {
            self.handle_form(event)
        } else {
            self.handle_grid(event)
        }
    }

    fn captures_text(&self, app: &App) -> bool {
        app.services.show_form()
            && self.form_for == app.services.active_category.get()
            && self.form_focus().text_field().is_some()
    }
}

/// Transient render wrapper for the services screen.
pub struct Services<'a> {
    pub view: &'a mut ServicesView,
    pub services: &'a ServicesState,
    pub focused: bool,
    pub tick: usize,
}

impl Services<'_> {
    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.view.sync(self.services);

        let grid_height = CARD_HEIGHT * ServiceCategory::ALL.len().div_ceil(GRID_COLUMNS) as u16;
        let [grid_area, list_area] =
            Layout::vertical([Constraint::Length(grid_height), Constraint::Min(0)]).areas(area);

        self.render_grid(frame, grid_area);
        self.render_requests(frame, list_area);

        if let Some(category) = self.services.active_category.get() {
            self.render_form(frame, area, category);
        }
    }

    fn render_grid(&self, frame: &mut Frame, area: Rect) {
        let row_areas = Layout::vertical(vec![
            Constraint::Length(CARD_HEIGHT);
            ServiceCategory::ALL.len().div_ceil(GRID_COLUMNS)
        ])
        .split(area);

        for (i, category) in ServiceCategory::ALL.into_iter().enumerate() {
            let row = row_areas[i / GRID_COLUMNS];
            let cells = Layout::horizontal([Constraint::Ratio(1, GRID_COLUMNS as u32); GRID_COLUMNS])
                .split(row);
            let cell = cells[i % GRID_COLUMNS];

            let has_focus = self.focused
                && !self.services.show_form()
                && self.view.grid == GridFocus::Categories
                && i == self.view.category;
            let active = self.services.active_category.is(category);
            let (title_style, border_style) = if has_focus {
                (focus_style(), Style::default().fg(Color::Cyan))
            } else if active {
                (selected_style(), Style::default().fg(Color::Cyan))
            } else {
                (
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                    dim_style(),
                )
            };

            let width = cell.width.saturating_sub(4) as usize;
            let card = Paragraph::new(vec![
                Line::styled(
                    truncate_to_width(
                        &format!("{} {}", category.icon().glyph(), category.title()),
                        width,
                    ),
                    title_style,
                ),
                Line::styled(truncate_to_width(category.blurb(), width), dim_style()),
            ])
            .block(
                Block::bordered()
                    .border_style(border_style)
                    .padding(Padding::horizontal(1)),
            );
            frame.render_widget(card, cell);
        }
    }

    fn render_requests(&mut self, frame: &mut Frame, area: Rect) {
        let list_focused = self.focused
            && !self.services.show_form()
            && self.view.grid == GridFocus::Requests;
        let block = Block::bordered().title(" Recent Requests ").border_style(
            if list_focused {
                Style::default().fg(Color::Cyan)
            } else {
                dim_style()
            },
        );
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let requests = &self.services.requests;
        if requests.loading && requests.data.is_empty() {
            frame.render_widget(
                Paragraph::new(format!("{} Loading requests...", spinner(self.tick))),
                inner,
            );
            return;
        }

        let [notice_area, body_area] = Layout::vertical([
            Constraint::Length(u16::from(requests.error.is_some())),
            Constraint::Min(0),
        ])
        .areas(inner);
        if let Some(error) = &requests.error {
            frame.render_widget(Paragraph::new(error.as_str()).style(error_style()), notice_area);
        }

        let sorted = sort_recent(&requests.data);
        if sorted.is_empty() {
            frame.render_widget(
                Paragraph::new("No requests yet").style(dim_style()),
                body_area,
            );
            return;
        }

        let width = body_area.width.saturating_sub(1);
        let total = REQUEST_HEIGHT * sorted.len() as u16;
        let mut scroll_view = ScrollView::new(Size::new(width, total))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        for (i, request) in sorted.iter().enumerate() {
            scroll_view.render_widget(
                request_paragraph(request, width),
                Rect::new(0, i as u16 * REQUEST_HEIGHT, width, REQUEST_HEIGHT),
            );
        }

        // Keep the offset inside the content after the list shrinks
        let max_offset = total.saturating_sub(body_area.height);
        if self.view.scroll.offset().y > max_offset {
            self.view.scroll.set_offset(Position::new(0, max_offset));
        }
        frame.render_stateful_widget(scroll_view, body_area, &mut self.view.scroll);
    }

    fn render_form(&self, frame: &mut Frame, area: Rect, category: ServiceCategory) {
        let overlay = centered_rect(70, 70, area);
        frame.render_widget(Clear, overlay);

        let help = if self.services.submitting {
            format!(" {} Submitting... ", spinner(self.tick))
        } else {
            " ←/→ Change  Enter Select  Esc Cancel ".to_string()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(format!(" {} Request ", category.title()))
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(help).centered())
            .padding(Padding::new(2, 2, 1, 0));
        let inner = block.inner(overlay);
        frame.render_widget(block, overlay);

        let form = &self.services.form;
        let focus = self.focused.then(|| self.view.form_focus());
        let field_style = |f: FormFocus| {
            if focus == Some(f) {
                focus_style()
            } else {
                Style::default().fg(Color::White)
            }
        };
        let value_width = inner.width.saturating_sub(2) as usize;

        let request_type = if form.request_type.is_empty() {
            "Select a request type".to_string()
        } else {
            form.request_type.clone()
        };
        let mut lines = vec![
            Line::styled("Request type", dim_style()),
            Line::styled(
                format!("‹ {} ›", truncate_to_width(&request_type, value_width.saturating_sub(4))),
                field_style(FormFocus::RequestType),
            ),
            Line::styled(
                truncate_to_width(&category.options().join(" · "), value_width),
                dim_style(),
            ),
            Line::default(),
            Line::styled("Details", dim_style()),
            text_line(&form.request_details, focus == Some(FormFocus::Details), value_width),
            Line::default(),
            Line::styled("Preferred time", dim_style()),
            text_line(
                &form.preferred_time,
                focus == Some(FormFocus::PreferredTime),
                value_width,
            ),
            Line::default(),
        ];
        lines.push(Line::from(vec![
            Span::styled("[ Submit ]", field_style(FormFocus::Submit)),
            Span::raw("   "),
            Span::styled("[ Cancel ]", field_style(FormFocus::Cancel)),
        ]));
        frame.render_widget(Paragraph::new(lines), inner);
    }
}

/// A single-line text field; the tail stays visible when the value is long.
fn text_line(value: &str, focused: bool, width: usize) -> Line<'static> {
    let caret = if focused { "▏" } else { "" };
    let shown: String = {
        let reversed: String = value.chars().rev().collect();
        truncate_to_width(&reversed, width.saturating_sub(3))
            .chars()
            .rev()
            .collect()
    };
    let style = if focused {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Gray)
    };
    Line::from(vec![
        Span::styled("› ", dim_style()),
        Span::styled(format!("{shown}{caret}"), style),
    ])
}

pub fn status_color(status: RequestStatus) -> Color {
    match status {
        RequestStatus::Pending => Color::Yellow,
        RequestStatus::Processing => Color::Blue,
        RequestStatus::Completed => Color::Green,
    }
}

fn request_paragraph(request: &ServiceRequest, width: u16) -> Paragraph<'static> {
    let width = width as usize;
    let status = request.status.label();
    let title_width = width.saturating_sub(status.len() + 4);
    let color = status_color(request.status);
    Paragraph::new(vec![
        Line::from(vec![
            Span::styled("● ", Style::default().fg(color)),
            Span::styled(
                format!(
                    "{:<w$}",
                    truncate_to_width(&request.title, title_width),
                    w = title_width
                ),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" {status}"), Style::default().fg(color)),
        ]),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(
                truncate_to_width(&request.description, width.saturating_sub(2)),
                Style::default().fg(Color::Gray),
            ),
        ]),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(request.time.clone(), dim_style()),
        ]),
    ])
}
