use chrono::Local;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::text::Line;

use crate::core::state::{App, Screen};
use crate::tui::TuiState;
use crate::tui::component::{Component, ScreenView};
use crate::tui::components::layout::dim_style;
use crate::tui::components::{Home, Info, Menu, Services, TitleBar, Vibe};

const MENU_WIDTH: u16 = 16;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, tick: usize) {
    use Constraint::{Length, Min};
    let [title_area, body_area, help_area] =
        Layout::vertical([Length(1), Min(0), Length(1)]).areas(frame.area());
    let [menu_area, content_area] =
        Layout::horizontal([Length(MENU_WIDTH), Min(0)]).areas(body_area);

    TitleBar::new(
        app.screen.label(),
        app.status_message.as_str(),
        Local::now().format("%H:%M").to_string(),
    )
    .render(frame, title_area);

    Menu::new(&mut tui.menu, app.screen, tui.menu_focused).render(frame, menu_area);

    let focused = !tui.menu_focused;
    match app.screen {
        Screen::Home => Home {
            view: &tui.home,
            home: &app.home,
            focused,
            tick,
        }
        .render(frame, content_area),
        Screen::Vibe => Vibe {
            view: &tui.vibe,
            vibe: &app.vibe,
            focused,
            tick,
        }
        .render(frame, content_area),
        Screen::Info => Info {
            view: &mut tui.info,
            info: &app.info,
            focused,
        }
        .render(frame, content_area),
        Screen::Guest => Services {
            view: &mut tui.services,
            services: &app.services,
            focused,
            tick,
        }
        .render(frame, content_area),
    }

    frame.render_widget(Line::styled(help_text(app, tui), dim_style()), help_area);
}

fn help_text(app: &App, tui: &TuiState) -> &'static str {
    if tui.menu_focused {
        return "↑↓ choose  Enter open  → content  1-4 jump  q quit";
    }
    match app.screen {
        Screen::Guest if tui.services.captures_text(app) => {
            "type to edit  ↑↓ field  Enter next  Esc cancel"
        }
        Screen::Guest if app.services.show_form() => {
            "↑↓ field  ←→ request type  Enter select  Esc cancel"
        }
        Screen::Vibe => "←→ mood  ↓ player  Enter select  Space play/pause  Esc menu",
        Screen::Info => "↑↓ move  Enter expand  Esc collapse  r refresh  q quit",
        _ => "arrows move  Enter select  Esc menu  r refresh  q quit",
    }
}
