//! Top-level UI layout: progress, slide, navigation bar, status line.

pub mod controls;
pub mod layout;
pub mod overlays;
pub mod slide_view;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;

use crate::app::{App, Overlay};

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &mut App) {
    let full = f.area();
    app.viewport = full;
    let screen = app.layout();
    let projection = app.projection();

    slide_view::render(f, screen.slide, app);

    if let Some(area) = screen.progress {
        controls::render_progress(f, area, &projection);
    }
    if screen.nav.is_some() {
        controls::render_nav(f, &screen, &projection, app.dot_focus);
    }
    if let Some(area) = screen.status {
        status_bar::render(f, area, app);
    }

    match app.overlay {
        Overlay::Help => overlays::render_help(f, screen.slide),
        Overlay::Print { scroll } => overlays::render_print(f, full, app, scroll),
        Overlay::None => {}
    }
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
