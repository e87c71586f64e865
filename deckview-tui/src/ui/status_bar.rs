//! Bottom status line: live announcement, transient status, clock.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use deckview_core::projection::dot_label;

use crate::app::{App, StatusLevel};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let mut spans: Vec<Span> = Vec::new();

    if let Some(announcement) = app.live_region.current() {
        spans.push(Span::styled(format!(" » {}", announcement.text), theme::neutral()));
    }

    if let Some((msg, level)) = &app.status_message {
        let style = match level {
            StatusLevel::Info => theme::accent(),
            StatusLevel::Warning => theme::warning(),
        };
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg.as_str(), style));
    }

    if let Some(index) = app.dot_focus {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(dot_label(index), theme::accent_bold()));
    }

    let elapsed = app.started_at.elapsed().as_secs();
    let right = format!(
        "{:02}:{:02}  {}  ? help ",
        elapsed / 60,
        elapsed % 60,
        chrono::Local::now().format("%H:%M"),
    );
    let right_width = u16::try_from(right.chars().count()).unwrap_or(u16::MAX);
    let [left_area, right_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(right_width)]).areas(area);

    f.render_widget(Paragraph::new(Line::from(spans)), left_area);
    f.render_widget(Paragraph::new(Span::styled(right, theme::muted())), right_area);
}
