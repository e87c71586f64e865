//! Progress gauge and navigation bar. Both are drawn straight from a
//! `Projection`, so they cannot disagree with the navigator.

use ratatui::layout::{Alignment, Rect};
use ratatui::text::Span;
use ratatui::widgets::{Gauge, Paragraph};
use ratatui::Frame;

use deckview_core::Projection;

use crate::theme;
use crate::ui::layout::{ScreenLayout, NEXT_LABEL, PREV_LABEL};

pub const ACTIVE_DOT: &str = "●";
pub const INACTIVE_DOT: &str = "○";

pub fn render_progress(f: &mut Frame, area: Rect, projection: &Projection) {
    let gauge = Gauge::default()
        .gauge_style(theme::accent())
        .ratio(projection.progress_ratio())
        .label(Span::styled(
            format!("{:.0}%", projection.progress_percent),
            theme::text(),
        ));
    f.render_widget(gauge, area);
}

pub fn render_nav(f: &mut Frame, layout: &ScreenLayout, projection: &Projection, focus: Option<usize>) {
    if let Some(area) = layout.prev_button {
        let label = Span::styled(PREV_LABEL, theme::button(!projection.prev_disabled));
        f.render_widget(Paragraph::new(label), area);
    }

    for &(index, area) in &layout.dots {
        let active = projection.is_dot_active(index);
        let symbol = if active { ACTIVE_DOT } else { INACTIVE_DOT };
        f.render_widget(
            Span::styled(symbol, theme::dot(active, focus == Some(index))),
            area,
        );
    }

    if let Some(area) = layout.next_button {
        let label = Span::styled(NEXT_LABEL, theme::button(!projection.next_disabled));
        f.render_widget(Paragraph::new(label), area);
    }

    if let Some(area) = layout.counter {
        let counter = Paragraph::new(format!("{} ", projection.counter_text()))
            .style(theme::text())
            .alignment(Alignment::Right);
        f.render_widget(counter, area);
    }
}
