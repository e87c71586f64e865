//! The slide itself: frame, title, bullets, text and optional notes.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph};
use ratatui::Frame;

use deckview_core::print::{wrap, wrap_hanging};
use deckview_core::Slide;

use crate::app::App;
use crate::theme;

const BULLET: &str = "  • ";

/// Slide frame: bordered with the deck title, or bare in presentation mode.
pub fn frame_block(chrome_hidden: bool, title: &str) -> Block<'static> {
    let base = Style::default().bg(theme::BACKGROUND);
    if chrome_hidden {
        Block::default().padding(Padding::new(2, 2, 1, 1)).style(base)
    } else {
        Block::bordered()
            .border_style(theme::panel_border())
            .title(format!(" {title} "))
            .title_style(theme::accent_bold())
            .padding(Padding::horizontal(2))
            .style(base)
    }
}

/// Styled, pre-wrapped lines for slide `index` at `width` columns.
pub fn slide_lines(slide: &Slide, index: usize, width: usize, show_notes: bool) -> Vec<Line<'static>> {
    let width = width.max(1);
    let mut lines: Vec<Line<'static>> = Vec::new();

    let title = slide.display_title(index);
    for l in wrap(&title, width) {
        lines.push(Line::from(Span::styled(l, theme::accent_bold())));
    }
    lines.push(Line::from(Span::styled(
        "─".repeat(title.chars().count().min(width)),
        theme::muted(),
    )));

    if let Some(subtitle) = &slide.subtitle {
        for l in wrap(subtitle, width) {
            lines.push(Line::from(Span::styled(
                l,
                theme::neutral().add_modifier(Modifier::ITALIC),
            )));
        }
    }

    if !slide.points.is_empty() {
        lines.push(Line::from(""));
        for point in &slide.points {
            for (i, l) in wrap_hanging(point, BULLET, width).into_iter().enumerate() {
                let (head, body) = l.split_at(if i == 0 { BULLET.len() } else { 0 });
                lines.push(Line::from(vec![
                    Span::styled(head.to_string(), theme::accent()),
                    Span::styled(body.to_string(), theme::text()),
                ]));
            }
        }
    }

    if let Some(text) = &slide.text {
        lines.push(Line::from(""));
        for l in wrap(text, width) {
            lines.push(Line::from(Span::styled(l, theme::text())));
        }
    }

    if show_notes {
        if let Some(notes) = &slide.notes {
            lines.push(Line::from(""));
            for l in wrap_hanging(notes, "Notes: ", width) {
                lines.push(Line::from(Span::styled(l, theme::muted())));
            }
        }
    }

    lines
}

pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    let block = frame_block(app.chrome_hidden, &app.deck.meta.title);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let current = app.navigator.current();
    let lines = app
        .cache
        .lines(&app.deck, current, inner.width, app.config.show_notes)
        .to_vec();
    f.render_widget(Paragraph::new(lines), inner);
}
