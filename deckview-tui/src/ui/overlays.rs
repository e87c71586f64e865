//! Overlay widgets: key help and print preview.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::input::key_bindings_help;
use crate::theme;
use crate::ui::centered_rect;

pub fn render_help(f: &mut Frame, area: Rect) {
    let popup = centered_rect(60, 70, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Keyboard Shortcuts [Esc]close ")
        .title_style(theme::accent_bold());

    let mut lines: Vec<Line> = vec![Line::from("")];
    for (keys, desc) in key_bindings_help() {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:>16}  ", keys), theme::accent()),
            Span::styled(desc, theme::muted()),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Click a dot or drag across the slide to navigate.",
        theme::neutral(),
    )));

    f.render_widget(Paragraph::new(lines).block(block), popup);
}

/// Every slide, one after another, without navigation chrome.
pub fn render_print(f: &mut Frame, area: Rect, app: &App, scroll: usize) {
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::muted())
        .title(" Print preview [j/k]scroll [Esc]return ")
        .title_style(theme::accent_bold());

    let lines: Vec<Line> = app
        .print_lines()
        .into_iter()
        .map(|l| {
            if l.starts_with('─') {
                Line::from(Span::styled(l, theme::muted()))
            } else {
                Line::from(Span::styled(l, theme::text()))
            }
        })
        .collect();

    let offset = u16::try_from(scroll).unwrap_or(u16::MAX);
    let para = Paragraph::new(lines).block(block).scroll((offset, 0));
    f.render_widget(para, area);
}
