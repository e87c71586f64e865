//! Print rendering: every slide in order as plain text, one page per slide.

use crate::deck::{Deck, Slide};

/// Separates printed pages.
pub const PAGE_BREAK: char = '\u{c}';

#[derive(Debug, Clone)]
pub struct PrintOptions {
    /// Wrap width in columns. Values below 20 are raised to 20.
    pub width: usize,
    pub include_notes: bool,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            width: 80,
            include_notes: false,
        }
    }
}

/// Greedy word wrap. Words longer than `width` are kept whole on their own line.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        let needed = if line.is_empty() {
            word.chars().count()
        } else {
            line.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Wrap with a first-line prefix and matching hanging indent.
pub fn wrap_hanging(text: &str, prefix: &str, width: usize) -> Vec<String> {
    let indent = " ".repeat(prefix.chars().count());
    let inner = width.saturating_sub(indent.len()).max(1);
    wrap(text, inner)
        .into_iter()
        .enumerate()
        .map(|(i, l)| {
            if i == 0 {
                format!("{prefix}{l}")
            } else {
                format!("{indent}{l}")
            }
        })
        .collect()
}

/// Plain-text lines for one slide (1-based `index`).
pub fn render_slide(slide: &Slide, index: usize, total: usize, options: &PrintOptions) -> Vec<String> {
    let width = options.width.max(20);
    let mut lines = Vec::new();

    lines.push(format!("Slide {index} of {total}"));
    lines.push(String::new());
    let title = slide.display_title(index);
    lines.push(title.clone());
    lines.push("=".repeat(title.chars().count().min(width)));

    if let Some(subtitle) = &slide.subtitle {
        lines.extend(wrap(subtitle, width));
    }
    if !slide.points.is_empty() {
        lines.push(String::new());
        for point in &slide.points {
            lines.extend(wrap_hanging(point, "  • ", width));
        }
    }
    if let Some(text) = &slide.text {
        lines.push(String::new());
        lines.extend(wrap(text, width));
    }
    if options.include_notes {
        if let Some(notes) = &slide.notes {
            lines.push(String::new());
            lines.extend(wrap_hanging(notes, "Notes: ", width));
        }
    }
    lines
}

/// The whole deck, each slide followed by a page break.
pub fn render_deck(deck: &Deck, options: &PrintOptions) -> String {
    let total = deck.len();
    let mut out = String::new();
    for (i, slide) in deck.slides.iter().enumerate() {
        for line in render_slide(slide, i + 1, total, options) {
            out.push_str(&line);
            out.push('\n');
        }
        out.push(PAGE_BREAK);
        out.push('\n');
    }
    out
}
