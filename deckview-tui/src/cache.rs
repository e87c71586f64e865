//! Wrapped-and-styled slide lines, keyed by slide and body width.

use std::collections::HashMap;

use ratatui::text::Line;

use deckview_core::Deck;

use crate::ui::slide_view::slide_lines;

#[derive(Debug, Default)]
pub struct SlideCache {
    width: u16,
    entries: HashMap<usize, Vec<Line<'static>>>,
}

impl SlideCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the lines for `slide` at `width` unless already cached.
    pub fn prepare(&mut self, deck: &Deck, slide: usize, width: u16, show_notes: bool) {
        self.lines(deck, slide, width, show_notes);
    }

    /// Cached lines for `slide`, building them on a miss. A width change
    /// invalidates every entry.
    pub fn lines(&mut self, deck: &Deck, slide: usize, width: u16, show_notes: bool) -> &[Line<'static>] {
        if width != self.width {
            self.entries.clear();
            self.width = width;
        }
        self.entries
            .entry(slide)
            .or_insert_with(|| match deck.slide(slide) {
                Some(s) => slide_lines(s, slide, usize::from(width), show_notes),
                None => Vec::new(),
            })
    }

    pub fn contains(&self, slide: usize, width: u16) -> bool {
        self.width == width && self.entries.contains_key(&slide)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
