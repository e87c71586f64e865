//! Screen geometry shared by drawing and mouse hit-testing.
//!
//! Rows, top to bottom: progress gauge, slide, navigation bar, status line.
//! The navigation bar is `[prev] [dots…] [next] [counter]`.

use ratatui::layout::{Constraint, Layout, Rect};

use deckview_core::Command;

use crate::ui::slide_view::frame_block;

pub const PREV_LABEL: &str = " ◀ Prev ";
pub const NEXT_LABEL: &str = " Next ▶ ";
pub const BUTTON_WIDTH: u16 = 8;
/// Cells per dot: the dot and a gap.
pub const DOT_PITCH: u16 = 2;

/// A clickable control under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Previous,
    Next,
    Dot(usize),
}

impl Hit {
    pub fn command(self) -> Command {
        match self {
            Hit::Previous => Command::Previous,
            Hit::Next => Command::Next,
            Hit::Dot(index) => Command::GoTo(index),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLayout {
    pub chrome_hidden: bool,
    pub slide: Rect,
    pub progress: Option<Rect>,
    pub nav: Option<Rect>,
    pub status: Option<Rect>,
    pub prev_button: Option<Rect>,
    pub next_button: Option<Rect>,
    pub counter: Option<Rect>,
    /// Visible dots as `(slide, rect)`, in slide order. When the row is too
    /// narrow for every slide, a window containing the current slide is shown.
    pub dots: Vec<(usize, Rect)>,
}

impl ScreenLayout {
    pub fn compute(area: Rect, total: usize, current: usize, chrome_hidden: bool) -> Self {
        if chrome_hidden {
            return Self {
                chrome_hidden,
                slide: area,
                progress: None,
                nav: None,
                status: None,
                prev_button: None,
                next_button: None,
                counter: None,
                dots: Vec::new(),
            };
        }

        let rows = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

        let cols = Layout::horizontal([
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Min(0),
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Length(counter_width(total)),
        ])
        .split(rows[2]);

        Self {
            chrome_hidden,
            slide: rows[1],
            progress: Some(rows[0]),
            nav: Some(rows[2]),
            status: Some(rows[3]),
            prev_button: Some(cols[0]),
            next_button: Some(cols[2]),
            counter: Some(cols[3]),
            dots: dot_rects(cols[1], total, current),
        }
    }

    /// Area inside the slide frame where slide text is drawn.
    pub fn slide_body(&self) -> Rect {
        frame_block(self.chrome_hidden, "").inner(self.slide)
    }

    pub fn hit(&self, column: u16, row: u16) -> Option<Hit> {
        if self.prev_button.is_some_and(|r| contains(r, column, row)) {
            return Some(Hit::Previous);
        }
        if self.next_button.is_some_and(|r| contains(r, column, row)) {
            return Some(Hit::Next);
        }
        self.dots
            .iter()
            .find(|&&(_, r)| contains(r, column, row))
            .map(|&(index, _)| Hit::Dot(index))
    }

    /// Rect of the dot for `slide`, if it is visible.
    pub fn dot(&self, slide: usize) -> Option<Rect> {
        self.dots
            .iter()
            .find(|&&(index, _)| index == slide)
            .map(|&(_, r)| r)
    }
}

/// Width reserved for `"{total} / {total}"` plus padding.
fn counter_width(total: usize) -> u16 {
    let text = format!("{total} / {total}");
    u16::try_from(text.len() + 2).unwrap_or(u16::MAX)
}

/// Dots centred in `area`, `DOT_PITCH` apart, or packed one per cell when
/// that does not fit. If even packed dots overflow, show the widest window
/// of slides around `current`.
fn dot_rects(area: Rect, total: usize, current: usize) -> Vec<(usize, Rect)> {
    let width = usize::from(area.width);
    if width == 0 || area.height == 0 || total == 0 {
        return Vec::new();
    }
    let spaced = usize::from(DOT_PITCH) * total - 1;
    let (pitch, first, count) = if spaced <= width {
        (usize::from(DOT_PITCH), 1, total)
    } else if total <= width {
        (1, 1, total)
    } else {
        let current = current.clamp(1, total);
        let first = current
            .saturating_sub(width / 2)
            .clamp(1, total - width + 1);
        (1, first, width)
    };

    let needed = pitch * (count - 1) + 1;
    let start = usize::from(area.x) + (width - needed) / 2;
    (0..count)
        .filter_map(|i| {
            let x = u16::try_from(start + i * pitch).ok()?;
            Some((first + i, Rect::new(x, area.y, 1, 1)))
        })
        .collect()
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}
