//! Theme tokens for the presenter.
//!
//! # Color Palette
//! - **Accent**: Electric cyan (titles, active dot, enabled buttons)
//! - **Neutral**: Cool purple (subtitles, announcements)
//! - **Warning**: Neon orange (warnings in the status line)
//! - **Muted**: Steel blue (inactive dots, hints, notes)
//! - **Disabled**: Dim gray (buttons at a boundary)

use ratatui::style::{Color, Modifier, Style};

pub const BACKGROUND: Color = Color::Rgb(18, 18, 20);
pub const ACCENT: Color = Color::Rgb(0, 255, 255);
pub const NEUTRAL: Color = Color::Rgb(147, 112, 219);
pub const WARNING: Color = Color::Rgb(255, 140, 0);
pub const MUTED: Color = Color::Rgb(100, 149, 237);
pub const DISABLED: Color = Color::Rgb(80, 80, 88);
pub const TEXT_PRIMARY: Color = Color::White;

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn neutral() -> Style {
    Style::default().fg(NEUTRAL)
}

pub fn warning() -> Style {
    Style::default().fg(WARNING)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn text() -> Style {
    Style::default().fg(TEXT_PRIMARY)
}

pub fn disabled() -> Style {
    Style::default().fg(DISABLED).add_modifier(Modifier::DIM)
}

/// Enabled buttons are accented, disabled ones greyed out.
pub fn button(enabled: bool) -> Style {
    if enabled {
        accent_bold()
    } else {
        disabled()
    }
}

pub fn dot(active: bool, focused: bool) -> Style {
    let style = if active { accent_bold() } else { muted() };
    if focused {
        style.add_modifier(Modifier::REVERSED)
    } else {
        style
    }
}

pub fn panel_border() -> Style {
    accent()
}
