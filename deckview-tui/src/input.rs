//! Input dispatch: overlays first, then global keys, then dot focus.
//!
//! Mouse: press/release pairs become swipes (drag across the screen) or
//! clicks on the prev/next buttons and the jump dots.

use std::time::Instant;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use deckview_core::command::digit_jump;
use deckview_core::{Command, DragOutcome, Point};

use crate::app::{App, Overlay};

/// Lines scrolled per mouse wheel notch in print preview.
const WHEEL_STEP: isize = 3;
const PAGE_STEP: isize = 10;

pub fn handle_event(app: &mut App, event: Event, now: Instant) {
    match event {
        Event::Key(key) => handle_key(app, key, now),
        Event::Mouse(mouse) => handle_mouse(app, mouse, now),
        Event::Resize(width, height) => app.on_resize(width, height, now),
        _ => {}
    }
}

/// Map a key to a presenter command. Digits only map when the deck has
/// that many slides.
pub fn map_key(key: KeyEvent, total: usize) -> Option<Command> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => Some(Command::Quit),
        KeyCode::Char('p') if ctrl => Some(Command::EnterPrintMode),
        KeyCode::Left => Some(Command::Previous),
        KeyCode::Right | KeyCode::Char(' ') => Some(Command::Next),
        KeyCode::Home => Some(Command::First),
        KeyCode::End => Some(Command::Last),
        KeyCode::F(11) => Some(Command::ToggleChrome),
        KeyCode::Char('?') => Some(Command::ToggleHelp),
        KeyCode::Char('q') => Some(Command::Quit),
        KeyCode::Char(c) if !ctrl => digit_jump(c, total),
        _ => None,
    }
}

pub fn handle_key(app: &mut App, key: KeyEvent, now: Instant) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.run(Command::Quit, now);
        return;
    }

    // 1. Overlays consume input first.
    match app.overlay {
        Overlay::Help => {
            handle_help_overlay(app, key);
            return;
        }
        Overlay::Print { .. } => {
            handle_print_overlay(app, key);
            return;
        }
        Overlay::None => {}
    }

    // 2. Global keys.
    if let Some(command) = map_key(key, app.navigator.total()) {
        // Keyboard navigation leaves dot focus behind.
        if command.is_navigation() {
            app.dot_focus = None;
        }
        app.run(command, now);
        return;
    }

    // 3. Dot focus.
    match key.code {
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => app.focus_prev_dot(),
        KeyCode::Tab => app.focus_next_dot(),
        KeyCode::BackTab => app.focus_prev_dot(),
        KeyCode::Enter => app.activate_focused_dot(now),
        KeyCode::Esc => app.dot_focus = None,
        _ => {}
    }
}

fn handle_help_overlay(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') | KeyCode::Char('q') => {
            app.overlay = Overlay::None;
        }
        _ => {}
    }
}

fn handle_print_overlay(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.leave_print_mode(),
        KeyCode::Char('p') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.leave_print_mode()
        }
        KeyCode::Char('j') | KeyCode::Down => app.scroll_print(1),
        KeyCode::Char('k') | KeyCode::Up => app.scroll_print(-1),
        KeyCode::PageDown | KeyCode::Char(' ') => app.scroll_print(PAGE_STEP),
        KeyCode::PageUp => app.scroll_print(-PAGE_STEP),
        KeyCode::Home => app.scroll_print(isize::MIN),
        KeyCode::End => app.scroll_print(isize::MAX),
        _ => {}
    }
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent, now: Instant) {
    let at = Point::new(f64::from(mouse.column), f64::from(mouse.row));
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => app.drag.press(at),
        MouseEventKind::Up(MouseButton::Left) => {
            let outcome = app.drag.release(at);
            if app.overlay != Overlay::None {
                return;
            }
            match outcome {
                DragOutcome::Swipe(direction) => {
                    tracing::debug!(?direction, "swipe");
                    app.run(direction.command(), now);
                }
                DragOutcome::Click(_) => {
                    if let Some(hit) = app.layout().hit(mouse.column, mouse.row) {
                        app.run(hit.command(), now);
                    }
                }
                DragOutcome::Ignored => {}
            }
        }
        MouseEventKind::ScrollDown => app.scroll_print(WHEEL_STEP),
        MouseEventKind::ScrollUp => app.scroll_print(-WHEEL_STEP),
        _ => {}
    }
}

/// Key bindings help text
pub fn key_bindings_help() -> Vec<(&'static str, &'static str)> {
    vec![
        ("← / →", "Previous / next slide"),
        ("Space", "Next slide"),
        ("Home / End", "First / last slide"),
        ("1-9", "Jump to slide number"),
        ("Tab / Shift+Tab", "Move focus between dots"),
        ("Enter", "Go to focused dot"),
        ("F11", "Toggle presentation mode"),
        ("Ctrl+P", "Print preview"),
        ("?", "Show this help"),
        ("q / Ctrl+C", "Quit"),
    ]
}
