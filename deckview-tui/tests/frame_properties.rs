//! Rendered frames agree with the navigator after any mix of keys, clicks
//! and swipes, at any terminal width.
//!
//! Checked on every frame:
//! - progress gauge label and counter text
//! - each visible dot drawn active iff it is the current slide
//! - the current slide always has a visible dot
//! - the announcement line names the current slide

use std::time::Instant;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use proptest::prelude::*;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;

use deckview_core::{Deck, ViewerConfig};
use deckview_tui::{handle_event, ui, App};

const HEIGHT: u16 = 24;

#[derive(Debug, Clone)]
enum Action {
    Key(KeyCode),
    ClickDot(prop::sample::Index),
    ClickPrev,
    ClickNext,
    Swipe { leftward: bool },
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        prop::sample::select(vec![
            KeyCode::Left,
            KeyCode::Right,
            KeyCode::Char(' '),
            KeyCode::Home,
            KeyCode::End,
            KeyCode::Char('3'),
            KeyCode::Char('9'),
            KeyCode::Char('0'),
        ])
        .prop_map(Action::Key),
        any::<prop::sample::Index>().prop_map(Action::ClickDot),
        Just(Action::ClickPrev),
        Just(Action::ClickNext),
        any::<bool>().prop_map(|leftward| Action::Swipe { leftward }),
    ]
}

fn mouse(app: &mut App, kind: MouseEventKind, column: u16, row: u16, now: Instant) {
    let ev = MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    };
    handle_event(app, Event::Mouse(ev), now);
}

fn drag(app: &mut App, from: (u16, u16), to: (u16, u16), now: Instant) {
    mouse(app, MouseEventKind::Down(MouseButton::Left), from.0, from.1, now);
    mouse(app, MouseEventKind::Up(MouseButton::Left), to.0, to.1, now);
}

fn apply(app: &mut App, action: &Action, width: u16, now: Instant) {
    let layout = app.layout();
    match action {
        Action::Key(code) => handle_event(app, Event::Key(KeyEvent::from(*code)), now),
        Action::ClickDot(pick) => {
            if !layout.dots.is_empty() {
                let (_, r) = layout.dots[pick.index(layout.dots.len())];
                drag(app, (r.x, r.y), (r.x, r.y), now);
            }
        }
        Action::ClickPrev => {
            if let Some(r) = layout.prev_button {
                drag(app, (r.x + 1, r.y), (r.x + 1, r.y), now);
            }
        }
        Action::ClickNext => {
            if let Some(r) = layout.next_button {
                drag(app, (r.x + 1, r.y), (r.x + 1, r.y), now);
            }
        }
        Action::Swipe { leftward } => {
            let (right, left) = (width * 3 / 4, width / 4);
            if *leftward {
                drag(app, (right, 5), (left, 5), now);
            } else {
                drag(app, (left, 5), (right, 5), now);
            }
        }
    }
}

fn row(buffer: &Buffer, y: u16) -> String {
    let area = buffer.area;
    (area.left()..area.right())
        .map(|x| buffer[(x, y)].symbol())
        .collect()
}

fn assert_frame_matches(app: &App, buffer: &Buffer) -> Result<(), TestCaseError> {
    let projection = app.projection();
    let current = app.navigator.current();
    let layout = app.layout();

    let expected_percent = format!("{:.0}%", projection.progress_percent);
    prop_assert!(row(buffer, 0).contains(&expected_percent));

    let nav = row(buffer, HEIGHT - 2);
    prop_assert!(nav.contains(&projection.counter_text()), "counter missing: {}", nav);
    prop_assert_eq!(nav.matches('●').count(), 1, "nav row: {}", nav);

    prop_assert!(layout.dot(current).is_some());
    for &(index, r) in &layout.dots {
        let expected = if projection.is_dot_active(index) { "●" } else { "○" };
        prop_assert_eq!(buffer[(r.x, r.y)].symbol(), expected, "dot {}", index);
    }

    if app.navigator.generation() > 0 {
        let announcement = app.live_region.current().unwrap();
        prop_assert_eq!(announcement.slide, current);
        let suffix = format!("Slide {current} of {}", app.navigator.total());
        prop_assert!(announcement.text.ends_with(&suffix));

        // The clock takes the right-hand side; check the text when it fits.
        let status = row(buffer, HEIGHT - 1);
        if status.chars().count() >= announcement.text.chars().count() + 24 {
            let shown = format!("» {}", announcement.text);
            prop_assert!(status.contains(&shown), "status row: {}", status);
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn frames_follow_the_navigator(
        width in 30u16..140,
        actions in prop::collection::vec(arb_action(), 0..40),
    ) {
        let mut terminal = Terminal::new(TestBackend::new(width, HEIGHT)).unwrap();
        let now = Instant::now();
        let mut app = App::new(Deck::builtin(), ViewerConfig::default(), now).unwrap();

        terminal.draw(|f| ui::draw(f, &mut app)).unwrap();
        assert_frame_matches(&app, terminal.backend().buffer())?;

        for action in &actions {
            apply(&mut app, action, width, now);
            terminal.draw(|f| ui::draw(f, &mut app)).unwrap();
            assert_frame_matches(&app, terminal.backend().buffer())?;
        }
    }
}
