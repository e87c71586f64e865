//! Input-independent presenter commands.
//!
//! Keys, clicks and swipes all reduce to a `Command`; navigation commands are
//! applied to the navigator, the rest are handled by the presenter.

use crate::navigator::{SlideNavigator, Transition};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Previous,
    Next,
    First,
    Last,
    GoTo(usize),
    ToggleHelp,
    ToggleChrome,
    EnterPrintMode,
    Quit,
}

impl Command {
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            Command::Previous | Command::Next | Command::First | Command::Last | Command::GoTo(_)
        )
    }

    /// Apply a navigation command. Other commands leave the navigator alone.
    pub fn apply(self, nav: &mut SlideNavigator) -> Option<Transition> {
        match self {
            Command::Previous => nav.previous(),
            Command::Next => nav.next(),
            Command::First => nav.first(),
            Command::Last => nav.last(),
            Command::GoTo(index) => nav.go_to(index),
            Command::ToggleHelp
            | Command::ToggleChrome
            | Command::EnterPrintMode
            | Command::Quit => None,
        }
    }
}

/// Digit shortcut: `'1'..='9'` jumps to that slide if the deck has it.
pub fn digit_jump(c: char, total: usize) -> Option<Command> {
    let digit = c.to_digit(10)? as usize;
    if digit == 0 || digit > total {
        return None;
    }
    Some(Command::GoTo(digit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_jump_bounds() {
        assert_eq!(digit_jump('1', 22), Some(Command::GoTo(1)));
        assert_eq!(digit_jump('9', 22), Some(Command::GoTo(9)));
        assert_eq!(digit_jump('0', 22), None);
        assert_eq!(digit_jump('5', 4), None);
        assert_eq!(digit_jump('x', 22), None);
    }

    #[test]
    fn apply_navigation() {
        let mut nav = SlideNavigator::new(22).unwrap();
        assert_eq!(Command::Last.apply(&mut nav).map(|t| t.to), Some(22));
        assert_eq!(Command::Previous.apply(&mut nav).map(|t| t.to), Some(21));
        assert_eq!(Command::GoTo(4).apply(&mut nav).map(|t| t.to), Some(4));
        assert_eq!(Command::First.apply(&mut nav).map(|t| t.to), Some(1));
        assert_eq!(Command::Next.apply(&mut nav).map(|t| t.to), Some(2));
    }

    #[test]
    fn non_navigation_is_inert() {
        let mut nav = SlideNavigator::new(3).unwrap();
        for cmd in [
            Command::ToggleHelp,
            Command::ToggleChrome,
            Command::EnterPrintMode,
            Command::Quit,
        ] {
            assert!(!cmd.is_navigation());
            assert!(cmd.apply(&mut nav).is_none());
        }
        assert_eq!(nav.generation(), 0);
    }
}
