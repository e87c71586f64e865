//! Swipe and click recognition for pointer drags.

use crate::command::Command;

/// Minimum horizontal travel for a swipe, in pointer units.
pub const DEFAULT_SWIPE_THRESHOLD: f64 = 50.0;

/// Maximum travel on either axis for a press/release pair to count as a click.
pub const CLICK_SLOP: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Pointer moved leftward: advance.
    Left,
    /// Pointer moved rightward: go back.
    Right,
}

impl SwipeDirection {
    pub fn command(self) -> Command {
        match self {
            SwipeDirection::Left => Command::Next,
            SwipeDirection::Right => Command::Previous,
        }
    }
}

/// A drag is a swipe when it is mostly horizontal and longer than `threshold`.
pub fn classify_swipe(start: Point, end: Point, threshold: f64) -> Option<SwipeDirection> {
    let dx = start.x - end.x;
    let dy = start.y - end.y;
    if dx.abs() > dy.abs() && dx.abs() > threshold {
        if dx > 0.0 {
            Some(SwipeDirection::Left)
        } else {
            Some(SwipeDirection::Right)
        }
    } else {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragOutcome {
    Swipe(SwipeDirection),
    /// Press and release at (almost) the same spot; carries the release point.
    Click(Point),
    /// Movement that is neither.
    Ignored,
}

/// Pairs press and release events into a `DragOutcome`.
#[derive(Debug, Clone)]
pub struct DragTracker {
    start: Option<Point>,
    threshold: f64,
}

impl DragTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            start: None,
            threshold,
        }
    }

    pub fn press(&mut self, at: Point) {
        self.start = Some(at);
    }

    pub fn is_dragging(&self) -> bool {
        self.start.is_some()
    }

    pub fn release(&mut self, at: Point) -> DragOutcome {
        let Some(start) = self.start.take() else {
            return DragOutcome::Ignored;
        };
        if let Some(direction) = classify_swipe(start, at, self.threshold) {
            return DragOutcome::Swipe(direction);
        }
        if (start.x - at.x).abs() <= CLICK_SLOP && (start.y - at.y).abs() <= CLICK_SLOP {
            DragOutcome::Click(at)
        } else {
            DragOutcome::Ignored
        }
    }
}

impl Default for DragTracker {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_THRESHOLD)
    }
}
