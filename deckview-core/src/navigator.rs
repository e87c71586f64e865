//! Slide navigator: the single source of truth for which slide is showing.
//!
//! The navigator owns a 1-based index bounded by the slide count. Every
//! successful transition bumps a generation counter and then runs the
//! registered observers in registration order. Requests outside the deck are
//! dropped without touching any state.

use std::fmt;

use crate::error::DeckError;
use crate::observer::SlideObserver;
use crate::projection::Projection;

/// A successful change of the current slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
    pub total: usize,
    /// Generation after the transition was applied.
    pub generation: u64,
}

impl Transition {
    pub fn is_forward(&self) -> bool {
        self.to > self.from
    }
}

pub struct SlideNavigator {
    current: usize,
    total: usize,
    generation: u64,
    observers: Vec<Box<dyn SlideObserver>>,
}

impl SlideNavigator {
    /// Create a navigator positioned on slide 1.
    pub fn new(total: usize) -> Result<Self, DeckError> {
        if total == 0 {
            return Err(DeckError::NoSlides);
        }
        Ok(Self {
            current: 1,
            total,
            generation: 0,
            observers: Vec::new(),
        })
    }

    /// Append an observer. Observers run in the order they were added.
    pub fn observe(&mut self, observer: Box<dyn SlideObserver>) {
        self.observers.push(observer);
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_first(&self) -> bool {
        self.current == 1
    }

    pub fn is_last(&self) -> bool {
        self.current == self.total
    }

    pub fn contains(&self, index: usize) -> bool {
        (1..=self.total).contains(&index)
    }

    /// Names of the registered observers, in invocation order.
    pub fn observer_names(&self) -> Vec<&str> {
        self.observers.iter().map(|o| o.name()).collect()
    }

    /// Jump to `target`. Returns `None` and changes nothing when the target
    /// is outside `1..=total`.
    pub fn go_to(&mut self, target: usize) -> Option<Transition> {
        if !self.contains(target) {
            return None;
        }

        let transition = Transition {
            from: self.current,
            to: target,
            total: self.total,
            generation: self.generation + 1,
        };
        self.current = target;
        self.generation = transition.generation;

        for observer in &mut self.observers {
            observer.on_transition(&transition);
        }
        Some(transition)
    }

    pub fn next(&mut self) -> Option<Transition> {
        if self.is_last() {
            return None;
        }
        self.go_to(self.current + 1)
    }

    pub fn previous(&mut self) -> Option<Transition> {
        if self.is_first() {
            return None;
        }
        self.go_to(self.current - 1)
    }

    pub fn first(&mut self) -> Option<Transition> {
        self.go_to(1)
    }

    pub fn last(&mut self) -> Option<Transition> {
        self.go_to(self.total)
    }

    /// Display values derived from the current index.
    pub fn projection(&self) -> Projection {
        Projection::compute(self.current, self.total)
    }
}

impl fmt::Debug for SlideNavigator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlideNavigator")
            .field("current", &self.current)
            .field("total", &self.total)
            .field("generation", &self.generation)
            .field("observers", &self.observer_names())
            .finish()
    }
}
