//! deckview core: slide navigation state machine and everything it drives.
//!
//! This crate contains the presenter logic with no terminal dependency:
//! - Bounded 1-based slide navigator with an ordered observer list
//! - Pure display projections (progress, counter, dots, button state)
//! - Announcer and live region for assistive output
//! - Generation-keyed deferred task scheduler
//! - Swipe/click gesture classification
//! - Deck model, TOML loading and the built-in deck
//! - Plain-text print rendering
//! - Viewer configuration

pub mod command;
pub mod config;
pub mod deck;
pub mod error;
pub mod gesture;
pub mod navigator;
pub mod observer;
pub mod print;
pub mod projection;
pub mod schedule;

pub use command::Command;
pub use config::ViewerConfig;
pub use deck::{Deck, DeckMeta, Slide};
pub use error::DeckError;
pub use gesture::{classify_swipe, DragOutcome, DragTracker, Point, SwipeDirection};
pub use navigator::{SlideNavigator, Transition};
pub use observer::{Announcer, LiveRegion, Preloader, SlideObserver, TransitionLog};
pub use projection::Projection;
pub use schedule::{Deferred, Scheduler, SharedScheduler, TaskKey};
