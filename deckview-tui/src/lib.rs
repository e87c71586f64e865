//! deckview TUI: terminal slide presenter.
//!
//! Provides:
//! - Slide view with progress gauge, jump dots, prev/next buttons and counter
//! - Keyboard, mouse click and drag-swipe navigation
//! - Live announcement line for assistive output
//! - Help overlay, print preview and a chrome-free presentation mode

pub mod app;
pub mod cache;
pub mod input;
pub mod logging;
pub mod theme;
pub mod ui;

pub use app::App;
pub use input::handle_event;
