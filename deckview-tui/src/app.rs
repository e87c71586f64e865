//! Application state: single-owner, main-thread only.
//!
//! The navigator is owned here and is the only place the current slide
//! lives. Everything drawn is projected from it on each frame.

use std::time::Instant;

use ratatui::layout::Rect;

use deckview_core::print::{render_deck, PrintOptions, PAGE_BREAK};
use deckview_core::{
    Announcer, Command, Deck, DeckError, Deferred, DragTracker, LiveRegion, Preloader,
    Projection, Scheduler, SharedScheduler, SlideNavigator, TransitionLog, ViewerConfig,
};

use crate::cache::SlideCache;
use crate::ui::layout::ScreenLayout;

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Help,
    Print { scroll: usize },
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

/// Top-level application state.
pub struct App {
    pub deck: Deck,
    pub config: ViewerConfig,
    pub navigator: SlideNavigator,
    pub live_region: LiveRegion,
    announcer: Announcer,
    scheduler: SharedScheduler,

    pub overlay: Overlay,
    /// Presentation mode: only the slide is drawn.
    pub chrome_hidden: bool,
    /// Keyboard focus on a jump dot (1-based), if any.
    pub dot_focus: Option<usize>,
    pub running: bool,
    pub status_message: Option<(String, StatusLevel)>,

    /// Last known terminal area, used for hit-testing and preloading.
    pub viewport: Rect,
    pub drag: DragTracker,
    pub cache: SlideCache,
    pub started_at: Instant,
}

impl App {
    pub fn new(deck: Deck, config: ViewerConfig, now: Instant) -> Result<Self, DeckError> {
        let live_region = LiveRegion::new();
        let scheduler = Scheduler::shared();

        let mut navigator = SlideNavigator::new(deck.len())?;
        let announcer = Announcer::new(&deck, live_region.clone());
        navigator.observe(Box::new(announcer.clone()));
        navigator.observe(Box::new(Preloader::new(
            scheduler.clone(),
            config.preload_delay(),
        )));
        navigator.observe(Box::new(TransitionLog));

        // First-slide announcement, dropped if the user moves first.
        scheduler.borrow_mut().schedule(
            Deferred::Announce { slide: 1 },
            config.initial_announce_delay(),
            Some(navigator.generation()),
            now,
        );

        tracing::info!(
            deck = %deck.meta.title,
            slides = deck.len(),
            observers = ?navigator.observer_names(),
            "presenter ready"
        );

        Ok(Self {
            drag: DragTracker::new(config.swipe_threshold),
            deck,
            config,
            navigator,
            live_region,
            announcer,
            scheduler,
            overlay: Overlay::None,
            chrome_hidden: false,
            dot_focus: None,
            running: true,
            status_message: None,
            viewport: Rect::default(),
            cache: SlideCache::new(),
            started_at: now,
        })
    }

    pub fn projection(&self) -> Projection {
        self.navigator.projection()
    }

    pub fn layout(&self) -> ScreenLayout {
        ScreenLayout::compute(
            self.viewport,
            self.navigator.total(),
            self.navigator.current(),
            self.chrome_hidden,
        )
    }

    pub fn scheduler(&self) -> &SharedScheduler {
        &self.scheduler
    }

    /// Execute a command from any input source.
    pub fn run(&mut self, command: Command, now: Instant) {
        match command {
            Command::Previous
            | Command::Next
            | Command::First
            | Command::Last
            | Command::GoTo(_) => {
                if command.apply(&mut self.navigator).is_none() {
                    tracing::trace!(?command, current = self.navigator.current(), "ignored");
                }
            }
            Command::ToggleHelp => {
                self.overlay = match self.overlay {
                    Overlay::Help => Overlay::None,
                    _ => Overlay::Help,
                };
            }
            Command::ToggleChrome => {
                self.chrome_hidden = !self.chrome_hidden;
                if self.chrome_hidden {
                    self.set_status("Presentation mode: F11 shows the controls", now);
                }
            }
            Command::EnterPrintMode => {
                self.overlay = Overlay::Print { scroll: 0 };
                tracing::info!("entered print mode");
            }
            Command::Quit => {
                self.running = false;
            }
        }
    }

    /// Run deferred work that has come due.
    pub fn tick(&mut self, now: Instant) {
        let generation = self.navigator.generation();
        let due = self.scheduler.borrow_mut().drain_due(now, generation);
        for task in due {
            self.run_deferred(task);
        }
    }

    fn run_deferred(&mut self, task: Deferred) {
        match task {
            Deferred::Preload { slide } => {
                let width = self.layout().slide_body().width;
                if width > 0 {
                    self.cache
                        .prepare(&self.deck, slide, width, self.config.show_notes);
                    tracing::debug!(slide, width, "preloaded slide");
                }
            }
            Deferred::Relayout => {
                self.cache.clear();
                tracing::debug!(
                    width = self.viewport.width,
                    height = self.viewport.height,
                    "relayout after resize"
                );
            }
            Deferred::Announce { slide } => {
                self.announcer.announce(slide, self.navigator.total());
            }
            Deferred::ClearStatus => {
                self.status_message = None;
            }
        }
    }

    /// Record the new terminal size and debounce cache rebuilding.
    pub fn on_resize(&mut self, width: u16, height: u16, now: Instant) {
        self.viewport = Rect::new(0, 0, width, height);
        self.scheduler.borrow_mut().schedule(
            Deferred::Relayout,
            self.config.resize_debounce(),
            None,
            now,
        );
    }

    pub fn set_status(&mut self, msg: impl Into<String>, now: Instant) {
        self.show_status(msg.into(), StatusLevel::Info, now);
    }

    pub fn set_warning(&mut self, msg: impl Into<String>, now: Instant) {
        self.show_status(msg.into(), StatusLevel::Warning, now);
    }

    fn show_status(&mut self, msg: String, level: StatusLevel, now: Instant) {
        self.status_message = Some((msg, level));
        self.scheduler.borrow_mut().schedule(
            Deferred::ClearStatus,
            self.config.status_ttl(),
            None,
            now,
        );
    }

    /// Move dot focus forward, starting from the current slide.
    pub fn focus_next_dot(&mut self) {
        let total = self.navigator.total();
        self.dot_focus = Some(match self.dot_focus {
            Some(i) if i < total => i + 1,
            Some(_) => 1,
            None => self.navigator.current(),
        });
    }

    pub fn focus_prev_dot(&mut self) {
        let total = self.navigator.total();
        self.dot_focus = Some(match self.dot_focus {
            Some(i) if i > 1 => i - 1,
            Some(_) => total,
            None => self.navigator.current(),
        });
    }

    pub fn activate_focused_dot(&mut self, now: Instant) {
        if let Some(index) = self.dot_focus {
            self.run(Command::GoTo(index), now);
        }
    }

    /// Plain-text print preview, page breaks drawn as rules.
    pub fn print_lines(&self) -> Vec<String> {
        let width = usize::from(self.viewport.width.saturating_sub(4)).max(20);
        let options = PrintOptions {
            width,
            include_notes: self.config.show_notes,
        };
        render_deck(&self.deck, &options)
            .lines()
            .map(|line| {
                if line.starts_with(PAGE_BREAK) {
                    "─".repeat(width)
                } else {
                    line.to_string()
                }
            })
            .collect()
    }

    pub fn scroll_print(&mut self, delta: isize) {
        if let Overlay::Print { scroll } = self.overlay {
            let max = self.print_lines().len().saturating_sub(1);
            let next = scroll.saturating_add_signed(delta).min(max);
            self.overlay = Overlay::Print { scroll: next };
        }
    }

    pub fn leave_print_mode(&mut self) {
        if matches!(self.overlay, Overlay::Print { .. }) {
            self.overlay = Overlay::None;
            tracing::info!(slide = self.navigator.current(), "left print mode");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deckview_core::TaskKey;
    use std::time::Duration;

    fn app() -> (App, Instant) {
        let now = Instant::now();
        let mut app = App::new(Deck::builtin(), ViewerConfig::default(), now).unwrap();
        app.viewport = Rect::new(0, 0, 100, 30);
        (app, now)
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn observers_registered_in_order() {
        let (app, _) = app();
        assert_eq!(
            app.navigator.observer_names(),
            vec!["announcer", "preloader", "transition-log"]
        );
    }

    #[test]
    fn initial_announcement_after_delay() {
        let (mut app, t0) = app();
        app.tick(t0 + ms(100));
        assert!(app.live_region.current().is_none());
        app.tick(t0 + ms(500));
        assert_eq!(
            app.live_region.text().as_deref(),
            Some("IoT Mental Health Monitoring. Slide 1 of 22")
        );
    }

    #[test]
    fn initial_announcement_matches_returning_to_slide_one() {
        let (mut app, t0) = app();
        app.tick(t0 + ms(500));
        let initial = app.live_region.text();

        app.run(Command::Next, t0);
        app.run(Command::First, t0);
        assert_eq!(app.live_region.text(), initial);
        assert_eq!(app.live_region.current().unwrap().slide, 1);
    }

    #[test]
    fn initial_announcement_dropped_after_navigation() {
        let (mut app, t0) = app();
        app.run(Command::Next, t0);
        let sequence = app.live_region.current().unwrap().sequence;
        app.tick(t0 + ms(1_000));
        let a = app.live_region.current().unwrap();
        assert_eq!(a.slide, 2);
        assert_eq!(a.sequence, sequence);
    }

    #[test]
    fn preload_fills_cache_for_next_slide() {
        let (mut app, t0) = app();
        app.run(Command::GoTo(5), t0);
        let width = app.layout().slide_body().width;
        assert!(!app.cache.contains(6, width));

        app.tick(Instant::now() + ms(150));
        assert!(app.cache.contains(6, width));
    }

    #[test]
    fn stale_preload_is_skipped() {
        let (mut app, _) = app();
        let t = Instant::now();
        app.run(Command::GoTo(5), t);
        app.run(Command::GoTo(10), t);
        app.tick(Instant::now() + ms(150));
        let width = app.layout().slide_body().width;
        assert!(!app.cache.contains(6, width));
        assert!(app.cache.contains(11, width));
    }

    #[test]
    fn resize_is_debounced() {
        let (mut app, t0) = app();
        let width = app.layout().slide_body().width;
        app.cache.prepare(&app.deck, 1, width, false);

        app.on_resize(80, 24, t0);
        app.on_resize(90, 24, t0 + ms(200));
        app.tick(t0 + ms(300));
        assert!(app.cache.contains(1, width));
        app.tick(t0 + ms(450));
        assert!(app.cache.is_empty());
        assert_eq!(app.viewport, Rect::new(0, 0, 90, 24));
    }

    #[test]
    fn status_expires() {
        let (mut app, t0) = app();
        app.set_warning("careful", t0);
        assert_eq!(app.status_message.as_ref().unwrap().1, StatusLevel::Warning);
        app.tick(t0 + ms(2_999));
        assert!(app.status_message.is_some());
        app.tick(t0 + ms(3_000));
        assert!(app.status_message.is_none());
    }

    #[test]
    fn toggles() {
        let (mut app, t0) = app();
        app.run(Command::ToggleHelp, t0);
        assert_eq!(app.overlay, Overlay::Help);
        app.run(Command::ToggleHelp, t0);
        assert_eq!(app.overlay, Overlay::None);

        app.run(Command::ToggleChrome, t0);
        assert!(app.chrome_hidden);
        assert!(app.status_message.is_some());

        app.run(Command::Quit, t0);
        assert!(!app.running);
    }

    #[test]
    fn dot_focus_cycles() {
        let (mut app, t0) = app();
        app.run(Command::Last, t0);
        app.focus_next_dot();
        assert_eq!(app.dot_focus, Some(22));
        app.focus_next_dot();
        assert_eq!(app.dot_focus, Some(1));
        app.focus_prev_dot();
        assert_eq!(app.dot_focus, Some(22));
        app.focus_prev_dot();
        app.activate_focused_dot(t0);
        assert_eq!(app.navigator.current(), 21);
    }

    #[test]
    fn print_mode_keeps_current_slide() {
        let (mut app, t0) = app();
        app.run(Command::GoTo(7), t0);
        app.run(Command::EnterPrintMode, t0);
        app.scroll_print(5);
        assert_eq!(app.overlay, Overlay::Print { scroll: 5 });
        app.scroll_print(-50);
        assert_eq!(app.overlay, Overlay::Print { scroll: 0 });
        app.scroll_print(isize::MAX);
        let max = app.print_lines().len() - 1;
        assert_eq!(app.overlay, Overlay::Print { scroll: max });

        app.leave_print_mode();
        assert_eq!(app.overlay, Overlay::None);
        assert_eq!(app.navigator.current(), 7);
    }

    #[test]
    fn print_lines_draw_page_rules() {
        let (app, _) = app();
        let lines = app.print_lines();
        assert_eq!(lines.iter().filter(|l| l.starts_with('─')).count(), 22);
        assert_eq!(lines[0], "Slide 1 of 22");
    }

    #[test]
    fn startup_schedules_only_the_announcement() {
        let (app, _) = app();
        let scheduler = app.scheduler().borrow();
        assert!(scheduler.is_pending(TaskKey::Announce));
        assert!(!scheduler.is_pending(TaskKey::Preload));
    }
}
