//! Post-transition observers.
//!
//! The navigator calls each observer, in registration order, after every
//! successful transition. The presenter registers them as
//! announcer → preloader → transition log.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crate::deck::Deck;
use crate::navigator::Transition;
use crate::schedule::{Deferred, SharedScheduler, TaskKey};

pub trait SlideObserver {
    fn name(&self) -> &str;
    fn on_transition(&mut self, transition: &Transition);
}

/// Text of the last announcement for assistive output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub slide: usize,
    pub text: String,
    /// Bumped on every announcement, so repeating the same text is visible.
    pub sequence: u64,
}

/// Shared polite live region. Clones see the same announcement.
#[derive(Debug, Clone, Default)]
pub struct LiveRegion {
    inner: Rc<RefCell<Option<Announcement>>>,
}

impl LiveRegion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn announce(&self, slide: usize, text: impl Into<String>) {
        let mut slot = self.inner.borrow_mut();
        let sequence = slot.as_ref().map_or(1, |a| a.sequence + 1);
        *slot = Some(Announcement {
            slide,
            text: text.into(),
            sequence,
        });
    }

    pub fn current(&self) -> Option<Announcement> {
        self.inner.borrow().clone()
    }

    pub fn text(&self) -> Option<String> {
        self.inner.borrow().as_ref().map(|a| a.text.clone())
    }
}

/// `"{title}. Slide {n} of {total}"`, falling back to `"Slide {n}"` as the title.
pub fn announcement_text(title: Option<&str>, slide: usize, total: usize) -> String {
    let title = match title {
        Some(t) if !t.trim().is_empty() => t.trim().to_string(),
        _ => format!("Slide {slide}"),
    };
    format!("{title}. Slide {slide} of {total}")
}

/// Writes the new slide's announcement into the live region. Clones share
/// the region, so the presenter can announce outside a transition.
#[derive(Debug, Clone)]
pub struct Announcer {
    titles: Vec<Option<String>>,
    region: LiveRegion,
}

impl Announcer {
    pub fn new(deck: &Deck, region: LiveRegion) -> Self {
        Self {
            titles: deck.slides.iter().map(|s| s.title.clone()).collect(),
            region,
        }
    }

    pub fn text_for(&self, slide: usize, total: usize) -> String {
        let title = slide
            .checked_sub(1)
            .and_then(|i| self.titles.get(i))
            .and_then(|t| t.as_deref());
        announcement_text(title, slide, total)
    }

    pub fn announce(&self, slide: usize, total: usize) {
        let text = self.text_for(slide, total);
        tracing::info!(slide, announcement = %text, "announce");
        self.region.announce(slide, text);
    }
}

impl SlideObserver for Announcer {
    fn name(&self) -> &str {
        "announcer"
    }

    fn on_transition(&mut self, transition: &Transition) {
        self.announce(transition.to, transition.total);
    }
}

/// Schedules a preload of the following slide, tied to the transition's
/// generation so a quicker transition makes it stale.
pub struct Preloader {
    scheduler: SharedScheduler,
    delay: Duration,
}

impl Preloader {
    pub fn new(scheduler: SharedScheduler, delay: Duration) -> Self {
        Self { scheduler, delay }
    }
}

impl SlideObserver for Preloader {
    fn name(&self) -> &str {
        "preloader"
    }

    fn on_transition(&mut self, transition: &Transition) {
        let mut scheduler = self.scheduler.borrow_mut();
        let next = transition.to + 1;
        if next > transition.total {
            scheduler.cancel(TaskKey::Preload);
            return;
        }
        scheduler.schedule(
            Deferred::Preload { slide: next },
            self.delay,
            Some(transition.generation),
            Instant::now(),
        );
    }
}

/// Debug trace of every transition.
#[derive(Debug, Default)]
pub struct TransitionLog;

impl SlideObserver for TransitionLog {
    fn name(&self) -> &str {
        "transition-log"
    }

    fn on_transition(&mut self, transition: &Transition) {
        tracing::debug!(
            from = transition.from,
            to = transition.to,
            total = transition.total,
            generation = transition.generation,
            forward = transition.is_forward(),
            "slide transition"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::{DeckMeta, Slide};
    use crate::navigator::SlideNavigator;
    use crate::schedule::Scheduler;

    fn deck(titles: &[Option<&str>]) -> Deck {
        Deck {
            meta: DeckMeta {
                title: "Test".into(),
                author: None,
            },
            slides: titles
                .iter()
                .map(|t| Slide {
                    title: t.map(String::from),
                    ..Slide::default()
                })
                .collect(),
        }
    }

    #[test]
    fn announcement_format() {
        assert_eq!(
            announcement_text(Some("Overview"), 2, 22),
            "Overview. Slide 2 of 22"
        );
        assert_eq!(announcement_text(None, 5, 22), "Slide 5. Slide 5 of 22");
        assert_eq!(announcement_text(Some("  "), 5, 22), "Slide 5. Slide 5 of 22");
    }

    #[test]
    fn announcer_writes_live_region() {
        let deck = deck(&[Some("Intro"), None, Some("End")]);
        let region = LiveRegion::new();
        let mut nav = SlideNavigator::new(3).unwrap();
        nav.observe(Box::new(Announcer::new(&deck, region.clone())));

        assert!(region.current().is_none());
        nav.next();
        assert_eq!(region.text().as_deref(), Some("Slide 2. Slide 2 of 3"));
        nav.next();
        let a = region.current().unwrap();
        assert_eq!(a.text, "End. Slide 3 of 3");
        assert_eq!(a.slide, 3);
        assert_eq!(a.sequence, 2);

        // Rejected moves announce nothing.
        nav.next();
        assert_eq!(region.current().unwrap().sequence, 2);
    }

    #[test]
    fn direct_announcement_matches_transition_text() {
        let deck = deck(&[Some("Intro"), Some("Middle")]);
        let region = LiveRegion::new();
        let announcer = Announcer::new(&deck, region.clone());
        let mut nav = SlideNavigator::new(2).unwrap();
        nav.observe(Box::new(announcer.clone()));

        announcer.announce(1, 2);
        assert_eq!(region.text().as_deref(), Some("Intro. Slide 1 of 2"));
        nav.next();
        assert_eq!(region.text().as_deref(), Some("Middle. Slide 2 of 2"));
        announcer.announce(2, 2);
        let a = region.current().unwrap();
        assert_eq!(a.text, "Middle. Slide 2 of 2");
        assert_eq!(a.sequence, 3);
    }

    #[test]
    fn preloader_binds_to_generation() {
        let scheduler = Scheduler::shared();
        let mut nav = SlideNavigator::new(3).unwrap();
        nav.observe(Box::new(Preloader::new(
            scheduler.clone(),
            Duration::from_millis(100),
        )));

        nav.next();
        assert_eq!(
            scheduler.borrow().pending(TaskKey::Preload),
            Some(Deferred::Preload { slide: 3 })
        );

        // A second transition supersedes the first preload.
        nav.previous();
        let later = Instant::now() + Duration::from_secs(1);
        let ran = scheduler.borrow_mut().drain_due(later, nav.generation());
        assert_eq!(ran, vec![Deferred::Preload { slide: 2 }]);
    }

    #[test]
    fn preloader_cancels_at_last_slide() {
        let scheduler = Scheduler::shared();
        let mut nav = SlideNavigator::new(3).unwrap();
        nav.observe(Box::new(Preloader::new(scheduler.clone(), Duration::ZERO)));
        nav.next();
        nav.last();
        assert!(!scheduler.borrow().is_pending(TaskKey::Preload));
    }
}
