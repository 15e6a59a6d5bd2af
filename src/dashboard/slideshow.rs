//! Slideshow cursor over the mention list.

use serde::Serialize;

/// Events that move the slideshow cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideEvent {
    /// One second elapsed.
    Tick,
    Next,
    Prev,
    /// Jump to a slide, e.g. from the position indicator.
    Select(usize),
    PointerEnter,
    PointerLeave,
}

/// Cursor, per-slide countdown, and pause flag.
///
/// While paused the countdown is frozen; manual navigation still works.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slideshow {
    current_index: usize,
    countdown: u32,
    paused: bool,
    slide_count: usize,
    #[serde(skip)]
    slide_seconds: u32,
    #[serde(skip)]
    max_slides: usize,
}

impl Slideshow {
    /// Create an empty slideshow showing at most `max_slides` slides for
    /// `slide_seconds` each.
    #[must_use]
    pub fn new(slide_seconds: u32, max_slides: usize) -> Self {
        Self {
            current_index: 0,
            countdown: slide_seconds,
            paused: false,
            slide_count: 0,
            slide_seconds,
            max_slides,
        }
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn countdown(&self) -> u32 {
        self.countdown
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Number of slides in rotation, `min(max_slides, total posts)`.
    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Index of the slide on screen, or `None` when there is nothing to show.
    #[must_use]
    pub fn current(&self) -> Option<usize> {
        (self.slide_count > 0).then_some(self.current_index)
    }

    /// Point the cursor at the first slide of a freshly loaded list.
    ///
    /// The countdown and pause state carry over.
    pub fn reset(&mut self, total_posts: usize) {
        self.slide_count = total_posts.min(self.max_slides);
        self.current_index = 0;
    }

    /// Apply one event.
    pub fn apply(&mut self, event: SlideEvent) {
        match event {
            SlideEvent::Tick => self.tick(),
            SlideEvent::Next => self.step(1),
            SlideEvent::Prev => self.step(-1),
            SlideEvent::Select(index) => {
                if self.slide_count > 0 {
                    self.current_index = index.min(self.slide_count - 1);
                    self.countdown = self.slide_seconds;
                }
            }
            SlideEvent::PointerEnter => self.paused = true,
            SlideEvent::PointerLeave => self.paused = false,
        }
    }

    fn tick(&mut self) {
        if self.paused || self.slide_count == 0 {
            return;
        }
        self.countdown = self.countdown.saturating_sub(1);
        if self.countdown == 0 {
            self.current_index = (self.current_index + 1) % self.slide_count;
            self.countdown = self.slide_seconds;
        }
    }

    fn step(&mut self, delta: isize) {
        if self.slide_count == 0 {
            return;
        }
        let count = self.slide_count as isize;
        self.current_index = (self.current_index as isize + delta).rem_euclid(count) as usize;
        self.countdown = self.slide_seconds;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slideshow_with(total: usize) -> Slideshow {
        let mut slideshow = Slideshow::new(10, 15);
        slideshow.reset(total);
        slideshow
    }

    fn tick_n(slideshow: &mut Slideshow, n: usize) {
        for _ in 0..n {
            slideshow.apply(SlideEvent::Tick);
        }
    }

    #[test]
    fn test_advances_after_full_countdown() {
        let mut slideshow = slideshow_with(5);
        tick_n(&mut slideshow, 9);
        assert_eq!(slideshow.current_index(), 0);
        assert_eq!(slideshow.countdown(), 1);

        slideshow.apply(SlideEvent::Tick);
        assert_eq!(slideshow.current_index(), 1);
        assert_eq!(slideshow.countdown(), 10);
    }

    #[test]
    fn test_wraps_from_last_slide() {
        let mut slideshow = slideshow_with(15);
        slideshow.apply(SlideEvent::Select(14));
        tick_n(&mut slideshow, 10);
        assert_eq!(slideshow.current_index(), 0);
    }

    #[test]
    fn test_slide_count_capped() {
        let mut slideshow = slideshow_with(40);
        assert_eq!(slideshow.slide_count(), 15);
        slideshow.apply(SlideEvent::Select(30));
        assert_eq!(slideshow.current_index(), 14);
        slideshow.apply(SlideEvent::Next);
        assert_eq!(slideshow.current_index(), 0);
    }

    #[test]
    fn test_prev_wraps_to_end() {
        let mut slideshow = slideshow_with(4);
        slideshow.apply(SlideEvent::Prev);
        assert_eq!(slideshow.current_index(), 3);
    }

    #[test]
    fn test_manual_navigation_resets_countdown() {
        let mut slideshow = slideshow_with(4);
        tick_n(&mut slideshow, 6);
        assert_eq!(slideshow.countdown(), 4);

        slideshow.apply(SlideEvent::Next);
        assert_eq!(slideshow.current_index(), 1);
        assert_eq!(slideshow.countdown(), 10);

        tick_n(&mut slideshow, 3);
        slideshow.apply(SlideEvent::Select(3));
        assert_eq!(slideshow.current_index(), 3);
        assert_eq!(slideshow.countdown(), 10);
    }

    #[test]
    fn test_pause_freezes_countdown() {
        let mut slideshow = slideshow_with(3);
        tick_n(&mut slideshow, 4);
        slideshow.apply(SlideEvent::PointerEnter);
        assert!(slideshow.is_paused());

        tick_n(&mut slideshow, 30);
        assert_eq!(slideshow.current_index(), 0);
        assert_eq!(slideshow.countdown(), 6);

        slideshow.apply(SlideEvent::PointerLeave);
        tick_n(&mut slideshow, 6);
        assert_eq!(slideshow.current_index(), 1);
    }

    #[test]
    fn test_navigation_works_while_paused() {
        let mut slideshow = slideshow_with(3);
        slideshow.apply(SlideEvent::PointerEnter);
        slideshow.apply(SlideEvent::Next);
        slideshow.apply(SlideEvent::Next);
        assert_eq!(slideshow.current_index(), 2);
        assert!(slideshow.is_paused());
    }

    #[test]
    fn test_empty_slideshow_has_no_current() {
        let mut slideshow = slideshow_with(0);
        assert_eq!(slideshow.current(), None);
        slideshow.apply(SlideEvent::Next);
        slideshow.apply(SlideEvent::Prev);
        slideshow.apply(SlideEvent::Select(2));
        tick_n(&mut slideshow, 20);
        assert_eq!(slideshow.current(), None);
        assert_eq!(slideshow.countdown(), 10);
    }

    #[test]
    fn test_reset_returns_to_first_slide() {
        let mut slideshow = slideshow_with(5);
        slideshow.apply(SlideEvent::Select(3));
        slideshow.reset(2);
        assert_eq!(slideshow.current(), Some(0));
        assert_eq!(slideshow.slide_count(), 2);
    }
}
