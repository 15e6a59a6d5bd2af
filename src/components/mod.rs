//! Maud HTML components for the dashboard page.
//!
//! - `layout`: page skeleton with the inline stylesheet and live-update script
//! - `schedule`: agenda list and wall clock
//! - `slideshow`: mention card, media, and slideshow controls

pub mod layout;
pub mod schedule;
pub mod slideshow;

pub use layout::BaseLayout;
pub use schedule::{ClockDisplay, ScheduleList};
pub use slideshow::{MediaView, MentionCard, NavButton, SlideControls};

/// Re-export maud for convenience
pub use maud::{html, Markup, PreEscaped, DOCTYPE};
