//! Dashboard state: the mention slideshow, refresh countdown, and schedule clock.
//!
//! All state lives in one [`Dashboard`] value that changes only through
//! [`Dashboard::update`]. Timers and HTTP handlers feed it events through a
//! [`DashboardHandle`]; fetches it asks for are run as background tasks.

pub mod driver;
pub mod fallback;
pub mod refresh;
pub mod schedule;
pub mod slideshow;
pub mod source;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::config::Config;
use crate::constants::MAX_MENTIONS;
use crate::mentions::Post;

pub use driver::{run, Clock, SystemClock, Timers};
pub use fallback::fallback_posts;
pub use refresh::RefreshCountdown;
pub use schedule::{EventStatus, Schedule, ScheduleError, ScheduleEvent};
pub use slideshow::{SlideEvent, Slideshow};
pub use source::{HttpSource, InProcessSource, MentionSource};

/// Something that happened to the dashboard.
#[derive(Debug, Clone)]
pub enum DashboardEvent {
    /// One second elapsed.
    Tick,
    /// The wall clock was sampled.
    ClockTick(DateTime<Utc>),
    /// Manual refresh, or the initial load.
    RefreshRequested,
    /// A fetch finished. Errors carry only a message; they are never shown.
    FetchCompleted(Result<Vec<Post>, String>),
    Slide(SlideEvent),
}

/// Side effect requested by [`Dashboard::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Fetch,
}

/// Where the posts on screen came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedOrigin {
    /// Nothing fetched yet.
    Pending,
    Live,
    Fallback,
}

#[derive(Debug, Clone, Copy)]
pub struct DashboardSettings {
    pub refresh_interval_secs: u32,
    pub slide_interval_secs: u32,
    pub max_slides: usize,
}

impl DashboardSettings {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            refresh_interval_secs: config.refresh_interval_secs,
            slide_interval_secs: config.slide_interval_secs,
            max_slides: MAX_MENTIONS,
        }
    }
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            refresh_interval_secs: 60,
            slide_interval_secs: 10,
            max_slides: MAX_MENTIONS,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    posts: Vec<Post>,
    origin: FeedOrigin,
    loading: bool,
    slideshow: Slideshow,
    refresh: RefreshCountdown,
    now: DateTime<Utc>,
    schedule: Arc<Schedule>,
    max_slides: usize,
}

impl Dashboard {
    #[must_use]
    pub fn new(settings: DashboardSettings, schedule: Schedule, now: DateTime<Utc>) -> Self {
        Self {
            posts: Vec::new(),
            origin: FeedOrigin::Pending,
            loading: true,
            slideshow: Slideshow::new(settings.slide_interval_secs, settings.max_slides),
            refresh: RefreshCountdown::new(settings.refresh_interval_secs),
            now,
            schedule: Arc::new(schedule),
            max_slides: settings.max_slides,
        }
    }

    /// Apply one event, returning any side effect the caller must perform.
    pub fn update(&mut self, event: DashboardEvent) -> Option<Effect> {
        match event {
            DashboardEvent::Tick => {
                self.slideshow.apply(SlideEvent::Tick);
                if self.refresh.tick() {
                    self.loading = true;
                    return Some(Effect::Fetch);
                }
                None
            }
            DashboardEvent::ClockTick(now) => {
                self.now = now;
                None
            }
            DashboardEvent::RefreshRequested => {
                self.loading = true;
                Some(Effect::Fetch)
            }
            DashboardEvent::FetchCompleted(result) => {
                match result {
                    Ok(posts) => {
                        debug!(count = posts.len(), "Mentions refreshed");
                        self.posts = posts;
                        self.origin = FeedOrigin::Live;
                    }
                    Err(e) => {
                        warn!(error = %e, "Mention fetch failed, showing fallback posts");
                        self.posts = fallback_posts();
                        self.origin = FeedOrigin::Fallback;
                    }
                }
                self.loading = false;
                self.refresh.restart();
                self.slideshow.reset(self.posts.len());
                None
            }
            DashboardEvent::Slide(slide) => {
                self.slideshow.apply(slide);
                None
            }
        }
    }

    #[must_use]
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    #[must_use]
    pub fn origin(&self) -> FeedOrigin {
        self.origin
    }

    #[must_use]
    pub fn slideshow(&self) -> &Slideshow {
        &self.slideshow
    }

    #[must_use]
    pub fn refresh_countdown(&self) -> u32 {
        self.refresh.remaining()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    /// The post under the cursor, if any.
    #[must_use]
    pub fn current_post(&self) -> Option<&Post> {
        self.slideshow.current().and_then(|i| self.posts.get(i))
    }

    /// Copy of everything needed to render the dashboard.
    #[must_use]
    pub fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            posts: self.posts.iter().take(self.max_slides).cloned().collect(),
            current_index: self.slideshow.current(),
            slide_countdown: self.slideshow.countdown(),
            paused: self.slideshow.is_paused(),
            refresh_countdown: self.refresh.remaining(),
            loading: self.loading,
            origin: self.origin,
            now: self.now,
            schedule: self
                .schedule
                .statuses(self.now)
                .into_iter()
                .map(|(event, status)| ScheduleEntry {
                    event: event.clone(),
                    status,
                })
                .collect(),
        }
    }
}

/// Render-ready view of the dashboard.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    /// Posts in rotation, at most the slide limit.
    pub posts: Vec<Post>,
    pub current_index: Option<usize>,
    pub slide_countdown: u32,
    pub paused: bool,
    pub refresh_countdown: u32,
    pub loading: bool,
    pub origin: FeedOrigin,
    pub now: DateTime<Utc>,
    pub schedule: Vec<ScheduleEntry>,
}

impl DashboardSnapshot {
    #[must_use]
    pub fn current_post(&self) -> Option<&Post> {
        self.current_index.and_then(|i| self.posts.get(i))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScheduleEntry {
    #[serde(flatten)]
    pub event: ScheduleEvent,
    pub status: EventStatus,
}

/// Shared handle used by timers and HTTP handlers to drive the dashboard.
#[derive(Clone)]
pub struct DashboardHandle {
    state: Arc<RwLock<Dashboard>>,
    source: Arc<dyn MentionSource>,
}

impl DashboardHandle {
    #[must_use]
    pub fn new(dashboard: Dashboard, source: Arc<dyn MentionSource>) -> Self {
        Self {
            state: Arc::new(RwLock::new(dashboard)),
            source,
        }
    }

    /// Apply an event. If it triggers a fetch, the fetch is spawned and its
    /// task handle returned.
    ///
    /// Fetches are never cancelled: when several are in flight, whichever
    /// finishes last decides what is shown.
    pub async fn dispatch(&self, event: DashboardEvent) -> Option<JoinHandle<()>> {
        let effect = self.state.write().await.update(event);
        match effect {
            Some(Effect::Fetch) => Some(self.spawn_fetch()),
            None => None,
        }
    }

    fn spawn_fetch(&self) -> JoinHandle<()> {
        let state = Arc::clone(&self.state);
        let source = Arc::clone(&self.source);

        tokio::spawn(async move {
            debug!(source = %source.describe(), "Fetching mentions");
            let result = source.fetch().await.map_err(|e| format!("{e:#}"));
            state
                .write()
                .await
                .update(DashboardEvent::FetchCompleted(result));
        })
    }

    pub async fn snapshot(&self) -> DashboardSnapshot {
        self.state.read().await.snapshot()
    }
}
