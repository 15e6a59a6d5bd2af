//! Event schedule and its time-based highlighting.
//!
//! Events are fixed at startup. Their status is never stored; it is derived
//! from the current time whenever the schedule is rendered.

use std::path::Path;

use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("failed to read schedule file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse schedule: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("event '{title}' ends before it starts")]
    InvalidRange { title: String },
}

/// Where an event sits relative to the current time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Upcoming,
    Current,
    Past,
}

impl EventStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Upcoming => "upcoming",
            Self::Current => "current",
            Self::Past => "past",
        }
    }
}

/// A single agenda entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEvent {
    /// Display string, e.g. "9:00 AM - 10:00 AM".
    pub time: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(alias = "start")]
    pub start_time: DateTime<Utc>,
    #[serde(alias = "end")]
    pub end_time: DateTime<Utc>,
}

impl ScheduleEvent {
    /// Status at `now`. Both ends of the window count as current.
    #[must_use]
    pub fn status_at(&self, now: DateTime<Utc>) -> EventStatus {
        if now < self.start_time {
            EventStatus::Upcoming
        } else if now <= self.end_time {
            EventStatus::Current
        } else {
            EventStatus::Past
        }
    }
}

#[derive(Debug, Deserialize)]
struct ScheduleFile {
    #[serde(default)]
    event: Vec<ScheduleEvent>,
}

/// The ordered list of events shown in the schedule panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schedule {
    events: Vec<ScheduleEvent>,
}

impl Schedule {
    /// Build a schedule, rejecting events that end before they start.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::InvalidRange`] for the first inverted event.
    pub fn new(events: Vec<ScheduleEvent>) -> Result<Self, ScheduleError> {
        if let Some(bad) = events.iter().find(|e| e.end_time < e.start_time) {
            return Err(ScheduleError::InvalidRange {
                title: bad.title.clone(),
            });
        }
        Ok(Self { events })
    }

    /// Parse a TOML schedule made of `[[event]]` tables.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or an event range is inverted.
    pub fn from_toml_str(content: &str) -> Result<Self, ScheduleError> {
        let file: ScheduleFile = toml::from_str(content)?;
        Self::new(file.event)
    }

    /// Load a TOML schedule from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ScheduleError> {
        let content = std::fs::read_to_string(path).map_err(|e| ScheduleError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    /// The built-in hackathon agenda for 15 February 2026, in server local time.
    #[must_use]
    pub fn builtin() -> Self {
        let event = |time: &str, title: &str, description: &str, start: (u32, u32), end: (u32, u32)| {
            ScheduleEvent {
                time: time.to_string(),
                title: title.to_string(),
                description: Some(description.to_string()),
                start_time: hackathon_day_at(start.0, start.1),
                end_time: hackathon_day_at(end.0, end.1),
            }
        };

        Self {
            events: vec![
                event("9:00 AM - 10:00 AM", "Opening ceremony", "Opening ceremony", (8, 45), (10, 0)),
                event("10:00 AM - 5:00 PM", "Build", "Build", (10, 45), (13, 0)),
                event(
                    "3:45 PM - 5:00 PM",
                    "Submission",
                    "Submission deadline window",
                    (15, 45),
                    (17, 0),
                ),
                event("5:45 PM - 7:00 PM", "Judging", "Judging", (17, 45), (19, 0)),
                event(
                    "7:45 PM - 8:30 PM",
                    "Final demos & closing",
                    "Final demos, closing ceremony & photos",
                    (19, 45),
                    (20, 30),
                ),
                event(
                    "9:45 PM - 11:00 PM",
                    "Wrap-up & close",
                    "Cleanup & hard close",
                    (21, 45),
                    (23, 0),
                ),
            ],
        }
    }

    #[must_use]
    pub fn events(&self) -> &[ScheduleEvent] {
        &self.events
    }

    /// Every event paired with its status at `now`.
    #[must_use]
    pub fn statuses(&self, now: DateTime<Utc>) -> Vec<(&ScheduleEvent, EventStatus)> {
        self.events.iter().map(|e| (e, e.status_at(now))).collect()
    }
}

/// 15 February 2026 at `hour:minute` local time.
fn hackathon_day_at(hour: u32, minute: u32) -> DateTime<Utc> {
    let naive = NaiveDate::from_ymd_opt(2026, 2, 15)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .expect("built-in schedule times are valid");

    naive
        .and_local_timezone(Local)
        .earliest()
        .map_or_else(|| naive.and_utc(), |dt| dt.with_timezone(&Utc))
}
