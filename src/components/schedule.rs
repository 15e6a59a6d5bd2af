//! Schedule panel components.

use chrono::{DateTime, Local, Utc};
use maud::{html, Markup, Render};

use crate::dashboard::{EventStatus, ScheduleEntry};

/// CSS modifier class for an event status.
#[must_use]
pub const fn status_class(status: EventStatus) -> &'static str {
    match status {
        EventStatus::Upcoming => "schedule-event schedule-event-upcoming",
        EventStatus::Current => "schedule-event schedule-event-current",
        EventStatus::Past => "schedule-event schedule-event-past",
    }
}

/// The list of agenda entries, highlighted by status.
#[derive(Debug, Clone)]
pub struct ScheduleList<'a> {
    pub entries: &'a [ScheduleEntry],
}

impl<'a> ScheduleList<'a> {
    #[must_use]
    pub const fn new(entries: &'a [ScheduleEntry]) -> Self {
        Self { entries }
    }
}

impl Render for ScheduleList<'_> {
    fn render(&self) -> Markup {
        html! {
            div class="schedule-list" {
                @for entry in self.entries {
                    @let event = &entry.event;
                    div class=(status_class(entry.status)) data-status=(entry.status.as_str()) {
                        div {
                            div class="event-time" { (event.time) }
                            div class="event-title" { (event.title) }
                            @if let Some(ref description) = event.description {
                                div class="event-description" { (description) }
                            }
                        }
                        @if entry.status == EventStatus::Current {
                            span class="now-badge" { "● NOW" }
                        }
                    }
                }
            }
        }
    }
}

/// Wall-clock time shown in the schedule header, as local `HH:MM`.
#[derive(Debug, Clone, Copy)]
pub struct ClockDisplay {
    pub now: DateTime<Utc>,
}

impl Render for ClockDisplay {
    fn render(&self) -> Markup {
        let local = self.now.with_timezone(&Local);
        html! {
            time class="clock" datetime=(self.now.to_rfc3339()) {
                (local.format("%H:%M").to_string())
            }
        }
    }
}
