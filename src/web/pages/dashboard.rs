//! The dashboard page: schedule on the left, mention slideshow on the right.

use maud::{html, Markup};

use crate::components::{
    BaseLayout, ClockDisplay, MentionCard, NavButton, ScheduleList, SlideControls,
};
use crate::constants::TRACKED_HANDLES;
use crate::dashboard::{DashboardSnapshot, FeedOrigin};

/// Render the full dashboard page.
#[must_use]
pub fn render_dashboard(snapshot: &DashboardSnapshot) -> Markup {
    let content = html! {
        div id="dashboard" class="dashboard" {
            (render_dashboard_body(snapshot))
        }
    };

    BaseLayout::new("Live").render(content)
}

/// Render the contents of the dashboard root, replaced in place by the
/// live-update script.
#[must_use]
pub fn render_dashboard_body(snapshot: &DashboardSnapshot) -> Markup {
    html! {
        (render_schedule_panel(snapshot))
        (render_mentions_panel(snapshot))
    }
}

fn render_schedule_panel(snapshot: &DashboardSnapshot) -> Markup {
    html! {
        section class="schedule-panel" {
            div class="panel-header" {
                h2 { "Schedule" }
                div class="panel-subtitle" {
                    (ClockDisplay { now: snapshot.now })
                }
            }
            (ScheduleList::new(&snapshot.schedule))
        }
    }
}

fn render_mentions_panel(snapshot: &DashboardSnapshot) -> Markup {
    let handles = TRACKED_HANDLES
        .iter()
        .map(|h| format!("@{h}"))
        .collect::<Vec<_>>()
        .join(" • ");
    let controls = SlideControls {
        current_index: snapshot.current_index,
        slide_count: snapshot.posts.len(),
        countdown: snapshot.slide_countdown,
        paused: snapshot.paused,
    };

    html! {
        section class="mentions-panel" data-origin=(origin_label(snapshot.origin)) {
            div class="panel-header header-row" {
                div {
                    h2 { "Latest Mentions" }
                    div class="panel-subtitle" { (handles) }
                }
                div class="header-row" {
                    span class="countdown refresh-countdown" { (snapshot.refresh_countdown) "s" }
                    form class="nav-form" method="post" action="/dashboard/refresh" {
                        button class="btn" type="submit" { "Refresh" }
                    }
                }
            }
            div class="stage" {
                @if snapshot.loading && snapshot.posts.is_empty() {
                    div class="spinner" role="status" aria-label="Loading" {}
                } @else {
                    @if let Some(post) = snapshot.current_post() {
                        (NavButton::prev())
                        (MentionCard::new(post))
                        (NavButton::next())
                    } @else {
                        div class="empty-state" { "No tweets to display" }
                    }
                }
            }
            (controls)
        }
    }
}

const fn origin_label(origin: FeedOrigin) -> &'static str {
    match origin {
        FeedOrigin::Pending => "pending",
        FeedOrigin::Live => "live",
        FeedOrigin::Fallback => "fallback",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::{
        fallback_posts, Dashboard, DashboardEvent, DashboardSettings, Schedule, SlideEvent,
    };
    use chrono::{TimeZone, Utc};

    fn dashboard() -> Dashboard {
        let now = Utc.with_ymd_and_hms(2026, 2, 15, 11, 0, 0).unwrap();
        Dashboard::new(DashboardSettings::default(), Schedule::builtin(), now)
    }

    #[test]
    fn test_loading_state_shows_spinner() {
        let html = render_dashboard(&dashboard().snapshot()).into_string();
        assert!(html.contains(r#"id="dashboard""#));
        assert!(html.contains("spinner"));
        assert!(html.contains("Latest Mentions"));
        assert!(html.contains("Opening ceremony"));
    }

    #[test]
    fn test_empty_feed_shows_empty_state() {
        let mut d = dashboard();
        d.update(DashboardEvent::FetchCompleted(Ok(Vec::new())));
        let html = render_dashboard_body(&d.snapshot()).into_string();
        assert!(html.contains("No tweets to display"));
        assert!(html.contains("0 / 0"));
    }

    #[test]
    fn test_fallback_feed_renders_selected_post() {
        let mut d = dashboard();
        d.update(DashboardEvent::FetchCompleted(Err("offline".to_string())));
        d.update(DashboardEvent::Slide(SlideEvent::Next));
        let html = render_dashboard_body(&d.snapshot()).into_string();

        let fallback = fallback_posts();
        let second = &fallback[1];
        assert!(html.contains(r#"data-origin="fallback""#));
        assert!(html.contains(&second.author));
        assert!(html.contains("2 / 5"));
        assert!(html.contains("/dashboard/prev"));
        assert!(html.contains("/dashboard/next"));
    }
}
