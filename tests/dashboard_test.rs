//! Integration tests for the dashboard handle, timer driver, and mention sources.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{bail, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use hackathon_dashboard::dashboard::{
    self, fallback_posts, Clock, Dashboard, DashboardEvent, DashboardHandle, DashboardSettings,
    EventStatus, FeedOrigin, HttpSource, MentionSource, Schedule, Timers,
};
use hackathon_dashboard::mentions::Post;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn posts(label: &str, n: usize) -> Vec<Post> {
    (0..n)
        .map(|i| Post {
            id: format!("{label}-{i}"),
            author: format!("{label}{i}"),
            author_name: None,
            author_image: None,
            content: format!("{label} post {i}"),
            time: "Just now".to_string(),
            likes: 0,
            retweets: 0,
            media: None,
        })
        .collect()
}

/// Replays scripted responses, each after its own delay.
struct ScriptedSource {
    script: Mutex<VecDeque<(Duration, Result<Vec<Post>, String>)>>,
}

impl ScriptedSource {
    fn new(script: Vec<(Duration, Result<Vec<Post>, String>)>) -> Self {
        Self {
            script: Mutex::new(script.into()),
        }
    }
}

#[async_trait]
impl MentionSource for ScriptedSource {
    async fn fetch(&self) -> Result<Vec<Post>> {
        let next = self.script.lock().unwrap().pop_front();
        let Some((delay, result)) = next else {
            bail!("script exhausted");
        };
        tokio::time::sleep(delay).await;
        result.map_err(anyhow::Error::msg)
    }

    fn describe(&self) -> String {
        "scripted".to_string()
    }
}

struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

fn handle_with(source: Arc<dyn MentionSource>) -> DashboardHandle {
    let dashboard = Dashboard::new(DashboardSettings::default(), Schedule::builtin(), Utc::now());
    DashboardHandle::new(dashboard, source)
}

#[tokio::test]
async fn test_failed_fetch_shows_fallback_posts() {
    let source = ScriptedSource::new(vec![(Duration::ZERO, Err("rate limited".to_string()))]);
    let handle = handle_with(Arc::new(source));

    let fetch = handle
        .dispatch(DashboardEvent::RefreshRequested)
        .await
        .expect("refresh should spawn a fetch");
    assert!(handle.snapshot().await.loading);

    fetch.await.unwrap();

    let snapshot = handle.snapshot().await;
    assert_eq!(snapshot.origin, FeedOrigin::Fallback);
    assert_eq!(snapshot.posts, fallback_posts());
    assert_eq!(snapshot.current_index, Some(0));
    assert!(!snapshot.loading);
}

#[tokio::test]
async fn test_slide_events_do_not_fetch() {
    let handle = handle_with(Arc::new(ScriptedSource::new(Vec::new())));
    assert!(handle
        .dispatch(DashboardEvent::Slide(dashboard::SlideEvent::Next))
        .await
        .is_none());
}

#[tokio::test(start_paused = true)]
async fn test_last_fetch_to_complete_wins() {
    let source = ScriptedSource::new(vec![
        (Duration::from_millis(500), Ok(posts("slow", 2))),
        (Duration::from_millis(100), Ok(posts("fast", 4))),
    ]);
    let handle = handle_with(Arc::new(source));

    let first = handle
        .dispatch(DashboardEvent::RefreshRequested)
        .await
        .unwrap();
    let second = handle
        .dispatch(DashboardEvent::RefreshRequested)
        .await
        .unwrap();

    tokio::time::sleep(Duration::from_millis(200)).await;
    let snapshot = handle.snapshot().await;
    assert_eq!(snapshot.posts, posts("fast", 4));

    first.await.unwrap();
    second.await.unwrap();

    // The older request finished later and overwrote the newer result.
    let snapshot = handle.snapshot().await;
    assert_eq!(snapshot.posts, posts("slow", 2));
    assert_eq!(snapshot.origin, FeedOrigin::Live);
}

#[tokio::test(start_paused = true)]
async fn test_driver_loads_then_advances_slides() {
    let source = ScriptedSource::new(vec![(Duration::ZERO, Ok(posts("live", 3)))]);
    let handle = handle_with(Arc::new(source));

    let schedule = Schedule::builtin();
    let in_session = schedule.events()[1].start_time;

    let driver = tokio::spawn(dashboard::run(
        handle.clone(),
        Arc::new(FixedClock(in_session)),
        Timers::default(),
    ));

    tokio::time::sleep(Duration::from_millis(10_500)).await;

    let snapshot = handle.snapshot().await;
    assert_eq!(snapshot.origin, FeedOrigin::Live);
    assert_eq!(snapshot.posts.len(), 3);
    assert_eq!(snapshot.current_index, Some(1));
    assert_eq!(snapshot.slide_countdown, 10);
    assert_eq!(snapshot.refresh_countdown, 50);
    assert_eq!(snapshot.now, in_session);
    assert_eq!(snapshot.schedule[1].status, EventStatus::Current);
    assert_eq!(snapshot.schedule[0].status, EventStatus::Past);

    driver.abort();
}

#[tokio::test(start_paused = true)]
async fn test_paused_slideshow_holds_position() {
    let source = ScriptedSource::new(vec![(Duration::ZERO, Ok(posts("live", 3)))]);
    let handle = handle_with(Arc::new(source));

    let driver = tokio::spawn(dashboard::run(
        handle.clone(),
        Arc::new(FixedClock(Utc::now())),
        Timers::default(),
    ));

    tokio::time::sleep(Duration::from_millis(3_500)).await;
    handle
        .dispatch(DashboardEvent::Slide(dashboard::SlideEvent::PointerEnter))
        .await;
    tokio::time::sleep(Duration::from_secs(30)).await;

    let snapshot = handle.snapshot().await;
    assert!(snapshot.paused);
    assert_eq!(snapshot.current_index, Some(0));
    assert_eq!(snapshot.slide_countdown, 7);

    handle
        .dispatch(DashboardEvent::Slide(dashboard::SlideEvent::PointerLeave))
        .await;
    tokio::time::sleep(Duration::from_secs(7)).await;

    let snapshot = handle.snapshot().await;
    assert!(!snapshot.paused);
    assert_eq!(snapshot.current_index, Some(1));

    driver.abort();
}

// ========== HTTP source ==========

#[tokio::test]
async fn test_http_source_reads_tweets_field() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tweets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tweets": [{
                "id": "1",
                "author": "builder",
                "authorName": null,
                "authorImage": null,
                "content": "hello",
                "time": "2h ago",
                "likes": 4,
                "retweets": 1,
                "media": [
                    {"type": "photo", "url": "https://img.example/a.jpg"},
                    {"type": "photo", "url": "https://img.example/b.jpg"},
                ],
            }],
        })))
        .mount(&mock_server)
        .await;

    let source = HttpSource::new(
        &format!("{}/api/tweets", mock_server.uri()),
        Duration::from_secs(5),
    )
    .unwrap();
    let fetched = source.fetch().await.unwrap();

    assert_eq!(fetched.len(), 1);
    assert_eq!(fetched[0].author, "builder");
    assert_eq!(fetched[0].time, "2h ago");
    assert_eq!(fetched[0].media.as_ref().map(|m| m.items().len()), Some(2));
}

#[tokio::test]
async fn test_http_source_rejects_error_status() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tweets"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": "Failed to fetch tweets",
            "details": "no bearer token configured for the search API",
        })))
        .mount(&mock_server)
        .await;

    let source = HttpSource::new(
        &format!("{}/api/tweets", mock_server.uri()),
        Duration::from_secs(5),
    )
    .unwrap();

    assert!(source.fetch().await.is_err());
}

#[tokio::test]
async fn test_http_source_rejects_malformed_body() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tweets"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let source = HttpSource::new(
        &format!("{}/api/tweets", mock_server.uri()),
        Duration::from_secs(5),
    )
    .unwrap();

    assert!(source.fetch().await.is_err());
}

#[tokio::test]
async fn test_unreachable_endpoint_falls_back() {
    // Nothing listens on the discard port.
    let source = HttpSource::new("http://127.0.0.1:9/api/tweets", Duration::from_secs(5)).unwrap();
    let handle = handle_with(Arc::new(source));

    handle
        .dispatch(DashboardEvent::RefreshRequested)
        .await
        .unwrap()
        .await
        .unwrap();

    assert_eq!(handle.snapshot().await.origin, FeedOrigin::Fallback);
}
