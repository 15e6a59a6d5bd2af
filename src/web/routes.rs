use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Json, Router};

use super::pages;
use super::AppState;
use crate::dashboard::{DashboardEvent, SlideEvent};
use crate::mentions::MentionsResponse;

/// Create the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/healthz", get(health))
        .route("/api/tweets", get(api_tweets))
        .route("/api/dashboard", get(api_dashboard))
        .route("/dashboard/fragment", get(dashboard_fragment))
        .route("/dashboard/next", post(next_slide))
        .route("/dashboard/prev", post(prev_slide))
        .route("/dashboard/select/:index", post(select_slide))
        .route("/dashboard/pause", post(pause))
        .route("/dashboard/resume", post(resume))
        .route("/dashboard/refresh", post(refresh))
}

// ========== API Routes ==========

/// Fetch, reshape, and cap the current mentions (GET /api/tweets).
///
/// Every call goes upstream; there is no cache.
async fn api_tweets(State(state): State<AppState>) -> Response {
    match state.aggregator.fetch_mentions().await {
        Ok(tweets) => Json(MentionsResponse { tweets }).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch mentions");
            e.into_response()
        }
    }
}

async fn api_dashboard(State(state): State<AppState>) -> Response {
    Json(state.dashboard.snapshot().await).into_response()
}

async fn health() -> &'static str {
    "ok"
}

// ========== HTML Routes ==========

async fn home(State(state): State<AppState>) -> Response {
    let snapshot = state.dashboard.snapshot().await;
    Html(pages::render_dashboard(&snapshot).into_string()).into_response()
}

async fn dashboard_fragment(State(state): State<AppState>) -> Response {
    let snapshot = state.dashboard.snapshot().await;
    Html(pages::render_dashboard_body(&snapshot).into_string()).into_response()
}

// ========== Dashboard Controls ==========

async fn next_slide(State(state): State<AppState>) -> Redirect {
    state
        .dashboard
        .dispatch(DashboardEvent::Slide(SlideEvent::Next))
        .await;
    Redirect::to("/")
}

async fn prev_slide(State(state): State<AppState>) -> Redirect {
    state
        .dashboard
        .dispatch(DashboardEvent::Slide(SlideEvent::Prev))
        .await;
    Redirect::to("/")
}

async fn select_slide(State(state): State<AppState>, Path(index): Path<usize>) -> Redirect {
    state
        .dashboard
        .dispatch(DashboardEvent::Slide(SlideEvent::Select(index)))
        .await;
    Redirect::to("/")
}

/// Pointer entered the mention card. Called from script, so no redirect.
async fn pause(State(state): State<AppState>) -> StatusCode {
    state
        .dashboard
        .dispatch(DashboardEvent::Slide(SlideEvent::PointerEnter))
        .await;
    StatusCode::NO_CONTENT
}

async fn resume(State(state): State<AppState>) -> StatusCode {
    state
        .dashboard
        .dispatch(DashboardEvent::Slide(SlideEvent::PointerLeave))
        .await;
    StatusCode::NO_CONTENT
}

async fn refresh(State(state): State<AppState>) -> Redirect {
    tracing::info!("Manual mention refresh requested");
    state
        .dashboard
        .dispatch(DashboardEvent::RefreshRequested)
        .await;
    Redirect::to("/")
}
