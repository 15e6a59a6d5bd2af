use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use hackathon_dashboard::config::Config;
use hackathon_dashboard::dashboard::{
    self, Dashboard, DashboardHandle, DashboardSettings, HttpSource, InProcessSource,
    MentionSource, Schedule, SystemClock, Timers,
};
use hackathon_dashboard::mentions::MentionAggregator;
use hackathon_dashboard::twitter::TwitterClient;
use hackathon_dashboard::web::{self, AppState};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    init_tracing()?;

    info!("Starting hackathon-dashboard");

    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    info!(
        port = config.web_port,
        query = %config.search_query,
        "Configuration loaded"
    );
    if config.twitter_bearer_token.is_none() {
        warn!("TWITTER_BEARER_TOKEN not set - /api/tweets will fail and the dashboard will show fallback posts");
    }

    let schedule = match &config.schedule_path {
        Some(path) => {
            let schedule = Schedule::load(path)
                .with_context(|| format!("Failed to load schedule: {}", path.display()))?;
            info!(path = %path.display(), events = schedule.events().len(), "Schedule loaded");
            schedule
        }
        None => {
            info!("Using built-in schedule");
            Schedule::builtin()
        }
    };

    let client = TwitterClient::new(
        &config.twitter_api_base,
        config.twitter_bearer_token.clone(),
        config.http_timeout,
    )
    .context("Failed to build search API client")?;
    let aggregator = MentionAggregator::new(client, config.search_query.clone());

    let source: Arc<dyn MentionSource> = match &config.mentions_url {
        Some(url) => Arc::new(
            HttpSource::new(url, config.http_timeout)
                .context("Failed to build mentions endpoint client")?,
        ),
        None => Arc::new(InProcessSource::new(aggregator.clone())),
    };
    info!(source = %source.describe(), "Dashboard mention source");

    let board = Dashboard::new(DashboardSettings::from_config(&config), schedule, Utc::now());
    let handle = DashboardHandle::new(board, source);

    // Start dashboard timers
    let timers = Timers {
        tick: Duration::from_secs(1),
        clock: config.clock_interval,
    };
    let driver_handle = {
        let handle = handle.clone();
        tokio::spawn(async move {
            dashboard::run(handle, Arc::new(SystemClock), timers).await;
        })
    };

    // Start web server in background
    let state = AppState {
        config: Arc::new(config),
        aggregator,
        dashboard: handle,
    };
    let web_handle = tokio::spawn(async move {
        if let Err(e) = web::serve(state).await {
            error!("Web server error: {e:#}");
        }
    });

    shutdown_signal().await;

    info!("Shutting down...");

    web_handle.abort();
    driver_handle.abort();

    info!("Shutdown complete");

    Ok(())
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,hackathon_dashboard=debug"));

    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| matches!(v.to_lowercase().as_str(), "json" | "structured"))
        .unwrap_or(false);

    if use_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))?;
    }

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
