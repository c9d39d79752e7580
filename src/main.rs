//! HTTP entry point for the room schedule service.
//!
//! Loads the subject list for the configured term in the background, then
//! serves `GET /` with class meetings grouped by building and room.

use anyhow::Result;
use clap::Parser;
use room_schedule::{
    config::Config,
    fetch::BasicClient,
    http::{AppState, create_router},
    infra::cornell::CornellRosterClient,
    services::roster_api::RosterApi,
    subjects::{SubjectList, load_subjects},
};
use std::ffi::OsStr;
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    let config = Config::parse();

    // Logging setup: colored stderr + JSON rolling log file
    let log_dir = Path::new(&config.log_file_path)
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&config.log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("room_schedule.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let roster: Arc<dyn RosterApi> =
        Arc::new(CornellRosterClient::new(BasicClient::new(), config.api_base.clone()));
    let subjects = SubjectList::new();

    // Requests arriving before this finishes see an empty subject list.
    {
        let roster = roster.clone();
        let subjects = subjects.clone();
        let term = config.term.clone();
        tokio::spawn(async move {
            load_subjects(roster.as_ref(), &term, &subjects).await;
        });
    }

    let state = AppState::new(roster, subjects, config.schedule_options());
    let app = create_router(state);

    let addr = config.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(
        %addr,
        term = %config.term,
        time_format = ?config.time_format,
        concurrency = config.concurrency,
        "Server is listening"
    );

    axum::serve(listener, app).await?;

    Ok(())
}
