//! HTTP host for the showcase page and component fragments.
//!
//! Fragment routes render a single component from query parameters, so the
//! components can be swapped into a page with HTMX or fetched directly.

use std::str::FromStr;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::error::Error;
use crate::ui::components::{
    Badge, BadgeVariant, DEFAULT_LOADING_MESSAGE, LoadingSpinner, SpinnerSize, SyncState,
    SyncStatusIndicator,
};
use crate::ui::pages::render_test_page;
use crate::ui::render_fragment;

/// Text used by the badge fragment when `text` is omitted.
pub const DEFAULT_BADGE_TEXT: &str = "Badge";

/// Application state shared across all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Global configuration.
    pub config: Arc<AppConfig>,
    /// Showcase page, rendered once at startup.
    pub test_page: Arc<str>,
}

impl AppState {
    pub fn new(config: Arc<AppConfig>) -> Self {
        let test_page = Arc::from(render_test_page(&config.ui.title));
        Self { config, test_page }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match self {
            Error::UnknownVariant { .. } => StatusCode::BAD_REQUEST,
            Error::Config(_) | Error::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, self.to_string()).into_response()
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    let static_dir = ServeDir::new(&state.config.server.static_dir);

    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/fragments/spinner", get(spinner_fragment))
        .route("/fragments/sync-status", get(sync_status_fragment))
        .route("/fragments/badge", get(badge_fragment))
        .nest_service("/static", static_dir)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> crate::error::Result<()> {
    let addr = config.bind_addr();
    let app = router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        name: "server.started",
        address = %addr,
        "Server started"
    );

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────────────────────────

async fn index_handler(State(state): State<AppState>) -> Html<String> {
    Html(state.test_page.to_string())
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[derive(Debug, Deserialize)]
struct SpinnerQuery {
    size: Option<String>,
    message: Option<String>,
}

async fn spinner_fragment(Query(query): Query<SpinnerQuery>) -> Result<Html<String>, Error> {
    let size: SpinnerSize = parse_or_default(query.size.as_deref())?;
    let message = query
        .message
        .unwrap_or_else(|| DEFAULT_LOADING_MESSAGE.to_string());

    debug!(name: "fragment.rendered", component = "spinner", %size);
    Ok(Html(render_fragment(move || {
        view! { <LoadingSpinner size=size message=message /> }
    })))
}

#[derive(Debug, Deserialize)]
struct SyncStatusQuery {
    status: Option<String>,
    size: Option<String>,
    label: Option<bool>,
}

async fn sync_status_fragment(
    Query(query): Query<SyncStatusQuery>,
) -> Result<Html<String>, Error> {
    let status: SyncState = parse_or_default(query.status.as_deref())?;
    let size: SpinnerSize = parse_or_default(query.size.as_deref())?;
    let show_label = query.label.unwrap_or(true);

    debug!(name: "fragment.rendered", component = "sync-status", %status, %size);
    Ok(Html(render_fragment(move || {
        view! { <SyncStatusIndicator status=status size=size show_label=show_label /> }
    })))
}

#[derive(Debug, Deserialize)]
struct BadgeQuery {
    variant: Option<String>,
    text: Option<String>,
}

async fn badge_fragment(Query(query): Query<BadgeQuery>) -> Result<Html<String>, Error> {
    let variant: BadgeVariant = parse_or_default(query.variant.as_deref())?;
    let text = query.text.unwrap_or_else(|| DEFAULT_BADGE_TEXT.to_string());

    debug!(name: "fragment.rendered", component = "badge", %variant);
    Ok(Html(render_fragment(move || {
        view! { <Badge variant=variant>{text}</Badge> }
    })))
}

/// Parse an optional slug, falling back to the type's default when absent
/// or blank.
fn parse_or_default<T>(value: Option<&str>) -> Result<T, Error>
where
    T: FromStr<Err = Error> + Default,
{
    match value.map(str::trim) {
        None | Some("") => Ok(T::default()),
        Some(slug) => slug.parse(),
    }
}
