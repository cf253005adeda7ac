//! Web server for the browser UI
//!
//! Every handler renders a full HTML page. Client errors are caught here and
//! turned into a page with a visible message; they never take the process down.

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::api::{TmdbClient, TmdbError};
use crate::models::Category;
use crate::ui::page::{Notice, Page, SHOW_STEP};
use crate::ui::render;

/// Shared state for all handlers
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<TmdbClient>,
}

impl AppState {
    pub fn new(client: TmdbClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

// =============================================================================
// Errors
// =============================================================================

/// Failure of a page request, rendered as an error page
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Tmdb(#[from] TmdbError),

    #[error("{0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadQuery(#[from] QueryRejection),

    #[error("Bad request: {0}")]
    BadPath(#[from] PathRejection),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Tmdb(TmdbError::MissingKey) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Tmdb(TmdbError::NotFound) | AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Tmdb(_) => StatusCode::BAD_GATEWAY,
            AppError::BadQuery(_) | AppError::BadPath(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        warn!(status = status.as_u16(), error = %self, "Rendering error page");
        (status, Html(render::render_error(&self.to_string()))).into_response()
    }
}

type PageResult = Result<Html<String>, AppError>;

// =============================================================================
// Router
// =============================================================================

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/search", get(search))
        .route("/category/:slug", get(category))
        .route("/movie/:id", get(movie))
        .route("/health", get(health))
        .fallback(fallback_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `addr` and serve the UI until the process is stopped
pub async fn serve(addr: SocketAddr, state: AppState) -> anyhow::Result<()> {
    if !state.client.has_key() {
        warn!("No TMDB API key configured; pages will show a setup message");
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local = listener.local_addr()?;

    info!("Local URL: http://localhost:{}", local.port());
    if local.ip().is_unspecified() {
        match local_ip_address::local_ip() {
            Ok(ip) => info!("Network URL: http://{}:{}", ip, local.port()),
            Err(e) => warn!(error = %e, "Could not determine LAN address"),
        }
    }

    axum::serve(listener, build_router(state)).await?;
    Ok(())
}

// =============================================================================
// Handlers
// =============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub limit: Option<String>,
}

impl SearchParams {
    fn query(&self) -> Option<&str> {
        self.q.as_deref().map(str::trim).filter(|q| !q.is_empty())
    }

    fn limit(&self) -> usize {
        self.limit
            .as_deref()
            .and_then(|l| l.trim().parse::<usize>().ok())
            .filter(|&l| l > 0)
            .unwrap_or(SHOW_STEP)
    }
}

async fn home(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> PageResult {
    let Query(params) = params?;
    if let Some(query) = params.query() {
        return search_page(&state, query, params.limit()).await;
    }

    let client = &state.client;
    let (trending, popular, top_rated) =
        tokio::join!(client.trending(), client.popular(), client.top_rated());

    let mut sections = Vec::new();
    let mut failures = Vec::new();
    for (category, result) in Category::ALL.into_iter().zip([trending, popular, top_rated]) {
        match result {
            Ok(movies) => sections.push((category, movies)),
            Err(e) => {
                warn!(category = category.slug(), error = %e, "Failed to load category");
                failures.push(e);
            }
        }
    }

    // Nothing loaded at all: report the first failure as the page error
    if sections.is_empty() && !failures.is_empty() {
        return Err(failures.remove(0).into());
    }

    let mut page = Page::home(sections);
    if !failures.is_empty() {
        page = page.with_notice(Notice::warning(format!(
            "Some lists could not be loaded: {}",
            failures
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ")
        )));
    }
    Ok(Html(render::render_page(&page)))
}

async fn search(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> PageResult {
    let Query(params) = params?;
    match params.query() {
        Some(query) => search_page(&state, query, params.limit()).await,
        None => {
            let page = Page {
                heading: "Search".to_string(),
                notice: Some(Notice::info("Enter a movie title to search.")),
                ..Default::default()
            };
            Ok(Html(render::render_page(&page)))
        }
    }
}

async fn search_page(state: &AppState, query: &str, limit: usize) -> PageResult {
    let results = state.client.search(query).await?;
    info!(query, results = results.len(), "Search");
    Ok(Html(render::render_page(&Page::search(query, results, limit))))
}

async fn category(
    State(state): State<AppState>,
    slug: Result<Path<String>, PathRejection>,
) -> PageResult {
    let Path(slug) = slug?;
    let category = Category::from_slug(&slug)
        .ok_or_else(|| AppError::NotFound(format!("Unknown category: {}", slug)))?;

    let movies = state.client.category(category).await?;
    Ok(Html(render::render_page(&Page::from_records(
        category.label(),
        movies,
    ))))
}

async fn movie(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> PageResult {
    let Path(id) = id?;
    let id: u64 = id
        .parse()
        .map_err(|_| AppError::NotFound(format!("Invalid movie id: {}", id)))?;

    let client = &state.client;
    let (detail, recommendations) = tokio::join!(client.movie_detail(id), client.recommendations(id));

    let detail = detail?;
    // Recommendations are optional decoration
    let recommendations = recommendations.unwrap_or_else(|e| {
        warn!(id, error = %e, "Failed to load recommendations");
        Vec::new()
    });

    Ok(Html(render::render_detail(&detail, &recommendations)))
}

async fn health() -> &'static str {
    "ok"
}

async fn fallback_handler() -> AppError {
    AppError::NotFound("Page not found.".to_string())
}
