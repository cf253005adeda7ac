//! Movie Explorer - Netflix-style web browser for TMDB movie metadata
//!
//! Search for a title or browse curated lists; results are shown as a
//! featured hero banner followed by rows of poster thumbnails.
//!
//! # Modules
//!
//! - `models` - Movie records and curated list categories
//! - `api` - TMDB API client
//! - `config` - API key and server settings
//! - `ui` - Page models and HTML rendering
//! - `server` - axum router for the web UI
//! - `cli` / `commands` - Command line surface

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod models;
pub mod server;
pub mod ui;

// Re-export commonly used types
pub use api::{TmdbClient, TmdbError};
pub use config::Config;
pub use models::{Category, Movie, MovieDetail};
pub use server::{build_router, AppState};
