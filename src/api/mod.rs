//! API clients for external services
//!
//! - TMDB: movie metadata, curated lists and recommendations

pub mod tmdb;

pub use tmdb::{TmdbClient, TmdbError};
