//! TMDB (The Movie Database) API client
//!
//! Provides movie search, curated lists, details and recommendations.
//! API docs: https://developer.themoviedb.org/docs

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::Config;
use crate::models::{Category, Movie, MovieDetail};

/// Public TMDB v3 endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Language sent with every request unless configured otherwise
pub const DEFAULT_LANGUAGE: &str = "en-US";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// TMDB API error types
#[derive(Error, Debug)]
pub enum TmdbError {
    #[error("No TMDB API key configured. Set TMDB_API_KEY in your environment or .env file.")]
    MissingKey,

    #[error("TMDB rejected the API key (401). Check TMDB_API_KEY.")]
    Unauthorized,

    #[error("Resource not found (404)")]
    NotFound,

    #[error("Rate limited by TMDB (429). Try again in a moment.")]
    RateLimited,

    #[error("TMDB returned an error status: {0}")]
    Upstream(u16),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Could not reach TMDB: {0}")]
    Network(#[from] reqwest::Error),
}

impl TmdbError {
    /// True when the failure is caused by the key rather than the service
    pub fn is_auth(&self) -> bool {
        matches!(self, TmdbError::MissingKey | TmdbError::Unauthorized)
    }
}

/// TMDB API client
#[derive(Debug, Clone)]
pub struct TmdbClient {
    api_key: String,
    base_url: String,
    language: String,
    client: reqwest::Client,
}

impl TmdbClient {
    /// Create a new TMDB client with the given API key.
    ///
    /// An empty key is accepted here; every request then fails with
    /// [`TmdbError::MissingKey`] without touching the network.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Create a client with a custom base URL (for testing)
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into().trim().to_string(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
        }
    }

    /// Create a client from resolved configuration
    pub fn from_config(config: &Config) -> Self {
        let client = Self::new(config.tmdb_api_key().unwrap_or_default());
        match config.language() {
            Some(language) => client.with_language(language),
            None => client,
        }
    }

    /// Override the `language` parameter sent with each request
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Whether a key is available at all
    pub fn has_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Make an authenticated GET request and decode the JSON body
    async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<T, TmdbError> {
        if !self.has_key() {
            return Err(TmdbError::MissingKey);
        }

        let url = format!("{}{}", self.base_url, endpoint);
        debug!(endpoint, "TMDB request");

        let mut request = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .query(&[("language", self.language.as_str())])
            .query(params);

        // v4 read access tokens are JWTs and go in the header; v3 keys in the query
        if self.api_key.starts_with("eyJ") {
            request = request.bearer_auth(&self.api_key);
        } else {
            request = request.query(&[("api_key", self.api_key.as_str())]);
        }

        let response = request.send().await.map_err(|e| {
            warn!(endpoint, error = %e, "TMDB request failed");
            TmdbError::from(e)
        })?;

        match response.status() {
            status if status.is_success() => {
                let body = response.text().await?;
                serde_json::from_str(&body).map_err(|e| {
                    warn!(endpoint, error = %e, "TMDB returned malformed JSON");
                    TmdbError::InvalidResponse(format!("JSON parse error: {}", e))
                })
            }
            StatusCode::UNAUTHORIZED => Err(TmdbError::Unauthorized),
            StatusCode::NOT_FOUND => Err(TmdbError::NotFound),
            StatusCode::TOO_MANY_REQUESTS => Err(TmdbError::RateLimited),
            status => {
                warn!(endpoint, status = status.as_u16(), "TMDB error status");
                Err(TmdbError::Upstream(status.as_u16()))
            }
        }
    }

    async fn list(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<Vec<Movie>, TmdbError> {
        let response: ListResponse = self.get(endpoint, params).await?;
        Ok(response.into_movies())
    }

    /// Search movies by title. A blank query returns no results without a request.
    pub async fn search(&self, query: &str) -> Result<Vec<Movie>, TmdbError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        self.list(
            "/search/movie",
            &[("query", query), ("page", "1"), ("include_adult", "false")],
        )
        .await
    }

    /// Movies trending today
    pub async fn trending(&self) -> Result<Vec<Movie>, TmdbError> {
        self.category(Category::Trending).await
    }

    /// Currently popular movies
    pub async fn popular(&self) -> Result<Vec<Movie>, TmdbError> {
        self.category(Category::Popular).await
    }

    /// All-time top rated movies
    pub async fn top_rated(&self) -> Result<Vec<Movie>, TmdbError> {
        self.category(Category::TopRated).await
    }

    /// First page of a curated list
    pub async fn category(&self, category: Category) -> Result<Vec<Movie>, TmdbError> {
        let params: &[(&str, &str)] = match category {
            Category::Trending => &[],
            Category::Popular | Category::TopRated => &[("page", "1")],
        };
        self.list(category.endpoint(), params).await
    }

    /// Get movie details by ID
    pub async fn movie_detail(&self, id: u64) -> Result<MovieDetail, TmdbError> {
        let endpoint = format!("/movie/{}", id);
        let response: MovieResponse = self.get(&endpoint, &[]).await?;
        Ok(response.into_detail())
    }

    /// TMDB's own recommendations for a movie
    pub async fn recommendations(&self, id: u64) -> Result<Vec<Movie>, TmdbError> {
        let endpoint = format!("/movie/{}/recommendations", id);
        self.list(&endpoint, &[("page", "1")]).await
    }
}

// =============================================================================
// Response Structures (internal deserialization)
// =============================================================================

#[derive(Debug, Deserialize)]
struct ListResponse {
    #[serde(default)]
    results: Vec<MovieRaw>,
}

impl ListResponse {
    fn into_movies(self) -> Vec<Movie> {
        self.results
            .into_iter()
            .filter_map(MovieRaw::into_movie)
            .collect()
    }
}

#[derive(Debug, Deserialize)]
struct MovieRaw {
    id: Option<u64>,
    title: Option<String>,
    // Trending lists may carry "name" for non-movie entries
    name: Option<String>,
    poster_path: Option<String>,
    backdrop_path: Option<String>,
    overview: Option<String>,
    release_date: Option<String>,
    vote_average: Option<f32>,
}

impl MovieRaw {
    fn into_movie(self) -> Option<Movie> {
        // Without an id there is nothing to link to
        let id = self.id?;

        Some(Movie {
            id,
            title: self.title.or(self.name).unwrap_or_default(),
            poster_path: self.poster_path,
            backdrop_path: self.backdrop_path,
            overview: self.overview.unwrap_or_default(),
            release_date: self.release_date.filter(|d| !d.is_empty()),
            vote_average: self.vote_average.unwrap_or(0.0),
        })
    }
}

#[derive(Debug, Deserialize)]
struct MovieResponse {
    id: u64,
    title: Option<String>,
    tagline: Option<String>,
    overview: Option<String>,
    release_date: Option<String>,
    runtime: Option<u32>,
    genres: Option<Vec<GenreRaw>>,
    vote_average: Option<f32>,
    poster_path: Option<String>,
    backdrop_path: Option<String>,
}

impl MovieResponse {
    fn into_detail(self) -> MovieDetail {
        MovieDetail {
            id: self.id,
            title: self.title.unwrap_or_default(),
            tagline: self.tagline.filter(|t| !t.is_empty()),
            overview: self.overview.unwrap_or_default(),
            release_date: self.release_date.filter(|d| !d.is_empty()),
            runtime: self.runtime,
            genres: self
                .genres
                .unwrap_or_default()
                .into_iter()
                .map(|g| g.name)
                .collect(),
            vote_average: self.vote_average.unwrap_or(0.0),
            poster_path: self.poster_path,
            backdrop_path: self.backdrop_path,
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenreRaw {
    name: String,
}
