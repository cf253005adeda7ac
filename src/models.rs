//! Data structures for Movie Explorer
//!
//! Plain records built from TMDB responses:
//! - **Movie**: one entry of a search/list response
//! - **MovieDetail**: the full `/movie/{id}` payload we display
//! - **Category**: the curated lists shown on the home page

use serde::{Deserialize, Serialize};
use std::fmt;

/// Base URL for poster thumbnails
pub const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

/// Base URL for hero backdrops
pub const BACKDROP_BASE_URL: &str = "https://image.tmdb.org/t/p/w1280";

/// Fixed-size image shown when TMDB has no poster for a movie
pub const FALLBACK_POSTER_URL: &str =
    "https://www.themoviedb.org/assets/2/v4/logos/stacked-blue-2b2b2b9ef3c2a132.png";

// =============================================================================
// Movie Record
// =============================================================================

/// A movie as returned by TMDB list endpoints (search, popular, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub overview: String,
    pub release_date: Option<String>,
    pub vote_average: f32,
}

impl Movie {
    /// Release year, if the release date carries one
    pub fn year(&self) -> Option<u16> {
        self.release_date.as_deref().and_then(extract_year)
    }

    /// Poster thumbnail URL, falling back to the TMDB logo
    pub fn poster_url(&self) -> String {
        poster_url(self.poster_path.as_deref())
    }

    /// Wide backdrop image URL for the hero banner
    pub fn backdrop_url(&self) -> Option<String> {
        self.backdrop_path
            .as_deref()
            .filter(|p| !p.is_empty())
            .map(|p| format!("{}{}", BACKDROP_BASE_URL, p))
    }

    /// Thumbnail caption: "Title (Year)", or "Title (N/A)" without a date
    pub fn caption(&self) -> String {
        match self.year() {
            Some(year) => format!("{} ({})", self.title, year),
            None => format!("{} (N/A)", self.title),
        }
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.year() {
            Some(year) => write!(f, "{} ({})", self.title, year),
            None => write!(f, "{}", self.title),
        }
    }
}

// =============================================================================
// Movie Detail
// =============================================================================

/// Detailed movie information from `/movie/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetail {
    pub id: u64,
    pub title: String,
    pub tagline: Option<String>,
    pub overview: String,
    pub release_date: Option<String>,
    pub runtime: Option<u32>,
    pub genres: Vec<String>,
    pub vote_average: f32,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
}

impl MovieDetail {
    pub fn year(&self) -> Option<u16> {
        self.release_date.as_deref().and_then(extract_year)
    }

    pub fn poster_url(&self) -> String {
        poster_url(self.poster_path.as_deref())
    }

    /// Release date for display, `N/A` when TMDB has none
    pub fn release_date_label(&self) -> &str {
        match self.release_date.as_deref() {
            Some(date) if !date.is_empty() => date,
            _ => "N/A",
        }
    }

    /// Rating for display, `N/A` for unrated movies
    pub fn rating_label(&self) -> String {
        if self.vote_average > 0.0 {
            format!("{:.1}", self.vote_average)
        } else {
            "N/A".to_string()
        }
    }

    /// Comma-separated genre names, `N/A` when there are none
    pub fn genres_label(&self) -> String {
        if self.genres.is_empty() {
            "N/A".to_string()
        } else {
            self.genres.join(", ")
        }
    }

    pub fn overview_label(&self) -> &str {
        if self.overview.trim().is_empty() {
            "No description available."
        } else {
            &self.overview
        }
    }

    /// Runtime formatted as `2h 56m`
    pub fn runtime_label(&self) -> Option<String> {
        self.runtime
            .filter(|&m| m > 0)
            .map(|m| format!("{}h {}m", m / 60, m % 60))
    }
}

impl fmt::Display for MovieDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) - {} - ⭐ {}",
            self.title,
            self.release_date_label(),
            self.genres_label(),
            self.rating_label()
        )
    }
}

// =============================================================================
// Categories
// =============================================================================

/// Curated movie lists offered by TMDB
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Trending,
    Popular,
    TopRated,
}

impl Category {
    /// Order the categories appear on the home page
    pub const ALL: [Category; 3] = [Category::Trending, Category::Popular, Category::TopRated];

    /// TMDB endpoint path for this list
    pub fn endpoint(&self) -> &'static str {
        match self {
            Category::Trending => "/trending/movie/day",
            Category::Popular => "/movie/popular",
            Category::TopRated => "/movie/top_rated",
        }
    }

    /// URL slug used in `/category/{slug}`
    pub fn slug(&self) -> &'static str {
        match self {
            Category::Trending => "trending",
            Category::Popular => "popular",
            Category::TopRated => "top-rated",
        }
    }

    /// Row heading
    pub fn label(&self) -> &'static str {
        match self {
            Category::Trending => "Trending Today",
            Category::Popular => "Popular on TMDB",
            Category::TopRated => "Top Rated",
        }
    }

    /// Parse a slug (also accepts `top_rated`)
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug.to_ascii_lowercase().as_str() {
            "trending" => Some(Category::Trending),
            "popular" => Some(Category::Popular),
            "top-rated" | "top_rated" | "toprated" => Some(Category::TopRated),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Build a poster URL from an optional TMDB path
pub fn poster_url(poster_path: Option<&str>) -> String {
    match poster_path {
        Some(path) if !path.is_empty() => format!("{}{}", POSTER_BASE_URL, path),
        _ => FALLBACK_POSTER_URL.to_string(),
    }
}

/// Extract year from a date string like "2022-03-04"
pub fn extract_year(date: &str) -> Option<u16> {
    date.get(..4).and_then(|y| y.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(title: &str, date: Option<&str>) -> Movie {
        Movie {
            id: 1,
            title: title.to_string(),
            poster_path: None,
            backdrop_path: None,
            overview: String::new(),
            release_date: date.map(String::from),
            vote_average: 0.0,
        }
    }

    #[test]
    fn test_extract_year() {
        assert_eq!(extract_year("2022-03-04"), Some(2022));
        assert_eq!(extract_year("1999"), Some(1999));
        assert_eq!(extract_year(""), None);
        assert_eq!(extract_year("abc"), None);
        assert_eq!(extract_year("19"), None);
    }

    #[test]
    fn test_caption() {
        assert_eq!(movie("Se7en", Some("1995-09-22")).caption(), "Se7en (1995)");
        assert_eq!(movie("Untitled", None).caption(), "Untitled (N/A)");
    }

    #[test]
    fn test_poster_url_fallback() {
        assert_eq!(
            poster_url(Some("/abc.jpg")),
            "https://image.tmdb.org/t/p/w500/abc.jpg"
        );
        assert_eq!(poster_url(None), FALLBACK_POSTER_URL);
        assert_eq!(poster_url(Some("")), FALLBACK_POSTER_URL);
    }

    #[test]
    fn test_movie_display() {
        assert_eq!(movie("Fight Club", Some("1999-10-15")).to_string(), "Fight Club (1999)");
        assert_eq!(movie("Untitled", None).to_string(), "Untitled");
    }

    #[test]
    fn test_backdrop_url() {
        let mut m = movie("X", None);
        assert_eq!(m.backdrop_url(), None);
        m.backdrop_path = Some("/bd.jpg".to_string());
        assert_eq!(
            m.backdrop_url().as_deref(),
            Some("https://image.tmdb.org/t/p/w1280/bd.jpg")
        );
    }

    #[test]
    fn test_detail_labels_default() {
        let detail = MovieDetail {
            id: 1,
            title: "Nothing Known".to_string(),
            tagline: None,
            overview: "  ".to_string(),
            release_date: Some(String::new()),
            runtime: Some(0),
            genres: vec![],
            vote_average: 0.0,
            poster_path: None,
            backdrop_path: None,
        };
        assert_eq!(detail.release_date_label(), "N/A");
        assert_eq!(detail.rating_label(), "N/A");
        assert_eq!(detail.genres_label(), "N/A");
        assert_eq!(detail.overview_label(), "No description available.");
        assert_eq!(detail.runtime_label(), None);
    }

    #[test]
    fn test_detail_labels() {
        let detail = MovieDetail {
            id: 550,
            title: "Fight Club".to_string(),
            tagline: Some("Mischief. Mayhem. Soap.".to_string()),
            overview: "An insomniac office worker...".to_string(),
            release_date: Some("1999-10-15".to_string()),
            runtime: Some(139),
            genres: vec!["Drama".to_string(), "Thriller".to_string()],
            vote_average: 8.433,
            poster_path: Some("/p.jpg".to_string()),
            backdrop_path: None,
        };
        assert_eq!(detail.rating_label(), "8.4");
        assert_eq!(detail.genres_label(), "Drama, Thriller");
        assert_eq!(detail.runtime_label().as_deref(), Some("2h 19m"));
        assert_eq!(detail.year(), Some(1999));
    }

    #[test]
    fn test_category_slugs() {
        for category in Category::ALL {
            assert_eq!(Category::from_slug(category.slug()), Some(category));
        }
        assert_eq!(Category::from_slug("top_rated"), Some(Category::TopRated));
        assert_eq!(Category::from_slug("upcoming"), None);
    }

    #[test]
    fn test_category_endpoints() {
        assert_eq!(Category::Trending.endpoint(), "/trending/movie/day");
        assert_eq!(Category::Popular.endpoint(), "/movie/popular");
        assert_eq!(Category::TopRated.endpoint(), "/movie/top_rated");
    }
}
