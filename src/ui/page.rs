//! Page view model
//!
//! Groups movie records into what a page shows: one featured hero record
//! and horizontal rows of poster thumbnails.

use crate::models::{Category, Movie};

/// Maximum thumbnails per row when records are split into rows
pub const ROW_LEN: usize = 5;

/// Search results shown before "Show more", and the increment per click
pub const SHOW_STEP: usize = 5;

/// Severity of an in-page message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

impl NoticeLevel {
    /// CSS class for the notice box
    pub fn class(&self) -> &'static str {
        match self {
            NoticeLevel::Info => "info",
            NoticeLevel::Warning => "warning",
            NoticeLevel::Error => "error",
        }
    }
}

/// Message rendered above the page content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// A horizontal strip of thumbnails
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub title: Option<String>,
    /// Optional "see all" link for the row heading
    pub link: Option<String>,
    pub movies: Vec<Movie>,
}

/// Which browse page is being drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageKind {
    /// Category rows under a featured record; no page heading
    Home,
    /// Search results, a single category, or a message page
    #[default]
    Listing,
}

/// Everything needed to render a browse page
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Page {
    pub kind: PageKind,
    pub heading: String,
    /// Search box contents
    pub query: String,
    pub hero: Option<Movie>,
    pub rows: Vec<Row>,
    pub notice: Option<Notice>,
    /// Link for the "Show more" button, when more records exist
    pub show_more: Option<String>,
}

impl Page {
    /// Hero is the first record; the rest fill rows of at most [`ROW_LEN`]
    pub fn from_records(heading: impl Into<String>, records: Vec<Movie>) -> Self {
        let mut records = records.into_iter();
        let hero = records.next();
        let rest: Vec<Movie> = records.collect();

        let rows = rest
            .chunks(ROW_LEN)
            .map(|chunk| Row {
                title: None,
                link: None,
                movies: chunk.to_vec(),
            })
            .collect();

        Self {
            heading: heading.into(),
            hero,
            rows,
            ..Default::default()
        }
    }

    /// Home page: one row per category, featuring the first available record
    pub fn home(sections: Vec<(Category, Vec<Movie>)>) -> Self {
        let hero = sections
            .iter()
            .find_map(|(_, movies)| movies.first().cloned());

        let rows = sections
            .into_iter()
            .filter(|(_, movies)| !movies.is_empty())
            .map(|(category, movies)| Row {
                title: Some(category.label().to_string()),
                link: Some(format!("/category/{}", category.slug())),
                movies,
            })
            .collect();

        Self {
            kind: PageKind::Home,
            heading: "Home".to_string(),
            hero,
            rows,
            ..Default::default()
        }
    }

    /// Search results limited to `limit` records, with a "Show more" link
    /// when TMDB returned more than that
    pub fn search(query: &str, results: Vec<Movie>, limit: usize) -> Self {
        let limit = limit.max(1);
        let total = results.len();
        let shown: Vec<Movie> = results.into_iter().take(limit).collect();

        let mut page = Self::from_records(format!("Results for \"{}\"", query), shown);
        page.query = query.to_string();

        if total == 0 {
            page.notice = Some(Notice::warning("No movies found."));
        } else if limit < total {
            page.show_more = Some(format!(
                "/search?q={}&limit={}",
                urlencoding::encode(query),
                limit.saturating_add(SHOW_STEP)
            ));
        }
        page
    }

    /// Attach a message to the page
    pub fn with_notice(mut self, notice: Notice) -> Self {
        self.notice = Some(notice);
        self
    }

    /// True when there is nothing to show besides the chrome
    pub fn is_empty(&self) -> bool {
        self.hero.is_none() && self.rows.iter().all(|r| r.movies.is_empty())
    }

    /// Number of records on the page, hero included
    pub fn len(&self) -> usize {
        let thumbnails: usize = self.rows.iter().map(|r| r.movies.len()).sum();
        usize::from(self.hero.is_some()) + thumbnails
    }
}
