//! HTML rendering
//!
//! Pure functions from view models to complete HTML documents. Templates are
//! `maud` macros, so every piece of text that came from TMDB or the user is
//! escaped on interpolation.

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::models::{Movie, MovieDetail};
use crate::ui::page::{Notice, Page, PageKind, Row};
use crate::ui::theme::Theme;

/// App name shown in the top bar and the document title
pub const APP_NAME: &str = "Movie Explorer";

/// Recommendations shown under a movie's details
pub const RECOMMENDATION_LIMIT: usize = 10;

// =============================================================================
// Public renderers
// =============================================================================

/// Render a browse page (home, search results, category)
pub fn render_page(page: &Page) -> String {
    let is_home = page.kind == PageKind::Home;

    let body = html! {
        @if let Some(notice) = &page.notice {
            (notice_html(notice))
        }
        @if let Some(hero) = &page.hero {
            (hero_html(hero))
        }
        @if !is_home {
            h1.heading { (page.heading) }
        }
        @if page.is_empty() {
            // The notice already says why when there is one
            @if page.notice.is_none() {
                p.empty { "No movies found." }
            }
        } @else {
            @for row in &page.rows {
                (row_html(row))
            }
        }
        @if let Some(link) = &page.show_more {
            a.button.secondary href=(link) { "Show More" }
        }
    };

    let title = (!is_home).then_some(page.heading.as_str());
    document(title, &page.query, body).into_string()
}

/// Render records as a page: first one featured, the rest in rows
pub fn render_records(heading: &str, records: &[Movie]) -> String {
    render_page(&Page::from_records(heading, records.to_vec()))
}

/// Render the detail view for one movie plus TMDB's recommendations
pub fn render_detail(detail: &MovieDetail, recommendations: &[Movie]) -> String {
    let recommended = (!recommendations.is_empty()).then(|| Row {
        title: Some("🎞️ Recommended for You".to_string()),
        link: None,
        movies: recommendations
            .iter()
            .take(RECOMMENDATION_LIMIT)
            .cloned()
            .collect(),
    });

    let body = html! {
        article.detail {
            img.poster src=(detail.poster_url()) alt=(detail.title);
            div {
                h1 { (detail.title) }
                @if let Some(tagline) = &detail.tagline {
                    p.tagline { (tagline) }
                }
                dl {
                    dt { "Release Date:" } dd { (detail.release_date_label()) }
                    dt { "Rating:" } dd.rating { "⭐ " (detail.rating_label()) }
                    @if let Some(runtime) = detail.runtime_label() {
                        dt { "Runtime:" } dd { (runtime) }
                    }
                    dt { "Genres:" } dd { (detail.genres_label()) }
                    dt { "Overview:" } dd { (detail.overview_label()) }
                }
                a.button.secondary href="/" { "🔙 Back to Search" }
            }
        }
        @if let Some(row) = &recommended {
            (row_html(row))
        }
    };

    document(Some(detail.title.as_str()), "", body).into_string()
}

/// Render a page that only carries an error message
pub fn render_error(message: &str) -> String {
    render_page(&Page {
        heading: "Something went wrong".to_string(),
        notice: Some(Notice::error(message)),
        ..Default::default()
    })
}

// =============================================================================
// Fragments
// =============================================================================

fn document(title: Option<&str>, query: &str, body: Markup) -> Markup {
    let title = match title.filter(|t| !t.is_empty()) {
        Some(title) => format!("{} · {}", title, APP_NAME),
        None => APP_NAME.to_string(),
    };

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                style { (PreEscaped(Theme::stylesheet())) }
            }
            body {
                header.topbar {
                    a.brand href="/" { "🎬 " (APP_NAME) }
                    nav {
                        a href="/" { "Home" }
                        a href="/category/trending" { "Trending" }
                        a href="/category/popular" { "Popular" }
                        a href="/category/top-rated" { "Top Rated" }
                    }
                    form.search action="/search" method="get" {
                        input type="search" name="q" placeholder="Enter movie title"
                            value=(query) aria-label="Enter movie title";
                    }
                }
                main { (body) }
                footer {
                    "Data provided by TMDB. This product uses the TMDB API but is not endorsed or certified by TMDB."
                }
            }
        }
    }
}

fn notice_html(notice: &Notice) -> Markup {
    html! {
        div class={ "notice " (notice.level.class()) } role="alert" { (notice.message) }
    }
}

fn hero_html(movie: &Movie) -> Markup {
    let style = movie
        .backdrop_url()
        .map(|url| format!("background-image: url('{}')", url));
    let year = movie.year();
    let rating = (movie.vote_average > 0.0).then(|| format!("{:.1}", movie.vote_average));

    html! {
        section.hero style=[style] {
            div.hero-body {
                h2 { (movie.title) }
                div.meta {
                    @if let Some(year) = year {
                        (year)
                    }
                    @if let Some(rating) = &rating {
                        @if year.is_some() { " · " }
                        span.rating { "⭐ " (rating) }
                    }
                }
                p.overview { (movie.overview) }
                a.button href={ "/movie/" (movie.id) } { "ℹ More Info" }
            }
        }
    }
}

fn row_html(row: &Row) -> Markup {
    html! {
        section.row {
            @match (&row.title, &row.link) {
                (Some(title), Some(link)) => {
                    h3 { a href=(link) { (title) } }
                },
                (Some(title), None) => {
                    h3 { (title) }
                },
                _ => {},
            }
            div.row-track {
                @for movie in &row.movies {
                    (card_html(movie))
                }
            }
        }
    }
}

fn card_html(movie: &Movie) -> Markup {
    html! {
        a.card href={ "/movie/" (movie.id) } {
            div.poster {
                img src=(movie.poster_url()) alt=(movie.title) loading="lazy";
            }
            div.caption {
                span.title { (movie.caption()) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_title() {
        let html = render_records("Popular", &[]);
        assert!(html.contains("<title>Popular · Movie Explorer</title>"));
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_home_has_no_heading() {
        let html = render_page(&Page::home(vec![]));
        assert!(html.contains("<title>Movie Explorer</title>"));
        assert!(!html.contains("class=\"heading\""));
    }

    #[test]
    fn test_listing_named_home_keeps_heading() {
        let html = render_records("Home", &[]);
        assert!(html.contains("<h1 class=\"heading\">Home</h1>"));
    }

    #[test]
    fn test_error_page_shows_message() {
        let html = render_error("TMDB is down <now>");
        assert!(html.contains("class=\"notice error\""));
        assert!(html.contains("TMDB is down &lt;now&gt;"));
        // The notice explains the empty page; no duplicate empty-state text
        assert!(!html.contains("class=\"empty\""));
    }

    #[test]
    fn test_query_is_escaped_in_search_box() {
        let page = Page::search(r#""><b>"#, vec![], 5);
        let html = render_page(&page);
        assert!(html.contains(r#"value="&quot;&gt;&lt;b&gt;""#));
        assert!(!html.contains("<b>"));
    }
}
