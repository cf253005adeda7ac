//! HTML renderer tests
//!
//! Covers the hero/row layout, the empty state, detail pages and escaping.

use movie_explorer::models::{Category, Movie, MovieDetail, FALLBACK_POSTER_URL};
use movie_explorer::ui::page::{Notice, Page};
use movie_explorer::ui::render::RECOMMENDATION_LIMIT;
use movie_explorer::ui::{render_detail, render_error, render_page, render_records};

fn movie(id: u64, title: &str) -> Movie {
    Movie {
        id,
        title: title.to_string(),
        poster_path: Some(format!("/poster{}.jpg", id)),
        backdrop_path: Some(format!("/backdrop{}.jpg", id)),
        overview: format!("Overview of {}", title),
        release_date: Some("2010-07-16".to_string()),
        vote_average: 8.1,
    }
}

fn movies(n: u64) -> Vec<Movie> {
    (1..=n).map(|id| movie(id, &format!("Movie {}", id))).collect()
}

/// Text between the hero section's opening and closing tags
fn hero_section(html: &str) -> Option<&str> {
    let start = html.find("<section class=\"hero\"")?;
    let end = html[start..].find("</section>")? + start;
    Some(&html[start..end])
}

fn assert_valid_document(html: &str) {
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<html lang=\"en\">"));
    assert!(html.contains("<style>"));
    assert!(html.contains("<main>"));
    assert!(html.trim_end().ends_with("</html>"));
    assert_eq!(html.matches("<section").count(), html.matches("</section>").count());
}

// =============================================================================
// Layout
// =============================================================================

#[test]
fn test_empty_list_renders_empty_state() {
    let html = render_records("Search results", &[]);

    assert_valid_document(&html);
    assert!(hero_section(&html).is_none());
    assert!(!html.contains("class=\"card\""));
    assert!(html.contains("No movies found."));
}

#[test]
fn test_single_record_is_hero() {
    let html = render_records("Inception", &[movie(27205, "Inception")]);

    assert_valid_document(&html);
    let hero = hero_section(&html).expect("hero section present");
    assert!(hero.contains("<h2>Inception</h2>"));
    assert!(hero.contains("href=\"/movie/27205\""));
    assert!(hero.contains("https://image.tmdb.org/t/p/w1280/backdrop27205.jpg"));
    assert!(hero.contains("2010"));
    // Featured record is not repeated as a thumbnail
    assert!(!html.contains("class=\"card\""));
}

#[test]
fn test_remaining_records_fill_rows() {
    let html = render_records("Many", &movies(7));

    let hero = hero_section(&html).unwrap();
    assert!(hero.contains("Movie 1"));
    assert_eq!(html.matches("class=\"card\"").count(), 6);
    assert_eq!(html.matches("<section class=\"row\">").count(), 2);
    assert!(html.contains("https://image.tmdb.org/t/p/w500/poster2.jpg"));
}

#[test]
fn test_missing_poster_uses_fallback() {
    let mut records = movies(2);
    records[1].poster_path = None;
    records[1].release_date = None;

    let html = render_records("Fallback", &records);
    assert!(html.contains(FALLBACK_POSTER_URL));
    assert!(html.contains("N/A"));
}

#[test]
fn test_home_rows_have_category_headings() {
    let page = Page::home(vec![
        (Category::Trending, movies(3)),
        (Category::Popular, movies(2)),
        (Category::TopRated, vec![]),
    ]);
    let html = render_page(&page);

    assert_valid_document(&html);
    assert!(hero_section(&html).is_some());
    assert!(html.contains("<a href=\"/category/trending\">Trending Today</a>"));
    assert!(html.contains("<a href=\"/category/popular\">Popular on TMDB</a>"));
    assert!(!html.contains(">Top Rated</a></h3>"));
    assert!(html.contains("<title>Movie Explorer</title>"));
}

#[test]
fn test_search_page_keeps_query_and_show_more() {
    let page = Page::search("star wars", movies(12), 5);
    let html = render_page(&page);

    assert!(html.contains("value=\"star wars\""));
    assert!(html.contains("Results for &quot;star wars&quot;"));
    assert!(html.contains("href=\"/search?q=star%20wars&amp;limit=10\""));
    assert!(html.contains("Show More"));
    // hero + 4 thumbnails
    assert_eq!(html.matches("class=\"card\"").count(), 4);
}

#[test]
fn test_notice_is_rendered() {
    let page = Page::from_records("Home", movies(1))
        .with_notice(Notice::warning("Some lists could not be loaded"));
    let html = render_page(&page);

    assert!(html.contains("class=\"notice warning\""));
    assert!(html.contains("Some lists could not be loaded"));
}

#[test]
fn test_error_page() {
    let html = render_error("No TMDB API key configured.");

    assert_valid_document(&html);
    assert!(html.contains("class=\"notice error\""));
    assert!(html.contains("No TMDB API key configured."));
}

// =============================================================================
// Detail
// =============================================================================

fn fight_club() -> MovieDetail {
    MovieDetail {
        id: 550,
        title: "Fight Club".to_string(),
        tagline: Some("Mischief. Mayhem. Soap.".to_string()),
        overview: "An insomniac office worker...".to_string(),
        release_date: Some("1999-10-15".to_string()),
        runtime: Some(139),
        genres: vec!["Drama".to_string()],
        vote_average: 8.4,
        poster_path: Some("/fc.jpg".to_string()),
        backdrop_path: None,
    }
}

#[test]
fn test_detail_page() {
    let html = render_detail(&fight_club(), &movies(3));

    assert_valid_document(&html);
    assert!(html.contains("<h1>Fight Club</h1>"));
    assert!(html.contains("1999-10-15"));
    assert!(html.contains("⭐ 8.4"));
    assert!(html.contains("2h 19m"));
    assert!(html.contains("Drama"));
    assert!(html.contains("Recommended for You"));
    assert!(html.contains("Back to Search"));
    assert_eq!(html.matches("class=\"card\"").count(), 3);
}

#[test]
fn test_recommendations_are_captioned_with_year() {
    let mut se7en = movie(807, "Se7en");
    se7en.release_date = Some("1995-09-22".to_string());
    let mut undated = movie(808, "Untitled");
    undated.release_date = None;

    let html = render_detail(&fight_club(), &[se7en, undated]);
    assert!(html.contains("Se7en (1995)"));
    assert!(html.contains("Untitled (N/A)"));
}

#[test]
fn test_detail_recommendations_are_capped() {
    let html = render_detail(&fight_club(), &movies(20));
    assert_eq!(html.matches("class=\"card\"").count(), RECOMMENDATION_LIMIT);
}

#[test]
fn test_detail_without_recommendations() {
    let mut detail = fight_club();
    detail.genres.clear();
    detail.overview.clear();

    let html = render_detail(&detail, &[]);
    assert!(!html.contains("Recommended for You"));
    assert!(html.contains("No description available."));
    assert!(html.contains("<dt>Genres:</dt><dd>N/A</dd>"));
}

// =============================================================================
// Escaping
// =============================================================================

#[test]
fn test_titles_are_escaped() {
    let html = render_records(
        "<script>",
        &[movie(1, "<script>alert('x')</script>"), movie(2, "Tom & Jerry")],
    );

    assert!(!html.contains("<script>"));
    assert!(html.contains("<h2>&lt;script&gt;alert('x')&lt;/script&gt;</h2>"));
    assert!(html.contains("Tom &amp; Jerry (2010)"));
    assert!(html.contains("alt=\"Tom &amp; Jerry\""));
}

#[test]
fn test_non_ascii_titles_pass_through() {
    let html = render_records("Amélie", &[movie(194, "Le Fabuleux Destin d'Amélie Poulain")]);
    assert!(html.contains("<h2>Le Fabuleux Destin d'Amélie Poulain</h2>"));
    assert!(html.contains("<title>Amélie · Movie Explorer</title>"));
}
