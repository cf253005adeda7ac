//! Dark streaming theme for Movie Explorer
//!
//! Color palette and the stylesheet embedded in every page.

use std::fmt;

/// An sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Netflix-style color palette
pub struct Theme;

impl Theme {
    // ═══════════════════════════════════════════════════════════════════════
    // CORE PALETTE
    // ═══════════════════════════════════════════════════════════════════════

    /// Background: #141414 (near black)
    pub const BACKGROUND: Rgb = Rgb(0x14, 0x14, 0x14);

    /// Primary: #e50914 (brand red)
    pub const PRIMARY: Rgb = Rgb(0xe5, 0x09, 0x14);

    /// Accent: #f5c518 (rating star)
    pub const ACCENT: Rgb = Rgb(0xf5, 0xc5, 0x18);

    /// Text: #e5e5e5 (soft white)
    pub const TEXT: Rgb = Rgb(0xe5, 0xe5, 0xe5);

    /// Dim: #999999 (captions, metadata)
    pub const DIM: Rgb = Rgb(0x99, 0x99, 0x99);

    /// Warning: #ffaa00 (orange)
    pub const WARNING: Rgb = Rgb(0xff, 0xaa, 0x00);

    /// Error: #ff4d4f (red)
    pub const ERROR: Rgb = Rgb(0xff, 0x4d, 0x4f);

    // ═══════════════════════════════════════════════════════════════════════
    // DERIVED COLORS
    // ═══════════════════════════════════════════════════════════════════════

    /// Cards and input fields
    pub const BACKGROUND_LIGHT: Rgb = Rgb(0x23, 0x23, 0x23);

    /// Card hover state
    pub const BACKGROUND_HOVER: Rgb = Rgb(0x33, 0x33, 0x33);

    /// Poster thumbnail height in pixels
    pub const POSTER_HEIGHT: u32 = 450;

    /// Every palette entry with its CSS variable name
    pub fn palette() -> [(&'static str, Rgb); 9] {
        [
            ("bg", Self::BACKGROUND),
            ("bg-light", Self::BACKGROUND_LIGHT),
            ("bg-hover", Self::BACKGROUND_HOVER),
            ("primary", Self::PRIMARY),
            ("accent", Self::ACCENT),
            ("text", Self::TEXT),
            ("dim", Self::DIM),
            ("warning", Self::WARNING),
            ("error", Self::ERROR),
        ]
    }

    /// Stylesheet embedded in the `<head>` of every page
    pub fn stylesheet() -> String {
        let mut css = String::from(":root {\n");
        for (name, color) in Self::palette() {
            css.push_str(&format!("  --{}: {};\n", name, color));
        }
        css.push_str("}\n");
        css.push_str(&format!(
            ".card .poster {{ height: {}px; }}\n",
            Self::POSTER_HEIGHT
        ));
        css.push_str(BASE_CSS);
        css
    }
}

const BASE_CSS: &str = r#"* { box-sizing: border-box; }
body { margin: 0; background: var(--bg); color: var(--text); font-family: "Helvetica Neue", Helvetica, Arial, sans-serif; }
a { color: inherit; text-decoration: none; }
header.topbar { display: flex; align-items: center; gap: 2rem; padding: 1rem 3rem; background: linear-gradient(180deg, rgba(0,0,0,0.8), transparent); }
header.topbar .brand { color: var(--primary); font-size: 1.8rem; font-weight: 800; letter-spacing: 0.05em; }
header.topbar nav a { margin-right: 1.2rem; color: var(--dim); }
header.topbar nav a:hover { color: var(--text); }
form.search { margin-left: auto; }
form.search input { background: var(--bg-light); color: var(--text); border: 1px solid var(--dim); border-radius: 4px; padding: 0.5rem 0.8rem; width: 18rem; }
main { padding: 0 3rem 3rem; }
h1.heading { font-size: 1.6rem; margin: 1.5rem 0 1rem; }
.notice { padding: 0.9rem 1.2rem; border-radius: 6px; margin: 1rem 0; background: var(--bg-light); border-left: 4px solid var(--dim); }
.notice.warning { border-color: var(--warning); }
.notice.error { border-color: var(--error); color: var(--error); }
.hero { position: relative; min-height: 420px; display: flex; align-items: flex-end; padding: 3rem; margin: 0 -3rem 2rem; background-color: var(--bg-light); background-size: cover; background-position: center top; }
.hero::after { content: ""; position: absolute; inset: 0; background: linear-gradient(90deg, rgba(20,20,20,0.95) 30%, rgba(20,20,20,0.2)); }
.hero .hero-body { position: relative; z-index: 1; max-width: 40rem; }
.hero h2 { font-size: 3rem; margin: 0 0 0.5rem; }
.hero .meta { color: var(--dim); margin-bottom: 1rem; }
.hero .overview { line-height: 1.5; }
.button { display: inline-block; margin-top: 1rem; padding: 0.6rem 1.6rem; border-radius: 4px; background: var(--text); color: var(--bg); font-weight: 700; }
.button.secondary { background: var(--bg-hover); color: var(--text); }
.rating { color: var(--accent); }
section.row { margin-bottom: 2rem; }
section.row h3 { margin: 0 0 0.6rem; }
.row-track { display: flex; gap: 0.6rem; overflow-x: auto; padding-bottom: 0.6rem; }
.card { flex: 0 0 auto; width: 200px; border-radius: 10px; overflow: hidden; background: var(--bg-light); transition: transform 0.2s; }
.card:hover { transform: scale(1.05); background: var(--bg-hover); }
.card .poster { display: flex; align-items: center; justify-content: center; overflow: hidden; }
.card .poster img { width: 100%; height: 100%; object-fit: cover; border-radius: 10px; }
.card .caption { padding: 0.4rem 0.5rem; font-size: 0.85rem; color: var(--dim); }
.card .caption .title { color: var(--text); display: block; }
.detail { display: flex; gap: 2rem; margin: 2rem 0; }
.detail img.poster { width: 300px; border-radius: 10px; object-fit: cover; }
.detail dl { display: grid; grid-template-columns: max-content 1fr; gap: 0.4rem 1rem; }
.detail dt { font-weight: 700; }
.detail .tagline { font-style: italic; color: var(--dim); }
.empty { color: var(--dim); padding: 3rem 0; text-align: center; }
footer { color: var(--dim); font-size: 0.8rem; padding: 2rem 3rem; }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_format() {
        assert_eq!(Theme::BACKGROUND.to_string(), "#141414");
        assert_eq!(Theme::PRIMARY.to_string(), "#e50914");
        assert_eq!(Rgb(0, 0xab, 0xff).to_string(), "#00abff");
    }

    #[test]
    fn test_stylesheet_declares_palette() {
        let css = Theme::stylesheet();
        assert!(css.contains("--bg: #141414;"));
        assert!(css.contains("--primary: #e50914;"));
        assert!(css.contains("height: 450px"));
        assert!(css.contains(".row-track"));
    }
}
