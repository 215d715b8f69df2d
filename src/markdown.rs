//! Markdown-to-HTML rendering for entry bodies and excerpts
//!
//! A pure transform with no storage side effects. Entry persistence calls
//! [`render`] from its save hook to keep the stored `*_html` columns in sync
//! with their markdown sources.

use markdown::{to_html_with_options, Options};

/// Render markdown source to HTML.
///
/// Malformed input is never rejected; anything the parser refuses is passed
/// through verbatim. Empty input renders to an empty string.
pub fn render(text: &str) -> String {
    to_html_with_options(text, &Options::gfm()).unwrap_or_else(|_| text.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_paragraph() {
        let html = render("Night bus to the venue");
        assert!(html.starts_with("<p>"));
        assert!(html.contains("Night bus to the venue"));
    }

    #[test]
    fn test_render_emphasis() {
        let html = render("a **loud** chorus");
        assert!(html.contains("<strong>loud</strong>"));
    }

    #[test]
    fn test_render_empty_input() {
        assert_eq!(render(""), "");
    }
}
