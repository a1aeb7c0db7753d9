//! HTML rendering for document bodies.
//!
//! Rendering itself is delegated to `pulldown-cmark`. The only thing done
//! here is link rewriting: a relative link to another document
//! (`Other_Page.md`, `guides/setup.md#install`) loses its extension so it
//! points at the document's route instead of the raw file. External links
//! are left alone.
//!
//! # Example
//!
//! ```rust
//! use folio_content::markdown::render_html;
//!
//! let html = render_html("See [pacman](pacman.md).");
//! assert_eq!(html, "<p>See <a href=\"pacman\">pacman</a>.</p>\n");
//! ```

use folio_core::config::DEFAULT_EXTENSION;
use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, html};

/// Render markdown to HTML, rewriting links to `.md` documents.
pub fn render_html(markdown: &str) -> String {
    render_html_with_extension(markdown, DEFAULT_EXTENSION)
}

/// Render markdown to HTML, rewriting links to documents with `extension`.
pub fn render_html_with_extension(markdown: &str, extension: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_FOOTNOTES;

    let events = Parser::new_ext(markdown, options).map(|event| match event {
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Link {
            link_type,
            dest_url: rewrite_document_link(dest_url, extension),
            title,
            id,
        }),
        other => other,
    });

    let mut out = String::with_capacity(markdown.len() + markdown.len() / 2);
    html::push_html(&mut out, events);
    out
}

/// Strip the document extension from a relative link target.
///
/// A `#fragment` is preserved. Links with a scheme (`https:`, `mailto:`)
/// and protocol-relative links (`//host/...`) are returned unchanged.
///
/// ```rust
/// use folio_content::markdown::rewrite_document_link;
///
/// assert_eq!(&*rewrite_document_link("Systemd.md".into(), "md"), "Systemd");
/// assert_eq!(&*rewrite_document_link("a.md#Usage".into(), "md"), "a#Usage");
/// assert_eq!(
///     &*rewrite_document_link("https://wiki.archlinux.org/x.md".into(), "md"),
///     "https://wiki.archlinux.org/x.md"
/// );
/// ```
pub fn rewrite_document_link<'a>(dest: CowStr<'a>, extension: &str) -> CowStr<'a> {
    if is_external(&dest) {
        return dest;
    }

    let rewritten = {
        let (path, fragment) = match dest.split_once('#') {
            Some((path, fragment)) => (path, Some(fragment)),
            None => (&*dest, None),
        };
        path.strip_suffix(extension)
            .and_then(|rest| rest.strip_suffix('.'))
            .map(|stem| match fragment {
                Some(fragment) => format!("{stem}#{fragment}"),
                None => stem.to_string(),
            })
    };

    match rewritten {
        Some(link) => CowStr::from(link),
        None => dest,
    }
}

fn is_external(dest: &str) -> bool {
    if dest.starts_with("//") {
        return true;
    }
    // A scheme is letters/digits/+/-/. before the first ':' and before any '/'.
    match dest.find(':') {
        Some(colon) => {
            let scheme = &dest[..colon];
            !scheme.is_empty()
                && scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_heading() {
        assert_eq!(render_html("# Hi"), "<h1>Hi</h1>\n");
    }

    #[test]
    fn test_render_rewrites_relative_link() {
        let html = render_html("[Install](Installation_guide.md)");
        assert!(html.contains("href=\"Installation_guide\""), "{html}");
    }

    #[test]
    fn test_render_keeps_external_link() {
        let html = render_html("[Arch](https://archlinux.org/page.md)");
        assert!(html.contains("href=\"https://archlinux.org/page.md\""), "{html}");
    }

    #[test]
    fn test_render_keeps_non_document_link() {
        let html = render_html("[Image](diagram.png)");
        assert!(html.contains("href=\"diagram.png\""), "{html}");
    }

    #[test]
    fn test_render_custom_extension() {
        let html = render_html_with_extension("[Next](next.markdown)", "markdown");
        assert!(html.contains("href=\"next\""), "{html}");
    }

    #[test]
    fn test_render_table() {
        let html = render_html("| a | b |\n|---|---|\n| 1 | 2 |\n");
        assert!(html.contains("<table>"), "{html}");
    }

    #[test]
    fn test_rewrite_requires_dot_before_extension() {
        assert_eq!(&*rewrite_document_link("readmemd".into(), "md"), "readmemd");
    }

    #[test]
    fn test_rewrite_keeps_mailto() {
        assert_eq!(
            &*rewrite_document_link("mailto:docs.md".into(), "md"),
            "mailto:docs.md"
        );
    }

    #[test]
    fn test_rewrite_protocol_relative() {
        assert_eq!(&*rewrite_document_link("//cdn/x.md".into(), "md"), "//cdn/x.md");
    }

    #[test]
    fn test_rewrite_fragment_only() {
        assert_eq!(&*rewrite_document_link("#section".into(), "md"), "#section");
    }

    #[test]
    fn test_is_external() {
        assert!(is_external("https://example.com"));
        assert!(is_external("mailto:a@b.c"));
        assert!(!is_external("relative/path.md"));
        assert!(!is_external("weird path:with colon.md"));
    }
}
