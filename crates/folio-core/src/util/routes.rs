//! Routable paths handed to the HTTP layer.
//!
//! These are URL paths, not filesystem paths. Every segment is
//! percent-encoded.

/// Prefix shared by every content route.
pub const MARKDOWN_ROUTE: &str = "/markdown";

/// Route of a document, optionally nested one folder deep.
///
/// # Examples
///
/// ```
/// use folio_core::util::routes::document_route;
///
/// assert_eq!(document_route("intro", None), "/markdown/intro");
/// assert_eq!(
///     document_route("Getting Started", Some("guides")),
///     "/markdown/folder/guides/Getting%20Started"
/// );
/// ```
pub fn document_route(slug: &str, folder: Option<&str>) -> String {
    match folder {
        Some(folder) => format!("{}/{}", folder_route(folder), encode_segment(slug)),
        None => format!("{MARKDOWN_ROUTE}/{}", encode_segment(slug)),
    }
}

/// Route of a folder listing.
pub fn folder_route(folder: &str) -> String {
    format!("{MARKDOWN_ROUTE}/folder/{}", encode_segment(folder))
}

/// Percent-encode one URL path segment.
pub fn encode_segment(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folder_route_encodes() {
        assert_eq!(folder_route("a b/c"), "/markdown/folder/a%20b%2Fc");
    }

    #[test]
    fn test_document_route_encodes_unicode() {
        assert_eq!(document_route("ü", None), "/markdown/%C3%BC");
    }

    #[test]
    fn test_document_route_keeps_unreserved() {
        assert_eq!(document_route("a-b_c.d~e", None), "/markdown/a-b_c.d~e");
    }
}
