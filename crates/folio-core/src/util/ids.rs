//! Document identifiers and slug formatting.
//!
//! A slug is a document's file name without its extension. Slugs are
//! displayed with underscores turned into spaces, which is how the
//! scraped wiki content names its files.

use serde::{Deserialize, Serialize};

/// Identifies a document by slug and optional enclosing folder.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentId {
    /// File name without extension.
    pub slug: String,
    /// Folder directly under the content root, if any.
    pub folder: Option<String>,
}

impl DocumentId {
    /// A document directly under the content root.
    pub fn new(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            folder: None,
        }
    }

    /// A document inside `folder`.
    pub fn in_folder(slug: impl Into<String>, folder: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            folder: Some(folder.into()),
        }
    }

    /// Human-readable title derived from the slug.
    pub fn display_title(&self) -> String {
        format_slug(&self.slug)
    }

    /// Routable path for this document.
    pub fn route(&self) -> String {
        crate::util::routes::document_route(&self.slug, self.folder.as_deref())
    }
}

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.folder {
            Some(folder) => write!(f, "{folder}/{}", self.slug),
            None => write!(f, "{}", self.slug),
        }
    }
}

/// Turn a slug into display text by replacing underscores with spaces.
///
/// # Examples
///
/// ```
/// use folio_core::util::ids::format_slug;
///
/// assert_eq!(format_slug("Getting_Started"), "Getting Started");
/// assert_eq!(format_slug("intro"), "intro");
/// ```
pub fn format_slug(slug: &str) -> String {
    slug.replace('_', " ")
}
