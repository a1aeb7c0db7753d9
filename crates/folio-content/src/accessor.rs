//! Document reads: resolution, frontmatter, and titles in one call.
//!
//! [`ContentAccessor::get_document`] distinguishes three outcomes:
//!
//! - `Ok(Some(doc))`: the document was read and parsed
//! - `Ok(None)`: no such document
//! - `Err(Error::Read { .. })`: the document is there but could not be
//!   read or is not valid UTF-8
//!
//! # Example
//!
//! ```no_run
//! use folio_content::ContentAccessor;
//! use folio_core::{DocumentId, DocumentResolver};
//!
//! # async fn example() -> folio_core::Result<()> {
//! let accessor = ContentAccessor::new(DocumentResolver::new("/content"));
//! match accessor.get_document(&DocumentId::new("intro")).await? {
//!     Some(doc) => println!("{}: {} bytes", doc.title, doc.content.len()),
//!     None => println!("not found"),
//! }
//! # Ok(())
//! # }
//! ```

use std::io::ErrorKind;

use folio_core::{DocumentId, DocumentResolver, Error, FolioConfig, Result, path_exists};
use serde::Serialize;

use crate::listing::{DirectoryEntry, DirectoryLister};
use crate::markdown::{Frontmatter, parse_frontmatter, render_html_with_extension};

/// A document read from the content root.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedDocument {
    /// Slug and folder the document was requested by.
    #[serde(flatten)]
    pub id: DocumentId,
    /// `title` from the frontmatter, or the slug with underscores as spaces.
    pub title: String,
    /// Body text with the frontmatter block removed.
    pub content: String,
    /// Parsed frontmatter, possibly empty.
    pub frontmatter: Frontmatter,
}

impl ResolvedDocument {
    /// Build a document from its raw text.
    pub fn from_raw(id: DocumentId, raw: &str) -> Self {
        let (frontmatter, body) = parse_frontmatter(raw).into_parts();
        let title = match frontmatter.get("title") {
            Some(title) if title.is_truthy() => title.to_string(),
            _ => id.display_title(),
        };
        Self {
            id,
            title,
            content: body.to_string(),
            frontmatter,
        }
    }

    /// The `date` frontmatter value, if set.
    pub fn date(&self) -> Option<String> {
        self.frontmatter.get("date").map(ToString::to_string)
    }

    /// Render the body to HTML, rewriting links to documents with `extension`.
    pub fn render_html(&self, extension: &str) -> String {
        render_html_with_extension(&self.content, extension)
    }
}

/// Reads documents and folder listings from the content root.
#[derive(Debug, Clone)]
pub struct ContentAccessor {
    resolver: DocumentResolver,
    lister: DirectoryLister,
}

impl ContentAccessor {
    /// Create an accessor over the resolver's content root.
    pub fn new(resolver: DocumentResolver) -> Self {
        let lister = DirectoryLister::new(resolver.clone());
        Self { resolver, lister }
    }

    /// Create an accessor from process configuration.
    pub fn from_config(config: &FolioConfig) -> Self {
        Self::new(DocumentResolver::from_config(config))
    }

    /// Get the underlying resolver.
    pub fn resolver(&self) -> &DocumentResolver {
        &self.resolver
    }

    /// Read a document.
    ///
    /// Invalid slugs or folder names fail with [`Error::InvalidPath`]
    /// before the filesystem is touched.
    pub async fn get_document(&self, id: &DocumentId) -> Result<Option<ResolvedDocument>> {
        let path = self.resolver.resolve(id)?;

        if !path_exists(&path).await {
            log::debug!("File not found: {}", path.display());
            return Ok(None);
        }

        let raw = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => raw,
            // Removed between the existence check and the read.
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("File vanished before read: {}", path.display());
                return Ok(None);
            }
            Err(e) => {
                log::error!("Error reading file: {}: {e}", path.display());
                return Err(Error::read(e, &path));
            }
        };

        Ok(Some(ResolvedDocument::from_raw(id.clone(), &raw)))
    }

    /// List the content root.
    ///
    /// Fails with [`Error::NotFound`] when the content root itself is
    /// missing; otherwise degrades to an empty listing.
    pub async fn list_root(&self) -> Result<Vec<DirectoryEntry>> {
        let root = self.resolver.content_root();
        if !path_exists(root).await {
            return Err(Error::not_found(root));
        }
        Ok(self.lister.list(root, None).await)
    }

    /// List the documents in one folder.
    ///
    /// Only documents are returned: folders nest one level deep, so a
    /// sub-directory of a folder has no route of its own.
    pub async fn list_folder(&self, folder: &str) -> Result<Vec<DirectoryEntry>> {
        let path = self.resolver.resolve_folder_path(folder)?;
        if !path_exists(&path).await {
            return Err(Error::not_found(&path));
        }
        let entries = self.lister.list(&path, Some(folder)).await;
        Ok(entries.into_iter().filter(|e| !e.is_directory).collect())
    }

    /// Render a document body using the configured document extension.
    pub fn render_html(&self, document: &ResolvedDocument) -> String {
        document.render_html(self.resolver.extension())
    }
}
