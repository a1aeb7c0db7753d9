//! Directory enumeration into routable entries.
//!
//! [`DirectoryLister::list`] reads the immediate children of a directory
//! and turns them into [`DirectoryEntry`] values the HTTP layer can link
//! to. Sub-directories become folder routes, documents become document
//! routes with their extension stripped, and every other file is dropped.
//!
//! Folders nest one level deep, so a sub-directory found inside a folder
//! has no route and its entry carries no `path`.
//!
//! Directories come first, then documents. Within each group the
//! platform's enumeration order is kept as-is; no sorting is applied.
//!
//! Listing never fails: a missing or unreadable directory produces an
//! empty vector and a warning in the log.

use std::path::Path;

use folio_core::DocumentResolver;
use folio_core::util::routes::{document_route, folder_route};
use serde::Serialize;

/// One child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryEntry {
    /// File or directory name as it appears on disk.
    pub name: String,
    /// Whether this entry is a navigable folder.
    pub is_directory: bool,
    /// Routable URL path, not a filesystem path. `None` for a directory
    /// nested inside a folder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Document slug (name without extension); `None` for directories.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

impl DirectoryEntry {
    /// Entry for a sub-directory named `name` inside `folder`.
    ///
    /// Only top-level directories are routable.
    pub fn directory(name: String, folder: Option<&str>) -> Self {
        let path = match folder {
            Some(_) => None,
            None => Some(folder_route(&name)),
        };
        Self {
            name,
            is_directory: true,
            path,
            slug: None,
        }
    }

    /// Entry for a document file named `name` with slug `slug`.
    pub fn document(name: String, slug: String, folder: Option<&str>) -> Self {
        let path = Some(document_route(&slug, folder));
        Self {
            name,
            is_directory: false,
            path,
            slug: Some(slug),
        }
    }
}

/// Lists directories under the content root.
#[derive(Debug, Clone)]
pub struct DirectoryLister {
    resolver: DocumentResolver,
}

impl DirectoryLister {
    /// Create a lister that recognizes documents by the resolver's extension.
    pub fn new(resolver: DocumentResolver) -> Self {
        Self { resolver }
    }

    /// List the immediate children of `dir`.
    ///
    /// `folder` is the route-level folder `dir` corresponds to (`None` for
    /// the content root); it only affects the generated routes.
    pub async fn list(&self, dir: &Path, folder: Option<&str>) -> Vec<DirectoryEntry> {
        let mut read_dir = match tokio::fs::read_dir(dir).await {
            Ok(read_dir) => read_dir,
            Err(e) => {
                log::warn!("Error listing files in directory: {}: {e}", dir.display());
                return Vec::new();
            }
        };

        let mut directories = Vec::new();
        let mut documents = Vec::new();

        loop {
            let entry = match read_dir.next_entry().await {
                Ok(Some(entry)) => entry,
                Ok(None) => break,
                Err(e) => {
                    log::warn!("Error reading entry in {}: {e}", dir.display());
                    break;
                }
            };

            let Ok(name) = entry.file_name().into_string() else {
                log::warn!("Skipping non UTF-8 file name in {}", dir.display());
                continue;
            };

            if is_directory(&entry).await {
                directories.push(DirectoryEntry::directory(name, folder));
            } else if let Some(slug) = self.resolver.strip_extension(&name) {
                let slug = slug.to_string();
                documents.push(DirectoryEntry::document(name, slug, folder));
            }
        }

        log::debug!(
            "Listed {}: {} directories, {} documents",
            dir.display(),
            directories.len(),
            documents.len()
        );

        directories.extend(documents);
        directories
    }
}

/// Classify an entry, following symlinks.
async fn is_directory(entry: &tokio::fs::DirEntry) -> bool {
    match entry.file_type().await {
        Ok(ft) if ft.is_symlink() => tokio::fs::metadata(entry.path())
            .await
            .map(|m| m.is_dir())
            .unwrap_or(false),
        Ok(ft) => ft.is_dir(),
        Err(e) => {
            log::warn!("Could not stat {}: {e}", entry.path().display());
            false
        }
    }
}
