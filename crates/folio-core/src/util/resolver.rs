//! Content-root path resolution.
//!
//! `DocumentResolver` maps a slug (and optional folder) to a file under a
//! fixed content root. Slugs and folder names are single path segments:
//! anything that could climb out of the root is rejected before a path is
//! ever built.
//!
//! # Example
//!
//! ```
//! use folio_core::util::resolver::DocumentResolver;
//! use std::path::Path;
//!
//! let resolver = DocumentResolver::new("/content");
//! assert_eq!(
//!     resolver.resolve_document_path("intro", None).unwrap(),
//!     Path::new("/content/intro.md")
//! );
//! assert!(resolver.resolve_document_path("../etc/passwd", None).is_err());
//! ```

use std::path::{Path, PathBuf};

use crate::config::{DEFAULT_EXTENSION, FolioConfig};
use crate::util::ids::DocumentId;
use crate::{Error, Result};

/// Resolves document identifiers against a content root.
#[derive(Debug, Clone)]
pub struct DocumentResolver {
    /// Directory everything is resolved under
    content_root: PathBuf,
    /// Document extension without the leading dot (e.g., "md")
    extension: String,
}

impl DocumentResolver {
    /// Create a resolver for `content_root` using the `.md` extension.
    pub fn new(content_root: impl Into<PathBuf>) -> Self {
        Self {
            content_root: content_root.into(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }

    /// Create a resolver from process configuration.
    pub fn from_config(config: &FolioConfig) -> Self {
        Self::new(config.content_root.clone()).with_extension(&config.document_extension)
    }

    /// Set the document extension. A leading dot is accepted and dropped.
    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = extension.trim_start_matches('.').to_string();
        self
    }

    /// Get the content root.
    pub fn content_root(&self) -> &Path {
        &self.content_root
    }

    /// Get the document extension (without the dot).
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// File name for a slug, e.g. `intro` → `intro.md`.
    pub fn file_name(&self, slug: &str) -> String {
        format!("{slug}.{}", self.extension)
    }

    /// Strip the document extension from a file name.
    ///
    /// Returns `None` when the name does not carry the extension, which is
    /// how non-document files are recognized.
    pub fn strip_extension<'a>(&self, file_name: &'a str) -> Option<&'a str> {
        file_name
            .strip_suffix(self.extension.as_str())
            .and_then(|rest| rest.strip_suffix('.'))
    }

    /// Resolve a slug and optional folder to a document path.
    ///
    /// The result is `root/[folder/]slug.md`. Existence is not checked.
    pub fn resolve_document_path(&self, slug: &str, folder: Option<&str>) -> Result<PathBuf> {
        validate_segment(slug)?;
        let mut path = self.content_root.clone();
        if let Some(folder) = folder {
            validate_segment(folder)?;
            path.push(folder);
        }
        path.push(self.file_name(slug));
        log::debug!("Resolved document {slug:?} (folder {folder:?}) to {}", path.display());
        Ok(path)
    }

    /// Resolve a [`DocumentId`] to a document path.
    pub fn resolve(&self, id: &DocumentId) -> Result<PathBuf> {
        self.resolve_document_path(&id.slug, id.folder.as_deref())
    }

    /// Resolve a folder name to a directory path under the content root.
    pub fn resolve_folder_path(&self, folder: &str) -> Result<PathBuf> {
        validate_segment(folder)?;
        Ok(self.content_root.join(folder))
    }
}

/// True if `path` exists at call time.
///
/// The answer can be stale by the time the caller acts on it; readers
/// must still handle a missing file.
pub async fn path_exists(path: &Path) -> bool {
    tokio::fs::try_exists(path).await.unwrap_or_else(|e| {
        log::warn!("Error checking if path exists: {}: {e}", path.display());
        false
    })
}

/// Check that a slug or folder name is a single, non-special path segment.
fn validate_segment(segment: &str) -> Result<()> {
    if segment.is_empty() {
        return Err(Error::invalid_path(segment, "must not be empty"));
    }
    if segment == "." || segment == ".." {
        return Err(Error::invalid_path(
            segment,
            "must not reference the current or parent directory",
        ));
    }
    if segment.contains(['/', '\\']) {
        return Err(Error::invalid_path(segment, "must not contain path separators"));
    }
    if segment.contains('\0') {
        return Err(Error::invalid_path(segment, "must not contain NUL bytes"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ------------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------------

    #[test]
    fn test_new_defaults_to_md() {
        let resolver = DocumentResolver::new("/content");
        assert_eq!(resolver.content_root(), Path::new("/content"));
        assert_eq!(resolver.extension(), "md");
    }

    #[test]
    fn test_with_extension_strips_dot() {
        let resolver = DocumentResolver::new("/content").with_extension(".markdown");
        assert_eq!(resolver.extension(), "markdown");
        assert_eq!(resolver.file_name("a"), "a.markdown");
    }

    #[test]
    fn test_from_config() {
        let config = FolioConfig {
            content_root: PathBuf::from("/srv"),
            ..FolioConfig::default()
        };
        let resolver = DocumentResolver::from_config(&config);
        assert_eq!(resolver.content_root(), Path::new("/srv"));
    }

    // ------------------------------------------------------------------------
    // Resolution
    // ------------------------------------------------------------------------

    #[test]
    fn test_resolve_root_document() {
        let resolver = DocumentResolver::new("/content");
        let path = resolver.resolve_document_path("intro", None).unwrap();
        assert_eq!(path, PathBuf::from("/content/intro.md"));
    }

    #[test]
    fn test_resolve_folder_document() {
        let resolver = DocumentResolver::new("/content");
        let path = resolver.resolve(&DocumentId::in_folder("setup", "guides")).unwrap();
        assert_eq!(path, PathBuf::from("/content/guides/setup.md"));
    }

    #[test]
    fn test_resolve_rejects_traversal() {
        let resolver = DocumentResolver::new("/content");
        for bad in ["..", ".", "", "a/b", "..\\x", "/etc/passwd"] {
            let err = resolver.resolve_document_path(bad, None).unwrap_err();
            assert!(matches!(err, Error::InvalidPath { .. }), "accepted {bad:?}");
        }
        assert!(resolver.resolve_document_path("ok", Some("..")).is_err());
        assert!(resolver.resolve_folder_path("../up").is_err());
    }

    #[test]
    fn test_resolve_allows_dots_inside_names() {
        let resolver = DocumentResolver::new("/content");
        let path = resolver.resolve_document_path("v1.2..notes", None).unwrap();
        assert_eq!(path, PathBuf::from("/content/v1.2..notes.md"));
    }

    #[test]
    fn test_resolve_folder_path() {
        let resolver = DocumentResolver::new("/content");
        assert_eq!(
            resolver.resolve_folder_path("guides").unwrap(),
            PathBuf::from("/content/guides")
        );
    }

    // ------------------------------------------------------------------------
    // Extension handling
    // ------------------------------------------------------------------------

    #[test]
    fn test_strip_extension() {
        let resolver = DocumentResolver::new("/content");
        assert_eq!(resolver.strip_extension("intro.md"), Some("intro"));
        assert_eq!(resolver.strip_extension("archive.tar.md"), Some("archive.tar"));
        assert_eq!(resolver.strip_extension("notes.txt"), None);
        assert_eq!(resolver.strip_extension("readmemd"), None);
        assert_eq!(resolver.strip_extension(".md"), Some(""));
    }

    // ------------------------------------------------------------------------
    // Existence
    // ------------------------------------------------------------------------

    #[tokio::test]
    async fn test_exists_matches_filesystem() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join("present.md"), "# Hi").unwrap();
        std::fs::create_dir(dir.path().join("guides")).unwrap();
        std::fs::write(dir.path().join("guides/setup.md"), "").unwrap();

        let resolver = DocumentResolver::new(dir.path());
        let present = resolver.resolve_document_path("present", None).unwrap();
        let absent = resolver.resolve_document_path("absent", None).unwrap();
        let nested = resolver.resolve_document_path("setup", Some("guides")).unwrap();
        let wrong_folder = resolver.resolve_document_path("present", Some("guides")).unwrap();

        assert!(path_exists(&present).await);
        assert!(!path_exists(&absent).await);
        assert!(path_exists(&nested).await);
        assert!(!path_exists(&wrong_folder).await);
    }

    proptest! {
        #[test]
        fn prop_exists_iff_file_present(slug in "[A-Za-z0-9_ -]{1,24}", create in any::<bool>()) {
            let dir = tempfile::TempDir::new().unwrap();
            if create {
                std::fs::write(dir.path().join(format!("{slug}.md")), "body").unwrap();
            }
            let resolver = DocumentResolver::new(dir.path());
            let path = resolver.resolve_document_path(&slug, None).unwrap();
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();
            prop_assert_eq!(runtime.block_on(path_exists(&path)), create);
        }
    }
}
