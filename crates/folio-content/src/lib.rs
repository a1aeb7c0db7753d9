//! Frontmatter parsing, directory listing, and document access.
//!
//! This crate is the content resolution layer of Folio. Everything here
//! reads the content root fresh on every call; nothing is cached.
//!
//! # Modules
//!
//! - [`markdown`]: Markdown handling
//!   - [`markdown::frontmatter`]: `---`-delimited `key: value` metadata
//!   - [`markdown::render`]: HTML rendering with document link rewriting
//! - [`listing`]: Directory enumeration into routable entries
//! - [`accessor`]: Document reads combining resolution, parsing, and titles
//!
//! # Failure policy
//!
//! Frontmatter parsing and directory listing never fail: malformed
//! metadata yields an empty [`Frontmatter`] and unreadable directories
//! yield an empty listing. Missing documents are reported as `None`,
//! while documents that exist but cannot be read are errors.
//!
//! # Example
//!
//! ```rust
//! use folio_content::markdown::parse_frontmatter;
//!
//! let parsed = parse_frontmatter("---\ntitle: Hello\ndraft: true\n---\nBody");
//! assert_eq!(parsed.frontmatter().get_str("title"), Some("Hello"));
//! assert_eq!(parsed.body(), "Body");
//! ```

pub mod accessor;
pub mod listing;
pub mod markdown;

// Re-export commonly used types
pub use accessor::{ContentAccessor, ResolvedDocument};
pub use listing::{DirectoryEntry, DirectoryLister};
pub use markdown::{
    Frontmatter, FrontmatterResult, FrontmatterValue, parse_frontmatter, render_html,
    serialize_frontmatter, strip_frontmatter,
};
