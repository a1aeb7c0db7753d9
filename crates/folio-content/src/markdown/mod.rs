//! Markdown frontmatter parsing and rendering.
//!
//! - [`frontmatter`]: Minimal `key: value` frontmatter extraction
//! - [`render`]: HTML rendering via `pulldown-cmark`

pub mod frontmatter;
pub mod render;

// Re-export key types and functions
pub use frontmatter::{
    Frontmatter, FrontmatterResult, FrontmatterValue, parse_frontmatter, serialize_frontmatter,
    strip_frontmatter,
};
pub use render::{render_html, render_html_with_extension, rewrite_document_link};
