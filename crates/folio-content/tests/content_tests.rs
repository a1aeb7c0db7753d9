//! End-to-end content resolution against a temporary content root.

#![allow(clippy::unwrap_used)]

use folio_content::{ContentAccessor, Frontmatter, FrontmatterValue};
use folio_core::{DocumentId, DocumentResolver};
use tempfile::TempDir;

fn content_root(files: &[(&str, &str)]) -> (TempDir, ContentAccessor) {
    let dir = TempDir::new().unwrap();
    for (name, content) in files {
        let path = dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }
    let accessor = ContentAccessor::new(DocumentResolver::new(dir.path()));
    (dir, accessor)
}

#[tokio::test]
async fn test_document_without_frontmatter() {
    let (_dir, accessor) = content_root(&[("intro.md", "# Hi")]);

    let doc = accessor
        .get_document(&DocumentId::new("intro"))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(doc.title, "intro");
    assert_eq!(doc.content, "# Hi");
    assert_eq!(doc.frontmatter, Frontmatter::new());
}

#[tokio::test]
async fn test_document_with_frontmatter() {
    let (_dir, accessor) = content_root(&[(
        "guide.md",
        "---\ntitle: Getting Started\ndate: 2024-01-05\n---\nWelcome.",
    )]);

    let doc = accessor
        .get_document(&DocumentId::new("guide"))
        .await
        .unwrap()
        .unwrap();

    let expected: Frontmatter = [
        (
            "title".to_string(),
            FrontmatterValue::String("Getting Started".to_string()),
        ),
        (
            "date".to_string(),
            FrontmatterValue::String("2024-01-05".to_string()),
        ),
    ]
    .into_iter()
    .collect();

    assert_eq!(doc.title, "Getting Started");
    assert_eq!(doc.content, "Welcome.");
    assert_eq!(doc.frontmatter, expected);
}

#[tokio::test]
async fn test_missing_document_is_none() {
    let (_dir, accessor) = content_root(&[("intro.md", "# Hi")]);

    let doc = accessor.get_document(&DocumentId::new("missing")).await.unwrap();
    assert!(doc.is_none());
}

#[tokio::test]
async fn test_root_listing_and_document_routes_agree() {
    let (_dir, accessor) = content_root(&[
        ("Arch_Linux.md", "---\ntitle: Arch\n---\nBody"),
        ("guides/Install.md", "Steps"),
        ("notes.txt", "ignored"),
    ]);

    let entries = accessor.list_root().await.unwrap();
    let paths: Vec<&str> = entries.iter().filter_map(|e| e.path.as_deref()).collect();
    assert_eq!(paths, vec!["/markdown/folder/guides", "/markdown/Arch_Linux"]);

    let folder = accessor.list_folder("guides").await.unwrap();
    assert_eq!(folder.len(), 1);
    let slug = folder[0].slug.clone().unwrap();
    let doc = accessor
        .get_document(&DocumentId::in_folder(slug, "guides"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(doc.content, "Steps");
    assert_eq!(Some(doc.id.route()), folder[0].path);
}

#[tokio::test]
async fn test_rendered_body_links_to_routes() {
    let (_dir, accessor) = content_root(&[("a.md", "See [b](b.md) and [web](https://x.org/).")]);

    let doc = accessor.get_document(&DocumentId::new("a")).await.unwrap().unwrap();
    let html = accessor.render_html(&doc);

    assert!(html.contains("href=\"b\""));
    assert!(html.contains("href=\"https://x.org/\""));
}
