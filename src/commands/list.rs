//! List site content

use anyhow::Result;
use std::fmt::Write;

use crate::content::{PostCatalog, PostSummary};
use crate::helpers::format_date;
use crate::Folio;

/// List site content by type
pub fn run(folio: &Folio, content_type: &str, category: Option<&str>) -> Result<()> {
    let catalog = folio.catalog()?;
    tracing::info!("Listing {} from {:?}", content_type, folio.content_dir);
    print!(
        "{}",
        render(&catalog, &folio.config.date_format, content_type, category)?
    );
    Ok(())
}

/// Format the listing for `content_type`, optionally filtered to one category
pub fn render(
    catalog: &PostCatalog,
    date_format: &str,
    content_type: &str,
    category: Option<&str>,
) -> Result<String> {
    let mut out = String::new();

    match content_type {
        "post" | "posts" => {
            let summaries: Vec<&PostSummary> = match category {
                Some(category) => catalog.by_category(category),
                None => catalog.summaries().iter().collect(),
            };
            writeln!(out, "Posts ({}):", summaries.len())?;
            for summary in summaries {
                let date = match summary.date() {
                    Some(date) => format_date(&date, date_format)?,
                    None => "undated".to_string(),
                };
                writeln!(
                    out,
                    "  {} - {} [{}]",
                    date,
                    summary.title().unwrap_or("Untitled"),
                    summary.slug
                )?;
            }
        }
        "category" | "categories" => {
            let categories = catalog.categories();
            writeln!(out, "Categories ({}):", categories.len())?;
            for (name, count) in categories {
                writeln!(out, "  {} ({})", name, count)?;
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, category",
                content_type
            );
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> PostCatalog {
        PostCatalog::build([
            (
                "older.md",
                "---\ntitle: Older\ndate: 2024-01-01\ncategory: Rust\n---\n",
            ),
            ("draft.md", "---\ntitle: Draft\n---\n"),
            (
                "newer.md",
                "---\ntitle: Newer\ndate: 2025-11-02\ncategory: Design\n---\n",
            ),
        ])
    }

    #[test]
    fn test_render_posts() {
        let out = render(&catalog(), "YYYY-MM-DD", "post", None).unwrap();
        assert_eq!(
            out,
            "Posts (3):\n  2025-11-02 - Newer [newer]\n  2024-01-01 - Older [older]\n  undated - Draft [draft]\n"
        );
    }

    #[test]
    fn test_render_posts_in_category() {
        let out = render(&catalog(), "YYYY/MM/DD", "posts", Some("Rust")).unwrap();
        assert_eq!(out, "Posts (1):\n  2024/01/01 - Older [older]\n");
    }

    #[test]
    fn test_render_posts_with_percent_in_format() {
        let out = render(&catalog(), "DD MMM YYYY 100%", "post", Some("Design")).unwrap();
        assert_eq!(out, "Posts (1):\n  02 Nov 2025 100% - Newer [newer]\n");
    }

    #[test]
    fn test_render_categories() {
        let out = render(&catalog(), "YYYY-MM-DD", "category", None).unwrap();
        assert_eq!(out, "Categories (2):\n  Design (1)\n  Rust (1)\n");
    }

    #[test]
    fn test_unknown_type() {
        assert!(render(&catalog(), "YYYY-MM-DD", "tags", None).is_err());
    }
}
