//! Show a single post

use anyhow::Result;
use std::fmt::Write;

use crate::content::{MarkdownRenderer, PostCatalog};
use crate::helpers::format_date;
use crate::Folio;

/// Print one post by slug, as markdown or rendered HTML
pub fn run(folio: &Folio, slug: &str, html: bool) -> Result<()> {
    let catalog = folio.catalog()?;
    let renderer = if html {
        Some(MarkdownRenderer::with_config(&folio.config.highlight)?)
    } else {
        None
    };

    print!(
        "{}",
        render(&catalog, slug, &folio.config.date_format, renderer.as_ref())?
    );
    Ok(())
}

/// Format a post with its metadata and navigation links
///
/// An unknown slug is reported as an error so the CLI exits non-zero.
pub fn render(
    catalog: &PostCatalog,
    slug: &str,
    date_format: &str,
    renderer: Option<&MarkdownRenderer>,
) -> Result<String> {
    let Some(post) = catalog.get_by_slug(slug) else {
        anyhow::bail!("Post not found: {}", slug);
    };

    let mut out = String::new();
    writeln!(out, "{}", post.title().unwrap_or("Untitled"))?;
    if let Some(date) = post.date() {
        writeln!(out, "{}", format_date(&date, date_format)?)?;
    }
    writeln!(out, "slug: {}", post.slug)?;
    if let Some(excerpt) = post.excerpt() {
        writeln!(out, "excerpt: {}", excerpt)?;
    }
    for (key, value) in post.metadata.iter() {
        if !matches!(key, "title" | "date" | "slug" | "content" | "excerpt") {
            writeln!(out, "{}: {}", key, value)?;
        }
    }
    writeln!(out)?;

    match renderer {
        Some(renderer) => out.push_str(&renderer.render(&post.content)?),
        None => out.push_str(&post.content),
    }
    if !out.ends_with('\n') {
        out.push('\n');
    }

    if let Some((newer, older)) = catalog.adjacent(slug) {
        if newer.is_some() || older.is_some() {
            writeln!(out)?;
        }
        if let Some(newer) = newer {
            writeln!(out, "Newer: {}", newer.slug)?;
        }
        if let Some(older) = older {
            writeln!(out, "Older: {}", older.slug)?;
        }
    }

    Ok(out)
}
