//! Create a new post

use anyhow::Result;
use chrono::{Local, NaiveDateTime};
use std::fs;
use std::path::PathBuf;

use crate::content::{FrontMatter, ParsedDocument};
use crate::Folio;

/// Create a new post in the content directory and return its path
///
/// `name` overrides the file stem; otherwise it comes from the
/// `new_post_name` pattern with the slugified title.
pub fn create_post(folio: &Folio, title: &str, name: Option<&str>) -> Result<PathBuf> {
    let now = Local::now().naive_local();

    let filename = match name {
        Some(name) => format!("{}.md", name),
        None => expand_post_name(&folio.config.new_post_name, title, &now),
    };

    let file_path = folio.content_dir.join(&filename);
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&file_path, scaffold(title, &now).to_string())?;

    tracing::info!("Created post {:?}", file_path);
    Ok(file_path)
}

/// Run the new command
pub fn run(folio: &Folio, title: &str, name: Option<&str>) -> Result<()> {
    let path = create_post(folio, title, name)?;
    println!("Created: {:?}", path);
    Ok(())
}

/// Fill in the `:title`, `:year`, `:month` and `:day` placeholders
fn expand_post_name(pattern: &str, title: &str, now: &NaiveDateTime) -> String {
    pattern
        .replace(":title", &slug::slugify(title))
        .replace(":year", &now.format("%Y").to_string())
        .replace(":month", &now.format("%m").to_string())
        .replace(":day", &now.format("%d").to_string())
}

fn scaffold(title: &str, now: &NaiveDateTime) -> ParsedDocument {
    let mut metadata = FrontMatter::new();
    metadata.insert("title", title);
    metadata.insert("date", now.format("%Y-%m-%d").to_string());
    metadata.insert("excerpt", "");

    ParsedDocument {
        metadata,
        body: String::new(),
    }
}
