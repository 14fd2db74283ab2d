//! Export post summaries as JSON for the index view

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::content::PostCatalog;
use crate::Folio;

/// Write the summaries to `output`, or to stdout when `None`
pub fn run(folio: &Folio, output: Option<&Path>) -> Result<()> {
    let catalog = folio.catalog()?;
    let json = to_json(&catalog)?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, json)?;
            tracing::info!("Exported {} posts to {:?}", catalog.len(), path);
        }
        None => println!("{}", json),
    }

    Ok(())
}

/// Summaries as a pretty-printed JSON array, newest first
pub fn to_json(catalog: &PostCatalog) -> Result<String> {
    Ok(serde_json::to_string_pretty(catalog.summaries())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;

    #[test]
    fn test_to_json() {
        let catalog = PostCatalog::build([
            ("a.md", "---\ntitle: A\ndate: 2024-01-01\n---\nBody A"),
            ("b.md", "---\ntitle: B\ndate: 2025-01-01\n---\nBody B"),
        ]);

        let value: serde_json::Value = serde_json::from_str(&to_json(&catalog).unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!([
                { "slug": "b", "title": "B", "date": "2025-01-01" },
                { "slug": "a", "title": "A", "date": "2024-01-01" },
            ])
        );
    }

    #[test]
    fn test_export_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let folio = Folio::with_config(dir.path(), SiteConfig::default());
        fs::create_dir_all(&folio.content_dir).unwrap();
        fs::write(
            folio.content_dir.join("hello.md"),
            "---\ntitle: Hello\n---\nHi",
        )
        .unwrap();

        let output = dir.path().join("public").join("posts.json");
        run(&folio, Some(output.as_path())).unwrap();

        let written = fs::read_to_string(&output).unwrap();
        assert!(written.contains("\"slug\": \"hello\""));
        assert!(!written.contains("Hi\""));
    }
}
