//! folio: the content engine behind a markdown-authored portfolio blog
//!
//! Posts are markdown files with a `---` fenced front-matter block. This
//! crate parses them into metadata and body, and assembles a date-sorted,
//! read-only [`content::PostCatalog`] that index and detail views query.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;

use anyhow::Result;
use std::path::{Path, PathBuf};

use content::{DirectorySource, PostCatalog};

/// The main application: a site root and its configuration
#[derive(Debug, Clone)]
pub struct Folio {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Directory holding the blog posts
    pub content_dir: PathBuf,
}

impl Folio {
    /// Create a new instance from a site root, reading `_config.yml` if present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create an instance with an explicit configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let content_dir = base_dir.join(&config.content_dir);

        Self {
            config,
            base_dir,
            content_dir,
        }
    }

    /// The document source for the content directory
    pub fn source(&self) -> DirectorySource {
        DirectorySource::with_extensions(&self.content_dir, self.config.extensions.iter().cloned())
    }

    /// Read every post and build the catalog
    pub fn catalog(&self) -> Result<PostCatalog> {
        Ok(PostCatalog::from_source(&self.source())?)
    }

    /// Create a new post, returning its path
    pub fn new_post(&self, title: &str) -> Result<PathBuf> {
        commands::new::create_post(self, title, None)
    }
}
