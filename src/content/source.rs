//! Document sources - supply raw markdown documents to the catalog

use indexmap::IndexMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// Errors raised while enumerating or reading documents
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Failed to read document {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A document identifier paired with its raw text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDocument {
    /// File-like name, e.g. `2024/hello-world.md`
    pub id: String,
    pub text: String,
}

impl RawDocument {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// Something that can enumerate raw documents
///
/// The order of the returned documents is the supply order the catalog uses
/// to break date ties.
pub trait DocumentSource {
    fn documents(&self) -> Result<Vec<RawDocument>, SourceError>;
}

/// Documents held in memory, in insertion order
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    documents: IndexMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document, replacing the text of an existing id in place
    pub fn insert(&mut self, id: impl Into<String>, text: impl Into<String>) {
        self.documents.insert(id.into(), text.into());
    }

    /// Builder-style [`MemorySource::insert`]
    pub fn with(mut self, id: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(id, text);
        self
    }
}

impl DocumentSource for MemorySource {
    fn documents(&self) -> Result<Vec<RawDocument>, SourceError> {
        Ok(self
            .documents
            .iter()
            .map(|(id, text)| RawDocument::new(id.as_str(), text.as_str()))
            .collect())
    }
}

/// Markdown files under a content directory
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
    extensions: Vec<String>,
}

impl DirectorySource {
    /// Read `.md`, `.mdx` and `.markdown` files under `root`
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self::with_extensions(root, ["md", "mdx", "markdown"])
    }

    /// Read files with the given extensions (without the dot) under `root`
    pub fn with_extensions<P, I, S>(root: P, extensions: I) -> Self
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            root: root.as_ref().to_path_buf(),
            extensions: extensions.into_iter().map(Into::into).collect(),
        }
    }

    fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| self.extensions.iter().any(|ext| ext == e))
            .unwrap_or(false)
    }

    /// Identifier for a file: its path under the root, `/` separated
    fn id_for(&self, path: &Path) -> String {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl DocumentSource for DirectorySource {
    fn documents(&self) -> Result<Vec<RawDocument>, SourceError> {
        if !self.root.exists() {
            tracing::debug!("Content directory {:?} does not exist", self.root);
            return Ok(Vec::new());
        }

        let mut documents = Vec::new();

        for entry in WalkDir::new(&self.root)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Skipping unreadable entry under {:?}: {}", self.root, e);
                    continue;
                }
            };

            let path = entry.path();
            if !entry.file_type().is_file() || !self.accepts(path) {
                continue;
            }

            let text = fs::read_to_string(path).map_err(|source| SourceError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            let id = self.id_for(path);
            tracing::debug!("Loaded document {}", id);
            documents.push(RawDocument { id, text });
        }

        Ok(documents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_source_keeps_insertion_order() {
        let source = MemorySource::new()
            .with("b.md", "second")
            .with("a.md", "first")
            .with("b.md", "replaced");

        let docs = source.documents().unwrap();
        assert_eq!(
            docs,
            vec![
                RawDocument::new("b.md", "replaced"),
                RawDocument::new("a.md", "first"),
            ]
        );
    }

    #[test]
    fn test_directory_source_reads_markdown_sorted() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("2024")).unwrap();
        fs::write(dir.path().join("zeta.md"), "z").unwrap();
        fs::write(dir.path().join("alpha.mdx"), "a").unwrap();
        fs::write(dir.path().join("notes.txt"), "skip").unwrap();
        fs::write(dir.path().join("2024").join("mid.markdown"), "m").unwrap();

        let docs = DirectorySource::new(dir.path()).documents().unwrap();
        let ids: Vec<_> = docs.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["2024/mid.markdown", "alpha.mdx", "zeta.md"]);
        assert_eq!(docs[2].text, "z");
    }

    #[test]
    fn test_directory_source_custom_extensions() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.md"), "a").unwrap();
        fs::write(dir.path().join("b.mdx"), "b").unwrap();

        let docs = DirectorySource::with_extensions(dir.path(), ["md"])
            .documents()
            .unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].id, "a.md");
    }

    #[test]
    fn test_missing_directory_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let source = DirectorySource::new(dir.path().join("nope"));
        assert!(source.documents().unwrap().is_empty());
    }
}
