//! Content module - front-matter, posts, document sources and the catalog

mod catalog;
mod frontmatter;
mod markdown;
mod post;
pub mod source;

pub use catalog::PostCatalog;
pub use frontmatter::{parse, FrontMatter, ParsedDocument};
pub use markdown::MarkdownRenderer;
pub use post::{slug_from_id, Post, PostSummary};
pub use source::{DirectorySource, DocumentSource, MemorySource, RawDocument, SourceError};
