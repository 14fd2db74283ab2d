//! Post and summary models

use chrono::NaiveDateTime;
use serde::ser::{Serialize, SerializeMap, Serializer};

use super::{FrontMatter, ParsedDocument};

/// Extensions stripped from a document identifier to form its slug
const MARKDOWN_EXTENSIONS: &[&str] = &[".markdown", ".mdx", ".md"];

/// Marks the end of the excerpt inside a post body
const MORE_MARKER: &str = "<!-- more -->";

/// Derive a slug from a document identifier
///
/// Takes the final path segment and drops one trailing markdown extension:
/// `posts/2024/hello-world.md` becomes `hello-world`.
pub fn slug_from_id(id: &str) -> String {
    let name = id.rsplit(['/', '\\']).next().unwrap_or(id);
    MARKDOWN_EXTENSIONS
        .iter()
        .find_map(|ext| name.strip_suffix(ext))
        .unwrap_or(name)
        .to_string()
}

/// A blog post: derived slug, front-matter and body
///
/// The slug always comes from the document identifier. A `slug` (or
/// `content`) key in the front-matter is kept in `metadata` but shadowed by
/// [`Post::get`] and by the serialized form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    /// Slug (URL-friendly name)
    pub slug: String,

    /// Front-matter fields in parse order
    pub metadata: FrontMatter,

    /// Raw markdown body
    pub content: String,
}

impl Post {
    /// Assemble a post from an already-parsed document
    pub fn new(slug: impl Into<String>, doc: ParsedDocument) -> Self {
        Self {
            slug: slug.into(),
            metadata: doc.metadata,
            content: doc.body,
        }
    }

    /// Parse `raw` and assemble a post for the document `id`
    pub fn from_document(id: &str, raw: &str) -> Self {
        Self::new(slug_from_id(id), ParsedDocument::parse(raw))
    }

    /// Look up a field the way a view sees it
    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            "slug" => Some(&self.slug),
            "content" => Some(&self.content),
            _ => self.metadata.get(key),
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.metadata.get("title")
    }

    pub fn date(&self) -> Option<NaiveDateTime> {
        self.metadata.date()
    }

    /// Short description for listings
    ///
    /// Uses the `excerpt` field when present, otherwise the body text before
    /// a `<!-- more -->` marker.
    pub fn excerpt(&self) -> Option<String> {
        if let Some(excerpt) = self.metadata.get("excerpt") {
            return Some(excerpt.to_string());
        }

        let (before, _) = self.content.split_once(MORE_MARKER)?;
        let before = before.trim();
        (!before.is_empty()).then(|| before.to_string())
    }

    /// The post without its body
    pub fn summary(&self) -> PostSummary {
        PostSummary {
            slug: self.slug.clone(),
            metadata: self.metadata.clone(),
        }
    }
}

impl Serialize for Post {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        serialize_fields(&mut map, &self.slug, &self.metadata)?;
        map.serialize_entry("content", &self.content)?;
        map.end()
    }
}

/// A post with its body omitted, as shown on the index page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostSummary {
    pub slug: String,
    pub metadata: FrontMatter,
}

impl PostSummary {
    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            "slug" => Some(&self.slug),
            "content" => None,
            _ => self.metadata.get(key),
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.metadata.get("title")
    }

    pub fn date(&self) -> Option<NaiveDateTime> {
        self.metadata.date()
    }
}

impl Serialize for PostSummary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        serialize_fields(&mut map, &self.slug, &self.metadata)?;
        map.end()
    }
}

/// Write `slug` followed by every metadata field it does not shadow
fn serialize_fields<M: SerializeMap>(
    map: &mut M,
    slug: &str,
    metadata: &FrontMatter,
) -> Result<(), M::Error> {
    map.serialize_entry("slug", slug)?;
    for (key, value) in metadata.iter() {
        if key != "slug" && key != "content" {
            map.serialize_entry(key, value)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_from_id() {
        assert_eq!(slug_from_id("hello-world.md"), "hello-world");
        assert_eq!(slug_from_id("posts/2024/hello-world.md"), "hello-world");
        assert_eq!(slug_from_id("./content/blog/intro.mdx"), "intro");
        assert_eq!(slug_from_id("C:\\blog\\notes.markdown"), "notes");
        assert_eq!(slug_from_id("plain"), "plain");
        assert_eq!(slug_from_id("archive.md.md"), "archive.md");
        assert_eq!(slug_from_id("image.png"), "image.png");
    }

    #[test]
    fn test_slug_wins_over_metadata() {
        let post = Post::from_document(
            "posts/real-slug.md",
            "---\ntitle: Hello\nslug: fake-slug\n---\nBody",
        );
        assert_eq!(post.slug, "real-slug");
        assert_eq!(post.get("slug"), Some("real-slug"));
        assert_eq!(post.metadata.get("slug"), Some("fake-slug"));
        assert_eq!(post.get("content"), Some("Body"));
        assert_eq!(post.title(), Some("Hello"));
    }

    #[test]
    fn test_excerpt_from_metadata() {
        let post = Post::from_document("a.md", "---\nexcerpt: Short one\n---\nLong body");
        assert_eq!(post.excerpt(), Some("Short one".to_string()));
    }

    #[test]
    fn test_excerpt_from_more_marker() {
        let post = Post::from_document("a.md", "Intro paragraph.\n<!-- more -->\nThe rest.");
        assert_eq!(post.excerpt(), Some("Intro paragraph.".to_string()));

        let post = Post::from_document("b.md", "No marker here.");
        assert_eq!(post.excerpt(), None);
    }

    #[test]
    fn test_serialize_post() {
        let post = Post::from_document(
            "intro.md",
            "---\nslug: other\ntitle: Intro\ncontent: shadowed\ndate: 2024-01-01\n---\nHi",
        );
        let json = serde_json::to_string(&post).unwrap();
        assert_eq!(
            json,
            r#"{"slug":"intro","title":"Intro","date":"2024-01-01","content":"Hi"}"#
        );
    }

    #[test]
    fn test_summary_omits_content() {
        let post = Post::from_document("intro.md", "---\ntitle: Intro\n---\nHi");
        let summary = post.summary();
        assert_eq!(summary.get("slug"), Some("intro"));
        assert_eq!(summary.get("content"), None);

        let json = serde_json::to_string(&summary).unwrap();
        assert_eq!(json, r#"{"slug":"intro","title":"Intro"}"#);
    }
}
