//! Post catalog - the sorted, read-only set of posts behind the blog views

use chrono::NaiveDateTime;
use std::cmp::Ordering;
use std::collections::HashMap;

use super::source::{DocumentSource, SourceError};
use super::{Post, PostSummary};

/// Posts parsed once and sorted newest first
///
/// Build it with [`PostCatalog::build`] or [`PostCatalog::from_source`];
/// every query afterwards is a read over the same immutable data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostCatalog {
    posts: Vec<Post>,
    summaries: Vec<PostSummary>,
    by_slug: HashMap<String, usize>,
}

impl PostCatalog {
    /// Build a catalog from `(identifier, raw text)` pairs
    ///
    /// Posts are ordered by `date`, newest first. Posts with the same date
    /// keep their supply order, and posts whose date is missing or does not
    /// parse go last, also in supply order.
    pub fn build<I, K, V>(documents: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut dated: Vec<(Option<NaiveDateTime>, Post)> = documents
            .into_iter()
            .map(|(id, raw)| {
                let post = Post::from_document(id.as_ref(), raw.as_ref());
                (post.date(), post)
            })
            .collect();

        // `sort_by` is stable, which is what keeps ties in supply order.
        dated.sort_by(|(a, _), (b, _)| newest_first(a.as_ref(), b.as_ref()));

        let posts: Vec<Post> = dated.into_iter().map(|(_, post)| post).collect();
        let summaries = posts.iter().map(Post::summary).collect();

        let mut by_slug = HashMap::with_capacity(posts.len());
        for (index, post) in posts.iter().enumerate() {
            if by_slug.contains_key(&post.slug) {
                tracing::warn!(
                    "Duplicate slug {:?}, lookups return the first post in catalog order",
                    post.slug
                );
                continue;
            }
            by_slug.insert(post.slug.clone(), index);
        }

        tracing::debug!("Built post catalog with {} posts", posts.len());

        Self {
            posts,
            summaries,
            by_slug,
        }
    }

    /// Build a catalog from everything `source` supplies
    pub fn from_source(source: &dyn DocumentSource) -> Result<Self, SourceError> {
        let documents = source.documents()?;
        Ok(Self::build(
            documents.into_iter().map(|doc| (doc.id, doc.text)),
        ))
    }

    /// Summaries in catalog order, for the index page
    pub fn summaries(&self) -> &[PostSummary] {
        &self.summaries
    }

    /// Look up a post by its exact slug
    ///
    /// `None` is the ordinary answer for an unknown slug.
    pub fn get_by_slug(&self, slug: &str) -> Option<&Post> {
        self.by_slug.get(slug).map(|&index| &self.posts[index])
    }

    /// The newer and older neighbours of a post, for detail-page navigation
    ///
    /// Returns `None` when the slug is unknown.
    pub fn adjacent(&self, slug: &str) -> Option<(Option<&Post>, Option<&Post>)> {
        let index = *self.by_slug.get(slug)?;
        let newer = index.checked_sub(1).and_then(|i| self.posts.get(i));
        let older = self.posts.get(index + 1);
        Some((newer, older))
    }

    /// Summaries whose `category` is exactly `category`, in catalog order
    pub fn by_category(&self, category: &str) -> Vec<&PostSummary> {
        self.summaries
            .iter()
            .filter(|s| s.get("category") == Some(category))
            .collect()
    }

    /// Distinct categories with their post counts, most used first
    pub fn categories(&self) -> Vec<(String, usize)> {
        let mut counts: Vec<(String, usize)> = Vec::new();
        for category in self.summaries.iter().filter_map(|s| s.get("category")) {
            match counts.iter_mut().find(|(name, _)| name == category) {
                Some((_, count)) => *count += 1,
                None => counts.push((category.to_string(), 1)),
            }
        }
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

/// Descending by date; undated after dated; equal otherwise
fn newest_first(a: Option<&NaiveDateTime>, b: Option<&NaiveDateTime>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
