//! Content loader - reads post records from a content source

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::markdown;
use super::{ContentError, FrontMatter, Post};
use crate::Folio;

/// Loads post records from `<content_dir>/<source>`
pub struct ContentLoader<'a> {
    folio: &'a Folio,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(folio: &'a Folio) -> Self {
        Self { folio }
    }

    /// Load posts for the build, treating a missing source as empty.
    pub fn get_all_front_matter(&self, source: &str) -> Result<Vec<Post>, ContentError> {
        match self.load_posts(source) {
            Err(ContentError::SourceNotFound { path }) => {
                tracing::warn!("Content source {:?} does not exist, no posts loaded", path);
                Ok(Vec::new())
            }
            other => other,
        }
    }

    /// Load all posts from a source, in path order.
    ///
    /// Records that cannot be read or lack required metadata are skipped
    /// with a warning.
    pub fn load_posts(&self, source: &str) -> Result<Vec<Post>, ContentError> {
        let source_dir = self.folio.content_dir.join(source);
        if !source_dir.is_dir() {
            return Err(ContentError::SourceNotFound { path: source_dir });
        }

        let mut posts = Vec::new();
        let mut seen_slugs = HashSet::new();

        for entry in WalkDir::new(&source_dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Skipping unreadable entry in {:?}: {}", source_dir, e);
                    continue;
                }
            };
            let path = entry.path();
            if !path.is_file() || !is_post_file(path) {
                continue;
            }

            match self.load_post(path) {
                Ok(Some(post)) => {
                    if !seen_slugs.insert(post.slug.clone()) {
                        tracing::warn!(
                            "Skipping {:?}: slug {:?} is already used by another post",
                            path,
                            post.slug
                        );
                        continue;
                    }
                    posts.push(post);
                }
                Ok(None) => tracing::debug!("Skipping draft {:?}", path),
                Err(e) => tracing::warn!("Failed to load post {:?}: {}", path, e),
            }
        }

        tracing::debug!("Loaded {} posts from {:?}", posts.len(), source_dir);
        Ok(posts)
    }

    /// Load a single post from a file; `None` for drafts that are not rendered
    fn load_post(&self, path: &Path) -> Result<Option<Post>, ContentError> {
        let content = fs::read_to_string(path)?;
        let (fm, body) = FrontMatter::parse(&content)
            .map_err(|e| ContentError::malformed(path, e.to_string()))?;

        if fm.draft && !self.folio.config.render_drafts {
            return Ok(None);
        }

        let title = fm
            .title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ContentError::malformed(path, "missing title"))?
            .to_string();

        let published_at = match fm.published_at.as_deref() {
            None => return Err(ContentError::malformed(path, "missing publishedAt")),
            Some(raw) => fm.parse_published_at().ok_or_else(|| {
                ContentError::malformed(path, format!("unrecognised publishedAt {:?}", raw))
            })?,
        };

        // Slug comes from the filename unless the header overrides it
        let slug = fm
            .slug
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| {
                path.file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("untitled")
                    .to_string()
            });

        let source = path
            .strip_prefix(&self.folio.content_dir)
            .unwrap_or(path)
            .to_string_lossy()
            .to_string();

        let mut post = Post::new(title, slug, published_at);
        post.excerpt = fm
            .excerpt
            .map(|e| e.trim().to_string())
            .unwrap_or_else(|| markdown::derive_excerpt(body));
        post.reading_time = markdown::reading_time(body, self.folio.config.words_per_minute);
        post.tags = fm.tags;
        post.source = source;

        Ok(Some(post))
    }
}

/// Check if a file is a post record
fn is_post_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| matches!(e, "md" | "mdx" | "markdown"))
        .unwrap_or(false)
}
