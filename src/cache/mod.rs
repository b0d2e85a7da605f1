//! Process-wide post cache
//!
//! Posts are loaded once per build and then shared read-only. The first
//! caller populates the cache; every later caller sees the same list.

use std::sync::OnceLock;

use crate::content::{ContentError, ContentLoader, Post};
use crate::Folio;

/// A post list that is filled at most once
#[derive(Debug, Default)]
pub struct PostCache {
    posts: OnceLock<Vec<Post>>,
}

impl PostCache {
    pub const fn new() -> Self {
        Self {
            posts: OnceLock::new(),
        }
    }

    /// The cache shared by the whole process
    pub fn global() -> &'static PostCache {
        static GLOBAL: PostCache = PostCache::new();
        &GLOBAL
    }

    /// Cached posts, if the cache has been populated
    pub fn get(&self) -> Option<&[Post]> {
        self.posts.get().map(Vec::as_slice)
    }

    /// Return the cached posts, running `load` only if the cache is empty.
    ///
    /// A failed load leaves the cache empty so a later call can retry.
    pub fn get_or_try_load<F>(&self, load: F) -> Result<&[Post], ContentError>
    where
        F: FnOnce() -> Result<Vec<Post>, ContentError>,
    {
        if let Some(posts) = self.posts.get() {
            return Ok(posts.as_slice());
        }
        let loaded = load()?;
        tracing::debug!("Caching {} posts", loaded.len());
        // A concurrent initializer may have won; its value is kept
        Ok(self.posts.get_or_init(|| loaded).as_slice())
    }

    /// Populate from a content source, treating a missing source as empty
    pub fn get_or_load(&self, folio: &Folio, source: &str) -> Result<&[Post], ContentError> {
        self.get_or_try_load(|| ContentLoader::new(folio).get_all_front_matter(source))
    }
}
