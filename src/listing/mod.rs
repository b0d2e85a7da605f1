//! Listing view - newest-first ordering and title search over loaded posts

use crate::content::Post;

/// Sort posts by publish date, newest first.
///
/// The sort is stable: posts sharing a date keep their relative order.
pub fn sort_newest_first(posts: &mut [Post]) {
    posts.sort_by(|a, b| b.published_at.cmp(&a.published_at));
}

/// Whether `title` contains `query`, ignoring case
pub fn title_matches(title: &str, query: &str) -> bool {
    query.is_empty() || title.to_lowercase().contains(&query.to_lowercase())
}

/// Sort a copy of `posts` newest first and keep those whose title matches `query`.
pub fn filter_posts(posts: &[Post], query: &str) -> Vec<Post> {
    let mut sorted = posts.to_vec();
    sort_newest_first(&mut sorted);
    sorted.retain(|post| title_matches(&post.title, query));
    sorted
}

/// The blog listing: the full post list plus the search box contents
#[derive(Debug, Clone, Default)]
pub struct ListingView {
    posts: Vec<Post>,
    query: String,
}

impl ListingView {
    pub fn new(posts: Vec<Post>) -> Self {
        Self {
            posts,
            query: String::new(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replace the search query (one keystroke)
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    /// All loaded posts, in load order
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Posts to display for the current query, re-derived on every call
    pub fn visible(&self) -> Vec<Post> {
        filter_posts(&self.posts, &self.query)
    }
}
