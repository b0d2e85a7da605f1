//! Post model

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A blog post summary as handed to the page-rendering layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Post title
    pub title: String,

    /// URL-friendly name, unique within a source
    pub slug: String,

    /// Publication date (date-only values are midnight)
    pub published_at: NaiveDateTime,

    /// Short summary shown in listings
    pub excerpt: String,

    /// Estimated minutes to read the body
    pub reading_time: u32,

    pub tags: Vec<String>,

    /// Source file path relative to the content directory
    pub source: String,
}

impl Post {
    /// Create a new post with minimal required fields
    pub fn new(
        title: impl Into<String>,
        slug: impl Into<String>,
        published_at: NaiveDateTime,
    ) -> Self {
        Self {
            title: title.into(),
            slug: slug.into(),
            published_at,
            excerpt: String::new(),
            reading_time: 1,
            tags: Vec::new(),
            source: String::new(),
        }
    }
}
