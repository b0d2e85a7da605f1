//! List posts, newest first, optionally filtered by title

use anyhow::Result;

use crate::content::Post;
use crate::helpers::format_date;
use crate::listing::ListingView;
use crate::Folio;

/// Print the listing for `query`
pub fn run(folio: &Folio, posts: &[Post], query: &str) -> Result<()> {
    for line in render(folio, posts, query) {
        println!("{}", line);
    }
    Ok(())
}

/// Listing lines: a header followed by one line per visible post
pub fn render(folio: &Folio, posts: &[Post], query: &str) -> Vec<String> {
    let mut view = ListingView::new(posts.to_vec());
    view.set_query(query);
    let visible = view.visible();

    let mut lines = Vec::with_capacity(visible.len() + 1);
    if query.is_empty() {
        lines.push(format!("Posts ({}):", visible.len()));
    } else {
        lines.push(format!(
            "Posts matching {:?} ({} of {}):",
            query,
            visible.len(),
            view.posts().len()
        ));
    }
    for post in &visible {
        let date = format_date(&post.published_at, &folio.config.date_format)
            .unwrap_or_else(|_| {
                tracing::warn!(
                    "Invalid date_format {:?}, falling back to YYYY-MM-DD",
                    folio.config.date_format
                );
                post.published_at.format("%Y-%m-%d").to_string()
            });
        lines.push(format!("  {} - {} [{}]", date, post.title, post.source));
    }
    lines
}
