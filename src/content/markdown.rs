//! Body text helpers: excerpts and reading time

use lazy_static::lazy_static;
use regex::Regex;

/// Marker separating the excerpt from the rest of a post body
pub const MORE_MARKER: &str = "<!-- more -->";

lazy_static! {
    static ref CODE_FENCE: Regex = Regex::new(r"(?s)```.*?```").unwrap();
    static ref HTML_TAG: Regex = Regex::new(r"<[^>]+>").unwrap();
    static ref MDX_STATEMENT: Regex = Regex::new(r"(?m)^(import|export)\s.*$").unwrap();
}

/// Text before the `<!-- more -->` marker, if the body has one
pub fn split_excerpt(body: &str) -> Option<String> {
    body.find(MORE_MARKER)
        .map(|pos| body[..pos].trim().to_string())
        .filter(|excerpt| !excerpt.is_empty())
}

/// First prose paragraph of the body, skipping headings and MDX statements
pub fn first_paragraph(body: &str) -> Option<String> {
    let body = MDX_STATEMENT.replace_all(body, "");
    body.split("\n\n")
        .map(str::trim)
        .find(|block| {
            !block.is_empty()
                && !block.starts_with('#')
                && !block.starts_with("```")
                && !block.starts_with('<')
        })
        .map(|block| block.lines().map(str::trim).collect::<Vec<_>>().join(" "))
}

/// Derive an excerpt: explicit marker first, then the first paragraph
pub fn derive_excerpt(body: &str) -> String {
    split_excerpt(body)
        .or_else(|| first_paragraph(body))
        .unwrap_or_default()
}

/// Number of words in the body, ignoring code blocks and markup
pub fn word_count(body: &str) -> usize {
    let text = CODE_FENCE.replace_all(body, " ");
    let text = MDX_STATEMENT.replace_all(&text, " ");
    let text = HTML_TAG.replace_all(&text, " ");
    text.split_whitespace()
        .filter(|w| w.chars().any(char::is_alphanumeric))
        .count()
}

/// Whole minutes needed to read the body, never less than one
pub fn reading_time(body: &str, words_per_minute: usize) -> u32 {
    let wpm = words_per_minute.max(1);
    let minutes = word_count(body).div_ceil(wpm);
    minutes.max(1) as u32
}
