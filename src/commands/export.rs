//! Export post summaries as JSON for the page-rendering layer

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::content::Post;
use crate::listing::filter_posts;
use crate::Folio;

/// Write the sorted (and filtered) summaries to `<public_dir>/<source>.json`
pub fn run(folio: &Folio, source: &str, posts: &[Post], query: &str) -> Result<PathBuf> {
    let summaries = filter_posts(posts, query);

    let out_path = folio.public_dir.join(format!("{}.json", source));
    // Nested sources (`notes/2023`) land in matching subdirectories
    let out_dir = out_path.parent().unwrap_or(folio.public_dir.as_path());
    fs::create_dir_all(out_dir).with_context(|| format!("Failed to create {:?}", out_dir))?;
    let json = serde_json::to_string_pretty(&summaries)?;
    fs::write(&out_path, json).with_context(|| format!("Failed to write {:?}", out_path))?;

    tracing::info!("Exported {} posts to {:?}", summaries.len(), out_path);
    Ok(out_path)
}
