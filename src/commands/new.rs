//! Create a new post record

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::Folio;

/// Scaffold `<content_dir>/<source>/<slug>.mdx` with a front-matter header
pub fn create_post(folio: &Folio, title: &str, source: &str) -> Result<PathBuf> {
    let slug = slug::slugify(title);
    if slug.is_empty() {
        anyhow::bail!("Cannot derive a file name from title {:?}", title);
    }

    let target_dir = folio.content_dir.join(source);
    fs::create_dir_all(&target_dir)?;

    let file_path = target_dir.join(format!("{}.mdx", slug));
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let today = chrono::Local::now().format("%Y-%m-%d");
    let content = format!(
        "---\ntitle: {}\npublishedAt: '{}'\nexcerpt: ''\n---\n\n",
        serde_json::to_string(title)?,
        today
    );

    fs::write(&file_path, content)?;
    tracing::info!("Created: {:?}", file_path);

    Ok(file_path)
}
