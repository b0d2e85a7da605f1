//! folio: build-time blog listing for a personal portfolio site
//!
//! Post records are read from a content directory at build time, then
//! listed newest first and searched by title for the page-rendering layer.

pub mod cache;
pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;
pub mod listing;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// The portfolio site being built
#[derive(Debug, Clone)]
pub struct Folio {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Directory holding one subdirectory per content source
    pub content_dir: PathBuf,
    /// Public (output) directory
    pub public_dir: PathBuf,
}

impl Folio {
    /// Create a new site from a directory, reading `_config.yml` if present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let content_dir = base_dir.join(&config.content_dir);
        let public_dir = base_dir.join(&config.public_dir);

        Ok(Self {
            config,
            content_dir,
            public_dir,
        })
    }

    /// Load every post of a source, missing sources yielding none
    pub fn posts(&self, source: &str) -> Result<Vec<content::Post>> {
        let loader = content::ContentLoader::new(self);
        Ok(loader.get_all_front_matter(source)?)
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }

    /// Create a new post in a source
    pub fn new_post(&self, title: &str, source: Option<&str>) -> Result<PathBuf> {
        let source = source.unwrap_or(&self.config.default_source);
        commands::new::create_post(self, title, source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_new_uses_config_dirs() {
        let dir = tempfile::TempDir::new().unwrap();
        fs::write(
            dir.path().join("_config.yml"),
            "content_dir: posts\npublic_dir: dist\n",
        )
        .unwrap();

        let folio = Folio::new(dir.path()).unwrap();
        assert_eq!(folio.content_dir, dir.path().join("posts"));
        assert_eq!(folio.public_dir, dir.path().join("dist"));
    }

    #[test]
    fn test_new_post_then_list() {
        let dir = tempfile::TempDir::new().unwrap();
        let folio = Folio::new(dir.path()).unwrap();
        assert!(folio.posts("blog").unwrap().is_empty());

        folio.new_post("First Steps", None).unwrap();
        let posts = folio.posts("blog").unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug, "first-steps");
    }
}
