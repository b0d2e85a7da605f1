//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub author: String,
    pub url: String,

    // Directory
    /// Root holding one subdirectory per content source (`blog`, ...)
    pub content_dir: String,
    /// Where exported post summaries are written
    pub public_dir: String,
    /// Source used when a command is not given one
    pub default_source: String,

    // Writing
    pub render_drafts: bool,
    pub words_per_minute: usize,

    // Date / Time format
    pub date_format: String,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            author: "John Doe".to_string(),
            url: "http://example.com".to_string(),

            content_dir: "data".to_string(),
            public_dir: "public".to_string(),
            default_source: "blog".to_string(),

            render_drafts: false,
            words_per_minute: 200,

            date_format: "YYYY-MM-DD".to_string(),

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        tracing::debug!("Loaded site config from {:?}", path.as_ref());
        Ok(config)
    }
}
