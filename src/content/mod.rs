//! Content module - post records, front-matter and loading

mod error;
mod frontmatter;
pub mod loader;
pub mod markdown;
mod post;

pub use error::ContentError;
pub use frontmatter::{parse_date_string, FrontMatter};
pub use loader::ContentLoader;
pub use post::Post;
