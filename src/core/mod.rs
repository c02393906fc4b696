// Public modules
pub mod config;
pub mod defaults;
pub mod error;
pub mod slug;
pub mod slugify;

// Internal modules - not part of public API
pub(crate) mod paths;

// Re-export common types for convenience
pub use error::{Error, ErrorCode, Result};
pub use slug::Slug;
pub use slugify::{
    is_valid_slug, require_slug, slugify, slugify_with, unique_slug, validate_slug, SlugPolicy,
};
