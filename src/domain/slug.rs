//! Slug rules for post permalinks.
//!
//! Slugs are typed by the admin rather than generated, so the helpers here only
//! check that a candidate is already in canonical `slug` crate form and does not
//! shadow a fixed admin route.

use slug::slugify;
use thiserror::Error;

/// Path segments under `/posts/admin` that are routes of their own.
pub const RESERVED_SLUGS: &[&str] = &["new"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SlugError {
    #[error("slug is empty")]
    EmptyInput,
    #[error("slug `{input}` is not canonical; expected `{suggestion}`")]
    NotCanonical { input: String, suggestion: String },
    #[error("slug `{input}` is reserved")]
    Reserved { input: String },
}

/// Accept `input` only if slugifying it is a no-op and it is not reserved.
pub fn validate_slug(input: &str) -> Result<(), SlugError> {
    if input.is_empty() {
        return Err(SlugError::EmptyInput);
    }

    let canonical = slugify(input);
    if canonical != input {
        return Err(SlugError::NotCanonical {
            input: input.to_string(),
            suggestion: canonical,
        });
    }

    if RESERVED_SLUGS.contains(&input) {
        return Err(SlugError::Reserved {
            input: input.to_string(),
        });
    }

    Ok(())
}
