//! Post form validation and submission intent.

use std::str::FromStr;

use super::error::DomainError;
use super::slug::{SlugError, validate_slug};

pub const TITLE_REQUIRED: &str = "Title is required";
pub const SLUG_REQUIRED: &str = "Slug is required";
pub const MARKDOWN_REQUIRED: &str = "Markdown is required";
pub const SLUG_NOT_CANONICAL: &str = "Slug must be lowercase letters, digits and dashes";
pub const SLUG_RESERVED: &str = "Slug is reserved";
pub const SLUG_TAKEN: &str = "Slug is already taken";

/// Per-field validation messages for the post form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostFieldErrors {
    pub slug: Option<&'static str>,
    pub title: Option<&'static str>,
    pub markdown: Option<&'static str>,
}

impl PostFieldErrors {
    pub fn is_empty(&self) -> bool {
        self.slug.is_none() && self.title.is_none() && self.markdown.is_none()
    }

    /// Messages in form order: slug, title, markdown.
    pub fn messages(&self) -> impl Iterator<Item = &'static str> {
        [self.slug, self.title, self.markdown].into_iter().flatten()
    }

    pub fn slug_taken() -> Self {
        Self {
            slug: Some(SLUG_TAKEN),
            ..Self::default()
        }
    }
}

/// What a submission of the edit form asks for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PostIntent {
    #[default]
    Update,
    Delete,
}

impl PostIntent {
    /// A missing or blank intent is an update.
    pub fn from_form(value: Option<&str>) -> Result<Self, DomainError> {
        match value.map(str::trim) {
            None | Some("") => Ok(Self::Update),
            Some(other) => other.parse(),
        }
    }
}

impl FromStr for PostIntent {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "update" => Ok(Self::Update),
            "delete" => Ok(Self::Delete),
            other => Err(DomainError::UnknownIntent {
                value: other.to_string(),
            }),
        }
    }
}

/// Only the empty string is blank; whitespace is content.
fn is_blank(value: &str) -> bool {
    value.is_empty()
}

/// Check the edit form. Every field is checked; errors are not short-circuited.
pub fn validate_post_fields(slug: &str, title: &str, markdown: &str) -> PostFieldErrors {
    PostFieldErrors {
        slug: is_blank(slug).then_some(SLUG_REQUIRED),
        title: is_blank(title).then_some(TITLE_REQUIRED),
        markdown: is_blank(markdown).then_some(MARKDOWN_REQUIRED),
    }
}

/// Check the create form, which also owns the slug's shape.
pub fn validate_new_post_fields(slug: &str, title: &str, markdown: &str) -> PostFieldErrors {
    let mut errors = validate_post_fields(slug, title, markdown);
    if errors.slug.is_none() {
        errors.slug = match validate_slug(slug) {
            Ok(()) => None,
            Err(SlugError::EmptyInput) => Some(SLUG_REQUIRED),
            Err(SlugError::NotCanonical { .. }) => Some(SLUG_NOT_CANONICAL),
            Err(SlugError::Reserved { .. }) => Some(SLUG_RESERVED),
        };
    }
    errors
}
