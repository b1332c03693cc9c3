use thiserror::Error;

use crate::{
    application::repos::RepoError,
    domain::{
        entities::PostRecord,
        posts::{PostFieldErrors, PostIntent},
    },
};

#[derive(Debug, Error)]
pub enum AdminPostError {
    #[error("post `{slug}` not found")]
    NotFound { slug: String },
    #[error(transparent)]
    Repo(#[from] RepoError),
}

impl AdminPostError {
    pub fn not_found(slug: impl Into<String>) -> Self {
        Self::NotFound { slug: slug.into() }
    }
}

/// Fields posted by the edit form, with the intent already decoded.
#[derive(Debug, Clone)]
pub struct PostSubmission {
    pub title: String,
    pub markdown: String,
    pub intent: PostIntent,
}

#[derive(Debug, Clone)]
pub struct UpdatePostCommand {
    pub slug: String,
    pub title: String,
    pub markdown: String,
}

#[derive(Debug, Clone)]
pub struct CreatePostCommand {
    pub slug: String,
    pub title: String,
    pub markdown: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    Updated(PostRecord),
    Deleted { slug: String },
    Invalid(PostFieldErrors),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    Created(PostRecord),
    Invalid(PostFieldErrors),
}
