//! Repository traits describing persistence adapters.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::PostRecord;

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("persistence error: {0}")]
    Persistence(String),
    #[error("duplicate record violates unique constraint `{constraint}`")]
    Duplicate { constraint: String },
    #[error("resource not found")]
    NotFound,
    #[error("database timeout")]
    Timeout,
}

impl RepoError {
    pub fn from_persistence(err: impl std::fmt::Display) -> Self {
        Self::Persistence(err.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct CreatePostParams {
    pub slug: String,
    pub title: String,
    pub markdown: String,
}

/// The slug selects the row; it is never rewritten.
#[derive(Debug, Clone)]
pub struct UpdatePostParams {
    pub slug: String,
    pub title: String,
    pub markdown: String,
}

#[async_trait]
pub trait PostsRepo: Send + Sync {
    async fn list_posts(&self) -> Result<Vec<PostRecord>, RepoError>;

    async fn find_by_slug(&self, slug: &str) -> Result<Option<PostRecord>, RepoError>;
}

#[async_trait]
pub trait PostsWriteRepo: Send + Sync {
    /// Fails with [`RepoError::Duplicate`] when the slug already exists.
    async fn create_post(&self, params: CreatePostParams) -> Result<PostRecord, RepoError>;

    /// Fails with [`RepoError::NotFound`] when no post has the slug.
    async fn update_post(&self, params: UpdatePostParams) -> Result<PostRecord, RepoError>;

    /// Fails with [`RepoError::NotFound`] when no post has the slug.
    async fn delete_post(&self, slug: &str) -> Result<(), RepoError>;
}

#[async_trait]
pub trait HealthRepo: Send + Sync {
    async fn health_check(&self) -> Result<(), RepoError>;
}
