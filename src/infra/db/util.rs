use sqlx::error::ErrorKind;

use crate::application::repos::RepoError;

/// Postgres `query_canceled`, raised when `statement_timeout` fires.
const QUERY_CANCELED: &str = "57014";

pub fn map_sqlx_error(err: sqlx::Error) -> RepoError {
    match err {
        sqlx::Error::RowNotFound => RepoError::NotFound,
        sqlx::Error::PoolTimedOut => RepoError::Timeout,
        // `posts.slug` is the only unique constraint.
        sqlx::Error::Database(db) if matches!(db.kind(), ErrorKind::UniqueViolation) => {
            RepoError::Duplicate {
                constraint: db.constraint().unwrap_or("posts_pkey").to_string(),
            }
        }
        sqlx::Error::Database(db) if db.code().as_deref() == Some(QUERY_CANCELED) => {
            RepoError::Timeout
        }
        other => RepoError::from_persistence(other),
    }
}
