use async_trait::async_trait;

use crate::application::repos::{CreatePostParams, PostsWriteRepo, RepoError, UpdatePostParams};
use crate::domain::entities::PostRecord;

use super::super::PostgresRepositories;
use super::types::{POST_COLUMNS, PostRow};
use crate::infra::db::map_sqlx_error;

#[async_trait]
impl PostsWriteRepo for PostgresRepositories {
    async fn create_post(&self, params: CreatePostParams) -> Result<PostRecord, RepoError> {
        let CreatePostParams {
            slug,
            title,
            markdown,
        } = params;

        let sql = format!(
            "INSERT INTO posts (slug, title, markdown) VALUES ($1, $2, $3) RETURNING {POST_COLUMNS}"
        );
        let row = sqlx::query_as::<_, PostRow>(&sql)
            .bind(slug)
            .bind(title)
            .bind(markdown)
            .fetch_one(self.pool())
            .await
            .map_err(map_sqlx_error)?;

        Ok(PostRecord::from(row))
    }

    async fn update_post(&self, params: UpdatePostParams) -> Result<PostRecord, RepoError> {
        let UpdatePostParams {
            slug,
            title,
            markdown,
        } = params;

        let sql = format!(
            "UPDATE posts SET title = $2, markdown = $3 WHERE slug = $1 RETURNING {POST_COLUMNS}"
        );
        let row = sqlx::query_as::<_, PostRow>(&sql)
            .bind(slug)
            .bind(title)
            .bind(markdown)
            .fetch_one(self.pool())
            .await
            .map_err(map_sqlx_error)?;

        Ok(PostRecord::from(row))
    }

    async fn delete_post(&self, slug: &str) -> Result<(), RepoError> {
        let result = sqlx::query("DELETE FROM posts WHERE slug = $1")
            .bind(slug)
            .execute(self.pool())
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}
