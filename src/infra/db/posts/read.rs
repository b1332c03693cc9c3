use async_trait::async_trait;
use futures::TryStreamExt;

use crate::application::repos::{PostsRepo, RepoError};
use crate::domain::entities::PostRecord;

use super::super::PostgresRepositories;
use super::types::{POST_COLUMNS, PostRow};
use crate::infra::db::map_sqlx_error;

#[async_trait]
impl PostsRepo for PostgresRepositories {
    async fn list_posts(&self) -> Result<Vec<PostRecord>, RepoError> {
        let sql = format!("SELECT {POST_COLUMNS} FROM posts ORDER BY slug");
        sqlx::query_as::<_, PostRow>(&sql)
            .fetch(self.pool())
            .map_ok(PostRecord::from)
            .try_collect()
            .await
            .map_err(map_sqlx_error)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<PostRecord>, RepoError> {
        let sql = format!("SELECT {POST_COLUMNS} FROM posts WHERE slug = $1");
        let row = sqlx::query_as::<_, PostRow>(&sql)
            .bind(slug)
            .fetch_optional(self.pool())
            .await
            .map_err(map_sqlx_error)?;

        Ok(row.map(PostRecord::from))
    }
}
