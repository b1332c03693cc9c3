use crate::application::export::{CsvQuoting, post_to_csv};
use crate::domain::entities::PostRecord;

use super::service::AdminPostService;
use super::types::AdminPostError;

impl AdminPostService {
    pub async fn list_posts(&self) -> Result<Vec<PostRecord>, AdminPostError> {
        self.reader.list_posts().await.map_err(AdminPostError::from)
    }

    pub async fn load_post(&self, slug: &str) -> Result<Option<PostRecord>, AdminPostError> {
        self.reader
            .find_by_slug(slug)
            .await
            .map_err(AdminPostError::from)
    }

    /// Like [`Self::load_post`], but a missing post is an error.
    pub async fn require_post(&self, slug: &str) -> Result<PostRecord, AdminPostError> {
        self.load_post(slug)
            .await?
            .ok_or_else(|| AdminPostError::not_found(slug))
    }

    pub async fn export_csv(
        &self,
        slug: &str,
        quoting: CsvQuoting,
    ) -> Result<String, AdminPostError> {
        let post = self.require_post(slug).await?;
        Ok(post_to_csv(&post, quoting))
    }
}
