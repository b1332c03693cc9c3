use std::{sync::Arc, time::Duration};

use crate::application::repos::{PostsRepo, PostsWriteRepo};

#[derive(Clone)]
pub struct AdminPostService {
    pub(crate) reader: Arc<dyn PostsRepo>,
    pub(crate) writer: Arc<dyn PostsWriteRepo>,
    pub(crate) submission_delay: Duration,
}

impl AdminPostService {
    pub fn new(reader: Arc<dyn PostsRepo>, writer: Arc<dyn PostsWriteRepo>) -> Self {
        Self {
            reader,
            writer,
            submission_delay: Duration::ZERO,
        }
    }

    /// Wait this long before handling each form submission.
    pub fn with_submission_delay(mut self, delay: Duration) -> Self {
        self.submission_delay = delay;
        self
    }

    pub(crate) async fn pause_before_submission(&self) {
        if !self.submission_delay.is_zero() {
            tokio::time::sleep(self.submission_delay).await;
        }
    }
}
