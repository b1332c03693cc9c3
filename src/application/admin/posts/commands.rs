use metrics::counter;
use tracing::info;

use crate::application::repos::{CreatePostParams, RepoError, UpdatePostParams};
use crate::domain::entities::PostRecord;
use crate::domain::posts::{
    PostFieldErrors, PostIntent, validate_new_post_fields, validate_post_fields,
};

use super::service::AdminPostService;
use super::types::{
    AdminPostError, CreateOutcome, CreatePostCommand, EditOutcome, PostSubmission,
    UpdatePostCommand,
};

pub const POST_MUTATIONS_METRIC: &str = "postdesk_post_mutations_total";

fn record_mutation(action: &'static str) {
    counter!(POST_MUTATIONS_METRIC, "action" => action).increment(1);
}

impl AdminPostService {
    /// Handle a submission of the edit form for `slug`.
    ///
    /// A delete intent skips validation. Otherwise every field is checked and
    /// the post is only written when all checks pass.
    pub async fn submit_edit(
        &self,
        slug: &str,
        submission: PostSubmission,
    ) -> Result<EditOutcome, AdminPostError> {
        self.pause_before_submission().await;
        self.require_post(slug).await?;

        if submission.intent == PostIntent::Delete {
            self.delete_post(slug).await?;
            return Ok(EditOutcome::Deleted {
                slug: slug.to_string(),
            });
        }

        let errors = validate_post_fields(slug, &submission.title, &submission.markdown);
        if !errors.is_empty() {
            return Ok(EditOutcome::Invalid(errors));
        }

        let post = self
            .update_post(UpdatePostCommand {
                slug: slug.to_string(),
                title: submission.title,
                markdown: submission.markdown,
            })
            .await?;

        Ok(EditOutcome::Updated(post))
    }

    /// Handle a submission of the new-post form.
    pub async fn submit_create(
        &self,
        command: CreatePostCommand,
    ) -> Result<CreateOutcome, AdminPostError> {
        self.pause_before_submission().await;

        let errors = validate_new_post_fields(&command.slug, &command.title, &command.markdown);
        if !errors.is_empty() {
            return Ok(CreateOutcome::Invalid(errors));
        }

        match self.create_post(command).await {
            Ok(post) => Ok(CreateOutcome::Created(post)),
            Err(AdminPostError::Repo(RepoError::Duplicate { .. })) => {
                Ok(CreateOutcome::Invalid(PostFieldErrors::slug_taken()))
            }
            Err(err) => Err(err),
        }
    }

    pub async fn create_post(
        &self,
        command: CreatePostCommand,
    ) -> Result<PostRecord, AdminPostError> {
        let params = CreatePostParams {
            slug: command.slug,
            title: command.title,
            markdown: command.markdown,
        };

        let post = self.writer.create_post(params).await?;
        record_mutation("create");
        info!(
            target = "postdesk::admin::posts",
            slug = %post.slug,
            "post created"
        );

        Ok(post)
    }

    pub async fn update_post(
        &self,
        command: UpdatePostCommand,
    ) -> Result<PostRecord, AdminPostError> {
        let slug = command.slug;
        let params = UpdatePostParams {
            slug: slug.clone(),
            title: command.title,
            markdown: command.markdown,
        };

        let post = self
            .writer
            .update_post(params)
            .await
            .map_err(|err| match err {
                RepoError::NotFound => AdminPostError::not_found(slug),
                other => AdminPostError::Repo(other),
            })?;
        record_mutation("update");
        info!(
            target = "postdesk::admin::posts",
            slug = %post.slug,
            "post updated"
        );

        Ok(post)
    }

    pub async fn delete_post(&self, slug: &str) -> Result<(), AdminPostError> {
        self.writer.delete_post(slug).await.map_err(|err| match err {
            RepoError::NotFound => AdminPostError::not_found(slug),
            other => AdminPostError::Repo(other),
        })?;
        record_mutation("delete");
        info!(target = "postdesk::admin::posts", slug, "post deleted");

        Ok(())
    }
}
