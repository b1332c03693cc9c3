use askama::Template;

use crate::domain::posts::PostFieldErrors;

use super::AdminLayout;

#[derive(Clone)]
pub struct AdminPostRowView {
    pub slug: String,
    pub title: String,
    pub edit_href: String,
    pub export_href: String,
}

#[derive(Clone)]
pub struct AdminPostListView {
    pub heading: String,
    pub posts: Vec<AdminPostRowView>,
    pub new_post_href: String,
    pub empty_message: String,
}

impl AdminPostListView {
    pub fn has_posts(&self) -> bool {
        !self.posts.is_empty()
    }
}

#[derive(Clone, Default)]
pub struct AdminFieldErrorsView {
    pub slug: Option<String>,
    pub title: Option<String>,
    pub markdown: Option<String>,
}

impl From<&PostFieldErrors> for AdminFieldErrorsView {
    fn from(errors: &PostFieldErrors) -> Self {
        Self {
            slug: errors.slug.map(str::to_string),
            title: errors.title.map(str::to_string),
            markdown: errors.markdown.map(str::to_string),
        }
    }
}

/// Form state for the edit page; either the stored post or the rejected submission.
#[derive(Clone)]
pub struct AdminPostEditorView {
    pub slug: String,
    pub title: String,
    pub markdown: String,
    pub form_action: String,
    pub back_href: String,
    pub export_href: String,
    pub errors: AdminFieldErrorsView,
}

#[derive(Clone)]
pub struct AdminPostNewView {
    pub slug: String,
    pub title: String,
    pub markdown: String,
    pub form_action: String,
    pub back_href: String,
    pub errors: AdminFieldErrorsView,
}

#[derive(Template)]
#[template(path = "admin/posts.html")]
pub struct AdminPostsTemplate {
    pub view: AdminLayout<AdminPostListView>,
}

#[derive(Template)]
#[template(path = "admin/post_edit.html")]
pub struct AdminPostEditTemplate {
    pub view: AdminLayout<AdminPostEditorView>,
}

#[derive(Template)]
#[template(path = "admin/post_new.html")]
pub struct AdminPostNewTemplate {
    pub view: AdminLayout<AdminPostNewView>,
}
