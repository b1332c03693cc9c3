use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use crate::{
    domain::{entities::PostRecord, posts::PostFieldErrors},
    presentation::admin::views as admin_views,
};

use super::super::POSTS_INDEX_PATH;

pub(super) const NEW_POST_PATH: &str = "/posts/admin/new";

/// Characters that would end or split a path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

fn segment(slug: &str) -> String {
    utf8_percent_encode(slug, SEGMENT).to_string()
}

pub(super) fn edit_href(slug: &str) -> String {
    format!("{POSTS_INDEX_PATH}/{}", segment(slug))
}

/// The download link names the file after the post.
pub(super) fn export_href(slug: &str) -> String {
    let slug = segment(slug);
    format!("{POSTS_INDEX_PATH}/{slug}/{slug}.csv")
}

pub(super) fn build_post_list_view(posts: Vec<PostRecord>) -> admin_views::AdminPostListView {
    let posts = posts
        .into_iter()
        .map(|post| admin_views::AdminPostRowView {
            edit_href: edit_href(&post.slug),
            export_href: export_href(&post.slug),
            slug: post.slug,
            title: post.title,
        })
        .collect();

    admin_views::AdminPostListView {
        heading: "Posts".to_string(),
        posts,
        new_post_href: NEW_POST_PATH.to_string(),
        empty_message: "No posts yet.".to_string(),
    }
}

pub(super) fn build_post_editor_view(
    slug: &str,
    title: String,
    markdown: String,
    errors: Option<&PostFieldErrors>,
) -> admin_views::AdminPostEditorView {
    admin_views::AdminPostEditorView {
        slug: slug.to_string(),
        title,
        markdown,
        form_action: edit_href(slug),
        back_href: POSTS_INDEX_PATH.to_string(),
        export_href: export_href(slug),
        errors: errors
            .map(admin_views::AdminFieldErrorsView::from)
            .unwrap_or_default(),
    }
}

pub(super) fn build_new_post_view(
    slug: String,
    title: String,
    markdown: String,
    errors: Option<&PostFieldErrors>,
) -> admin_views::AdminPostNewView {
    admin_views::AdminPostNewView {
        slug,
        title,
        markdown,
        form_action: NEW_POST_PATH.to_string(),
        back_href: POSTS_INDEX_PATH.to_string(),
        errors: errors
            .map(admin_views::AdminFieldErrorsView::from)
            .unwrap_or_default(),
    }
}
