use axum::{
    extract::{Form, Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};

use crate::{
    application::{
        admin::posts::{CreateOutcome, CreatePostCommand, EditOutcome, PostSubmission},
        error::{ErrorReport, HttpError},
    },
    domain::posts::{PostFieldErrors, PostIntent},
    infra::http::admin::{AdminState, POSTS_INDEX_PATH},
    presentation::{admin::views as admin_views, views::render_page},
};

use super::{
    errors::admin_post_error,
    forms::{AdminPostCreateForm, AdminPostForm},
    panel::{build_new_post_view, build_post_editor_view, build_post_list_view, edit_href},
};

const EDIT_TITLE: &str = "Edit post";
const NEW_TITLE: &str = "New post";

pub(crate) async fn admin_posts(State(state): State<AdminState>) -> Response {
    let posts = match state.posts.list_posts().await {
        Ok(posts) => posts,
        Err(err) => return admin_post_error("infra::http::admin_posts", err).into_response(),
    };

    let view = admin_views::AdminLayout::new("Posts", build_post_list_view(posts));
    render_page(admin_views::AdminPostsTemplate { view }, StatusCode::OK)
}

pub(crate) async fn admin_post_edit(
    State(state): State<AdminState>,
    Path(slug): Path<String>,
) -> Response {
    let post = match state.posts.require_post(&slug).await {
        Ok(post) => post,
        Err(err) => return admin_post_error("infra::http::admin_post_edit", err).into_response(),
    };

    let content = build_post_editor_view(&post.slug, post.title, post.markdown, None);
    let view = admin_views::AdminLayout::new(EDIT_TITLE, content);
    render_page(admin_views::AdminPostEditTemplate { view }, StatusCode::OK)
}

pub(crate) async fn admin_post_update(
    State(state): State<AdminState>,
    Path(slug): Path<String>,
    Form(form): Form<AdminPostForm>,
) -> Response {
    let intent = match PostIntent::from_form(form.intent.as_deref()) {
        Ok(intent) => intent,
        Err(err) => {
            return HttpError::from_error(
                "infra::http::admin_post_update",
                StatusCode::BAD_REQUEST,
                "Unknown intent",
                &err,
            )
            .into_response();
        }
    };

    let submission = PostSubmission {
        title: form.title.clone(),
        markdown: form.markdown.clone(),
        intent,
    };

    match state.posts.submit_edit(&slug, submission).await {
        Ok(EditOutcome::Updated(_) | EditOutcome::Deleted { .. }) => {
            Redirect::to(POSTS_INDEX_PATH).into_response()
        }
        Ok(EditOutcome::Invalid(errors)) => {
            let content = build_post_editor_view(&slug, form.title, form.markdown, Some(&errors));
            let view = admin_views::AdminLayout::new(EDIT_TITLE, content);
            invalid_form_response(
                "infra::http::admin_post_update",
                admin_views::AdminPostEditTemplate { view },
                &errors,
            )
        }
        Err(err) => admin_post_error("infra::http::admin_post_update", err).into_response(),
    }
}

pub(crate) async fn admin_post_new() -> Response {
    let content = build_new_post_view(String::new(), String::new(), String::new(), None);
    let view = admin_views::AdminLayout::new(NEW_TITLE, content);
    render_page(admin_views::AdminPostNewTemplate { view }, StatusCode::OK)
}

pub(crate) async fn admin_post_create(
    State(state): State<AdminState>,
    Form(form): Form<AdminPostCreateForm>,
) -> Response {
    let command = CreatePostCommand {
        slug: form.slug.clone(),
        title: form.title.clone(),
        markdown: form.markdown.clone(),
    };

    match state.posts.submit_create(command).await {
        Ok(CreateOutcome::Created(post)) => Redirect::to(&edit_href(&post.slug)).into_response(),
        Ok(CreateOutcome::Invalid(errors)) => {
            let content = build_new_post_view(form.slug, form.title, form.markdown, Some(&errors));
            let view = admin_views::AdminLayout::new(NEW_TITLE, content);
            invalid_form_response(
                "infra::http::admin_post_create",
                admin_views::AdminPostNewTemplate { view },
                &errors,
            )
        }
        Err(err) => admin_post_error("infra::http::admin_post_create", err).into_response(),
    }
}

fn invalid_form_response<T: askama::Template>(
    source: &'static str,
    template: T,
    errors: &PostFieldErrors,
) -> Response {
    let mut response = render_page(template, StatusCode::UNPROCESSABLE_ENTITY);
    if response.status() == StatusCode::UNPROCESSABLE_ENTITY {
        let detail = errors.messages().collect::<Vec<_>>().join("; ");
        ErrorReport::from_message(source, detail).attach(&mut response);
    }
    response
}
