use askama::Template;
use postdesk::{
    domain::posts::{PostFieldErrors, TITLE_REQUIRED},
    presentation::admin::views::*,
};

fn editor(errors: AdminFieldErrorsView) -> AdminPostEditorView {
    AdminPostEditorView {
        slug: "hello".into(),
        title: "Fish & <Chips>".into(),
        markdown: "# Hi".into(),
        form_action: "/posts/admin/hello".into(),
        back_href: "/posts/admin".into(),
        export_href: "/posts/admin/hello/hello.csv".into(),
        errors,
    }
}

#[test]
fn post_list_renders_rows() {
    let content = AdminPostListView {
        heading: "Posts".into(),
        posts: vec![AdminPostRowView {
            slug: "hello".into(),
            title: "Hello".into(),
            edit_href: "/posts/admin/hello".into(),
            export_href: "/posts/admin/hello/hello.csv".into(),
        }],
        new_post_href: "/posts/admin/new".into(),
        empty_message: "No posts yet.".into(),
    };
    let html = AdminPostsTemplate {
        view: AdminLayout::new("Posts", content),
    }
    .render()
    .expect("template renders");

    assert!(html.contains(r#"<a href="/posts/admin/hello">Hello</a>"#));
    assert!(html.contains(r#"href="/posts/admin/hello/hello.csv""#));
    assert!(!html.contains("No posts yet."));
}

#[test]
fn editor_escapes_values_and_offers_both_intents() {
    let html = AdminPostEditTemplate {
        view: AdminLayout::new("Edit post", editor(AdminFieldErrorsView::default())),
    }
    .render()
    .expect("template renders");

    assert!(html.contains("Chips"));
    assert!(!html.contains("<Chips>"));
    assert!(html.contains(r#"name="intent" value="update""#));
    assert!(html.contains(r#"name="intent" value="delete""#));
    assert!(!html.contains(r#"class="error""#));
}

#[test]
fn editor_shows_field_errors_next_to_fields() {
    let errors = PostFieldErrors {
        title: Some(TITLE_REQUIRED),
        ..PostFieldErrors::default()
    };
    let html = AdminPostEditTemplate {
        view: AdminLayout::new("Edit post", editor(AdminFieldErrorsView::from(&errors))),
    }
    .render()
    .expect("template renders");

    assert!(html.contains(r#"data-field="title">Title is required</em>"#));
    assert!(!html.contains(r#"data-field="markdown""#));
}
