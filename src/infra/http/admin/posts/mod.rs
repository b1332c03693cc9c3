mod errors;
mod export;
mod forms;
mod handlers;
mod panel;

pub(super) use export::admin_post_export;
pub(super) use handlers::{
    admin_post_create, admin_post_edit, admin_post_new, admin_post_update, admin_posts,
};
