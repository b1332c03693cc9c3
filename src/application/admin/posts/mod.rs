mod commands;
mod queries;
mod service;
pub mod types;

pub use commands::POST_MUTATIONS_METRIC;
pub use service::*;
pub use types::{
    AdminPostError, CreateOutcome, CreatePostCommand, EditOutcome, PostSubmission,
    UpdatePostCommand,
};
