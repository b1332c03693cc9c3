use serde::Deserialize;

/// Body of the edit form. Missing fields deserialize as empty and fail validation.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct AdminPostForm {
    pub(crate) title: String,
    pub(crate) markdown: String,
    pub(crate) intent: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct AdminPostCreateForm {
    pub(crate) slug: String,
    pub(crate) title: String,
    pub(crate) markdown: String,
}
