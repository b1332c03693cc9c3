use crate::domain::entities::PostRecord;

pub(crate) const POST_COLUMNS: &str = "slug, title, markdown";

#[derive(sqlx::FromRow)]
pub(crate) struct PostRow {
    pub(crate) slug: String,
    pub(crate) title: String,
    pub(crate) markdown: String,
}

impl From<PostRow> for PostRecord {
    fn from(row: PostRow) -> Self {
        Self {
            slug: row.slug,
            title: row.title,
            markdown: row.markdown,
        }
    }
}
