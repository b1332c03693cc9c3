//! Domain entities mirrored from persistent storage.

/// A blog post as stored in the `posts` table.
///
/// Field order is significant: exports list the fields in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRecord {
    pub slug: String,
    pub title: String,
    pub markdown: String,
}

impl PostRecord {
    pub const FIELD_NAMES: [&'static str; 3] = ["slug", "title", "markdown"];

    pub fn field_values(&self) -> [&str; 3] {
        [
            self.slug.as_str(),
            self.title.as_str(),
            self.markdown.as_str(),
        ]
    }
}
