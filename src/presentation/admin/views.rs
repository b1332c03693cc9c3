mod posts;

pub use posts::*;

/// Page shell shared by every admin template.
#[derive(Clone)]
pub struct AdminLayout<T> {
    pub title: String,
    pub content: T,
}

impl<T> AdminLayout<T> {
    pub fn new(title: impl Into<String>, content: T) -> Self {
        Self {
            title: title.into(),
            content,
        }
    }
}
