use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Blog entity - a single published post.
///
/// `slug` is the external lookup key; `id` is generated server-side and never
/// accepted from a client. `cover_link` is `None` when the post has no cover,
/// which the wire layer renders as an empty string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Blog {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub slug: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub cover_link: Option<String>,
}

impl Blog {
    /// Create a new blog post with a generated ID and creation timestamp.
    pub fn new(
        title: String,
        content: String,
        slug: String,
        tags: Vec<String>,
        created_by: String,
        cover_link: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            content,
            slug,
            tags,
            created_at: Utc::now(),
            created_by,
            cover_link,
        }
    }
}
