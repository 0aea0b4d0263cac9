//! Data Transfer Objects - request/response types for the API.
//!
//! Field names are camelCase on the wire. The conversions in this module are
//! the only place the optional cover link crosses between its storage shape
//! (`Option<String>`) and its wire shape (`""` when absent), and the only
//! place the id is rendered to its string form.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use blog_core::domain::Blog;

/// Request to create a blog post.
///
/// Every field defaults when missing from the body; title and slug are
/// checked for presence by the handler, not the decoder.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlogRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub created_by: String,
    #[serde(default)]
    pub cover_link: String,
}

impl CreateBlogRequest {
    /// Build the domain entity: generates id and timestamp, and translates an
    /// empty cover link into the absent state.
    pub fn into_blog(self) -> Blog {
        let cover_link = if self.cover_link.is_empty() {
            None
        } else {
            Some(self.cover_link)
        };

        Blog::new(
            self.title,
            self.content,
            self.slug,
            self.tags,
            self.created_by,
            cover_link,
        )
    }
}

/// A blog post as rendered to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    pub slug: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    pub cover_link: String,
}

impl From<Blog> for BlogResponse {
    fn from(blog: Blog) -> Self {
        Self {
            id: blog.id.to_string(),
            title: blog.title,
            content: blog.content,
            slug: blog.slug,
            tags: blog.tags,
            created_at: blog.created_at,
            created_by: blog.created_by,
            cover_link: blog.cover_link.unwrap_or_default(),
        }
    }
}
