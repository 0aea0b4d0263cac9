//! Application state - shared across all handlers.

use std::sync::Arc;

use tokio::sync::RwLock;

use blog_core::domain::Blog;
use blog_core::error::RepoError;
use blog_core::ports::BlogRepository;
use blog_infra::{DatabaseConfig, PostgresBlogRepository};

/// Shared application state.
///
/// The repository is injected here once at startup; handlers never touch a
/// global storage handle.
#[derive(Clone)]
pub struct AppState {
    pub blogs: Arc<dyn BlogRepository>,
}

impl AppState {
    /// Build the application state with the appropriate repository.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        let blogs: Arc<dyn BlogRepository> = if let Some(config) = db_config {
            match blog_infra::connect(config).await {
                Ok(conn) => Arc::new(PostgresBlogRepository::new(conn)),
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                    Arc::new(InMemoryBlogRepository::new())
                }
            }
        } else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            Arc::new(InMemoryBlogRepository::new())
        };

        tracing::info!("Application state initialized");

        Self { blogs }
    }

    /// Build state around an explicit repository. Used by tests to substitute
    /// storage.
    pub fn with_repository(blogs: Arc<dyn BlogRepository>) -> Self {
        Self { blogs }
    }
}

/// In-memory blog repository for when the database is not configured.
///
/// Rows live in creation order, so pagination behaves like the Postgres
/// implementation. Data is lost on process restart.
pub struct InMemoryBlogRepository {
    blogs: RwLock<Vec<Blog>>,
}

impl InMemoryBlogRepository {
    pub fn new() -> Self {
        Self {
            blogs: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryBlogRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl BlogRepository for InMemoryBlogRepository {
    async fn list(&self, limit: u64, offset: u64) -> Result<Vec<Blog>, RepoError> {
        let blogs = self.blogs.read().await;
        Ok(blogs
            .iter()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn create(&self, blog: Blog) -> Result<(), RepoError> {
        let mut blogs = self.blogs.write().await;
        blogs.push(blog);
        Ok(())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Blog>, RepoError> {
        let blogs = self.blogs.read().await;
        Ok(blogs.iter().find(|b| b.slug == slug).cloned())
    }
}
