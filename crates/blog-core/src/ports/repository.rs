use async_trait::async_trait;

use crate::domain::Blog;
use crate::error::RepoError;

/// Blog repository - the only gateway to persistent storage.
///
/// Three operations, one storage statement each. Handlers never reach the
/// database any other way.
#[async_trait]
pub trait BlogRepository: Send + Sync {
    /// Fetch a page of posts in creation order.
    ///
    /// Returns an empty vector when the table has no rows in range.
    async fn list(&self, limit: u64, offset: u64) -> Result<Vec<Blog>, RepoError>;

    /// Persist a new post. Constraint violations (duplicate slug) surface as
    /// a plain `RepoError` like any other backend failure.
    async fn create(&self, blog: Blog) -> Result<(), RepoError>;

    /// Look up a post by its slug. `Ok(None)` means no row matched.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Blog>, RepoError>;
}
