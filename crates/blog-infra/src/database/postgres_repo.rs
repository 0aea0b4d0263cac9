//! PostgreSQL repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DbConn, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use blog_core::domain::Blog;
use blog_core::error::RepoError;
use blog_core::ports::BlogRepository;

use super::entity::blog::{self, Entity as BlogEntity};

/// PostgreSQL blog repository.
pub struct PostgresBlogRepository {
    db: DbConn,
}

impl PostgresBlogRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BlogRepository for PostgresBlogRepository {
    async fn list(&self, limit: u64, offset: u64) -> Result<Vec<Blog>, RepoError> {
        let rows = BlogEntity::find()
            .order_by_asc(blog::Column::CreatedAt)
            .limit(limit)
            .offset(offset)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn create(&self, entry: Blog) -> Result<(), RepoError> {
        let active: blog::ActiveModel = entry.into();

        BlogEntity::insert(active)
            .exec_without_returning(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Blog>, RepoError> {
        tracing::debug!(slug = %slug, "Finding blog by slug");

        let row = BlogEntity::find()
            .filter(blog::Column::Slug.eq(slug))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.map(Into::into))
    }
}

fn map_db_err(err: DbErr) -> RepoError {
    match err {
        DbErr::Conn(e) => RepoError::Connection(e.to_string()),
        DbErr::ConnectionAcquire(e) => RepoError::Connection(e.to_string()),
        other => {
            let msg = other.to_string();
            if msg.contains("duplicate") || msg.contains("unique") {
                RepoError::Constraint(msg)
            } else {
                RepoError::Query(msg)
            }
        }
    }
}
