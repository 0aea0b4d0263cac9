//! Blog entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "blogs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    #[sea_orm(unique)]
    pub slug: String,
    pub tags: Vec<String>,
    pub created_at: DateTimeWithTimeZone,
    pub created_by: String,
    pub cover_link: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to the domain Blog.
impl From<Model> for blog_core::domain::Blog {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            content: model.content,
            slug: model.slug,
            tags: model.tags,
            created_at: model.created_at.into(),
            created_by: model.created_by,
            cover_link: model.cover_link,
        }
    }
}

/// Conversion from the domain Blog to a SeaORM ActiveModel.
impl From<blog_core::domain::Blog> for ActiveModel {
    fn from(blog: blog_core::domain::Blog) -> Self {
        Self {
            id: Set(blog.id),
            title: Set(blog.title),
            content: Set(blog.content),
            slug: Set(blog.slug),
            tags: Set(blog.tags),
            created_at: Set(blog.created_at.into()),
            created_by: Set(blog.created_by),
            cover_link: Set(blog.cover_link),
        }
    }
}
