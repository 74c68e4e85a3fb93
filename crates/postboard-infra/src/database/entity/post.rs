//! Post entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};

use postboard_core::domain::{NewPost, Post};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(200))")]
    pub name: String,
    #[sea_orm(column_type = "String(StringLen::N(2000))")]
    pub description: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub image: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            image: model.image,
            created_at: model.created_at.into(),
        }
    }
}

/// Insert model: the id is left to the `SERIAL` column.
impl From<NewPost> for ActiveModel {
    fn from(post: NewPost) -> Self {
        Self {
            id: NotSet,
            name: Set(post.name),
            description: Set(post.description),
            image: Set(post.image),
            created_at: Set(post.created_at.into()),
        }
    }
}

/// Update model: only the editable columns are written, `created_at` is left out.
impl From<Post> for ActiveModel {
    fn from(post: Post) -> Self {
        Self {
            id: Unchanged(post.id),
            name: Set(post.name),
            description: Set(post.description),
            image: Set(post.image),
            created_at: NotSet,
        }
    }
}
