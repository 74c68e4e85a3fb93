//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func, LikeExpr, Order};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryFilter, QueryOrder};

use postboard_core::domain::{NewPost, Post, PostFilter, SortOrder};
use postboard_core::error::RepoError;
use postboard_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};
use super::postgres_base::{PostgresBaseRepository, repo_error};

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

/// Escape `LIKE` wildcards so the term matches literally (escape char `\`).
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn search(&self, filter: &PostFilter) -> Result<Vec<Post>, RepoError> {
        let mut query = PostEntity::find();

        if let Some(term) = &filter.search {
            let pattern = format!("%{}%", escape_like(&term.to_lowercase()));
            query = query.filter(
                Expr::expr(Func::lower(Expr::col(post::Column::Name)))
                    .like(LikeExpr::new(pattern).escape('\\')),
            );
        }

        let order = match filter.sort {
            SortOrder::Ascending => Order::Asc,
            SortOrder::Descending => Order::Desc,
        };

        let result = query
            .order_by(post::Column::Name, order)
            .order_by_asc(post::Column::Id)
            .all(&self.db)
            .await
            .map_err(repo_error)?;

        tracing::debug!(search = ?filter.search, rows = result.len(), "Searched posts");

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn insert(&self, post: NewPost) -> Result<Post, RepoError> {
        let model = post::ActiveModel::from(post)
            .insert(&self.db)
            .await
            .map_err(repo_error)?;

        tracing::debug!(post_id = model.id, "Inserted post");
        Ok(model.into())
    }

    async fn update(&self, post: Post) -> Result<Post, RepoError> {
        let model = post::ActiveModel::from(post)
            .update(&self.db)
            .await
            .map_err(repo_error)?;

        Ok(model.into())
    }
}
