use async_trait::async_trait;

use crate::domain::{NewPost, Post, PostFilter};
use crate::error::RepoError;

/// Generic repository trait defining lookup and removal by primary key.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Delete an entity by its ID. Returns [`RepoError::NotFound`] if nothing was removed.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, i32> {
    /// All posts passing the filter, ordered by name then id.
    async fn search(&self, filter: &PostFilter) -> Result<Vec<Post>, RepoError>;

    /// Store a new post and return it with its assigned id.
    async fn insert(&self, post: NewPost) -> Result<Post, RepoError>;

    /// Persist name, description and image of an existing post.
    /// `created_at` is never written.
    async fn update(&self, post: Post) -> Result<Post, RepoError>;
}
