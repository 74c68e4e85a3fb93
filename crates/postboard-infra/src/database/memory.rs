//! In-memory post repository - used when no database is configured.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use postboard_core::domain::{NewPost, Post, PostFilter, SortOrder};
use postboard_core::error::RepoError;
use postboard_core::ports::{BaseRepository, PostRepository};

#[derive(Default)]
struct Store {
    posts: BTreeMap<i32, Post>,
    last_id: i32,
}

/// Post repository over a `BTreeMap` guarded by an async RwLock.
///
/// Ids are handed out from a counter and never reused, even after deletes.
/// Note: Data is lost on process restart.
#[derive(Default)]
pub struct InMemoryPostRepository {
    store: RwLock<Store>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<Post, i32> for InMemoryPostRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.posts.get(&id).cloned())
    }

    async fn delete(&self, id: i32) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        store
            .posts
            .remove(&id)
            .map(|_| ())
            .ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    /// Names compare by byte order, so uppercase sorts before lowercase. PostgreSQL
    /// orders by the column collation and may interleave mixed-case names.
    async fn search(&self, filter: &PostFilter) -> Result<Vec<Post>, RepoError> {
        let store = self.store.read().await;
        let mut posts: Vec<Post> = store
            .posts
            .values()
            .filter(|p| filter.matches(&p.name))
            .cloned()
            .collect();

        // Ties on name fall back to id order in both directions.
        posts.sort_by(|a, b| {
            let by_name = match filter.sort {
                SortOrder::Ascending => a.name.cmp(&b.name),
                SortOrder::Descending => b.name.cmp(&a.name),
            };
            by_name.then(a.id.cmp(&b.id))
        });

        Ok(posts)
    }

    async fn insert(&self, post: NewPost) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;
        let id = store
            .last_id
            .checked_add(1)
            .ok_or_else(|| RepoError::Query("post id sequence exhausted".to_string()))?;
        store.last_id = id;

        let post = post.into_post(id);
        store.posts.insert(id, post.clone());
        Ok(post)
    }

    async fn update(&self, post: Post) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;
        let stored = store.posts.get_mut(&post.id).ok_or(RepoError::NotFound)?;

        stored.name = post.name;
        stored.description = post.description;
        stored.image = post.image;
        Ok(stored.clone())
    }
}
