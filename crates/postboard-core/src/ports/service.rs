use async_trait::async_trait;

use postboard_shared::dto::{PostRequest, PostResponse};

use crate::domain::PostFilter;
use crate::error::DomainError;

/// Post use cases exposed to the HTTP layer.
///
/// Absent posts are reported as `None`/`false`, not as errors.
#[async_trait]
pub trait PostService: Send + Sync {
    async fn list(&self, filter: PostFilter) -> Result<Vec<PostResponse>, DomainError>;

    async fn get(&self, id: i32) -> Result<Option<PostResponse>, DomainError>;

    async fn create(&self, request: PostRequest) -> Result<PostResponse, DomainError>;

    async fn update(
        &self,
        id: i32,
        request: PostRequest,
    ) -> Result<Option<PostResponse>, DomainError>;

    /// Returns `false` when there was nothing to delete.
    async fn delete(&self, id: i32) -> Result<bool, DomainError>;
}
