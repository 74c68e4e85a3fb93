//! Post service - maps DTOs to entities and orchestrates repository calls.

use std::sync::Arc;

use async_trait::async_trait;

use postboard_shared::dto::{PostRequest, PostResponse};

use crate::domain::{NewPost, PostFilter};
use crate::error::{DomainError, RepoError};
use crate::ports::{PostRepository, PostService};

/// [`PostService`] backed by a [`PostRepository`].
#[derive(Clone)]
pub struct PostManager {
    repo: Arc<dyn PostRepository>,
}

impl PostManager {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl PostService for PostManager {
    async fn list(&self, filter: PostFilter) -> Result<Vec<PostResponse>, DomainError> {
        let posts = self.repo.search(&filter).await?;
        tracing::debug!(
            search = ?filter.search,
            sort = ?filter.sort,
            count = posts.len(),
            "Listed posts"
        );
        Ok(posts.into_iter().map(Into::into).collect())
    }

    async fn get(&self, id: i32) -> Result<Option<PostResponse>, DomainError> {
        Ok(self.repo.find_by_id(id).await?.map(Into::into))
    }

    async fn create(&self, request: PostRequest) -> Result<PostResponse, DomainError> {
        let post = self.repo.insert(NewPost::from(request)).await?;
        tracing::info!(post_id = post.id, "Post created");
        Ok(post.into())
    }

    async fn update(
        &self,
        id: i32,
        request: PostRequest,
    ) -> Result<Option<PostResponse>, DomainError> {
        let Some(mut post) = self.repo.find_by_id(id).await? else {
            return Ok(None);
        };

        post.apply(request);
        match self.repo.update(post).await {
            Ok(updated) => {
                tracing::info!(post_id = id, "Post updated");
                Ok(Some(updated.into()))
            }
            // Removed between the lookup and the write.
            Err(RepoError::NotFound) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, id: i32) -> Result<bool, DomainError> {
        if self.repo.find_by_id(id).await?.is_none() {
            return Ok(false);
        }

        match self.repo.delete(id).await {
            Ok(()) => {
                tracing::info!(post_id = id, "Post deleted");
                Ok(true)
            }
            Err(RepoError::NotFound) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use chrono::{Duration, Utc};

    use super::*;
    use crate::domain::{Post, SortOrder};
    use crate::ports::BaseRepository;

    /// Vec-backed repository; `fail` makes every call return a query error.
    #[derive(Default)]
    struct FakeRepo {
        posts: Mutex<Vec<Post>>,
        fail: bool,
    }

    impl FakeRepo {
        fn check(&self) -> Result<(), RepoError> {
            if self.fail {
                return Err(RepoError::Query("connection reset".to_string()));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl BaseRepository<Post, i32> for FakeRepo {
        async fn find_by_id(&self, id: i32) -> Result<Option<Post>, RepoError> {
            self.check()?;
            let posts = self.posts.lock().unwrap();
            Ok(posts.iter().find(|p| p.id == id).cloned())
        }

        async fn delete(&self, id: i32) -> Result<(), RepoError> {
            self.check()?;
            let mut posts = self.posts.lock().unwrap();
            let before = posts.len();
            posts.retain(|p| p.id != id);
            if posts.len() == before {
                return Err(RepoError::NotFound);
            }
            Ok(())
        }
    }

    #[async_trait]
    impl PostRepository for FakeRepo {
        async fn search(&self, filter: &PostFilter) -> Result<Vec<Post>, RepoError> {
            self.check()?;
            let mut found: Vec<Post> = self
                .posts
                .lock()
                .unwrap()
                .iter()
                .filter(|p| filter.matches(&p.name))
                .cloned()
                .collect();
            found.sort_by(|a, b| a.name.cmp(&b.name));
            if filter.sort == SortOrder::Descending {
                found.reverse();
            }
            Ok(found)
        }

        async fn insert(&self, post: NewPost) -> Result<Post, RepoError> {
            self.check()?;
            let mut posts = self.posts.lock().unwrap();
            let id = posts.iter().map(|p| p.id).max().unwrap_or(0) + 1;
            let post = post.into_post(id);
            posts.push(post.clone());
            Ok(post)
        }

        async fn update(&self, post: Post) -> Result<Post, RepoError> {
            self.check()?;
            let mut posts = self.posts.lock().unwrap();
            let slot = posts
                .iter_mut()
                .find(|p| p.id == post.id)
                .ok_or(RepoError::NotFound)?;
            *slot = post.clone();
            Ok(post)
        }
    }

    fn request(name: &str) -> PostRequest {
        PostRequest {
            name: name.to_string(),
            description: format!("About {name}"),
            image: None,
        }
    }

    fn service(repo: FakeRepo) -> PostManager {
        PostManager::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_timestamp() {
        let service = service(FakeRepo::default());
        let before = Utc::now();

        let created = service.create(request("First")).await.unwrap();

        assert_eq!(created.id, 1);
        assert_eq!(created.name, "First");
        assert!(created.created_at >= before);
        assert_eq!(service.get(1).await.unwrap(), Some(created));
    }

    #[tokio::test]
    async fn test_update_keeps_id_and_created_at() {
        let created_at = Utc::now() - Duration::days(3);
        let repo = FakeRepo::default();
        repo.posts.lock().unwrap().push(Post {
            id: 4,
            name: "Old".to_string(),
            description: "Old text".to_string(),
            image: Some("https://example.com/old.png".to_string()),
            created_at,
        });
        let service = service(repo);

        let updated = service.update(4, request("New")).await.unwrap().unwrap();

        assert_eq!(updated.id, 4);
        assert_eq!(updated.name, "New");
        assert_eq!(updated.image, None);
        assert_eq!(updated.created_at, created_at);
    }

    #[tokio::test]
    async fn test_missing_post_is_not_an_error() {
        let service = service(FakeRepo::default());

        assert_eq!(service.get(9).await.unwrap(), None);
        assert_eq!(service.update(9, request("x")).await.unwrap(), None);
        assert!(!service.delete(9).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let service = service(FakeRepo::default());
        let created = service.create(request("Gone")).await.unwrap();

        assert!(service.delete(created.id).await.unwrap());
        assert!(!service.delete(created.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_list_applies_filter() {
        let service = service(FakeRepo::default());
        for name in ["banana", "Apple pie", "cherry apple"] {
            service.create(request(name)).await.unwrap();
        }

        let names: Vec<String> = service
            .list(PostFilter::from_params(Some("apple"), Some("desc")))
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();

        assert_eq!(names, vec!["cherry apple", "Apple pie"]);
    }

    #[tokio::test]
    async fn test_repository_failure_propagates() {
        let service = service(FakeRepo {
            fail: true,
            ..Default::default()
        });

        let err = service.list(PostFilter::default()).await.unwrap_err();
        assert!(matches!(err, DomainError::Repository(RepoError::Query(_))));
    }
}
