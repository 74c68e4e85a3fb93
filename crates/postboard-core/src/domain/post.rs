use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use postboard_shared::dto::{PostRequest, PostResponse};

/// Post entity - a named entry with a description and an optional image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Replace the editable fields. `id` and `created_at` stay as they are.
    pub fn apply(&mut self, request: PostRequest) {
        self.name = request.name;
        self.description = request.description;
        self.image = request.image;
    }
}

/// A post that has not been stored yet; the store assigns its id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPost {
    pub name: String,
    pub description: String,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl NewPost {
    /// Create a new post stamped with the current UTC time.
    pub fn new(name: String, description: String, image: Option<String>) -> Self {
        Self {
            name,
            description,
            image,
            created_at: Utc::now(),
        }
    }

    /// Attach the identifier handed out by the store.
    pub fn into_post(self, id: i32) -> Post {
        Post {
            id,
            name: self.name,
            description: self.description,
            image: self.image,
            created_at: self.created_at,
        }
    }
}

impl From<PostRequest> for NewPost {
    fn from(request: PostRequest) -> Self {
        Self::new(request.name, request.description, request.image)
    }
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            name: post.name,
            description: post.description,
            image: post.image,
            created_at: post.created_at,
        }
    }
}
