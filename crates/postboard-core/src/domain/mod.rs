//! Domain entities - the core business objects.

mod post;
mod query;

pub use post::{NewPost, Post};
pub use query::{PostFilter, SortOrder};
