//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod repository;
mod service;

pub use repository::{BaseRepository, PostRepository};
pub use service::PostService;
