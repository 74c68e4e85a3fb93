//! Service implementations of the ports.

mod post;

pub use post::PostManager;
