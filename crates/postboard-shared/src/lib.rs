//! # Postboard Shared
//!
//! Types that cross the HTTP boundary: request/response DTOs and problem-details errors.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
