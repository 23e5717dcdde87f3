//! Progress view query handlers.

mod get_content_progress;

pub use get_content_progress::{GetContentProgressHandler, GetContentProgressQuery};
