//! Typed async client for the blog JSON API.

mod error;
mod http_client;
mod models;

pub use error::BlogClientError;
pub use http_client::BlogClient;
pub use models::{NewPost, NewUser, Post, PostPatch, PostUpdate, User};
