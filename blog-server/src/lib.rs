//! Blog service: users author posts, posts are listed and viewed as HTML
//! pages, and a JSON API under `/api` exposes the same data.

pub mod application;
pub mod data;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
pub mod server;
