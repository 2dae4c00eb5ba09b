pub mod post_service;
pub mod user_service;
