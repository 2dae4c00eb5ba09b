use actix_web::{HttpMessage, HttpRequest};

use crate::presentation::middleware::RequestId;

pub mod health;
pub mod pages;
pub mod post;
pub mod user;

fn request_id(req: &HttpRequest) -> String {
    req.extensions()
        .get::<RequestId>()
        .map(|rid| rid.0.clone())
        .unwrap_or_else(|| "unknown".into())
}
