//! Server-rendered HTML pages.

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use askama::Template;

use crate::domain::error::DomainError;
use crate::presentation::dto::{PostResponse, UserResponse};

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomePage {
    pub title: String,
    pub posts: Vec<PostResponse>,
}

#[derive(Template)]
#[template(path = "post.html")]
pub struct PostPage {
    pub title: String,
    pub post: PostResponse,
}

#[derive(Template)]
#[template(path = "user_posts.html")]
pub struct UserPostsPage {
    pub title: String,
    pub user: UserResponse,
    pub posts: Vec<PostResponse>,
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorPage {
    pub title: String,
    pub status_code: u16,
    pub message: String,
}

pub fn render<T: Template>(page: &T) -> Result<HttpResponse, DomainError> {
    let html = page
        .render()
        .map_err(|e| DomainError::Internal(format!("template error: {}", e)))?;
    Ok(HttpResponse::Ok().content_type(ContentType::html()).body(html))
}

/// Renders the error page. Falls back to plain text if the template itself fails.
pub fn render_error(status: StatusCode, message: &str) -> HttpResponse {
    let page = ErrorPage {
        title: status.canonical_reason().unwrap_or("Error").to_string(),
        status_code: status.as_u16(),
        message: message.to_string(),
    };
    match page.render() {
        Ok(html) => HttpResponse::build(status)
            .content_type(ContentType::html())
            .body(html),
        Err(e) => {
            tracing::error!("failed to render error page: {}", e);
            HttpResponse::build(status)
                .content_type(ContentType::plaintext())
                .body(format!("{} {}", status.as_u16(), message))
        }
    }
}
