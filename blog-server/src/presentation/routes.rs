use actix_web::error::{JsonPayloadError, PathError};
use actix_web::{HttpRequest, web};

use crate::domain::error::DomainError;
use crate::domain::validation::{FieldError, ValidationErrors};
use crate::presentation::handlers;
use crate::presentation::middleware::API_PREFIX;

/// Registers the page and API routes plus the extractor error handlers.
/// Middleware is applied by the caller.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error))
        .app_data(web::PathConfig::default().error_handler(path_error))
        .service(
            web::scope(API_PREFIX)
                .service(handlers::health::health)
                .service(handlers::user::create_user)
                .service(handlers::user::get_user)
                .service(handlers::user::get_user_posts)
                .service(handlers::post::get_posts)
                .service(handlers::post::create_post)
                .service(handlers::post::get_post)
                .service(handlers::post::update_post)
                .service(handlers::post::patch_post)
                .service(handlers::post::delete_post),
        )
        .service(handlers::pages::home)
        .service(handlers::pages::post_page)
        .service(handlers::pages::user_posts_page)
        .default_service(web::to(not_found));
}

async fn not_found() -> Result<&'static str, DomainError> {
    Err(DomainError::RouteNotFound)
}

fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let (msg, kind) = match &err {
        JsonPayloadError::ContentType => (
            "Expected a JSON body with content-type application/json".to_string(),
            "content_type",
        ),
        JsonPayloadError::Deserialize(e) if e.is_data() => (e.to_string(), "type_error"),
        other => (format!("JSON decode error: {}", other), "json_invalid"),
    };
    DomainError::Validation(ValidationErrors::single(FieldError::new(&["body"], msg, kind))).into()
}

fn path_error(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    let msg = format!("Input should be a valid integer: {}", err);
    DomainError::Validation(ValidationErrors::single(FieldError::new(
        &["path", "id"],
        msg,
        "int_parsing",
    )))
    .into()
}
