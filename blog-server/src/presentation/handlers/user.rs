use crate::application::user_service::UserService;
use crate::domain::error::DomainError;
use crate::presentation::dto::{CreateUserRequest, PostResponse, UserResponse};
use crate::presentation::handlers::request_id;
use actix_web::{HttpRequest, HttpResponse, get, post, web};
use tracing::info;

#[post("/users")]
pub async fn create_user(
    req: HttpRequest,
    users: web::Data<UserService>,
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, DomainError> {
    let new_user = payload.into_inner().validate()?;
    let user = users.create_user(new_user).await?;

    info!(
        request_id = %request_id(&req),
        user_id = user.id,
        username = %user.username,
        "user registered"
    );

    Ok(HttpResponse::Created().json(UserResponse::from(user)))
}

#[get("/users/{id}")]
pub async fn get_user(
    users: web::Data<UserService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, DomainError> {
    let user = users.get_user(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

#[get("/users/{id}/posts")]
pub async fn get_user_posts(
    users: web::Data<UserService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, DomainError> {
    let (_, posts) = users.get_user_posts(path.into_inner()).await?;
    let response: Vec<PostResponse> = posts.into_iter().map(PostResponse::from).collect();
    Ok(HttpResponse::Ok().json(response))
}
