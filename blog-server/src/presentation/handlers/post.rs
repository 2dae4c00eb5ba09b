use crate::application::post_service::PostService;
use crate::domain::error::DomainError;
use crate::presentation::dto::{
    CreatePostRequest, PatchPostRequest, PostResponse, UpdatePostRequest,
};
use crate::presentation::handlers::request_id;
use actix_web::{HttpRequest, HttpResponse, delete, get, patch, post, put, web};
use tracing::info;

#[post("/posts")]
pub async fn create_post(
    req: HttpRequest,
    posts: web::Data<PostService>,
    payload: web::Json<CreatePostRequest>,
) -> Result<HttpResponse, DomainError> {
    let new_post = payload.into_inner().validate()?;
    let post = posts.create_post(new_post).await?;

    info!(
        request_id = %request_id(&req),
        post_id = post.post.id,
        username = %post.author.username,
        "post created"
    );

    Ok(HttpResponse::Created().json(PostResponse::from(post)))
}

#[get("/posts")]
pub async fn get_posts(posts: web::Data<PostService>) -> Result<HttpResponse, DomainError> {
    let posts = posts.get_posts().await?;
    let response: Vec<PostResponse> = posts.into_iter().map(PostResponse::from).collect();
    Ok(HttpResponse::Ok().json(response))
}

#[get("/posts/{id}")]
pub async fn get_post(
    posts: web::Data<PostService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, DomainError> {
    let post = posts.get_post(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(PostResponse::from(post)))
}

#[put("/posts/{id}")]
pub async fn update_post(
    req: HttpRequest,
    posts: web::Data<PostService>,
    payload: web::Json<UpdatePostRequest>,
    path: web::Path<i64>,
) -> Result<HttpResponse, DomainError> {
    let post_id = path.into_inner();
    let changes = payload.into_inner().validate()?;
    let post = posts.update_post(post_id, changes).await?;

    info!(request_id = %request_id(&req), post_id, "post updated");

    Ok(HttpResponse::Ok().json(PostResponse::from(post)))
}

#[patch("/posts/{id}")]
pub async fn patch_post(
    req: HttpRequest,
    posts: web::Data<PostService>,
    payload: web::Json<PatchPostRequest>,
    path: web::Path<i64>,
) -> Result<HttpResponse, DomainError> {
    let post_id = path.into_inner();
    let changes = payload.into_inner().validate()?;
    let post = posts.update_post(post_id, changes).await?;

    info!(request_id = %request_id(&req), post_id, "post patched");

    Ok(HttpResponse::Ok().json(PostResponse::from(post)))
}

#[delete("/posts/{id}")]
pub async fn delete_post(
    req: HttpRequest,
    posts: web::Data<PostService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, DomainError> {
    let post_id = path.into_inner();
    posts.delete_post(post_id).await?;

    info!(request_id = %request_id(&req), post_id, "post deleted");

    Ok(HttpResponse::NoContent().finish())
}
