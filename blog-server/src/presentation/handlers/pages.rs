use crate::application::post_service::PostService;
use crate::application::user_service::UserService;
use crate::domain::error::DomainError;
use crate::presentation::dto::{PostResponse, UserResponse};
use crate::presentation::pages::{HomePage, PostPage, UserPostsPage, render};
use actix_web::{HttpResponse, get, routes, web};

#[routes]
#[get("/")]
#[get("/posts")]
pub async fn home(posts: web::Data<PostService>) -> Result<HttpResponse, DomainError> {
    let posts = posts.get_posts().await?;
    render(&HomePage {
        title: "Home".into(),
        posts: posts.into_iter().map(PostResponse::from).collect(),
    })
}

#[get("/posts/{id}")]
pub async fn post_page(
    posts: web::Data<PostService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, DomainError> {
    let post = PostResponse::from(posts.get_post(path.into_inner()).await?);
    render(&PostPage {
        title: post.title.chars().take(50).collect(),
        post,
    })
}

#[get("/users/{id}/posts")]
pub async fn user_posts_page(
    users: web::Data<UserService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, DomainError> {
    let (user, posts) = users.get_user_posts(path.into_inner()).await?;
    render(&UserPostsPage {
        title: format!("{}'s Posts", user.username),
        user: UserResponse::from(user),
        posts: posts.into_iter().map(PostResponse::from).collect(),
    })
}
