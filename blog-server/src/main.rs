use std::sync::Arc;

use blog_server::application::post_service::PostService;
use blog_server::application::user_service::UserService;
use blog_server::data::post_repository::{PostRepository, PostgresPostRepository};
use blog_server::data::user_repository::{PostgresUserRepository, UserRepository};
use blog_server::infrastructure::config::AppConfig;
use blog_server::infrastructure::database::{create_pool, ensure_schema};
use blog_server::infrastructure::logging::init_logging;
use blog_server::server::start_rest_server;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let config = AppConfig::from_env()?;
    let pool = create_pool(&config.database_url, config.database_max_connections).await?;
    ensure_schema(&pool).await?;

    let user_repo: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(pool.clone()));
    let post_repo: Arc<dyn PostRepository> = Arc::new(PostgresPostRepository::new(pool.clone()));

    let user_service = UserService::new(Arc::clone(&user_repo), Arc::clone(&post_repo));
    let post_service = PostService::new(post_repo, user_repo);

    start_rest_server(config, user_service, post_service).await
}
