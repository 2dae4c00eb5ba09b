//! In-memory repository double shared by the integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use actix_web::web;
use async_trait::async_trait;
use blog_server::application::post_service::PostService;
use blog_server::application::user_service::UserService;
use blog_server::data::post_repository::PostRepository;
use blog_server::data::user_repository::UserRepository;
use blog_server::domain::error::DomainError;
use blog_server::domain::post::{NewPost, Post, PostChanges, PostWithAuthor};
use blog_server::domain::user::{NewUser, User};
use blog_server::presentation::routes;
use chrono::Utc;

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    posts: Vec<Post>,
    next_user_id: i64,
    next_post_id: i64,
}

/// Behaves like the PostgreSQL repositories: generated ids start at 1,
/// usernames and emails are unique, listing is in insertion order.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    writes: AtomicUsize,
}

impl MemoryStore {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Number of successful inserts, updates and deletes.
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn post_count(&self) -> usize {
        self.tables.lock().unwrap().posts.len()
    }

    pub fn user_count(&self) -> usize {
        self.tables.lock().unwrap().users.len()
    }

    fn with_author(tables: &Tables, post: &Post) -> PostWithAuthor {
        let author = tables
            .users
            .iter()
            .find(|u| u.id == post.user_id)
            .cloned()
            .expect("post references a missing user");
        PostWithAuthor {
            post: post.clone(),
            author,
        }
    }

    fn wrote(&self) {
        self.writes.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn create(&self, user: NewUser) -> Result<User, DomainError> {
        let mut tables = self.tables.lock().unwrap();
        if tables.users.iter().any(|u| u.username == user.username) {
            return Err(DomainError::UsernameTaken(user.username));
        }
        if tables.users.iter().any(|u| u.email == user.email) {
            return Err(DomainError::EmailTaken(user.email));
        }
        tables.next_user_id += 1;
        let created = User {
            id: tables.next_user_id,
            username: user.username,
            email: user.email,
            image_file: None,
        };
        tables.users.push(created.clone());
        self.wrote();
        Ok(created)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.users.iter().find(|u| u.username == username).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.users.iter().find(|u| u.email == email).cloned())
    }
}

#[async_trait]
impl PostRepository for MemoryStore {
    async fn create(&self, post: NewPost) -> Result<Post, DomainError> {
        let mut tables = self.tables.lock().unwrap();
        if !tables.users.iter().any(|u| u.id == post.user_id) {
            return Err(DomainError::Internal("foreign key violation".into()));
        }
        tables.next_post_id += 1;
        let created = Post {
            id: tables.next_post_id,
            title: post.title,
            content: post.content,
            user_id: post.user_id,
            date_posted: Utc::now(),
        };
        tables.posts.push(created.clone());
        self.wrote();
        Ok(created)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, DomainError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.posts.iter().find(|p| p.id == id).cloned())
    }

    async fn find_with_author(&self, id: i64) -> Result<Option<PostWithAuthor>, DomainError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .posts
            .iter()
            .find(|p| p.id == id)
            .map(|p| Self::with_author(&tables, p)))
    }

    async fn list_with_author(&self) -> Result<Vec<PostWithAuthor>, DomainError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .posts
            .iter()
            .map(|p| Self::with_author(&tables, p))
            .collect())
    }

    async fn list_by_user_with_author(&self, user_id: i64) -> Result<Vec<PostWithAuthor>, DomainError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .posts
            .iter()
            .filter(|p| p.user_id == user_id)
            .map(|p| Self::with_author(&tables, p))
            .collect())
    }

    async fn update(&self, id: i64, changes: PostChanges) -> Result<Option<Post>, DomainError> {
        let mut tables = self.tables.lock().unwrap();
        let Some(post) = tables.posts.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        changes.apply_to(post);
        let updated = post.clone();
        self.wrote();
        Ok(Some(updated))
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let mut tables = self.tables.lock().unwrap();
        let before = tables.posts.len();
        tables.posts.retain(|p| p.id != id);
        let removed = tables.posts.len() < before;
        if removed {
            self.wrote();
        }
        Ok(removed)
    }
}

pub fn services(store: &Arc<MemoryStore>) -> (UserService, PostService) {
    let users: Arc<dyn UserRepository> = store.clone();
    let posts: Arc<dyn PostRepository> = store.clone();
    (
        UserService::new(Arc::clone(&users), Arc::clone(&posts)),
        PostService::new(posts, users),
    )
}

/// Registers services backed by `store` and the full route table.
pub fn setup(store: Arc<MemoryStore>) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        let (users, posts) = services(&store);
        cfg.app_data(web::Data::new(users))
            .app_data(web::Data::new(posts))
            .configure(routes::configure);
    }
}

/// Builds the test service with the same middleware stack the server uses
/// for error translation, timing and request ids.
macro_rules! init_app {
    ($store:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(blog_server::presentation::middleware::ErrorPageMiddleware)
                .wrap(blog_server::presentation::middleware::TimingMiddleware)
                .wrap(blog_server::presentation::middleware::RequestIdMiddleware)
                .configure(common::setup($store)),
        )
        .await
    };
}

pub(crate) use init_app;
