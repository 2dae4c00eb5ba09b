use std::sync::Arc;

use tracing::instrument;

use crate::data::post_repository::PostRepository;
use crate::data::user_repository::UserRepository;
use crate::domain::error::DomainError;
use crate::domain::post::PostWithAuthor;
use crate::domain::user::{NewUser, User};

#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserRepository>,
    posts: Arc<dyn PostRepository>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>, posts: Arc<dyn PostRepository>) -> Self {
        Self { users, posts }
    }

    pub async fn get_user(&self, id: i64) -> Result<User, DomainError> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or(DomainError::UserNotFound(id))
    }

    /// Username is checked before email, so a request duplicating both
    /// reports the username.
    #[instrument(skip(self))]
    pub async fn create_user(&self, user: NewUser) -> Result<User, DomainError> {
        if self.users.find_by_username(&user.username).await?.is_some() {
            return Err(DomainError::UsernameTaken(user.username));
        }
        if self.users.find_by_email(&user.email).await?.is_some() {
            return Err(DomainError::EmailTaken(user.email));
        }
        self.users.create(user).await
    }

    pub async fn get_user_posts(&self, user_id: i64) -> Result<(User, Vec<PostWithAuthor>), DomainError> {
        let user = self.get_user(user_id).await?;
        let posts = self.posts.list_by_user_with_author(user_id).await?;
        Ok((user, posts))
    }
}
