use std::sync::Arc;

use crate::data::post_repository::PostRepository;
use crate::data::user_repository::UserRepository;
use crate::domain::error::DomainError;
use crate::domain::post::{NewPost, PostChanges, PostWithAuthor};
use tracing::instrument;

#[derive(Clone)]
pub struct PostService {
    posts: Arc<dyn PostRepository>,
    users: Arc<dyn UserRepository>,
}

impl PostService {
    pub fn new(posts: Arc<dyn PostRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { posts, users }
    }

    pub async fn get_post(&self, id: i64) -> Result<PostWithAuthor, DomainError> {
        self.posts
            .find_with_author(id)
            .await?
            .ok_or(DomainError::PostNotFound(id))
    }

    pub async fn get_posts(&self) -> Result<Vec<PostWithAuthor>, DomainError> {
        self.posts.list_with_author().await
    }

    #[instrument(skip(self))]
    pub async fn create_post(&self, post: NewPost) -> Result<PostWithAuthor, DomainError> {
        let author = self
            .users
            .find_by_id(post.user_id)
            .await?
            .ok_or(DomainError::UserNotFound(post.user_id))?;

        let post = self.posts.create(post).await?;
        Ok(PostWithAuthor { post, author })
    }

    /// Applies `changes` and returns the post re-read with its author.
    #[instrument(skip(self))]
    pub async fn update_post(&self, id: i64, changes: PostChanges) -> Result<PostWithAuthor, DomainError> {
        if self.posts.find_by_id(id).await?.is_none() {
            return Err(DomainError::PostNotFound(id));
        }

        if !changes.is_empty() && self.posts.update(id, changes).await?.is_none() {
            return Err(DomainError::PostNotFound(id));
        }

        self.get_post(id).await
    }

    #[instrument(skip(self))]
    pub async fn delete_post(&self, id: i64) -> Result<(), DomainError> {
        if self.posts.delete(id).await? {
            Ok(())
        } else {
            Err(DomainError::PostNotFound(id))
        }
    }
}
