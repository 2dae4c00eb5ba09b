use crate::error::BlogClientError;
use crate::models::{NewPost, NewUser, Post, PostPatch, PostUpdate, User};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::debug;

#[derive(Clone)]
pub struct BlogClient {
    client: Arc<Client>,
    base_url: String,
}

impl BlogClient {
    pub fn connect(endpoint: &str) -> Result<Self, BlogClientError> {
        let base_url = endpoint.trim_end_matches('/').to_string();
        Ok(Self {
            client: Arc::new(Client::builder().build()?),
            base_url,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, BlogClientError> {
        if resp.status().is_success() {
            Ok(resp.json().await?)
        } else {
            Err(BlogClientError::from_http_response(resp).await)
        }
    }

    pub async fn create_user(&self, user: &NewUser) -> Result<User, BlogClientError> {
        debug!(username = %user.username, "creating user");
        let resp = self.client.post(self.url("/users")).json(user).send().await?;
        Self::decode(resp).await
    }

    pub async fn get_user(&self, id: i64) -> Result<User, BlogClientError> {
        let resp = self.client.get(self.url(&format!("/users/{}", id))).send().await?;
        Self::decode(resp).await
    }

    pub async fn list_user_posts(&self, user_id: i64) -> Result<Vec<Post>, BlogClientError> {
        let resp = self
            .client
            .get(self.url(&format!("/users/{}/posts", user_id)))
            .send()
            .await?;
        Self::decode(resp).await
    }

    pub async fn list_posts(&self) -> Result<Vec<Post>, BlogClientError> {
        let resp = self.client.get(self.url("/posts")).send().await?;
        Self::decode(resp).await
    }

    pub async fn get_post(&self, id: i64) -> Result<Post, BlogClientError> {
        let resp = self.client.get(self.url(&format!("/posts/{}", id))).send().await?;
        Self::decode(resp).await
    }

    pub async fn create_post(&self, post: &NewPost) -> Result<Post, BlogClientError> {
        debug!(user_id = post.user_id, "creating post");
        let resp = self.client.post(self.url("/posts")).json(post).send().await?;
        Self::decode(resp).await
    }

    pub async fn update_post(&self, id: i64, update: &PostUpdate) -> Result<Post, BlogClientError> {
        let resp = self
            .client
            .put(self.url(&format!("/posts/{}", id)))
            .json(update)
            .send()
            .await?;
        Self::decode(resp).await
    }

    pub async fn patch_post(&self, id: i64, patch: &PostPatch) -> Result<Post, BlogClientError> {
        let resp = self
            .client
            .patch(self.url(&format!("/posts/{}", id)))
            .json(patch)
            .send()
            .await?;
        Self::decode(resp).await
    }

    pub async fn delete_post(&self, id: i64) -> Result<(), BlogClientError> {
        let resp = self
            .client
            .delete(self.url(&format!("/posts/{}", id)))
            .send()
            .await?;

        if resp.status().is_success() {
            Ok(())
        } else {
            Err(BlogClientError::from_http_response(resp).await)
        }
    }
}
