use crate::domain::post::{NewPost, PostChanges, PostWithAuthor};
use crate::domain::user::{NewUser, User};
use crate::domain::validation::{
    CONTENT_LEN, TITLE_LEN, USERNAME_LEN, ValidationErrors, check_email, check_length, required,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ======================= USERS =======================

#[derive(Debug, Default, Deserialize)]
pub struct CreateUserRequest {
    pub username: Option<String>,
    pub email: Option<String>,
}

impl CreateUserRequest {
    pub fn validate(self) -> Result<NewUser, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let username = required("username", self.username, &mut errors);
        if let Some(username) = &username {
            check_length("username", username, USERNAME_LEN, &mut errors);
        }
        let email = required("email", self.email, &mut errors);
        if let Some(email) = &email {
            check_email("email", email, &mut errors);
        }

        errors.into_result(|| NewUser {
            username: username.unwrap_or_default(),
            email: email.unwrap_or_default().to_lowercase(),
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub image_file: Option<String>,
    pub image_path: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let image_path = user.image_path();
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            image_file: user.image_file,
            image_path,
        }
    }
}

// ======================= POSTS =======================

#[derive(Debug, Default, Deserialize)]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub user_id: Option<i64>,
}

impl CreatePostRequest {
    pub fn validate(self) -> Result<NewPost, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let title = required("title", self.title, &mut errors);
        if let Some(title) = &title {
            check_length("title", title, TITLE_LEN, &mut errors);
        }
        let content = required("content", self.content, &mut errors);
        if let Some(content) = &content {
            check_length("content", content, CONTENT_LEN, &mut errors);
        }
        let user_id = required("user_id", self.user_id, &mut errors);

        errors.into_result(|| NewPost {
            title: title.unwrap_or_default(),
            content: content.unwrap_or_default(),
            user_id: user_id.unwrap_or_default(),
        })
    }
}

/// Full replacement: both fields must be present.
#[derive(Debug, Default, Deserialize)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl UpdatePostRequest {
    pub fn validate(self) -> Result<PostChanges, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let title = required("title", self.title, &mut errors);
        if let Some(title) = &title {
            check_length("title", title, TITLE_LEN, &mut errors);
        }
        let content = required("content", self.content, &mut errors);
        if let Some(content) = &content {
            check_length("content", content, CONTENT_LEN, &mut errors);
        }

        errors.into_result(|| {
            PostChanges::replace(title.unwrap_or_default(), content.unwrap_or_default())
        })
    }
}

/// Partial update: only the supplied fields are validated and written.
#[derive(Debug, Default, Deserialize)]
pub struct PatchPostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl PatchPostRequest {
    pub fn validate(self) -> Result<PostChanges, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Some(title) = &self.title {
            check_length("title", title, TITLE_LEN, &mut errors);
        }
        if let Some(content) = &self.content {
            check_length("content", content, CONTENT_LEN, &mut errors);
        }

        errors.into_result(|| PostChanges {
            title: self.title,
            content: self.content,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PostResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub user_id: i64,
    pub date_posted: DateTime<Utc>,
    pub author: UserResponse,
}

impl From<PostWithAuthor> for PostResponse {
    fn from(PostWithAuthor { post, author }: PostWithAuthor) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            user_id: post.user_id,
            date_posted: post.date_posted,
            author: UserResponse::from(author),
        }
    }
}
