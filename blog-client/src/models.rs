use chrono::{DateTime, Utc};
use derive_more::Display;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Display)]
#[display("[{id}] {username} <{email}>")]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub image_file: Option<String>,
    pub image_path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Display)]
#[display("[{id}] {title} (by {}, {})", author.username, date_posted.format("%Y-%m-%d"))]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub user_id: i64,
    pub date_posted: DateTime<Utc>,
    pub author: User,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub user_id: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PostUpdate {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PostPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_decodes_api_payload() {
        let raw = r#"{
            "id": 1,
            "title": "Hello World",
            "content": "First post",
            "user_id": 1,
            "date_posted": "2026-01-16T10:00:00Z",
            "author": {
                "id": 1,
                "username": "alice",
                "email": "a@x.com",
                "image_file": null,
                "image_path": "/static/profile_pics/default.jpg"
            }
        }"#;
        let post: Post = serde_json::from_str(raw).unwrap();
        assert_eq!(post.author.username, "alice");
        assert_eq!(post.to_string(), "[1] Hello World (by alice, 2026-01-16)");
    }

    #[test]
    fn patch_omits_unset_fields() {
        let patch = PostPatch {
            title: None,
            content: Some("Edited".into()),
        };
        assert_eq!(
            serde_json::to_value(patch).unwrap(),
            serde_json::json!({ "content": "Edited" })
        );
    }
}
