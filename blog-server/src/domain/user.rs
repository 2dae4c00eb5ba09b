pub const DEFAULT_IMAGE_FILE: &str = "default.jpg";

#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub image_file: Option<String>,
}

impl User {
    /// Public URL of the profile picture, falling back to the shared default image.
    pub fn image_path(&self) -> String {
        let file = self.image_file.as_deref().unwrap_or(DEFAULT_IMAGE_FILE);
        format!("/static/profile_pics/{}", file)
    }
}

/// Validated input for inserting a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(image_file: Option<&str>) -> User {
        User {
            id: 1,
            username: "alice".into(),
            email: "a@x.com".into(),
            image_file: image_file.map(str::to_string),
        }
    }

    #[test]
    fn image_path_uses_default_when_unset() {
        assert_eq!(user(None).image_path(), "/static/profile_pics/default.jpg");
    }

    #[test]
    fn image_path_uses_custom_file() {
        assert_eq!(
            user(Some("alice.png")).image_path(),
            "/static/profile_pics/alice.png"
        );
    }
}
