use crate::domain::error::DomainError;
use crate::domain::post::{NewPost, Post, PostChanges, PostWithAuthor};
use crate::domain::user::User;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::{error, info};

#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn create(&self, post: NewPost) -> Result<Post, DomainError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, DomainError>;
    /// Same lookup as `find_by_id`, with the author fetched in the same query.
    async fn find_with_author(&self, id: i64) -> Result<Option<PostWithAuthor>, DomainError>;
    async fn list_with_author(&self) -> Result<Vec<PostWithAuthor>, DomainError>;
    async fn list_by_user_with_author(&self, user_id: i64) -> Result<Vec<PostWithAuthor>, DomainError>;
    async fn update(&self, id: i64, changes: PostChanges) -> Result<Option<Post>, DomainError>;
    /// Returns `false` when no row matched `id`.
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;
}

#[derive(Clone)]
pub struct PostgresPostRepository {
    pool: PgPool,
}

impl PostgresPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SELECT_WITH_AUTHOR: &str = r#"
    SELECT p.id, p.title, p.content, p.user_id, p.date_posted,
           u.username AS author_username,
           u.email AS author_email,
           u.image_file AS author_image_file
    FROM posts p
    JOIN users u ON u.id = p.user_id
"#;

#[derive(FromRow)]
struct PostAuthorRow {
    id: i64,
    title: String,
    content: String,
    user_id: i64,
    date_posted: DateTime<Utc>,
    author_username: String,
    author_email: String,
    author_image_file: Option<String>,
}

impl From<PostAuthorRow> for PostWithAuthor {
    fn from(row: PostAuthorRow) -> Self {
        PostWithAuthor {
            author: User {
                id: row.user_id,
                username: row.author_username,
                email: row.author_email,
                image_file: row.author_image_file,
            },
            post: Post {
                id: row.id,
                title: row.title,
                content: row.content,
                user_id: row.user_id,
                date_posted: row.date_posted,
            },
        }
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn create(&self, post: NewPost) -> Result<Post, DomainError> {
        let mut tx = self.pool.begin().await?;

        let created = sqlx::query_as::<_, Post>(
            r#"
            INSERT INTO posts (title, content, user_id, date_posted)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, content, user_id, date_posted
            "#,
        )
        .bind(&post.title)
        .bind(&post.content)
        .bind(post.user_id)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            error!("failed to create post: {}", e);
            DomainError::from(e)
        })?;

        tx.commit().await?;

        info!(post_id = created.id, user_id = created.user_id, "post created");
        Ok(created)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, DomainError> {
        sqlx::query_as::<_, Post>(
            r#"
            SELECT id, title, content, user_id, date_posted
            FROM posts WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!("db error find_by_id {}: {}", id, e);
            DomainError::from(e)
        })
    }

    async fn find_with_author(&self, id: i64) -> Result<Option<PostWithAuthor>, DomainError> {
        let row = sqlx::query_as::<_, PostAuthorRow>(&format!("{SELECT_WITH_AUTHOR} WHERE p.id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                error!("db error find_with_author {}: {}", id, e);
                DomainError::from(e)
            })?;

        Ok(row.map(PostWithAuthor::from))
    }

    async fn list_with_author(&self) -> Result<Vec<PostWithAuthor>, DomainError> {
        let rows = sqlx::query_as::<_, PostAuthorRow>(&format!("{SELECT_WITH_AUTHOR} ORDER BY p.id"))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!("db error while fetching posts: {}", e);
                DomainError::from(e)
            })?;

        Ok(rows.into_iter().map(PostWithAuthor::from).collect())
    }

    async fn list_by_user_with_author(&self, user_id: i64) -> Result<Vec<PostWithAuthor>, DomainError> {
        let rows = sqlx::query_as::<_, PostAuthorRow>(&format!(
            "{SELECT_WITH_AUTHOR} WHERE p.user_id = $1 ORDER BY p.id"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("db error while fetching posts of user {}: {}", user_id, e);
            DomainError::from(e)
        })?;

        Ok(rows.into_iter().map(PostWithAuthor::from).collect())
    }

    async fn update(&self, id: i64, changes: PostChanges) -> Result<Option<Post>, DomainError> {
        let mut tx = self.pool.begin().await?;

        let post = sqlx::query_as::<_, Post>(
            r#"
            UPDATE posts
            SET
                title = COALESCE($1, title),
                content = COALESCE($2, content)
            WHERE id = $3
            RETURNING id, title, content, user_id, date_posted
            "#,
        )
        .bind(changes.title)
        .bind(changes.content)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| {
            error!("failed to update post {}: {}", id, e);
            DomainError::from(e)
        })?;

        tx.commit().await?;

        if post.is_some() {
            info!(post_id = id, "post updated");
        }

        Ok(post)
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let mut tx = self.pool.begin().await?;

        let deleted = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                error!("failed to delete post {}: {}", id, e);
                DomainError::from(e)
            })?;

        tx.commit().await?;

        let removed = deleted.rows_affected() > 0;
        if removed {
            info!(post_id = id, "post deleted");
        }
        Ok(removed)
    }
}
