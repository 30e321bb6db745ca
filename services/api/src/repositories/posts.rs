//! Post repository for database operations

use anyhow::Result;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::models::{NewPost, Post, UpdatePost};

fn post_from_row(row: &sqlx::postgres::PgRow) -> Post {
    Post {
        id: row.get("id"),
        user_id: row.get("user_id"),
        title: row.get("title"),
        body: row.get("body"),
        created_at: row.get("created_at"),
    }
}

/// Post repository
#[derive(Clone)]
pub struct PostRepository {
    pool: PgPool,
}

impl PostRepository {
    /// Create a new post repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new post
    pub async fn create(&self, new_post: &NewPost) -> Result<Post> {
        let row = sqlx::query(
            r#"
            INSERT INTO posts (user_id, title, body)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, title, body, created_at
            "#,
        )
        .bind(new_post.user_id)
        .bind(&new_post.title)
        .bind(&new_post.body)
        .fetch_one(&self.pool)
        .await?;

        Ok(post_from_row(&row))
    }

    /// Find a post by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, title, body, created_at
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(post_from_row))
    }

    /// List all posts, newest first
    pub async fn list_all(&self) -> Result<Vec<Post>> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, title, body, created_at
            FROM posts
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(post_from_row).collect())
    }

    /// Update a post's title and body; omitted fields keep their stored values
    pub async fn update(&self, id: Uuid, update: &UpdatePost) -> Result<Post> {
        let row = sqlx::query(
            r#"
            UPDATE posts
            SET title = COALESCE($2, title), body = COALESCE($3, body)
            WHERE id = $1
            RETURNING id, user_id, title, body, created_at
            "#,
        )
        .bind(id)
        .bind(update.title.as_deref())
        .bind(update.body.as_deref())
        .fetch_one(&self.pool)
        .await?;

        Ok(post_from_row(&row))
    }

    /// Delete a post by ID; returns whether a row was removed
    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
