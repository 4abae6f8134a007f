use sqlx::PgPool;

use crate::users::repo_types::{PublicUser, User};

impl User {
    /// Find a user by (normalized) email, including the password hash.
    pub async fn find_by_email(db: &PgPool, email: &str) -> sqlx::Result<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT user_id, name, email, password_hash, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await
    }

    /// Create a new user with an already hashed password.
    pub async fn create(
        db: &PgPool,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> sqlx::Result<User> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING user_id, name, email, password_hash, created_at
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .fetch_one(db)
        .await
    }
}

impl PublicUser {
    pub async fn list(db: &PgPool) -> sqlx::Result<Vec<PublicUser>> {
        sqlx::query_as::<_, PublicUser>(
            r#"SELECT user_id, name, email FROM users ORDER BY user_id"#,
        )
        .fetch_all(db)
        .await
    }

    pub async fn find(db: &PgPool, user_id: i32) -> sqlx::Result<Option<PublicUser>> {
        sqlx::query_as::<_, PublicUser>(
            r#"SELECT user_id, name, email FROM users WHERE user_id = $1"#,
        )
        .bind(user_id)
        .fetch_optional(db)
        .await
    }
}
