use crate::error::{AppError, Result};
use crate::models::User;
use sqlx::PgPool;

/// Create a new user with the default party-credit balance
pub async fn create_user(pool: &PgPool, email: &str, password_hash: &str) -> Result<User> {
    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, email, password_hash, subscription_plan, party_credits, created_at, updated_at)
        VALUES (gen_random_uuid(), $1, $2, NULL, 10, CURRENT_TIMESTAMP, CURRENT_TIMESTAMP)
        RETURNING *
        "#,
    )
    .bind(email)
    .bind(password_hash)
    .fetch_one(pool)
    .await
    .map_err(|e| {
        if e.to_string().contains("unique constraint") {
            AppError::EmailAlreadyExists
        } else {
            AppError::Database(e)
        }
    })?;

    Ok(user)
}

/// Get user by email
pub async fn find_user_by_email(pool: &PgPool, email: &str) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT * FROM users WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}
