use crate::error::Result;
use crate::models::Pub;
use sqlx::PgPool;
use uuid::Uuid;

/// Create a new pub
pub async fn create_pub(pool: &PgPool, name: &str, location: Option<&str>) -> Result<Pub> {
    let row = sqlx::query_as::<_, Pub>(
        r#"
        INSERT INTO pubs (id, name, location, qr_code, created_at)
        VALUES (gen_random_uuid(), $1, $2, NULL, CURRENT_TIMESTAMP)
        RETURNING *
        "#,
    )
    .bind(name)
    .bind(location)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

/// Attach the path of a generated QR image to a pub
pub async fn set_qr_code(pool: &PgPool, pub_id: Uuid, qr_code: &str) -> Result<()> {
    sqlx::query(
        r#"
        UPDATE pubs SET qr_code = $1 WHERE id = $2
        "#,
    )
    .bind(qr_code)
    .bind(pub_id)
    .execute(pool)
    .await?;

    Ok(())
}

/// Get pub by name
pub async fn find_pub_by_name(pool: &PgPool, name: &str) -> Result<Option<Pub>> {
    let row = sqlx::query_as::<_, Pub>(
        r#"
        SELECT * FROM pubs WHERE name = $1
        "#,
    )
    .bind(name)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}
