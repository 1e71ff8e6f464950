use crate::error::Result;
use crate::models::QrActivity;
use sqlx::PgPool;
use uuid::Uuid;

/// Record that a user scanned a pub's QR code. The log is append-only.
pub async fn record_scan(pool: &PgPool, user_id: Uuid, pub_name: &str) -> Result<QrActivity> {
    let row = sqlx::query_as::<_, QrActivity>(
        r#"
        INSERT INTO qr_activity (id, user_id, pub_name, scanned_at)
        VALUES (gen_random_uuid(), $1, $2, CURRENT_TIMESTAMP)
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(pub_name)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

/// Scan history for a user, most recent first
pub async fn scans_for_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<QrActivity>> {
    let rows = sqlx::query_as::<_, QrActivity>(
        r#"
        SELECT * FROM qr_activity WHERE user_id = $1 ORDER BY scanned_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
