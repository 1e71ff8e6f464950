use crate::error::Result;
use crate::models::SubscriptionHistory;
use sqlx::PgPool;
use uuid::Uuid;

/// Open a new plan interval for a user
pub async fn record_plan(pool: &PgPool, user_id: Uuid, plan: &str) -> Result<SubscriptionHistory> {
    let row = sqlx::query_as::<_, SubscriptionHistory>(
        r#"
        INSERT INTO subscription_history (id, user_id, plan, start_date, end_date)
        VALUES (gen_random_uuid(), $1, $2, CURRENT_TIMESTAMP, NULL)
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(plan)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

/// Close any open plan intervals for a user, returning how many were closed
pub async fn close_open_plans(pool: &PgPool, user_id: Uuid) -> Result<u64> {
    let result = sqlx::query(
        r#"
        UPDATE subscription_history SET end_date = CURRENT_TIMESTAMP
        WHERE user_id = $1 AND end_date IS NULL
        "#,
    )
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

/// Plan history for a user, most recent interval first
pub async fn plan_history_for_user(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Vec<SubscriptionHistory>> {
    let rows = sqlx::query_as::<_, SubscriptionHistory>(
        r#"
        SELECT * FROM subscription_history WHERE user_id = $1 ORDER BY start_date DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
