use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Append-only record of a user scanning a pub's QR code.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct QrActivity {
    pub id: Uuid,
    pub user_id: Uuid,
    pub pub_name: String,
    pub scanned_at: DateTime<Utc>,
}
