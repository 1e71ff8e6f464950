use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A pub venue. Rows are created by an administrative process, not through
/// the public API; `qr_code` holds the path of the venue's generated QR image.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Pub {
    pub id: Uuid,
    pub name: String,
    pub location: Option<String>,
    pub qr_code: Option<String>,
    pub created_at: DateTime<Utc>,
}
