use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A user's plan over an interval. An open interval (`end_date` NULL) is the
/// plan currently held.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SubscriptionHistory {
    pub id: Uuid,
    pub user_id: Uuid,
    pub plan: String,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
}

impl SubscriptionHistory {
    /// Check if this interval is still open
    pub fn is_active(&self) -> bool {
        self.end_date.is_none()
    }
}
