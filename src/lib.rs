// PartyPass Backend Library

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod openapi;
pub mod routes;
pub mod security;
pub mod services;

pub use error::{AppError, Result};

// Re-export commonly used types
pub use models::{Pub, QrActivity, SubscriptionHistory, User};

#[derive(Clone)]
pub struct AppState {
    pub db: sqlx::PgPool,
    pub config: config::Config,
}
