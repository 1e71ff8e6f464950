//! Route configuration
//!
//! Centralized route setup: product routes live under `/auth`, operational
//! endpoints at the root.

use actix_web::{web, HttpResponse};
use utoipa::OpenApi;

use crate::handlers;
use crate::metrics;
use crate::openapi::ApiDoc;

/// Configure all routes for the application
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        // Operational endpoints
        .route("/health", web::get().to(health_check))
        .route("/metrics", web::get().to(metrics::metrics_handler))
        .route("/openapi.json", web::get().to(openapi_handler))
        // Product API
        .service(
            web::scope("/auth")
                .route("/", web::get().to(handlers::home))
                .route("/signup", web::post().to(handlers::signup))
                .route("/login", web::post().to(handlers::login))
                .route("/dashboard", web::get().to(handlers::dashboard)),
        );
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

/// OpenAPI JSON endpoint
async fn openapi_handler() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("application/json")
        .json(ApiDoc::openapi())
}
