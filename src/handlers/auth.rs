/// Authentication and dashboard handlers
use actix_web::{web, HttpResponse};

use crate::{
    db::user_repo,
    error::AppError,
    metrics,
    models::user::{
        DashboardQuery, DashboardResponse, LoginRequest, MessageResponse, SignupRequest,
        TokenResponse,
    },
    security::{jwt, password},
    AppState,
};

/// Signup endpoint handler
#[utoipa::path(
    post,
    path = "/auth/signup",
    tag = "Auth",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "User registered", body = MessageResponse),
        (status = 400, description = "Email already registered", body = MessageResponse)
    )
)]
pub async fn signup(
    state: web::Data<AppState>,
    payload: web::Json<SignupRequest>,
) -> Result<HttpResponse, AppError> {
    if user_repo::find_user_by_email(&state.db, &payload.email)
        .await?
        .is_some()
    {
        return Err(AppError::EmailAlreadyExists);
    }

    let password_hash = password::hash_password(&payload.password)?;
    let user = user_repo::create_user(&state.db, &payload.email, &password_hash).await?;

    tracing::info!(user_id = %user.id, "user registered");
    metrics::SIGNUPS_TOTAL.inc();

    Ok(HttpResponse::Created().json(MessageResponse {
        message: "User registered successfully".to_string(),
    }))
}

/// Login endpoint handler
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "Auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "User logged in", body = TokenResponse),
        (status = 401, description = "Invalid credentials", body = MessageResponse),
        (status = 404, description = "Unknown email", body = MessageResponse)
    )
)]
pub async fn login(
    state: web::Data<AppState>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let user = user_repo::find_user_by_email(&state.db, &payload.email)
        .await?
        .ok_or(AppError::UserNotFound)?;

    password::verify_password(&payload.password, &user.password_hash)?;

    let token = jwt::generate_access_token(
        &state.config.jwt_secret,
        state.config.jwt_access_token_ttl,
        user.id,
        &user.email,
    )?;

    tracing::info!(user_id = %user.id, "user logged in");
    metrics::LOGINS_TOTAL.inc();

    Ok(HttpResponse::Ok().json(TokenResponse { token }))
}

/// Welcome route
#[utoipa::path(
    get,
    path = "/auth/",
    tag = "Auth",
    responses(
        (status = 200, description = "Welcome message", body = String, content_type = "text/plain")
    )
)]
pub async fn home() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Welcome to PartyPass Backend API!")
}

/// Dashboard endpoint handler
#[utoipa::path(
    get,
    path = "/auth/dashboard",
    tag = "Auth",
    params(
        ("email" = Option<String>, Query, description = "Email of the user to look up")
    ),
    responses(
        (status = 200, description = "Dashboard data", body = DashboardResponse),
        (status = 400, description = "Missing email parameter", body = MessageResponse),
        (status = 404, description = "Unknown email", body = MessageResponse)
    )
)]
pub async fn dashboard(
    state: web::Data<AppState>,
    query: web::Query<DashboardQuery>,
) -> Result<HttpResponse, AppError> {
    let email = query
        .email
        .as_deref()
        .filter(|e| !e.is_empty())
        .ok_or(AppError::MissingEmail)?;

    let user = user_repo::find_user_by_email(&state.db, email)
        .await?
        .ok_or(AppError::UserNotFound)?;

    Ok(HttpResponse::Ok().json(DashboardResponse {
        email: user.email,
        subscription_plan: user.subscription_plan,
        party_credits: user.party_credits,
    }))
}
