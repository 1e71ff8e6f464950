/// Integration tests for the auth routes: signup, login, welcome, dashboard
mod common;

use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use serde_json::{json, Value};

use partypass_backend::{routes::configure_routes, security::jwt, AppState};

use common::fixtures;

macro_rules! test_app {
    ($pool:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(AppState {
                    db: $pool,
                    config: fixtures::test_config(),
                }))
                .configure(configure_routes),
        )
        .await
    };
}

async fn signup(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
    email: &str,
    password: &str,
) -> actix_web::dev::ServiceResponse {
    let req = test::TestRequest::post()
        .uri("/auth/signup")
        .set_json(json!({ "email": email, "password": password }))
        .to_request();
    test::call_service(app, req).await
}

#[actix_web::test]
async fn welcome_route_returns_greeting() {
    let app = test_app!(fixtures::lazy_pool());

    let req = test::TestRequest::get().uri("/auth/").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    assert_eq!(body, web::Bytes::from_static(b"Welcome to PartyPass Backend API!"));
}

#[actix_web::test]
async fn dashboard_without_email_param_is_rejected() {
    // The handler rejects before any query runs, so no database is needed.
    let app = test_app!(fixtures::lazy_pool());

    let req = test::TestRequest::get().uri("/auth/dashboard").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Email is required");
}

#[actix_web::test]
async fn signup_fresh_email_succeeds_and_duplicate_fails() {
    let Some(pool) = fixtures::try_test_pool().await else {
        return;
    };
    let app = test_app!(pool.clone());
    let email = fixtures::unique_email("signup");

    let resp = signup(&app, &email, "password123").await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "User registered successfully");

    let resp = signup(&app, &email, "password123").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "User already exists");

    fixtures::cleanup_user(&pool, &email).await;
}

#[actix_web::test]
async fn login_returns_token_bound_to_the_user() {
    let Some(pool) = fixtures::try_test_pool().await else {
        return;
    };
    let app = test_app!(pool.clone());
    let email = fixtures::unique_email("login");

    let resp = signup(&app, &email, "password123").await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(json!({ "email": email, "password": "password123" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    let token = body["token"].as_str().expect("token in response");
    assert!(!token.is_empty());

    let claims = jwt::validate_token("test-secret", token).unwrap().claims;
    assert_eq!(claims.email, email);
    assert_eq!(claims.token_type, "access");

    fixtures::cleanup_user(&pool, &email).await;
}

#[actix_web::test]
async fn login_with_wrong_password_or_unknown_email_fails() {
    let Some(pool) = fixtures::try_test_pool().await else {
        return;
    };
    let app = test_app!(pool.clone());
    let email = fixtures::unique_email("badlogin");

    let resp = signup(&app, &email, "password123").await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(json!({ "email": email, "password": "not-the-password" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Invalid credentials");

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(json!({ "email": fixtures::unique_email("ghost"), "password": "whatever" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "User not found");

    fixtures::cleanup_user(&pool, &email).await;
}

#[actix_web::test]
async fn dashboard_reports_plan_and_credits() {
    let Some(pool) = fixtures::try_test_pool().await else {
        return;
    };
    let app = test_app!(pool.clone());
    let email = fixtures::unique_email("dashboard");

    let resp = signup(&app, &email, "password123").await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::get()
        .uri(&format!("/auth/dashboard?email={}", email))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["email"], email.as_str());
    assert_eq!(body["subscription_plan"], Value::Null);
    assert_eq!(body["party_credits"], 10);

    let req = test::TestRequest::get()
        .uri(&format!(
            "/auth/dashboard?email={}",
            fixtures::unique_email("ghost")
        ))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    fixtures::cleanup_user(&pool, &email).await;
}

/// The end-to-end scenario: signup, login, wrong password, dashboard.
#[actix_web::test]
async fn end_to_end_party_flow() {
    let Some(pool) = fixtures::try_test_pool().await else {
        return;
    };
    let app = test_app!(pool.clone());
    let email = fixtures::unique_email("e2e");

    let resp = signup(&app, &email, "pw").await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(json!({ "email": email, "password": "pw" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert!(!body["token"].as_str().unwrap().is_empty());

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(json!({ "email": email, "password": "wrong" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::get()
        .uri(&format!("/auth/dashboard?email={}", email))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["party_credits"], 10);
    assert_eq!(body["subscription_plan"], Value::Null);

    fixtures::cleanup_user(&pool, &email).await;
}

/// The unique index backstops concurrent duplicate signups: a direct insert
/// for an existing email surfaces as the duplicate error, not a plain
/// database failure.
#[actix_web::test]
async fn duplicate_insert_maps_to_duplicate_error() {
    use partypass_backend::{db::user_repo, AppError};

    let Some(pool) = fixtures::try_test_pool().await else {
        return;
    };
    let email = fixtures::unique_email("race");

    user_repo::create_user(&pool, &email, "hash-one").await.unwrap();
    let err = user_repo::create_user(&pool, &email, "hash-two")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::EmailAlreadyExists));

    fixtures::cleanup_user(&pool, &email).await;
}
