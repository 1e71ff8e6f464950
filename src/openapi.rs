/// OpenAPI documentation
use utoipa::OpenApi;

use crate::models::user::{
    DashboardResponse, LoginRequest, MessageResponse, SignupRequest, TokenResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::auth::signup,
        crate::handlers::auth::login,
        crate::handlers::auth::home,
        crate::handlers::auth::dashboard,
    ),
    components(schemas(
        SignupRequest,
        LoginRequest,
        MessageResponse,
        TokenResponse,
        DashboardResponse
    )),
    tags((name = "Auth", description = "PartyPass authentication and dashboard"))
)]
pub struct ApiDoc;
