//! Authentication
//!
//! Local registration/login, JWT issuance, and the bearer-token middleware
//! guarding the protected API surface.

mod error;
mod handlers;
pub mod jwt;
mod middleware;
mod password;

use axum::{routing::post, Router};

use crate::api::AppState;

pub use error::{AuthError, AuthResult, ErrorResponse};
pub use handlers::{LoginRequest, LoginResponse, RegisterRequest};
pub use middleware::{require_auth, AuthUser};
pub use password::{hash_password, verify_password};

/// Create authentication router.
///
/// Public routes (no auth required):
/// - POST /register - Register a new user
/// - POST /login - Login with email/password
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(handlers::register))
        .route("/login", post(handlers::login))
}
