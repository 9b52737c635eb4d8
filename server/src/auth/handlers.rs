//! Authentication HTTP Handlers

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::error::{AuthError, AuthResult};
use super::jwt::generate_access_token;
use super::password::{hash_password, verify_password};
use crate::api::AppState;
use crate::db::{self, NewUser};
use crate::social::UserProfile;

/// Registration request.
#[derive(Debug, Deserialize, Validate, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// First name.
    #[validate(length(min = 1, max = 64))]
    pub first_name: String,
    /// Last name.
    #[validate(length(min = 1, max = 64))]
    pub last_name: String,
    /// Email address (login identifier).
    #[validate(email)]
    pub email: String,
    /// Password (8-128 characters).
    #[validate(length(min = 8, max = 128))]
    pub password: String,
    /// Free-form location (optional).
    #[serde(default)]
    #[validate(length(max = 256))]
    pub location: String,
    /// Free-form occupation (optional).
    #[serde(default)]
    #[validate(length(max = 256))]
    pub occupation: String,
    /// Opaque reference to an already-uploaded profile picture (optional).
    #[serde(default)]
    #[validate(length(max = 512))]
    pub picture_path: String,
}

/// Login request.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct LoginRequest {
    /// Email address.
    pub email: String,
    /// Password.
    pub password: String,
}

/// Login response with access token and profile.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct LoginResponse {
    /// Bearer access token.
    pub token: String,
    /// The authenticated user's profile.
    pub user: UserProfile,
}

/// POST /auth/register
/// Register a new user.
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> AuthResult<(StatusCode, Json<UserProfile>)> {
    body.validate()
        .map_err(|e| AuthError::Validation(e.to_string()))?;

    if db::email_exists(&state.db, &body.email).await? {
        return Err(AuthError::UserAlreadyExists);
    }

    let password_hash = hash_password(&body.password)?;

    // New profiles start with randomized display counters.
    let (viewed_profile, impressions) = {
        let mut rng = rand::thread_rng();
        (rng.gen_range(0..10_000), rng.gen_range(0..10_000))
    };

    let user = db::create_user(
        &state.db,
        &NewUser {
            id: Uuid::now_v7(),
            first_name: body.first_name,
            last_name: body.last_name,
            email: body.email,
            password_hash,
            picture_path: body.picture_path,
            location: body.location,
            occupation: body.occupation,
            viewed_profile,
            impressions,
        },
    )
    .await?;

    tracing::info!(user_id = %user.id, "User registered");

    Ok((StatusCode::CREATED, Json(UserProfile::from(user))))
}

/// POST /auth/login
/// Login with email and password.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> AuthResult<Json<LoginResponse>> {
    let user = db::find_user_by_email(&state.db, &body.email)
        .await?
        .ok_or(AuthError::InvalidCredentials)?;

    if !verify_password(&body.password, &user.password_hash)? {
        return Err(AuthError::InvalidCredentials);
    }

    let token = generate_access_token(
        user.id,
        &state.config.jwt_secret,
        state.config.jwt_access_expiry,
    )?;

    Ok(Json(LoginResponse {
        token,
        user: UserProfile::from(user),
    }))
}
