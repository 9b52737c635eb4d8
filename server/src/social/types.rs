//! Social Types

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::db::User;

/// Public view of a user record. Credentials never appear here.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// User ID.
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub picture_path: String,
    /// Ordered friend ids.
    pub friends: Vec<Uuid>,
    pub location: String,
    pub occupation: String,
    pub viewed_profile: i64,
    pub impressions: i64,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            picture_path: user.picture_path,
            friends: user.friends,
            location: user.location,
            occupation: user.occupation,
            viewed_profile: user.viewed_profile,
            impressions: user.impressions,
            created_at: user.created_at,
        }
    }
}

/// Public-safe projection of a friend record.
///
/// Exactly these fields go on the wire: no credentials, no email, no raw
/// friend arrays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FriendProfile {
    /// User ID.
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub occupation: String,
    pub location: String,
    pub picture_path: String,
}

impl From<User> for FriendProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            occupation: user.occupation,
            location: user.location,
            picture_path: user.picture_path,
        }
    }
}

/// Error types for social operations.
#[derive(Debug, thiserror::Error)]
pub enum SocialError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("User not found")]
    UserNotFound,

    #[error("Cannot friend yourself")]
    SelfFriendship,
}

impl axum::response::IntoResponse for SocialError {
    fn into_response(self) -> axum::response::Response {
        use axum::http::StatusCode;
        use axum::Json;
        use serde_json::json;

        let (status, code, message) = match &self {
            Self::Database(err) => {
                tracing::error!("Database error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "Database error".to_string(),
                )
            }
            Self::UserNotFound => (StatusCode::NOT_FOUND, "USER_NOT_FOUND", self.to_string()),
            Self::SelfFriendship => (StatusCode::BAD_REQUEST, "SELF_FRIENDSHIP", self.to_string()),
        };

        (status, Json(json!({ "error": code, "message": message }))).into_response()
    }
}
