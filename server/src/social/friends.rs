//! Profile and Friend HTTP Handlers

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use super::service;
use super::types::{FriendProfile, SocialError, UserProfile};
use crate::api::AppState;
use crate::auth::AuthUser;
use crate::db;

/// GET /api/users/{id}
/// Fetch a user's public profile.
pub async fn get_user(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(user_id): Path<Uuid>,
) -> Result<Json<UserProfile>, SocialError> {
    let user = db::find_user_by_id(&state.db, user_id)
        .await?
        .ok_or(SocialError::UserNotFound)?;

    Ok(Json(UserProfile::from(user)))
}

/// GET /api/users/{id}/friends
/// List a user's friends in stored order.
pub async fn get_user_friends(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Vec<FriendProfile>>, SocialError> {
    let friends = service::list_friends(&state.db, user_id).await?;

    Ok(Json(friends))
}

/// PATCH /api/users/{id}/{friend_id}
/// Toggle the friendship between two users and return the subject's
/// post-toggle friend list.
pub async fn toggle_friend(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path((user_id, friend_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<Vec<FriendProfile>>, SocialError> {
    let friends = service::toggle_friend(&state.db, user_id, friend_id).await?;

    Ok(Json(friends))
}
