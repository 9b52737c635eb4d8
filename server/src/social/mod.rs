//! Social Graph
//!
//! User profiles and the symmetric friend relationship flow.

pub mod friends;
pub mod service;
pub mod types;

use axum::{
    routing::{get, patch},
    Router,
};

use crate::api::AppState;

pub use types::{FriendProfile, SocialError, UserProfile};

/// Create the social router with profile and friend endpoints.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users/{id}", get(friends::get_user))
        .route("/users/{id}/friends", get(friends::get_user_friends))
        .route("/users/{id}/{friend_id}", patch(friends::toggle_friend))
}
