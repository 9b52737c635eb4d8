//! Friend Relationship Service
//!
//! Core toggle and projection logic over a [`UserStore`] capability.
//!
//! The friends relation is symmetric: an edge appears in both endpoints'
//! adjacency lists or in neither, and every toggle maintains that. The
//! two-record save goes through [`UserStore::save_friend_lists`] so both
//! lists land (or fail) together.

use std::collections::HashMap;

use uuid::Uuid;

use super::types::{FriendProfile, SocialError};
use crate::db::{User, UserStore};

/// Load a user's friends and project them to the public-safe view.
///
/// Output order follows the subject's `friends` sequence at read time.
pub async fn list_friends<S: UserStore>(
    store: &S,
    user_id: Uuid,
) -> Result<Vec<FriendProfile>, SocialError> {
    let user = store
        .find_user(user_id)
        .await?
        .ok_or(SocialError::UserNotFound)?;

    project_friends(store, &user.friends).await
}

/// Toggle the symmetric friend edge between two users.
///
/// Adds the edge when absent, removes it when present, and returns the
/// subject's post-toggle friend projection. Fails without mutating anything
/// when the ids are equal or either record is missing.
pub async fn toggle_friend<S: UserStore>(
    store: &S,
    user_id: Uuid,
    friend_id: Uuid,
) -> Result<Vec<FriendProfile>, SocialError> {
    if user_id == friend_id {
        return Err(SocialError::SelfFriendship);
    }

    let mut user = store
        .find_user(user_id)
        .await?
        .ok_or(SocialError::UserNotFound)?;
    let mut friend = store
        .find_user(friend_id)
        .await?
        .ok_or(SocialError::UserNotFound)?;

    if user.friends.contains(&friend_id) {
        // Drop the edge from both endpoints. The reverse direction filters
        // the friend's list by the subject's id, not the target's.
        user.friends.retain(|id| *id != friend_id);
        friend.friends.retain(|id| *id != user_id);
    } else {
        user.friends.push(friend_id);
        friend.friends.push(user_id);
    }

    store
        .save_friend_lists(user_id, &user.friends, friend_id, &friend.friends)
        .await?;

    project_friends(store, &user.friends).await
}

/// Bulk-load the records named by `friend_ids` and project them, preserving
/// the order of the id sequence.
///
/// A dangling reference (an id with no backing record) fails the whole read
/// as not-found.
async fn project_friends<S: UserStore>(
    store: &S,
    friend_ids: &[Uuid],
) -> Result<Vec<FriendProfile>, SocialError> {
    let records = store.find_users(friend_ids).await?;
    let by_id: HashMap<Uuid, User> = records.into_iter().map(|u| (u.id, u)).collect();

    friend_ids
        .iter()
        .map(|id| {
            by_id
                .get(id)
                .cloned()
                .map(FriendProfile::from)
                .ok_or(SocialError::UserNotFound)
        })
        .collect()
}
