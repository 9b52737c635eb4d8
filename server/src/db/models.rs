//! Database Models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// User model.
///
/// The `friends` column is the record's adjacency list: an ordered array of
/// user ids. The relationship service keeps it symmetric with the lists of
/// the users it names.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub picture_path: String,
    pub friends: Vec<Uuid>,
    pub location: String,
    pub occupation: String,
    pub viewed_profile: i64,
    pub impressions: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields for inserting a new user record.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub picture_path: String,
    pub location: String,
    pub occupation: String,
    pub viewed_profile: i64,
    pub impressions: i64,
}
