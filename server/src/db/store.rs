//! User Store
//!
//! Store-access capability for the relationship service. The service takes
//! the store as an argument instead of reaching for a global handle, so the
//! production pool and the in-memory test store are interchangeable.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::models::User;
use super::queries;
use super::queries::db_error;

/// Point lookups and friend-list persistence over the user collection.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Load a single user record.
    async fn find_user(&self, id: Uuid) -> sqlx::Result<Option<User>>;

    /// Load the records named by `ids`. Missing ids are silently absent
    /// from the result; order is unspecified.
    async fn find_users(&self, ids: &[Uuid]) -> sqlx::Result<Vec<User>>;

    /// Persist the friend lists of both endpoints of an edge as one unit.
    ///
    /// Implementations must not leave one list written and the other not:
    /// a torn write here is exactly the asymmetry the relationship service
    /// exists to prevent.
    async fn save_friend_lists(
        &self,
        first: Uuid,
        first_friends: &[Uuid],
        second: Uuid,
        second_friends: &[Uuid],
    ) -> sqlx::Result<()>;
}

#[async_trait]
impl UserStore for PgPool {
    async fn find_user(&self, id: Uuid) -> sqlx::Result<Option<User>> {
        queries::find_user_by_id(self, id).await
    }

    async fn find_users(&self, ids: &[Uuid]) -> sqlx::Result<Vec<User>> {
        queries::find_users_by_ids(self, ids).await
    }

    async fn save_friend_lists(
        &self,
        first: Uuid,
        first_friends: &[Uuid],
        second: Uuid,
        second_friends: &[Uuid],
    ) -> sqlx::Result<()> {
        let mut tx = self.begin().await?;

        sqlx::query("UPDATE users SET friends = $2, updated_at = NOW() WHERE id = $1")
            .bind(first)
            .bind(first_friends)
            .execute(&mut *tx)
            .await
            .map_err(db_error!("save_friend_lists", user_id = %first))?;

        sqlx::query("UPDATE users SET friends = $2, updated_at = NOW() WHERE id = $1")
            .bind(second)
            .bind(second_friends)
            .execute(&mut *tx)
            .await
            .map_err(db_error!("save_friend_lists", user_id = %second))?;

        tx.commit().await
    }
}
