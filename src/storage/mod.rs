//! Storage abstraction for the catalog.
//!
//! One capability interface, two backends: PostgreSQL when a connection
//! string is configured, an in-process map store otherwise. The choice is
//! made once at process start by [`connect`] and the resulting
//! `Arc<dyn Storage>` is handed to the HTTP layer via dependency
//! injection, so tests can substitute either backend.

use crate::configuration::Settings;
use crate::forms;
use crate::models;
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;

pub mod memory;
pub mod postgres;

pub use memory::MemoryStorage;
pub use postgres::PostgresStorage;

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("storage lock poisoned")]
    LockPoisoned,
}

/// Every operation the HTTP layer needs, independent of the backend.
///
/// "Not found" is an expected outcome and comes back as `Ok(None)` or
/// `Ok(false)`; only backend failures surface as [`StorageError`]. Entity
/// ids arrive as the raw path string — a malformed id is indistinguishable
/// from an unknown one, so callers never learn which backend is running.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Active listings, newest first.
    async fn list_active_properties(&self) -> Result<Vec<models::Property>, StorageError>;
    /// Active listings flagged as featured, newest first.
    async fn list_featured_properties(&self) -> Result<Vec<models::Property>, StorageError>;
    /// Fetch by id regardless of the active flag.
    async fn get_property(&self, id: &str) -> Result<Option<models::Property>, StorageError>;
    async fn create_property(
        &self,
        property: models::Property,
    ) -> Result<models::Property, StorageError>;
    /// Merges the supplied fields over the stored record in one step and
    /// refreshes the update timestamp.
    async fn update_property(
        &self,
        id: &str,
        form: forms::PropertyUpdateForm,
    ) -> Result<Option<models::Property>, StorageError>;
    /// Clears the active flag; the record itself is kept.
    async fn soft_delete_property(&self, id: &str) -> Result<bool, StorageError>;

    async fn list_inquiries(&self) -> Result<Vec<models::Inquiry>, StorageError>;
    async fn list_inquiries_by_property(
        &self,
        property_id: &str,
    ) -> Result<Vec<models::Inquiry>, StorageError>;
    async fn get_inquiry(&self, id: &str) -> Result<Option<models::Inquiry>, StorageError>;
    async fn create_inquiry(
        &self,
        inquiry: models::Inquiry,
    ) -> Result<models::Inquiry, StorageError>;
    async fn update_inquiry(
        &self,
        id: &str,
        form: forms::InquiryUpdateForm,
    ) -> Result<Option<models::Inquiry>, StorageError>;

    async fn list_conversations(&self) -> Result<Vec<models::ChatConversation>, StorageError>;
    async fn get_conversation_by_session(
        &self,
        session_id: &str,
    ) -> Result<Option<models::ChatConversation>, StorageError>;
    /// Create-or-replace keyed on session id. A replaced conversation
    /// keeps its internal id and creation time.
    async fn upsert_conversation(
        &self,
        conversation: models::ChatConversation,
    ) -> Result<models::ChatConversation, StorageError>;
    async fn update_conversation_by_session(
        &self,
        session_id: &str,
        form: forms::ConversationUpdateForm,
    ) -> Result<Option<models::ChatConversation>, StorageError>;

    async fn get_user(&self, id: i32) -> Result<Option<models::User>, StorageError>;
    async fn get_user_by_username(
        &self,
        username: &str,
    ) -> Result<Option<models::User>, StorageError>;
    /// Assigns the next integer id.
    async fn create_user(
        &self,
        username: String,
        password: String,
    ) -> Result<models::User, StorageError>;

    async fn dashboard_stats(&self) -> Result<models::DashboardStats, StorageError>;
}

/// Picks the backend once, at process start.
///
/// With a connection string present the PostgreSQL backend is used and
/// pending migrations run before the server accepts traffic. Without one
/// the in-memory store takes over — a supported degraded mode for
/// development, not an error.
pub async fn connect(settings: &Settings) -> Result<Arc<dyn Storage>, StorageError> {
    match settings.database_url() {
        Some(url) => {
            tracing::info!("Connecting to PostgreSQL");
            let pool = PgPoolOptions::new()
                .max_connections(5)
                .acquire_timeout(Duration::from_secs(30))
                .connect(&url)
                .await?;
            sqlx::migrate!("./migrations").run(&pool).await?;
            Ok(Arc::new(PostgresStorage::new(pool)))
        }
        None => {
            tracing::warn!(
                "no database configured, falling back to the in-memory store; \
                 data will not survive a restart"
            );
            Ok(Arc::new(MemoryStorage::new()))
        }
    }
}
