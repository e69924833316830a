use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Persisted transcript of one AI-chat session.
///
/// The chat widget only knows `session_id`; lookups and upserts key on it.
/// `id` stays the storage key so replacing a conversation keeps its row
/// identity and creation time. The transcript itself is an opaque JSON
/// array of turn records (role, text, timestamp).
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ChatConversation {
    pub id: Uuid,
    pub session_id: String,
    pub user_name: Option<String>,
    pub user_email: Option<String>,
    pub user_phone: Option<String>,
    pub conversation_data: Value,
    pub status: ConversationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type,
)]
#[serde(rename_all = "kebab-case")]
#[sqlx(rename_all = "kebab-case")]
pub enum ConversationStatus {
    #[default]
    Active,
    Completed,
    Closed,
}
