use serde::{Deserialize, Serialize};

/// Administrative account.
///
/// Only the storage operations exist for now. The previous login flow was
/// a constant comparison and is deliberately not carried over; a real
/// credential component owns hashing and verification when it lands.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password: String,
}
