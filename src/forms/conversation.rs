use crate::models;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_valid::Validate;
use uuid::Uuid;

fn empty_transcript() -> Value {
    Value::Array(Vec::new())
}

/// Create-or-replace payload keyed on the widget's session id.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ConversationForm {
    #[validate(min_length = 1)]
    #[validate(max_length = 200)]
    pub session_id: String,
    pub user_name: Option<String>,
    pub user_email: Option<String>,
    pub user_phone: Option<String>,
    #[serde(default = "empty_transcript")]
    pub conversation_data: Value,
    #[serde(default)]
    pub status: models::ConversationStatus,
}

impl From<ConversationForm> for models::ChatConversation {
    fn from(form: ConversationForm) -> Self {
        let now = Utc::now();
        models::ChatConversation {
            id: Uuid::new_v4(),
            session_id: form.session_id,
            user_name: form.user_name,
            user_email: form.user_email,
            user_phone: form.user_phone,
            conversation_data: form.conversation_data,
            status: form.status,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Per-turn update; every write refreshes the update timestamp.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ConversationUpdateForm {
    pub user_name: Option<String>,
    pub user_email: Option<String>,
    pub user_phone: Option<String>,
    pub conversation_data: Option<Value>,
    pub status: Option<models::ConversationStatus>,
}

impl ConversationUpdateForm {
    pub fn apply(&self, conversation: &mut models::ChatConversation) {
        if let Some(user_name) = &self.user_name {
            conversation.user_name = Some(user_name.clone());
        }
        if let Some(user_email) = &self.user_email {
            conversation.user_email = Some(user_email.clone());
        }
        if let Some(user_phone) = &self.user_phone {
            conversation.user_phone = Some(user_phone.clone());
        }
        if let Some(conversation_data) = &self.conversation_data {
            conversation.conversation_data = conversation_data.clone();
        }
        if let Some(status) = self.status {
            conversation.status = status;
        }
        conversation.updated_at = Utc::now();
    }
}
