//! In-process fallback store, used when no database is configured.
//!
//! Development-only: state lives in per-entity maps guarded by `RwLock`s
//! and is lost on restart. Lists filter and sort on every call rather
//! than keeping an index. Not meant for multi-process deployment.

use crate::forms;
use crate::models;
use crate::storage::{Storage, StorageError};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
pub struct MemoryStorage {
    properties: RwLock<HashMap<Uuid, models::Property>>,
    inquiries: RwLock<HashMap<Uuid, models::Inquiry>>,
    conversations: RwLock<HashMap<Uuid, models::ChatConversation>>,
    users: RwLock<HashMap<i32, models::User>>,
    next_user_id: AtomicI32,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn list_active_properties(&self) -> Result<Vec<models::Property>, StorageError> {
        let properties = self
            .properties
            .read()
            .map_err(|_| StorageError::LockPoisoned)?;
        let mut listings: Vec<_> = properties
            .values()
            .filter(|p| p.is_active)
            .cloned()
            .collect();
        listings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(listings)
    }

    async fn list_featured_properties(&self) -> Result<Vec<models::Property>, StorageError> {
        let properties = self
            .properties
            .read()
            .map_err(|_| StorageError::LockPoisoned)?;
        let mut listings: Vec<_> = properties
            .values()
            .filter(|p| p.is_active && p.is_featured)
            .cloned()
            .collect();
        listings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(listings)
    }

    async fn get_property(&self, id: &str) -> Result<Option<models::Property>, StorageError> {
        let Ok(id) = Uuid::parse_str(id) else {
            return Ok(None);
        };
        let properties = self
            .properties
            .read()
            .map_err(|_| StorageError::LockPoisoned)?;
        Ok(properties.get(&id).cloned())
    }

    async fn create_property(
        &self,
        property: models::Property,
    ) -> Result<models::Property, StorageError> {
        let mut properties = self
            .properties
            .write()
            .map_err(|_| StorageError::LockPoisoned)?;
        properties.insert(property.id, property.clone());
        Ok(property)
    }

    async fn update_property(
        &self,
        id: &str,
        form: forms::PropertyUpdateForm,
    ) -> Result<Option<models::Property>, StorageError> {
        let Ok(id) = Uuid::parse_str(id) else {
            return Ok(None);
        };
        let mut properties = self
            .properties
            .write()
            .map_err(|_| StorageError::LockPoisoned)?;
        match properties.get_mut(&id) {
            Some(property) => {
                form.apply(property);
                Ok(Some(property.clone()))
            }
            None => Ok(None),
        }
    }

    async fn soft_delete_property(&self, id: &str) -> Result<bool, StorageError> {
        let Ok(id) = Uuid::parse_str(id) else {
            return Ok(false);
        };
        let mut properties = self
            .properties
            .write()
            .map_err(|_| StorageError::LockPoisoned)?;
        match properties.get_mut(&id) {
            Some(property) => {
                property.is_active = false;
                property.updated_at = Utc::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn list_inquiries(&self) -> Result<Vec<models::Inquiry>, StorageError> {
        let inquiries = self
            .inquiries
            .read()
            .map_err(|_| StorageError::LockPoisoned)?;
        let mut all: Vec<_> = inquiries.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    async fn list_inquiries_by_property(
        &self,
        property_id: &str,
    ) -> Result<Vec<models::Inquiry>, StorageError> {
        let Ok(property_id) = Uuid::parse_str(property_id) else {
            return Ok(Vec::new());
        };
        let inquiries = self
            .inquiries
            .read()
            .map_err(|_| StorageError::LockPoisoned)?;
        let mut matching: Vec<_> = inquiries
            .values()
            .filter(|i| i.property_id == Some(property_id))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matching)
    }

    async fn get_inquiry(&self, id: &str) -> Result<Option<models::Inquiry>, StorageError> {
        let Ok(id) = Uuid::parse_str(id) else {
            return Ok(None);
        };
        let inquiries = self
            .inquiries
            .read()
            .map_err(|_| StorageError::LockPoisoned)?;
        Ok(inquiries.get(&id).cloned())
    }

    async fn create_inquiry(
        &self,
        inquiry: models::Inquiry,
    ) -> Result<models::Inquiry, StorageError> {
        let mut inquiries = self
            .inquiries
            .write()
            .map_err(|_| StorageError::LockPoisoned)?;
        inquiries.insert(inquiry.id, inquiry.clone());
        Ok(inquiry)
    }

    async fn update_inquiry(
        &self,
        id: &str,
        form: forms::InquiryUpdateForm,
    ) -> Result<Option<models::Inquiry>, StorageError> {
        let Ok(id) = Uuid::parse_str(id) else {
            return Ok(None);
        };
        let mut inquiries = self
            .inquiries
            .write()
            .map_err(|_| StorageError::LockPoisoned)?;
        match inquiries.get_mut(&id) {
            Some(inquiry) => {
                form.apply(inquiry);
                Ok(Some(inquiry.clone()))
            }
            None => Ok(None),
        }
    }

    async fn list_conversations(&self) -> Result<Vec<models::ChatConversation>, StorageError> {
        let conversations = self
            .conversations
            .read()
            .map_err(|_| StorageError::LockPoisoned)?;
        let mut all: Vec<_> = conversations.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    async fn get_conversation_by_session(
        &self,
        session_id: &str,
    ) -> Result<Option<models::ChatConversation>, StorageError> {
        let conversations = self
            .conversations
            .read()
            .map_err(|_| StorageError::LockPoisoned)?;
        Ok(conversations
            .values()
            .find(|c| c.session_id == session_id)
            .cloned())
    }

    async fn upsert_conversation(
        &self,
        conversation: models::ChatConversation,
    ) -> Result<models::ChatConversation, StorageError> {
        let mut conversations = self
            .conversations
            .write()
            .map_err(|_| StorageError::LockPoisoned)?;
        // A replaced conversation keeps its row identity and creation time.
        let existing = conversations
            .values()
            .find(|c| c.session_id == conversation.session_id)
            .map(|c| (c.id, c.created_at));
        let record = match existing {
            Some((id, created_at)) => models::ChatConversation {
                id,
                created_at,
                updated_at: Utc::now(),
                ..conversation
            },
            None => conversation,
        };
        conversations.insert(record.id, record.clone());
        Ok(record)
    }

    async fn update_conversation_by_session(
        &self,
        session_id: &str,
        form: forms::ConversationUpdateForm,
    ) -> Result<Option<models::ChatConversation>, StorageError> {
        let mut conversations = self
            .conversations
            .write()
            .map_err(|_| StorageError::LockPoisoned)?;
        match conversations
            .values_mut()
            .find(|c| c.session_id == session_id)
        {
            Some(conversation) => {
                form.apply(conversation);
                Ok(Some(conversation.clone()))
            }
            None => Ok(None),
        }
    }

    async fn get_user(&self, id: i32) -> Result<Option<models::User>, StorageError> {
        let users = self.users.read().map_err(|_| StorageError::LockPoisoned)?;
        Ok(users.get(&id).cloned())
    }

    async fn get_user_by_username(
        &self,
        username: &str,
    ) -> Result<Option<models::User>, StorageError> {
        let users = self.users.read().map_err(|_| StorageError::LockPoisoned)?;
        Ok(users.values().find(|u| u.username == username).cloned())
    }

    async fn create_user(
        &self,
        username: String,
        password: String,
    ) -> Result<models::User, StorageError> {
        let id = self.next_user_id.fetch_add(1, Ordering::SeqCst) + 1;
        let user = models::User {
            id,
            username,
            password,
        };
        let mut users = self.users.write().map_err(|_| StorageError::LockPoisoned)?;
        users.insert(id, user.clone());
        Ok(user)
    }

    async fn dashboard_stats(&self) -> Result<models::DashboardStats, StorageError> {
        let properties = self
            .properties
            .read()
            .map_err(|_| StorageError::LockPoisoned)?;
        let inquiries = self
            .inquiries
            .read()
            .map_err(|_| StorageError::LockPoisoned)?;
        let conversations = self
            .conversations
            .read()
            .map_err(|_| StorageError::LockPoisoned)?;
        let active = properties.values().filter(|p| p.is_active).count() as i64;
        let featured = properties
            .values()
            .filter(|p| p.is_active && p.is_featured)
            .count() as i64;
        Ok(models::DashboardStats {
            total_properties: active,
            total_inquiries: inquiries.len() as i64,
            total_conversations: conversations.len() as i64,
            featured_properties: featured,
        })
    }
}
