use crate::models;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;
use uuid::Uuid;

/// Public submission from the contact form or a listing page.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InquiryForm {
    pub property_id: Option<Uuid>,
    #[validate(min_length = 1)]
    #[validate(max_length = 200)]
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[validate(min_length = 1)]
    #[validate(max_length = 5000)]
    pub message: String,
    #[serde(default)]
    pub inquiry_type: models::InquiryType,
    #[serde(default)]
    pub status: models::InquiryStatus,
}

impl From<InquiryForm> for models::Inquiry {
    fn from(form: InquiryForm) -> Self {
        models::Inquiry {
            id: Uuid::new_v4(),
            property_id: form.property_id,
            name: form.name,
            email: form.email,
            phone: form.phone,
            message: form.message,
            inquiry_type: form.inquiry_type,
            status: form.status,
            created_at: Utc::now(),
        }
    }
}

/// Admin-side partial update, in practice the status workflow.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InquiryUpdateForm {
    #[validate(min_length = 1)]
    #[validate(max_length = 200)]
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[validate(min_length = 1)]
    #[validate(max_length = 5000)]
    pub message: Option<String>,
    pub inquiry_type: Option<models::InquiryType>,
    pub status: Option<models::InquiryStatus>,
}

impl InquiryUpdateForm {
    pub fn apply(&self, inquiry: &mut models::Inquiry) {
        if let Some(name) = &self.name {
            inquiry.name = name.clone();
        }
        if let Some(email) = &self.email {
            inquiry.email = Some(email.clone());
        }
        if let Some(phone) = &self.phone {
            inquiry.phone = Some(phone.clone());
        }
        if let Some(message) = &self.message {
            inquiry.message = message.clone();
        }
        if let Some(inquiry_type) = self.inquiry_type {
            inquiry.inquiry_type = inquiry_type;
        }
        if let Some(status) = self.status {
            inquiry.status = status;
        }
    }
}
