use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A customer contact request, optionally linked to a listing.
///
/// `property_id` is a weak reference: deactivating or even removing the
/// listing leaves the inquiry untouched. Inquiries are never deleted;
/// admins only move them through the status workflow.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub id: Uuid,
    pub property_id: Option<Uuid>,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: String,
    pub inquiry_type: InquiryType,
    pub status: InquiryStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type,
)]
#[serde(rename_all = "kebab-case")]
#[sqlx(rename_all = "kebab-case")]
pub enum InquiryType {
    #[default]
    General,
    ViewingRequest,
    PriceInquiry,
    Negotiation,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type,
)]
#[serde(rename_all = "kebab-case")]
#[sqlx(rename_all = "kebab-case")]
pub enum InquiryStatus {
    #[default]
    New,
    InReview,
    Responded,
    Completed,
}
