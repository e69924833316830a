use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A listing in the catalog. Listings are never hard-deleted: the delete
/// path flips `is_active` and every list query filters on it, while
/// fetch-by-id keeps returning the record.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub location: String,
    pub price: f64,
    pub price_type: PriceType,
    pub property_type: PropertyType,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub parking_spaces: i32,
    pub area: Option<f64>,
    pub year_built: Option<i32>,
    pub floor: Option<String>,
    pub images: Vec<String>,
    pub features: Vec<String>,
    pub amenities: Vec<String>,
    // Agent contact stays denormalized on the listing; there is no Agent
    // entity in this system.
    pub agent_name: Option<String>,
    pub agent_phone: Option<String>,
    pub agent_email: Option<String>,
    pub agent_image: Option<String>,
    pub is_featured: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type,
)]
#[serde(rename_all = "kebab-case")]
#[sqlx(rename_all = "kebab-case")]
pub enum PriceType {
    #[default]
    ForSale,
    ForRent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "kebab-case")]
#[sqlx(rename_all = "kebab-case")]
pub enum PropertyType {
    Apartment,
    Villa,
    Office,
    Shop,
    Land,
    Warehouse,
}
