use crate::models;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;
use uuid::Uuid;

fn default_true() -> bool {
    true
}

/// Insert shape for a listing: everything the admin panel submits, minus
/// the server-generated id and timestamps.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PropertyForm {
    #[validate(min_length = 1)]
    #[validate(max_length = 300)]
    pub title: String,
    pub description: Option<String>,
    #[validate(min_length = 1)]
    pub location: String,
    #[validate(minimum = 0.0)]
    pub price: f64,
    #[serde(default)]
    pub price_type: models::PriceType,
    pub property_type: models::PropertyType,
    #[serde(default)]
    #[validate(minimum = 0)]
    pub bedrooms: i32,
    #[serde(default)]
    #[validate(minimum = 0)]
    pub bathrooms: i32,
    #[serde(default)]
    #[validate(minimum = 0)]
    pub parking_spaces: i32,
    #[validate(minimum = 0.0)]
    pub area: Option<f64>,
    #[validate(minimum = 1800)]
    pub year_built: Option<i32>,
    pub floor: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    pub agent_name: Option<String>,
    pub agent_phone: Option<String>,
    pub agent_email: Option<String>,
    pub agent_image: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl From<PropertyForm> for models::Property {
    fn from(form: PropertyForm) -> Self {
        let now = Utc::now();
        models::Property {
            id: Uuid::new_v4(),
            title: form.title,
            description: form.description,
            location: form.location,
            price: form.price,
            price_type: form.price_type,
            property_type: form.property_type,
            bedrooms: form.bedrooms,
            bathrooms: form.bathrooms,
            parking_spaces: form.parking_spaces,
            area: form.area,
            year_built: form.year_built,
            floor: form.floor,
            images: form.images,
            features: form.features,
            amenities: form.amenities,
            agent_name: form.agent_name,
            agent_phone: form.agent_phone,
            agent_email: form.agent_email,
            agent_image: form.agent_image,
            is_featured: form.is_featured,
            is_active: form.is_active,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial-update shape: the insert shape with every field optional.
/// Omitted fields are left untouched by the merge.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PropertyUpdateForm {
    #[validate(min_length = 1)]
    #[validate(max_length = 300)]
    pub title: Option<String>,
    pub description: Option<String>,
    #[validate(min_length = 1)]
    pub location: Option<String>,
    #[validate(minimum = 0.0)]
    pub price: Option<f64>,
    pub price_type: Option<models::PriceType>,
    pub property_type: Option<models::PropertyType>,
    #[validate(minimum = 0)]
    pub bedrooms: Option<i32>,
    #[validate(minimum = 0)]
    pub bathrooms: Option<i32>,
    #[validate(minimum = 0)]
    pub parking_spaces: Option<i32>,
    #[validate(minimum = 0.0)]
    pub area: Option<f64>,
    #[validate(minimum = 1800)]
    pub year_built: Option<i32>,
    pub floor: Option<String>,
    pub images: Option<Vec<String>>,
    pub features: Option<Vec<String>>,
    pub amenities: Option<Vec<String>>,
    pub agent_name: Option<String>,
    pub agent_phone: Option<String>,
    pub agent_email: Option<String>,
    pub agent_image: Option<String>,
    pub is_featured: Option<bool>,
    pub is_active: Option<bool>,
}

impl PropertyUpdateForm {
    /// Merges supplied fields over the existing record and refreshes the
    /// update timestamp. Used by the in-memory store; the PostgreSQL
    /// backend does the same merge in a single UPDATE statement.
    pub fn apply(&self, property: &mut models::Property) {
        if let Some(title) = &self.title {
            property.title = title.clone();
        }
        if let Some(description) = &self.description {
            property.description = Some(description.clone());
        }
        if let Some(location) = &self.location {
            property.location = location.clone();
        }
        if let Some(price) = self.price {
            property.price = price;
        }
        if let Some(price_type) = self.price_type {
            property.price_type = price_type;
        }
        if let Some(property_type) = self.property_type {
            property.property_type = property_type;
        }
        if let Some(bedrooms) = self.bedrooms {
            property.bedrooms = bedrooms;
        }
        if let Some(bathrooms) = self.bathrooms {
            property.bathrooms = bathrooms;
        }
        if let Some(parking_spaces) = self.parking_spaces {
            property.parking_spaces = parking_spaces;
        }
        if let Some(area) = self.area {
            property.area = Some(area);
        }
        if let Some(year_built) = self.year_built {
            property.year_built = Some(year_built);
        }
        if let Some(floor) = &self.floor {
            property.floor = Some(floor.clone());
        }
        if let Some(images) = &self.images {
            property.images = images.clone();
        }
        if let Some(features) = &self.features {
            property.features = features.clone();
        }
        if let Some(amenities) = &self.amenities {
            property.amenities = amenities.clone();
        }
        if let Some(agent_name) = &self.agent_name {
            property.agent_name = Some(agent_name.clone());
        }
        if let Some(agent_phone) = &self.agent_phone {
            property.agent_phone = Some(agent_phone.clone());
        }
        if let Some(agent_email) = &self.agent_email {
            property.agent_email = Some(agent_email.clone());
        }
        if let Some(agent_image) = &self.agent_image {
            property.agent_image = Some(agent_image.clone());
        }
        if let Some(is_featured) = self.is_featured {
            property.is_featured = is_featured;
        }
        if let Some(is_active) = self.is_active {
            property.is_active = is_active;
        }
        property.updated_at = Utc::now();
    }
}
