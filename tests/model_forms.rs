use aqarat::forms::{InquiryForm, PropertyForm, PropertyUpdateForm};
use aqarat::models;
use serde_json::json;
use serde_valid::Validate;

#[test]
fn minimal_listing_payload_gets_defaults() {
    let form: PropertyForm = serde_json::from_value(json!({
        "title": "محل تجاري",
        "location": "الدمام",
        "price": 95000.0,
        "propertyType": "shop"
    }))
    .unwrap();
    assert!(form.validate().is_ok());

    assert_eq!(models::PriceType::ForSale, form.price_type);
    assert_eq!(0, form.bedrooms);
    assert_eq!(0, form.parking_spaces);
    assert!(form.images.is_empty());
    assert!(!form.is_featured);
    assert!(form.is_active);

    let property = models::Property::from(form);
    assert_eq!(property.created_at, property.updated_at);
}

#[test]
fn property_type_outside_domain_is_rejected() {
    let result = serde_json::from_value::<PropertyForm>(json!({
        "title": "قصر",
        "location": "مكة",
        "price": 1.0,
        "propertyType": "palace"
    }));
    let err = result.unwrap_err().to_string();
    assert!(err.contains("unknown variant"), "error was: {}", err);
}

#[test]
fn negative_bedrooms_is_reported_per_field() {
    let form: PropertyForm = serde_json::from_value(json!({
        "title": "شقة",
        "location": "الرياض",
        "price": 1000.0,
        "propertyType": "apartment",
        "bedrooms": -2,
        "bathrooms": -1
    }))
    .unwrap();

    let errors = form.validate().unwrap_err();
    let detail = serde_json::to_value(&errors).unwrap().to_string();
    // Every offending field shows up, not just the first.
    assert!(detail.contains("bedrooms"), "errors were: {}", detail);
    assert!(detail.contains("bathrooms"), "errors were: {}", detail);
}

#[test]
fn full_persisted_shape_validates_against_the_partial_shape() {
    let form: PropertyForm = serde_json::from_value(json!({
        "title": "مستودع",
        "location": "ينبع",
        "price": 30000.0,
        "propertyType": "warehouse",
        "priceType": "for-rent",
        "features": ["مكيف"],
        "agentName": "خالد"
    }))
    .unwrap();
    let property = models::Property::from(form);

    let as_json = serde_json::to_value(&property).unwrap();
    let partial: PropertyUpdateForm = serde_json::from_value(as_json).unwrap();
    assert!(partial.validate().is_ok());
    assert_eq!(Some(models::PriceType::ForRent), partial.price_type);
}

#[test]
fn enum_tokens_use_the_wire_spelling() {
    assert_eq!(
        json!("for-rent"),
        serde_json::to_value(models::PriceType::ForRent).unwrap()
    );
    assert_eq!(
        json!("viewing-request"),
        serde_json::to_value(models::InquiryType::ViewingRequest).unwrap()
    );
    assert_eq!(
        json!("in-review"),
        serde_json::to_value(models::InquiryStatus::InReview).unwrap()
    );
    assert_eq!(
        json!("warehouse"),
        serde_json::to_value(models::PropertyType::Warehouse).unwrap()
    );
}

#[test]
fn inquiry_defaults_to_new_general() {
    let form: InquiryForm = serde_json::from_value(json!({
        "name": "Sara",
        "message": "Interested"
    }))
    .unwrap();
    assert!(form.validate().is_ok());

    let inquiry = models::Inquiry::from(form);
    assert_eq!(models::InquiryStatus::New, inquiry.status);
    assert_eq!(models::InquiryType::General, inquiry.inquiry_type);
    assert!(inquiry.property_id.is_none());
}
