use crate::helpers::JsonResponse;
use crate::storage::Storage;
use actix_web::{get, web, Responder, Result};
use std::sync::Arc;

/// GET /inquiries
#[tracing::instrument(name = "List inquiries.", skip_all)]
#[get("")]
pub async fn list(storage: web::Data<Arc<dyn Storage>>) -> Result<impl Responder> {
    storage
        .list_inquiries()
        .await
        .map(JsonResponse::ok)
        .map_err(|err| {
            tracing::error!("failed to list inquiries: {:?}", err);
            JsonResponse::internal_server_error("Internal Server Error")
        })
}

/// GET /inquiries/property/{propertyId}
/// Inquiries linked to one listing. An unknown or malformed property id
/// yields an empty list, not an error.
#[tracing::instrument(name = "List inquiries by property.", skip_all)]
#[get("/property/{property_id}")]
pub async fn by_property(
    path: web::Path<String>,
    storage: web::Data<Arc<dyn Storage>>,
) -> Result<impl Responder> {
    storage
        .list_inquiries_by_property(&path.into_inner())
        .await
        .map(JsonResponse::ok)
        .map_err(|err| {
            tracing::error!("failed to list inquiries by property: {:?}", err);
            JsonResponse::internal_server_error("Internal Server Error")
        })
}
