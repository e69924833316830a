use crate::helpers::JsonResponse;
use crate::storage::Storage;
use actix_web::{delete, web, Responder, Result};
use std::sync::Arc;

/// DELETE /properties/{id}
/// Soft delete: the listing drops out of the catalog but keeps its
/// record, so inquiries that reference it stay resolvable.
#[tracing::instrument(name = "Deactivate property.", skip_all)]
#[delete("/{id}")]
pub async fn item(
    path: web::Path<String>,
    storage: web::Data<Arc<dyn Storage>>,
) -> Result<impl Responder> {
    storage
        .soft_delete_property(&path.into_inner())
        .await
        .map_err(|err| {
            tracing::error!("failed to deactivate property: {:?}", err);
            JsonResponse::internal_server_error("Internal Server Error")
        })
        .and_then(|deleted| {
            if deleted {
                Ok(JsonResponse::message("Property deleted successfully"))
            } else {
                Err(JsonResponse::not_found("Property not found"))
            }
        })
}
