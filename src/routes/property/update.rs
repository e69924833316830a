use crate::forms;
use crate::helpers::{body_into_form, JsonResponse};
use crate::storage::Storage;
use actix_web::web::Bytes;
use actix_web::{put, web, Responder, Result};
use std::sync::Arc;

/// PUT /properties/{id}
/// Partial update: omitted fields keep their stored values.
#[tracing::instrument(name = "Update property.", skip_all)]
#[put("/{id}")]
pub async fn item(
    path: web::Path<String>,
    body: Bytes,
    storage: web::Data<Arc<dyn Storage>>,
) -> Result<impl Responder> {
    let form: forms::PropertyUpdateForm = body_into_form(body)?;

    storage
        .update_property(&path.into_inner(), form)
        .await
        .map_err(|err| {
            tracing::error!("failed to update property: {:?}", err);
            JsonResponse::internal_server_error("Internal Server Error")
        })
        .and_then(|property| match property {
            Some(property) => Ok(JsonResponse::ok(property)),
            None => Err(JsonResponse::not_found("Property not found")),
        })
}
