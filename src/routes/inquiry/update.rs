use crate::forms;
use crate::helpers::{body_into_form, JsonResponse};
use crate::storage::Storage;
use actix_web::web::Bytes;
use actix_web::{put, web, Responder, Result};
use std::sync::Arc;

/// PUT /inquiries/{id}
/// Admin-side update, in practice moving the inquiry through the status
/// workflow. Inquiries are never deleted.
#[tracing::instrument(name = "Update inquiry.", skip_all)]
#[put("/{id}")]
pub async fn item(
    path: web::Path<String>,
    body: Bytes,
    storage: web::Data<Arc<dyn Storage>>,
) -> Result<impl Responder> {
    let form: forms::InquiryUpdateForm = body_into_form(body)?;

    storage
        .update_inquiry(&path.into_inner(), form)
        .await
        .map_err(|err| {
            tracing::error!("failed to update inquiry: {:?}", err);
            JsonResponse::internal_server_error("Internal Server Error")
        })
        .and_then(|inquiry| match inquiry {
            Some(inquiry) => Ok(JsonResponse::ok(inquiry)),
            None => Err(JsonResponse::not_found("Inquiry not found")),
        })
}
