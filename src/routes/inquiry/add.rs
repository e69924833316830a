use crate::forms;
use crate::helpers::{body_into_form, JsonResponse};
use crate::models;
use crate::storage::Storage;
use actix_web::web::Bytes;
use actix_web::{post, web, Responder, Result};
use std::sync::Arc;

/// POST /inquiries
/// Public submission; no account required.
#[tracing::instrument(name = "Add inquiry.", skip_all)]
#[post("")]
pub async fn item(body: Bytes, storage: web::Data<Arc<dyn Storage>>) -> Result<impl Responder> {
    let form: forms::InquiryForm = body_into_form(body)?;
    let inquiry = models::Inquiry::from(form);

    storage
        .create_inquiry(inquiry)
        .await
        .map(JsonResponse::created)
        .map_err(|err| {
            tracing::error!("failed to create inquiry: {:?}", err);
            JsonResponse::internal_server_error("Internal Server Error")
        })
}
