use crate::forms;
use crate::helpers::{body_into_form, JsonResponse};
use crate::models;
use crate::storage::Storage;
use actix_web::web::Bytes;
use actix_web::{post, web, Responder, Result};
use std::sync::Arc;

/// POST /properties
/// Validates the insert shape, assigns id and timestamps, persists.
#[tracing::instrument(name = "Add property.", skip_all)]
#[post("")]
pub async fn item(body: Bytes, storage: web::Data<Arc<dyn Storage>>) -> Result<impl Responder> {
    let form: forms::PropertyForm = body_into_form(body)?;
    let property = models::Property::from(form);

    storage
        .create_property(property)
        .await
        .map(JsonResponse::created)
        .map_err(|err| {
            tracing::error!("failed to create property: {:?}", err);
            JsonResponse::internal_server_error("Internal Server Error")
        })
}
