use crate::forms;
use crate::helpers::{body_into_form, JsonResponse};
use crate::models;
use crate::storage::Storage;
use actix_web::web::Bytes;
use actix_web::{post, web, Responder, Result};
use std::sync::Arc;

/// POST /conversations
/// Create-or-replace keyed on the widget's session id. The first message
/// of a session creates the transcript; posting again with the same
/// session id replaces it while keeping the stored row's identity.
#[tracing::instrument(name = "Upsert chat conversation.", skip_all)]
#[post("")]
pub async fn item(body: Bytes, storage: web::Data<Arc<dyn Storage>>) -> Result<impl Responder> {
    let form: forms::ConversationForm = body_into_form(body)?;
    let conversation = models::ChatConversation::from(form);

    storage
        .upsert_conversation(conversation)
        .await
        .map(JsonResponse::created)
        .map_err(|err| {
            tracing::error!("failed to upsert conversation: {:?}", err);
            JsonResponse::internal_server_error("Internal Server Error")
        })
}
