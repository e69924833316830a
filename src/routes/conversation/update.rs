use crate::forms;
use crate::helpers::{body_into_form, JsonResponse};
use crate::storage::Storage;
use actix_web::web::Bytes;
use actix_web::{put, web, Responder, Result};
use std::sync::Arc;

/// PUT /conversations/{sessionId}
/// Appends the latest turns by replacing the transcript blob; every
/// write refreshes the update timestamp.
#[tracing::instrument(name = "Update chat conversation.", skip_all)]
#[put("/{session_id}")]
pub async fn item(
    path: web::Path<String>,
    body: Bytes,
    storage: web::Data<Arc<dyn Storage>>,
) -> Result<impl Responder> {
    let form: forms::ConversationUpdateForm = body_into_form(body)?;

    storage
        .update_conversation_by_session(&path.into_inner(), form)
        .await
        .map_err(|err| {
            tracing::error!("failed to update conversation: {:?}", err);
            JsonResponse::internal_server_error("Internal Server Error")
        })
        .and_then(|conversation| match conversation {
            Some(conversation) => Ok(JsonResponse::ok(conversation)),
            None => Err(JsonResponse::not_found("No chat history found")),
        })
}
