use crate::helpers::JsonResponse;
use crate::storage::Storage;
use actix_web::{get, web, Responder, Result};
use std::sync::Arc;

/// GET /conversations
#[tracing::instrument(name = "List chat conversations.", skip_all)]
#[get("")]
pub async fn list(storage: web::Data<Arc<dyn Storage>>) -> Result<impl Responder> {
    storage
        .list_conversations()
        .await
        .map(JsonResponse::ok)
        .map_err(|err| {
            tracing::error!("failed to list conversations: {:?}", err);
            JsonResponse::internal_server_error("Internal Server Error")
        })
}

/// GET /conversations/{sessionId}
#[tracing::instrument(name = "Get chat conversation.", skip_all)]
#[get("/{session_id}")]
pub async fn item(
    path: web::Path<String>,
    storage: web::Data<Arc<dyn Storage>>,
) -> Result<impl Responder> {
    storage
        .get_conversation_by_session(&path.into_inner())
        .await
        .map_err(|err| {
            tracing::error!("failed to fetch conversation: {:?}", err);
            JsonResponse::internal_server_error("Internal Server Error")
        })
        .and_then(|conversation| match conversation {
            Some(conversation) => Ok(JsonResponse::ok(conversation)),
            None => Err(JsonResponse::not_found("No chat history found")),
        })
}
