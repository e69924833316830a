use crate::helpers::JsonResponse;
use crate::storage::Storage;
use actix_web::{get, web, Responder, Result};
use std::sync::Arc;

/// GET /dashboard/stats
#[tracing::instrument(name = "Get dashboard stats.", skip_all)]
#[get("/stats")]
pub async fn item(storage: web::Data<Arc<dyn Storage>>) -> Result<impl Responder> {
    storage
        .dashboard_stats()
        .await
        .map(JsonResponse::ok)
        .map_err(|err| {
            tracing::error!("failed to fetch dashboard stats: {:?}", err);
            JsonResponse::internal_server_error("Internal Server Error")
        })
}
