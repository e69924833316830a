use crate::helpers::JsonResponse;
use crate::storage::Storage;
use actix_web::{get, web, Responder, Result};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

/// GET /properties?page={n}&limit={n}
/// Active listings, newest first. page/limit is a convenience slice for
/// the catalog grid, not a storage-level contract.
#[tracing::instrument(name = "List active properties.", skip_all)]
#[get("")]
pub async fn list(
    query: web::Query<ListQuery>,
    storage: web::Data<Arc<dyn Storage>>,
) -> Result<impl Responder> {
    let mut properties = storage.list_active_properties().await.map_err(|err| {
        tracing::error!("failed to list properties: {:?}", err);
        JsonResponse::internal_server_error("Internal Server Error")
    })?;

    if let (Some(page), Some(limit)) = (query.page, query.limit) {
        let start = page.saturating_sub(1).saturating_mul(limit);
        properties = properties.into_iter().skip(start).take(limit).collect();
    }

    Ok(JsonResponse::ok(properties))
}

/// GET /properties/featured
#[tracing::instrument(name = "List featured properties.", skip_all)]
#[get("/featured")]
pub async fn featured(storage: web::Data<Arc<dyn Storage>>) -> Result<impl Responder> {
    storage
        .list_featured_properties()
        .await
        .map(JsonResponse::ok)
        .map_err(|err| {
            tracing::error!("failed to list featured properties: {:?}", err);
            JsonResponse::internal_server_error("Internal Server Error")
        })
}

/// GET /properties/{id}
/// Returns the listing whether or not it is still active.
#[tracing::instrument(name = "Get property.", skip_all)]
#[get("/{id}")]
pub async fn item(
    path: web::Path<String>,
    storage: web::Data<Arc<dyn Storage>>,
) -> Result<impl Responder> {
    storage
        .get_property(&path.into_inner())
        .await
        .map_err(|err| {
            tracing::error!("failed to fetch property: {:?}", err);
            JsonResponse::internal_server_error("Internal Server Error")
        })
        .and_then(|property| match property {
            Some(property) => Ok(JsonResponse::ok(property)),
            None => Err(JsonResponse::not_found("Property not found")),
        })
}
