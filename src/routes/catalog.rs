use axum::{Json, Router, routing::get};

use crate::{
    dto::catalog::{ApiStatus, ServiceCatalog, StylistList},
    services::catalog_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(api_root))
        .route("/services", get(list_services))
        .route("/stylists", get(list_stylists))
}

#[utoipa::path(
    get,
    path = "/api/",
    responses(
        (status = 200, description = "API is up", body = ApiStatus),
    ),
    tag = "Status"
)]
pub async fn api_root() -> Json<ApiStatus> {
    Json(catalog_service::api_status())
}

#[utoipa::path(
    get,
    path = "/api/services",
    responses(
        (status = 200, description = "Service menu grouped by category", body = ServiceCatalog),
    ),
    tag = "Catalog"
)]
pub async fn list_services() -> Json<ServiceCatalog> {
    Json(catalog_service::list_services())
}

#[utoipa::path(
    get,
    path = "/api/stylists",
    responses(
        (status = 200, description = "Stylists, including the any-available entry", body = StylistList),
    ),
    tag = "Catalog"
)]
pub async fn list_stylists() -> Json<StylistList> {
    Json(catalog_service::list_stylists())
}
