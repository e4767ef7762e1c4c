use axum::{
    Json, Router,
    http::{StatusCode, Uri},
    routing::get,
};
use serde_json::{Value, json};

use crate::state::AppState;

pub mod bookings;
pub mod catalog;
pub mod contact;
pub mod doc;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    let api = Router::new()
        .merge(catalog::router())
        .nest("/timeslots", bookings::timeslot_router())
        .nest("/bookings", bookings::router())
        .nest("/contact", contact::router());

    // A nested "/" only answers "/api", so the trailing-slash form is explicit.
    Router::new()
        .route("/api/", get(catalog::api_root))
        .nest("/api", api)
}

/// API routes, docs and the JSON 404 fallback, bound to `state`.
pub fn create_app(state: AppState) -> Router {
    create_api_router()
        .merge(doc::scalar_docs())
        .fallback(not_found)
        .with_state(state)
}

async fn not_found(uri: Uri) -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "detail": "Not Found", "path": uri.path() })),
    )
}
