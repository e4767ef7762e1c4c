use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::get,
};
use validator::Validate;

use crate::{
    dto::contact::{ContactList, ContactReceipt, CreateContactRequest},
    error::{AppResult, ErrorBody},
    services::contact_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_contacts).post(submit_contact))
}

#[utoipa::path(
    post,
    path = "/api/contact",
    request_body = CreateContactRequest,
    responses(
        (status = 201, description = "Message received", body = ContactReceipt),
        (status = 422, description = "Malformed email address", body = ErrorBody),
        (status = 500, description = "Message could not be stored", body = ErrorBody),
    ),
    tag = "Contact"
)]
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(payload): Json<CreateContactRequest>,
) -> AppResult<(StatusCode, Json<ContactReceipt>)> {
    payload.validate()?;
    let receipt = contact_service::submit_contact(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(receipt)))
}

#[utoipa::path(
    get,
    path = "/api/contact",
    responses(
        (status = 200, description = "All contact submissions, newest first", body = ContactList),
    ),
    tag = "Contact"
)]
pub async fn list_contacts(State(state): State<AppState>) -> AppResult<Json<ContactList>> {
    let data = contact_service::list_contacts(&state).await?;
    Ok(Json(data))
}
