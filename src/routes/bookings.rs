use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use validator::Validate;

use crate::{
    dto::bookings::{
        BookingList, BookingSummary, CreateBookingRequest, TimeSlotAvailability, TimeSlotQuery,
    },
    error::{AppResult, ErrorBody},
    models::Booking,
    services::booking_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_bookings).post(create_booking))
        .route("/{reference}", get(get_booking))
}

pub fn timeslot_router() -> Router<AppState> {
    Router::new().route("/", get(time_slots))
}

#[utoipa::path(
    get,
    path = "/api/timeslots",
    params(TimeSlotQuery),
    responses(
        (status = 200, description = "Slots not yet booked for the date", body = TimeSlotAvailability),
    ),
    tag = "Bookings"
)]
pub async fn time_slots(
    State(state): State<AppState>,
    Query(query): Query<TimeSlotQuery>,
) -> AppResult<Json<TimeSlotAvailability>> {
    let data = booking_service::available_time_slots(&state, query).await?;
    Ok(Json(data))
}

#[utoipa::path(
    post,
    path = "/api/bookings",
    request_body = CreateBookingRequest,
    responses(
        (status = 201, description = "Booking confirmed", body = BookingSummary),
        (status = 422, description = "Malformed client details", body = ErrorBody),
        (status = 500, description = "Booking could not be stored", body = ErrorBody),
    ),
    tag = "Bookings"
)]
pub async fn create_booking(
    State(state): State<AppState>,
    Json(payload): Json<CreateBookingRequest>,
) -> AppResult<(StatusCode, Json<BookingSummary>)> {
    payload.validate()?;
    let summary = booking_service::create_booking(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(summary)))
}

#[utoipa::path(
    get,
    path = "/api/bookings",
    responses(
        (status = 200, description = "All bookings, newest first", body = BookingList),
    ),
    tag = "Bookings"
)]
pub async fn list_bookings(State(state): State<AppState>) -> AppResult<Json<BookingList>> {
    let data = booking_service::list_bookings(&state).await?;
    Ok(Json(data))
}

#[utoipa::path(
    get,
    path = "/api/bookings/{reference}",
    params(
        ("reference" = String, Path, description = "Booking reference, e.g. LUNA-K3Q9ZT")
    ),
    responses(
        (status = 200, description = "Booking", body = Booking),
        (status = 404, description = "Booking not found", body = ErrorBody),
    ),
    tag = "Bookings"
)]
pub async fn get_booking(
    State(state): State<AppState>,
    Path(reference): Path<String>,
) -> AppResult<Json<Booking>> {
    let booking = booking_service::get_booking(&state, &reference).await?;
    Ok(Json(booking))
}
