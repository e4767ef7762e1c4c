use chrono::{SubsecRound, Utc};
use uuid::Uuid;

use crate::{
    availability::{SlotFilter, available_slots},
    dto::bookings::{
        BookingList, BookingSummary, CreateBookingRequest, TimeSlotAvailability, TimeSlotQuery,
    },
    error::{AppError, AppResult},
    models::{BOOKING_STATUS_CONFIRMED, Booking},
    reference::generate_reference,
    state::AppState,
};

pub async fn available_time_slots(
    state: &AppState,
    query: TimeSlotQuery,
) -> AppResult<TimeSlotAvailability> {
    let filter = SlotFilter::new(query.date.clone(), query.stylist_id);
    let booked = state.store.booked_times(&filter).await?;
    tracing::debug!(
        date = %query.date,
        stylist_id = ?filter.stylist_id,
        booked = booked.len(),
        "slot lookup"
    );

    Ok(TimeSlotAvailability {
        date: query.date,
        stylist_id: query.stylist_id,
        available_slots: available_slots(&booked)
            .into_iter()
            .map(str::to_string)
            .collect(),
    })
}

/// Slot availability is not rechecked here; concurrent requests for one slot
/// all succeed.
pub async fn create_booking(
    state: &AppState,
    payload: CreateBookingRequest,
) -> AppResult<BookingSummary> {
    // Postgres keeps microseconds; truncate so the response matches what is stored.
    let created_at = Utc::now().trunc_subsecs(6);
    let selection = payload.selection();
    let client = payload.client;

    let booking = Booking {
        id: Uuid::new_v4(),
        reference: generate_reference(created_at),
        status: BOOKING_STATUS_CONFIRMED.to_string(),
        selection,
        date: payload.date,
        time: payload.time,
        stylist_id: payload.stylist_id,
        stylist_name: payload.stylist_name,
        client_first_name: client.first_name,
        client_last_name: client.last_name,
        client_email: client.email,
        client_phone: client.phone,
        client_notes: client.notes.unwrap_or_default(),
        created_at,
    };

    if let Err(err) = state.store.insert_booking(&booking).await {
        tracing::error!(error = %err, cause = ?err, "error creating booking");
        return Err(AppError::Persistence("Failed to create booking"));
    }

    tracing::info!(
        reference = %booking.reference,
        client_email = %booking.client_email,
        "booking created"
    );

    Ok(BookingSummary::from(&booking))
}

pub async fn list_bookings(state: &AppState) -> AppResult<BookingList> {
    let bookings = state.store.list_bookings().await?;
    Ok(BookingList { bookings })
}

pub async fn get_booking(state: &AppState, reference: &str) -> AppResult<Booking> {
    match state.store.find_booking_by_reference(reference).await? {
        Some(booking) => Ok(booking),
        None => Err(AppError::NotFound("Booking not found")),
    }
}
