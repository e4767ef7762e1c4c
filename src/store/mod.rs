//! Persistence gateway for bookings and contact submissions.
//!
//! Both collections are append-only. Nothing here coordinates an availability
//! read with a later insert, so concurrent requests can book the same slot.

use async_trait::async_trait;

use crate::{
    availability::SlotFilter,
    error::AppResult,
    models::{Booking, ContactSubmission},
};

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

#[async_trait]
pub trait BookingStore: Send + Sync {
    async fn insert_booking(&self, booking: &Booking) -> AppResult<()>;

    /// Newest first.
    async fn list_bookings(&self) -> AppResult<Vec<Booking>>;

    async fn find_booking_by_reference(&self, reference: &str) -> AppResult<Option<Booking>>;

    /// `time` of every stored booking matching `filter`.
    async fn booked_times(&self, filter: &SlotFilter) -> AppResult<Vec<String>>;

    async fn insert_contact(&self, contact: &ContactSubmission) -> AppResult<()>;

    /// Newest first.
    async fn list_contacts(&self) -> AppResult<Vec<ContactSubmission>>;
}
