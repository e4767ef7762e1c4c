use std::cmp::Reverse;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::{
    availability::SlotFilter,
    error::AppResult,
    models::{Booking, ContactSubmission},
};

use super::BookingStore;

/// Process-local store; contents are lost on restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    bookings: RwLock<Vec<Booking>>,
    contacts: RwLock<Vec<ContactSubmission>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Latest insert first among equal timestamps.
fn newest_first<T: Clone>(items: &[T], created_at: impl Fn(&T) -> DateTime<Utc>) -> Vec<T> {
    let mut sorted: Vec<T> = items.iter().rev().cloned().collect();
    sorted.sort_by_key(|item| Reverse(created_at(item)));
    sorted
}

#[async_trait]
impl BookingStore for MemoryStore {
    async fn insert_booking(&self, booking: &Booking) -> AppResult<()> {
        self.bookings.write().await.push(booking.clone());
        Ok(())
    }

    async fn list_bookings(&self) -> AppResult<Vec<Booking>> {
        let bookings = self.bookings.read().await;
        Ok(newest_first(&bookings, |b| b.created_at))
    }

    async fn find_booking_by_reference(&self, reference: &str) -> AppResult<Option<Booking>> {
        let bookings = self.bookings.read().await;
        Ok(bookings.iter().find(|b| b.reference == reference).cloned())
    }

    async fn booked_times(&self, filter: &SlotFilter) -> AppResult<Vec<String>> {
        let bookings = self.bookings.read().await;
        Ok(bookings
            .iter()
            .filter(|b| filter.matches(&b.date, b.stylist_id))
            .map(|b| b.time.clone())
            .collect())
    }

    async fn insert_contact(&self, contact: &ContactSubmission) -> AppResult<()> {
        self.contacts.write().await.push(contact.clone());
        Ok(())
    }

    async fn list_contacts(&self) -> AppResult<Vec<ContactSubmission>> {
        let contacts = self.contacts.read().await;
        Ok(newest_first(&contacts, |c| c.created_at))
    }
}
