use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::models::{Booking, LegacyService, ServiceItem, ServiceSelection};

#[derive(Debug, Clone, Default, Deserialize, ToSchema, Validate)]
pub struct ClientInfo {
    pub first_name: String,
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Accepts both the legacy single-service fields and a `services` list.
#[derive(Debug, Clone, Default, Deserialize, ToSchema, Validate)]
pub struct CreateBookingRequest {
    pub service_category: Option<String>,
    pub service_name: Option<String>,
    pub service_price: Option<String>,
    pub service_duration: Option<i32>,
    pub services: Option<Vec<ServiceItem>>,
    pub total_duration: Option<i32>,
    pub total_price_min: Option<String>,
    pub date: String,
    pub time: String,
    pub stylist_id: i32,
    pub stylist_name: String,
    #[validate(nested)]
    pub client: ClientInfo,
}

impl CreateBookingRequest {
    /// A non-empty `services` list wins over the legacy fields.
    pub fn selection(&self) -> ServiceSelection {
        match self.services.as_ref().filter(|s| !s.is_empty()) {
            Some(services) => ServiceSelection::multi(
                services.clone(),
                self.total_duration,
                self.total_price_min.clone(),
            ),
            None => ServiceSelection::Single(LegacyService {
                service_category: self.service_category.clone(),
                service_name: self.service_name.clone(),
                service_price: self.service_price.clone(),
                service_duration: self.service_duration,
            }),
        }
    }
}

/// Returned from booking creation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookingSummary {
    pub id: Uuid,
    pub reference: String,
    pub status: String,
    pub date: String,
    pub time: String,
    pub stylist_name: String,
    pub client_name: String,
    pub client_email: String,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub selection: ServiceSelection,
}

impl From<&Booking> for BookingSummary {
    fn from(booking: &Booking) -> Self {
        Self {
            id: booking.id,
            reference: booking.reference.clone(),
            status: booking.status.clone(),
            date: booking.date.clone(),
            time: booking.time.clone(),
            stylist_name: booking.stylist_name.clone(),
            client_name: booking.client_name(),
            client_email: booking.client_email.clone(),
            created_at: booking.created_at,
            selection: booking.selection.clone(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BookingList {
    pub bookings: Vec<Booking>,
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TimeSlotQuery {
    /// Compared verbatim against stored booking dates.
    pub date: String,
    pub stylist_id: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TimeSlotAvailability {
    pub date: String,
    pub stylist_id: Option<i32>,
    pub available_slots: Vec<String>,
}
