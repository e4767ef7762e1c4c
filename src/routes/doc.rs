use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    catalog::{CatalogItem, ServiceCategory, Stylist},
    dto::{
        bookings::{
            BookingList, BookingSummary, ClientInfo, CreateBookingRequest, TimeSlotAvailability,
        },
        catalog::{ApiStatus, ServiceCatalog, StylistList},
        contact::{ContactList, ContactReceipt, CreateContactRequest},
    },
    error::ErrorBody,
    models::{Booking, ContactSubmission, LegacyService, ServiceItem, ServiceSelection},
    routes::{bookings, catalog, contact},
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Luna Hair Salon API"),
    paths(
        catalog::api_root,
        catalog::list_services,
        catalog::list_stylists,
        bookings::time_slots,
        bookings::create_booking,
        bookings::list_bookings,
        bookings::get_booking,
        contact::submit_contact,
        contact::list_contacts
    ),
    components(
        schemas(
            ApiStatus,
            CatalogItem,
            ServiceCategory,
            Stylist,
            ServiceCatalog,
            StylistList,
            ServiceItem,
            LegacyService,
            ServiceSelection,
            ClientInfo,
            CreateBookingRequest,
            BookingSummary,
            Booking,
            BookingList,
            TimeSlotAvailability,
            CreateContactRequest,
            ContactReceipt,
            ContactSubmission,
            ContactList,
            ErrorBody
        )
    ),
    tags(
        (name = "Status", description = "Service status"),
        (name = "Catalog", description = "Service menu and stylists"),
        (name = "Bookings", description = "Availability and appointment bookings"),
        (name = "Contact", description = "Contact form submissions"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
