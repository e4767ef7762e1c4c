pub mod bookings;
pub mod contact_submissions;

pub use bookings::Entity as Bookings;
pub use contact_submissions::Entity as ContactSubmissions;
