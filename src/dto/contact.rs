use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::ContactSubmission;

pub const CONTACT_RECEIVED_MESSAGE: &str =
    "Thank you for your message. We'll get back to you soon.";

#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
pub struct CreateContactRequest {
    pub first_name: String,
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ContactReceipt {
    pub id: Uuid,
    pub status: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ContactList {
    pub contacts: Vec<ContactSubmission>,
}
