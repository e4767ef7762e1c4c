use chrono::{SubsecRound, Utc};
use uuid::Uuid;

use crate::{
    dto::contact::{CONTACT_RECEIVED_MESSAGE, ContactList, ContactReceipt, CreateContactRequest},
    error::{AppError, AppResult},
    models::{CONTACT_STATUS_NEW, ContactSubmission},
    state::AppState,
};

pub async fn submit_contact(
    state: &AppState,
    payload: CreateContactRequest,
) -> AppResult<ContactReceipt> {
    let contact = ContactSubmission {
        id: Uuid::new_v4(),
        first_name: payload.first_name,
        last_name: payload.last_name,
        email: payload.email,
        subject: payload.subject,
        message: payload.message,
        status: CONTACT_STATUS_NEW.to_string(),
        created_at: Utc::now().trunc_subsecs(6),
    };

    if let Err(err) = state.store.insert_contact(&contact).await {
        tracing::error!(error = %err, cause = ?err, "error submitting contact form");
        return Err(AppError::Persistence("Failed to submit contact form"));
    }

    tracing::info!(email = %contact.email, "contact form submitted");

    Ok(ContactReceipt {
        id: contact.id,
        status: "received".to_string(),
        message: CONTACT_RECEIVED_MESSAGE.to_string(),
        created_at: contact.created_at,
    })
}

pub async fn list_contacts(state: &AppState) -> AppResult<ContactList> {
    let contacts = state.store.list_contacts().await?;
    Ok(ContactList { contacts })
}
