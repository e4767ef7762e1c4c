use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::{
    availability::SlotFilter,
    db::{DbPool, OrmConn, orm_from_pool},
    entity::{
        bookings::{
            ActiveModel as BookingActive, Column as BookingCol, Entity as Bookings,
            Model as BookingModel,
        },
        contact_submissions::{
            ActiveModel as ContactActive, Column as ContactCol, Entity as ContactSubmissions,
            Model as ContactModel,
        },
    },
    error::AppResult,
    models::{Booking, ContactSubmission, LegacyService, ServiceItem, ServiceSelection},
};

use super::BookingStore;

/// Postgres-backed store. Entity reads and writes go through SeaORM; the
/// slot projection is a plain sqlx query on the same pool.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
    orm: OrmConn,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        let orm = orm_from_pool(&pool);
        Self { pool, orm }
    }

    pub fn orm(&self) -> &OrmConn {
        &self.orm
    }
}

#[async_trait]
impl BookingStore for PgStore {
    async fn insert_booking(&self, booking: &Booking) -> AppResult<()> {
        booking_to_active(booking)?.insert(&self.orm).await?;
        Ok(())
    }

    async fn list_bookings(&self) -> AppResult<Vec<Booking>> {
        Bookings::find()
            .order_by_desc(BookingCol::CreatedAt)
            .all(&self.orm)
            .await?
            .into_iter()
            .map(booking_from_entity)
            .collect()
    }

    async fn find_booking_by_reference(&self, reference: &str) -> AppResult<Option<Booking>> {
        let booking = Bookings::find()
            .filter(BookingCol::Reference.eq(reference))
            .one(&self.orm)
            .await?;
        booking.map(booking_from_entity).transpose()
    }

    async fn booked_times(&self, filter: &SlotFilter) -> AppResult<Vec<String>> {
        let times = sqlx::query_scalar::<_, String>(
            r#"
            SELECT "time" FROM bookings
            WHERE "date" = $1 AND ($2::INT4 IS NULL OR stylist_id = $2)
            "#,
        )
        .bind(&filter.date)
        .bind(filter.stylist_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(times)
    }

    async fn insert_contact(&self, contact: &ContactSubmission) -> AppResult<()> {
        ContactActive {
            id: Set(contact.id),
            first_name: Set(contact.first_name.clone()),
            last_name: Set(contact.last_name.clone()),
            email: Set(contact.email.clone()),
            subject: Set(contact.subject.clone()),
            message: Set(contact.message.clone()),
            status: Set(contact.status.clone()),
            created_at: Set(contact.created_at.into()),
        }
        .insert(&self.orm)
        .await?;
        Ok(())
    }

    async fn list_contacts(&self) -> AppResult<Vec<ContactSubmission>> {
        let contacts = ContactSubmissions::find()
            .order_by_desc(ContactCol::CreatedAt)
            .all(&self.orm)
            .await?
            .into_iter()
            .map(contact_from_entity)
            .collect();
        Ok(contacts)
    }
}

fn booking_to_active(booking: &Booking) -> AppResult<BookingActive> {
    let mut active = BookingActive {
        id: Set(booking.id),
        reference: Set(booking.reference.clone()),
        status: Set(booking.status.clone()),
        service_category: Set(None),
        service_name: Set(None),
        service_price: Set(None),
        service_duration: Set(None),
        services: Set(None),
        total_duration: Set(None),
        total_price_min: Set(None),
        date: Set(booking.date.clone()),
        time: Set(booking.time.clone()),
        stylist_id: Set(booking.stylist_id),
        stylist_name: Set(booking.stylist_name.clone()),
        client_first_name: Set(booking.client_first_name.clone()),
        client_last_name: Set(booking.client_last_name.clone()),
        client_email: Set(booking.client_email.clone()),
        client_phone: Set(booking.client_phone.clone()),
        client_notes: Set(booking.client_notes.clone()),
        created_at: Set(booking.created_at.into()),
    };

    match &booking.selection {
        ServiceSelection::Multi {
            services,
            total_duration,
            total_price_min,
        } => {
            let services = serde_json::to_value(services).map_err(anyhow::Error::from)?;
            active.services = Set(Some(services));
            active.total_duration = Set(*total_duration);
            active.total_price_min = Set(total_price_min.clone());
        }
        ServiceSelection::Single(legacy) => {
            active.service_category = Set(legacy.service_category.clone());
            active.service_name = Set(legacy.service_name.clone());
            active.service_price = Set(legacy.service_price.clone());
            active.service_duration = Set(legacy.service_duration);
        }
    }

    Ok(active)
}

fn booking_from_entity(model: BookingModel) -> AppResult<Booking> {
    let selection = match model.services.filter(|value| !value.is_null()) {
        Some(value) => {
            let services: Vec<ServiceItem> =
                serde_json::from_value(value).map_err(anyhow::Error::from)?;
            ServiceSelection::Multi {
                services,
                total_duration: model.total_duration,
                total_price_min: model.total_price_min,
            }
        }
        None => ServiceSelection::Single(LegacyService {
            service_category: model.service_category,
            service_name: model.service_name,
            service_price: model.service_price,
            service_duration: model.service_duration,
        }),
    };

    Ok(Booking {
        id: model.id,
        reference: model.reference,
        status: model.status,
        selection,
        date: model.date,
        time: model.time,
        stylist_id: model.stylist_id,
        stylist_name: model.stylist_name,
        client_first_name: model.client_first_name,
        client_last_name: model.client_last_name,
        client_email: model.client_email,
        client_phone: model.client_phone,
        client_notes: model.client_notes,
        created_at: model.created_at.with_timezone(&Utc),
    })
}

fn contact_from_entity(model: ContactModel) -> ContactSubmission {
    ContactSubmission {
        id: model.id,
        first_name: model.first_name,
        last_name: model.last_name,
        email: model.email,
        subject: model.subject,
        message: model.message,
        status: model.status,
        created_at: model.created_at.with_timezone(&Utc),
    }
}
