use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "bookings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub reference: String,
    pub status: String,
    pub service_category: Option<String>,
    pub service_name: Option<String>,
    pub service_price: Option<String>,
    pub service_duration: Option<i32>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub services: Option<Json>,
    pub total_duration: Option<i32>,
    pub total_price_min: Option<String>,
    pub date: String,
    pub time: String,
    pub stylist_id: i32,
    pub stylist_name: String,
    pub client_first_name: String,
    pub client_last_name: String,
    pub client_email: String,
    pub client_phone: String,
    pub client_notes: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
