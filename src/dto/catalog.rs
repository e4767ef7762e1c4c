use serde::Serialize;
use utoipa::ToSchema;

use crate::catalog::{ServiceCategory, Stylist};

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiStatus {
    pub message: String,
    pub status: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceCatalog {
    #[schema(value_type = Vec<ServiceCategory>)]
    pub services: &'static [ServiceCategory],
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StylistList {
    #[schema(value_type = Vec<Stylist>)]
    pub stylists: &'static [Stylist],
}
