use crate::{
    catalog::{SERVICES, STYLISTS},
    dto::catalog::{ApiStatus, ServiceCatalog, StylistList},
};

pub const API_NAME: &str = "Luna Hair Salon API";

pub fn api_status() -> ApiStatus {
    ApiStatus {
        message: API_NAME.to_string(),
        status: "running".to_string(),
    }
}

pub fn list_services() -> ServiceCatalog {
    ServiceCatalog { services: SERVICES }
}

pub fn list_stylists() -> StylistList {
    StylistList { stylists: STYLISTS }
}
