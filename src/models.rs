use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

pub const BOOKING_STATUS_CONFIRMED: &str = "confirmed";
pub const CONTACT_STATUS_NEW: &str = "new";

/// One service picked in a multi-service booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ServiceItem {
    pub category: String,
    pub name: String,
    pub price: String,
    pub duration: i32,
}

/// Single-service shape kept for older clients; every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LegacyService {
    pub service_category: Option<String>,
    pub service_name: Option<String>,
    pub service_price: Option<String>,
    pub service_duration: Option<i32>,
}

/// What was booked. Serialized flat into the booking object, so only the
/// active case's fields appear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum ServiceSelection {
    Multi {
        services: Vec<ServiceItem>,
        total_duration: Option<i32>,
        total_price_min: Option<String>,
    },
    Single(LegacyService),
}

impl ServiceSelection {
    /// Multi-service selection, filling totals the client left out.
    pub fn multi(
        services: Vec<ServiceItem>,
        total_duration: Option<i32>,
        total_price_min: Option<String>,
    ) -> Self {
        // Client-supplied numbers: negative durations count as zero and sums saturate.
        let total_duration = total_duration.or_else(|| {
            Some(
                services
                    .iter()
                    .fold(0_i32, |acc, s| acc.saturating_add(s.duration.max(0))),
            )
        });
        let total_price_min = total_price_min.or_else(|| {
            let floor = services
                .iter()
                .filter_map(|s| price_floor(&s.price))
                .fold(0_u64, u64::saturating_add);
            Some(format!("${floor}+"))
        });
        ServiceSelection::Multi {
            services,
            total_duration,
            total_price_min,
        }
    }

    pub fn services(&self) -> Option<&[ServiceItem]> {
        match self {
            ServiceSelection::Multi { services, .. } => Some(services),
            ServiceSelection::Single(_) => None,
        }
    }
}

/// Whole-dollar amount after the first `$` in a label like `$50+` or
/// `$1,200+`; `None` for labels without one (`Consultation`, `Free`).
///
/// Thousands separators are skipped, cents are dropped and amounts past
/// `u64::MAX` saturate.
pub fn price_floor(label: &str) -> Option<u64> {
    let (_, rest) = label.split_once('$')?;
    let mut amount: Option<u64> = None;
    for c in rest.chars() {
        match c {
            '0'..='9' => {
                let digit = u64::from(c as u8 - b'0');
                let value = amount.unwrap_or(0);
                amount = Some(value.saturating_mul(10).saturating_add(digit));
            }
            ',' if amount.is_some() => continue,
            _ => break,
        }
    }
    amount
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Booking {
    pub id: Uuid,
    pub reference: String,
    pub status: String,
    #[serde(flatten)]
    pub selection: ServiceSelection,
    pub date: String,
    pub time: String,
    pub stylist_id: i32,
    pub stylist_name: String,
    pub client_first_name: String,
    pub client_last_name: String,
    pub client_email: String,
    pub client_phone: String,
    pub client_notes: String,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn client_name(&self) -> String {
        format!("{} {}", self.client_first_name, self.client_last_name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ContactSubmission {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, price: &str, duration: i32) -> ServiceItem {
        ServiceItem {
            category: "Color Services".into(),
            name: name.into(),
            price: price.into(),
            duration,
        }
    }

    #[test]
    fn price_floor_reads_leading_dollar_amount() {
        assert_eq!(price_floor("$50+"), Some(50));
        assert_eq!(price_floor("$150"), Some(150));
        assert_eq!(price_floor("Consultation"), None);
        assert_eq!(price_floor("Free"), None);
    }

    #[test]
    fn price_floor_skips_separators_and_saturates() {
        assert_eq!(price_floor("$1,200+"), Some(1200));
        assert_eq!(price_floor("$49.99"), Some(49));
        assert_eq!(price_floor("$4294967296+"), Some(4_294_967_296));
        assert_eq!(price_floor("$99999999999999999999999+"), Some(u64::MAX));
        assert_eq!(price_floor("$,5"), None);
    }

    #[test]
    fn aggregation_saturates_instead_of_overflowing() {
        let selection = ServiceSelection::multi(
            vec![
                item("Balayage", "$4294967295+", i32::MAX),
                item("Toner", "$1+", 1),
                item("Scalp Detox", "$18446744073709551615+", 30),
            ],
            None,
            None,
        );
        match selection {
            ServiceSelection::Multi {
                total_duration,
                total_price_min,
                ..
            } => {
                assert_eq!(total_duration, Some(i32::MAX));
                assert_eq!(total_price_min, Some(format!("${}+", u64::MAX)));
            }
            other => panic!("expected multi selection, got {other:?}"),
        }
    }

    #[test]
    fn aggregation_sums_large_prices_past_u32() {
        let selection = ServiceSelection::multi(
            vec![item("Balayage", "$4294967295+", 150), item("Toner", "$1+", 30)],
            None,
            None,
        );
        let json = serde_json::to_value(&selection).unwrap();
        assert_eq!(json["total_price_min"], "$4294967296+");
        assert_eq!(json["total_duration"], 180);
    }

    #[test]
    fn missing_totals_are_aggregated() {
        let selection = ServiceSelection::multi(
            vec![
                item("Full Color", "$125+", 90),
                item("Toner", "$65+", 30),
                item("Color Correction", "Consultation", 180),
            ],
            None,
            None,
        );
        match selection {
            ServiceSelection::Multi {
                total_duration,
                total_price_min,
                ..
            } => {
                assert_eq!(total_duration, Some(300));
                assert_eq!(total_price_min.as_deref(), Some("$190+"));
            }
            other => panic!("expected multi selection, got {other:?}"),
        }
    }

    #[test]
    fn client_totals_are_kept_verbatim() {
        let selection = ServiceSelection::multi(
            vec![item("Toner", "$65+", 30)],
            Some(45),
            Some("$70+".into()),
        );
        assert_eq!(
            selection,
            ServiceSelection::Multi {
                services: vec![item("Toner", "$65+", 30)],
                total_duration: Some(45),
                total_price_min: Some("$70+".into()),
            }
        );
    }

    #[test]
    fn multi_selection_serializes_without_legacy_fields() {
        let selection = ServiceSelection::multi(vec![item("Toner", "$65+", 30)], None, None);
        let json = serde_json::to_value(&selection).unwrap();
        assert!(json.get("services").is_some());
        assert!(json.get("service_name").is_none());
        assert_eq!(json["total_duration"], 30);
    }

    #[test]
    fn legacy_selection_serializes_without_services() {
        let selection = ServiceSelection::Single(LegacyService {
            service_category: Some("Haircuts & Styling".into()),
            service_name: Some("HairCut".into()),
            service_price: Some("$50+".into()),
            service_duration: Some(45),
        });
        let json = serde_json::to_value(&selection).unwrap();
        assert_eq!(json["service_name"], "HairCut");
        assert!(json.get("services").is_none());
        assert!(json.get("total_duration").is_none());
    }
}
