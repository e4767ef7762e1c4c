//! Fixed salon catalog: service menu, stylists and bookable time slots.

use serde::Serialize;
use utoipa::ToSchema;

/// Stylist id meaning "no specific stylist requested".
pub const ANY_AVAILABLE_STYLIST_ID: i32 = 4;

#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct CatalogItem {
    #[schema(value_type = String)]
    pub name: &'static str,
    /// Display label such as `$50+`, `Consultation` or `Free`.
    #[schema(value_type = String)]
    pub price: &'static str,
    /// Minutes.
    pub duration: i32,
}

#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct ServiceCategory {
    pub id: i32,
    #[schema(value_type = String)]
    pub category: &'static str,
    #[schema(value_type = String)]
    pub icon: &'static str,
    #[schema(value_type = String)]
    pub description: &'static str,
    #[schema(value_type = Vec<CatalogItem>)]
    pub items: &'static [CatalogItem],
}

#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct Stylist {
    pub id: i32,
    #[schema(value_type = String)]
    pub name: &'static str,
    #[schema(value_type = String)]
    pub specialty: &'static str,
}

const fn item(name: &'static str, price: &'static str, duration: i32) -> CatalogItem {
    CatalogItem {
        name,
        price,
        duration,
    }
}

pub static SERVICES: &[ServiceCategory] = &[
    ServiceCategory {
        id: 1,
        category: "Haircuts & Styling",
        icon: "Scissors",
        description: "Includes trims, full cuts, blowouts, and professional styling for everyday or special occasions.",
        items: &[
            item("HairCut", "$50+", 45),
            item("BlowDry", "$50+", 30),
            item("Wash Cut & BlowDry", "$70+", 60),
            item("Dry Cut", "$40+", 30),
            item("Fringe/Bang Trim", "$15+", 15),
            item("Up Do", "$150+", 90),
            item("Half Up Do/Prom", "$75+", 60),
        ],
    },
    ServiceCategory {
        id: 2,
        category: "Color Services",
        icon: "Palette",
        description: "Enjoy our range of coloring services, from highlights and balayage to full color and root touch-ups.",
        items: &[
            item("Root Touch-up", "$75+", 60),
            item("Full Color", "$125+", 90),
            item("Highlights", "$200+", 120),
            item("Partial Highlights", "$140+", 90),
            item("Balayage", "$240+", 150),
            item("Partial Balayage", "$160+", 120),
            item("Toner", "$65+", 30),
            item("Color Correction", "Consultation", 180),
            item("Lowlights", "$140+", 90),
        ],
    },
    ServiceCategory {
        id: 3,
        category: "Hair Treatments",
        icon: "Sparkles",
        description: "Deep conditioning, keratin treatments, and scalp care to nourish and repair hair.",
        items: &[
            item("Hair Keratin", "$350+", 180),
            item("Deep Treatment", "$55+", 45),
            item("Olaplex Treatment", "$75+", 45),
            item("Scalp Detox", "$45+", 30),
            item("Protein Treatment", "$65+", 45),
            item("Moisture Repair", "$60+", 45),
            item("Perm", "$150", 120),
        ],
    },
    ServiceCategory {
        id: 4,
        category: "Beauty & Add-Ons",
        icon: "Star",
        description: "Complete your look with our beauty services including makeup, brows, and lashes.",
        items: &[
            item("Makeup", "$90+", 60),
            item("Eyebrow Shaping", "$20+", 15),
            item("Eyelash Extensions", "$100+", 90),
            item("Full Face Threading", "$50+", 30),
            item("Hair Extension", "Consultation", 180),
            item("Free Consultation", "Free", 30),
        ],
    },
];

pub static STYLISTS: &[Stylist] = &[
    Stylist {
        id: 1,
        name: "Sofia Martinez",
        specialty: "Color Specialist",
    },
    Stylist {
        id: 2,
        name: "Emma Chen",
        specialty: "Cut & Style Expert",
    },
    Stylist {
        id: 3,
        name: "Olivia Brown",
        specialty: "Bridal & Updos",
    },
    Stylist {
        id: ANY_AVAILABLE_STYLIST_ID,
        name: "Any Available",
        specialty: "All Services",
    },
];

/// Appointment start times, in display order.
pub static TIME_SLOTS: &[&str] = &[
    "9:00 AM", "9:30 AM", "10:00 AM", "10:30 AM", "11:00 AM", "11:30 AM", "12:00 PM", "12:30 PM",
    "1:00 PM", "1:30 PM", "2:00 PM", "2:30 PM", "3:00 PM", "3:30 PM", "4:00 PM", "4:30 PM",
    "5:00 PM", "5:30 PM", "6:00 PM", "6:30 PM", "7:00 PM",
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn time_slots_cover_the_business_day_in_half_hours() {
        assert_eq!(TIME_SLOTS.len(), 21);
        assert_eq!(TIME_SLOTS.first(), Some(&"9:00 AM"));
        assert_eq!(TIME_SLOTS.last(), Some(&"7:00 PM"));
        let unique: HashSet<_> = TIME_SLOTS.iter().collect();
        assert_eq!(unique.len(), TIME_SLOTS.len());
    }

    #[test]
    fn catalog_ids_are_unique_and_items_non_empty() {
        let ids: HashSet<_> = SERVICES.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), SERVICES.len());
        assert!(SERVICES.iter().all(|s| !s.items.is_empty()));
        assert!(SERVICES.iter().flat_map(|s| s.items).all(|i| i.duration > 0));
    }

    #[test]
    fn reserved_stylist_is_listed() {
        let any = STYLISTS
            .iter()
            .find(|s| s.id == ANY_AVAILABLE_STYLIST_ID)
            .expect("reserved stylist");
        assert_eq!(any.name, "Any Available");
    }
}
