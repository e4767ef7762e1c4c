use std::collections::HashSet;

use crate::catalog::{ANY_AVAILABLE_STYLIST_ID, TIME_SLOTS};

/// Which stored bookings claim slots: exact `date` match and, when set, an
/// exact `stylist_id` match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotFilter {
    pub date: String,
    pub stylist_id: Option<i32>,
}

impl SlotFilter {
    /// No stylist, `0` and the "any available" id all mean "every stylist".
    pub fn new(date: impl Into<String>, stylist_id: Option<i32>) -> Self {
        let stylist_id = stylist_id.filter(|&id| id != 0 && id != ANY_AVAILABLE_STYLIST_ID);
        Self {
            date: date.into(),
            stylist_id,
        }
    }

    pub fn matches(&self, date: &str, stylist_id: i32) -> bool {
        self.date == date && self.stylist_id.is_none_or(|id| id == stylist_id)
    }
}

/// Canonical slots not present in `booked`, in canonical order.
pub fn available_slots<I, S>(booked: I) -> Vec<&'static str>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let claimed: HashSet<String> = booked.into_iter().map(|t| t.as_ref().to_string()).collect();
    TIME_SLOTS
        .iter()
        .copied()
        .filter(|slot| !claimed.contains(*slot))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_booked_returns_every_slot_in_order() {
        let slots = available_slots(Vec::<String>::new());
        assert_eq!(slots, TIME_SLOTS.to_vec());
    }

    #[test]
    fn booked_labels_are_removed() {
        let slots = available_slots(["10:00 AM", "3:30 PM", "10:00 AM"]);
        assert_eq!(slots.len(), TIME_SLOTS.len() - 2);
        assert!(!slots.contains(&"10:00 AM"));
        assert!(!slots.contains(&"3:30 PM"));
        assert_eq!(slots[0], "9:00 AM");
    }

    #[test]
    fn unknown_labels_are_ignored() {
        let slots = available_slots(["10:00", "8:00 PM"]);
        assert_eq!(slots, TIME_SLOTS.to_vec());
    }

    #[test]
    fn reserved_and_zero_stylist_ids_widen_the_filter() {
        assert_eq!(SlotFilter::new("2025-06-01", Some(ANY_AVAILABLE_STYLIST_ID)).stylist_id, None);
        assert_eq!(SlotFilter::new("2025-06-01", Some(0)).stylist_id, None);
        assert_eq!(SlotFilter::new("2025-06-01", Some(2)).stylist_id, Some(2));
    }

    #[test]
    fn filter_matches_exact_date_and_stylist() {
        let filter = SlotFilter::new("2025-06-01", Some(2));
        assert!(filter.matches("2025-06-01", 2));
        assert!(!filter.matches("2025-06-01", 1));
        assert!(!filter.matches("2025-6-1", 2));

        let any = SlotFilter::new("2025-06-01", None);
        assert!(any.matches("2025-06-01", 1));
        assert!(any.matches("2025-06-01", ANY_AVAILABLE_STYLIST_ID));
    }
}
