use chrono::{DateTime, Utc};

pub const REFERENCE_PREFIX: &str = "LUNA";
pub const SUFFIX_LEN: usize = 6;

const ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Booking reference such as `LUNA-K3Q9ZT`, taken from the clock.
///
/// Only the six lowest base-36 digits of the millisecond timestamp are kept,
/// so references repeat every 36^6 ms (about 25 days) and two bookings in the
/// same millisecond share one. Stored bookings are not consulted.
pub fn generate_reference(now: DateTime<Utc>) -> String {
    let millis = u64::try_from(now.timestamp_millis()).unwrap_or(0);
    reference_from_millis(millis)
}

pub fn reference_from_millis(millis: u64) -> String {
    let mut suffix = [b'0'; SUFFIX_LEN];
    let mut remaining = millis;
    for slot in suffix.iter_mut().rev() {
        *slot = ALPHABET[(remaining % 36) as usize];
        remaining /= 36;
    }

    let suffix: String = suffix.iter().map(|&b| b as char).collect();
    format!("{REFERENCE_PREFIX}-{suffix}")
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn assert_well_formed(reference: &str) {
        let suffix = reference
            .strip_prefix("LUNA-")
            .unwrap_or_else(|| panic!("missing prefix: {reference}"));
        assert_eq!(suffix.len(), SUFFIX_LEN, "{reference}");
        assert!(
            suffix
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()),
            "{reference}"
        );
    }

    #[test]
    fn encodes_low_order_base36_digits() {
        // 36^6 + 35 keeps only the trailing digits.
        assert_eq!(reference_from_millis(2_176_782_336 + 35), "LUNA-00000Z");
        assert_eq!(reference_from_millis(36), "LUNA-000010");
        assert_eq!(reference_from_millis(0), "LUNA-000000");
    }

    #[test]
    fn current_timestamps_are_well_formed() {
        let now = Utc.with_ymd_and_hms(2025, 3, 14, 15, 9, 26).unwrap();
        let reference = generate_reference(now);
        assert_well_formed(&reference);
        assert_well_formed(&generate_reference(Utc::now()));
    }

    #[test]
    fn consecutive_milliseconds_differ() {
        let base = 1_735_000_000_000_u64;
        assert_ne!(reference_from_millis(base), reference_from_millis(base + 1));
    }

    #[test]
    fn wraparound_collides() {
        let base = 1_735_000_000_000_u64;
        assert_eq!(
            reference_from_millis(base),
            reference_from_millis(base + 36_u64.pow(6))
        );
    }
}
