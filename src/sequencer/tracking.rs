use chrono::Utc;

/// Prefix letter on every generated tracking identifier.
pub const TRACKING_PREFIX: char = 'Z';

/// Generate a synthetic, human-displayable tracking identifier: the prefix
/// letter followed by the last six digits of the wall-clock unix timestamp
/// in milliseconds. Collisions inside a 10^6 ms window are accepted; this is
/// a display reference code, not a unique key.
pub fn generate_tracking_id() -> String {
    tracking_id_at(Utc::now().timestamp_millis())
}

fn tracking_id_at(timestamp_millis: i64) -> String {
    format!("{}{:06}", TRACKING_PREFIX, timestamp_millis.rem_euclid(1_000_000))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_last_six_digits_of_timestamp() {
        assert_eq!(tracking_id_at(1_700_000_123_456), "Z123456");
        assert_eq!(tracking_id_at(987_654), "Z987654");
    }

    #[test]
    fn pads_short_suffixes_to_six_digits() {
        assert_eq!(tracking_id_at(1_000_000_000_042), "Z000042");
        assert_eq!(tracking_id_at(0), "Z000000");
    }

    #[test]
    fn generated_id_is_prefix_plus_six_digits() {
        let id = generate_tracking_id();
        assert_eq!(id.len(), 7);
        assert!(id.starts_with(TRACKING_PREFIX));
        assert!(id[1..].chars().all(|c| c.is_ascii_digit()));
    }
}
