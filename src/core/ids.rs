//! Record identifiers.

use std::time::SystemTime;

use chrono::{DateTime, Utc};
use ulid::Ulid;

/// Generate an id that sorts by creation instant.
///
/// Ids minted within the same millisecond are unique but not ordered among
/// themselves; callers that need a total order keep insertion order.
#[must_use]
pub fn new_id(at: DateTime<Utc>) -> String {
    Ulid::from_datetime(SystemTime::from(at)).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_ids_sort_by_time() {
        let t0 = Utc.with_ymd_and_hms(2024, 9, 1, 8, 0, 0).unwrap();
        let earlier = new_id(t0);
        let later = new_id(t0 + Duration::seconds(1));
        assert!(earlier < later);
    }

    #[test]
    fn test_ids_unique() {
        let t0 = Utc.with_ymd_and_hms(2024, 9, 1, 8, 0, 0).unwrap();
        assert_ne!(new_id(t0), new_id(t0));
        assert_eq!(new_id(t0).len(), 26);
    }
}
