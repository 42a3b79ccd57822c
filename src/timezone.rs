//! Resolving the configured timezone, used for the default date of new expenses.

use time::{Date, OffsetDateTime, UtcOffset};
use time_tz::{Offset, TimeZone};

/// Get the current UTC offset of `canonical_timezone`, e.g. "Asia/Kolkata".
///
/// Returns `None` if the name is not a known canonical timezone.
pub fn get_local_offset(canonical_timezone: &str) -> Option<UtcOffset> {
    time_tz::timezones::get_by_name(canonical_timezone)
        .map(|tz| tz.get_offset_utc(&OffsetDateTime::now_utc()).to_utc())
}

/// Get today's date in `canonical_timezone`.
///
/// Returns `None` if the name is not a known canonical timezone.
pub fn local_today(canonical_timezone: &str) -> Option<Date> {
    get_local_offset(canonical_timezone)
        .map(|offset| OffsetDateTime::now_utc().to_offset(offset).date())
}

#[cfg(test)]
mod tests {
    use time::{OffsetDateTime, UtcOffset};

    use super::{get_local_offset, local_today};

    #[test]
    fn utc_has_zero_offset() {
        assert_eq!(get_local_offset("Etc/UTC"), Some(UtcOffset::UTC));
    }

    #[test]
    fn fixed_offset_zone() {
        // India does not observe daylight saving time.
        assert_eq!(
            get_local_offset("Asia/Kolkata"),
            UtcOffset::from_hms(5, 30, 0).ok()
        );
    }

    #[test]
    fn unknown_zone_is_none() {
        assert_eq!(get_local_offset("Not/A_Zone"), None);
        assert_eq!(local_today("Not/A_Zone"), None);
    }

    #[test]
    fn today_in_utc() {
        let before = OffsetDateTime::now_utc().date();

        let today = local_today("Etc/UTC").unwrap();

        let after = OffsetDateTime::now_utc().date();
        assert!(today == before || today == after);
    }
}
