#![forbid(unsafe_code)]

//! Host-set wall clock and the `date(1)`-style timestamp format.

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Duration, OffsetDateTime, UtcOffset};

use crate::error::Result;

/// `Mon Jan 15 03:04:05 UTC 2024`
const SYSTEM_DATE: &[BorrowedFormatItem<'static>] = format_description!(
    "[weekday repr:short] [month repr:short] [day] [hour]:[minute]:[second] UTC [year]"
);

/// How far the synthesized "last login" lies behind the current instant.
pub const LAST_LOGIN_AGO: Duration = Duration::minutes(42);

/// Render `instant` in UTC as `<Www> <Mmm> <DD> <hh>:<mm>:<ss> UTC <YYYY>`.
pub fn format_system_date(instant: OffsetDateTime) -> Result<String> {
    Ok(instant.to_offset(UtcOffset::UTC).format(SYSTEM_DATE)?)
}

/// Wall clock advanced explicitly by the host.
///
/// The wasm host sets it from the browser clock before each dispatch; tests
/// pin it to a fixed instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionClock {
    now: OffsetDateTime,
}

impl Default for SessionClock {
    fn default() -> Self {
        Self::new(OffsetDateTime::UNIX_EPOCH)
    }
}

impl SessionClock {
    #[must_use]
    pub const fn new(now: OffsetDateTime) -> Self {
        Self { now }
    }

    /// Set the current instant.
    pub fn set(&mut self, now: OffsetDateTime) {
        self.now = now;
    }

    /// Set the current instant from milliseconds since the Unix epoch.
    ///
    /// Values outside the representable range leave the clock unchanged.
    pub fn set_unix_millis(&mut self, millis: i64) {
        let nanos = i128::from(millis) * 1_000_000;
        if let Ok(now) = OffsetDateTime::from_unix_timestamp_nanos(nanos) {
            self.now = now;
        }
    }

    #[must_use]
    pub const fn now(&self) -> OffsetDateTime {
        self.now
    }

    /// Instant reported as the previous login.
    #[must_use]
    pub fn last_login(&self) -> OffsetDateTime {
        self.now.saturating_sub(LAST_LOGIN_AGO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn formats_fixed_instant() {
        let instant = datetime!(2024-01-15 03:04:05 UTC);
        assert_eq!(
            format_system_date(instant).unwrap(),
            "Mon Jan 15 03:04:05 UTC 2024"
        );
    }

    #[test]
    fn pads_single_digit_fields() {
        let instant = datetime!(2023-03-05 00:00:09 UTC);
        assert_eq!(
            format_system_date(instant).unwrap(),
            "Sun Mar 05 00:00:09 UTC 2023"
        );
    }

    #[test]
    fn converts_offsets_to_utc() {
        let instant = datetime!(2024-01-15 05:04:05 +02:00);
        assert_eq!(
            format_system_date(instant).unwrap(),
            "Mon Jan 15 03:04:05 UTC 2024"
        );
    }

    #[test]
    fn last_login_is_42_minutes_back() {
        let clock = SessionClock::new(datetime!(2024-01-15 00:30:00 UTC));
        assert_eq!(clock.last_login(), datetime!(2024-01-14 23:48:00 UTC));
    }

    #[test]
    fn unix_millis_round_trip() {
        let mut clock = SessionClock::default();
        clock.set_unix_millis(1_705_287_845_000);
        assert_eq!(clock.now(), datetime!(2024-01-15 03:04:05 UTC));
    }
}
