//! Session identity
//!
//! A session is scoped to one local calendar day. The key is the ISO date,
//! e.g. `2026-10-19`.

use jiff::{Zoned, civil::Date};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of the period a saved session belongs to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionKey(String);

impl SessionKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Key for the current day in the system time zone
    #[must_use]
    pub fn today() -> Self {
        Self::for_date(Zoned::now().date())
    }

    /// Key for a calendar date
    #[must_use]
    pub fn for_date(date: Date) -> Self {
        Self(date.strftime("%Y-%m-%d").to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;
    use jiff::tz::{Offset, TimeZone};

    #[test]
    fn known_dates() {
        assert_eq!(SessionKey::for_date(date(1970, 1, 1)).as_str(), "1970-01-01");
        assert_eq!(SessionKey::for_date(date(2000, 2, 29)).as_str(), "2000-02-29");
        assert_eq!(SessionKey::for_date(date(2026, 10, 19)).as_str(), "2026-10-19");
    }

    #[test]
    fn evening_west_of_utc_keeps_local_day() {
        // 2026-10-20 01:00 UTC is still the 19th five hours west
        let zone = TimeZone::fixed(Offset::constant(-5));
        let local = date(2026, 10, 20)
            .at(1, 0, 0, 0)
            .to_zoned(TimeZone::UTC)
            .unwrap()
            .with_time_zone(zone);
        assert_eq!(SessionKey::for_date(local.date()).as_str(), "2026-10-19");
    }

    #[test]
    fn today_is_iso_date() {
        let key = SessionKey::today();
        assert_eq!(key.as_str().len(), 10);
        assert_eq!(key.as_str().as_bytes()[4], b'-');
        assert_eq!(key.as_str().as_bytes()[7], b'-');
    }

    #[test]
    fn serializes_as_plain_string() {
        let key = SessionKey::new("2026-10-19");
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"2026-10-19\"");
    }
}
