//! UTC instant used for joined_at / paid_at / event_date fields.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A point in time, always UTC, serialized as RFC 3339.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    pub fn now() -> Self {
        Self(Utc::now())
    }

    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Unix seconds. Values past the chrono range clamp to now.
    pub fn from_unix_secs(secs: u64) -> Self {
        DateTime::<Utc>::from_timestamp(secs as i64, 0)
            .map(Self)
            .unwrap_or_else(Self::now)
    }

    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    pub fn as_unix_secs(&self) -> u64 {
        self.0.timestamp().max(0) as u64
    }

    pub fn is_before(&self, other: &Timestamp) -> bool {
        self < other
    }

    pub fn is_after(&self, other: &Timestamp) -> bool {
        self > other
    }

    /// Shifted by whole days; negative values go backwards.
    pub fn add_days(&self, days: i64) -> Self {
        Self(self.0 + Duration::days(days))
    }

    pub fn plus_secs(&self, secs: u64) -> Self {
        Self(self.0 + Duration::seconds(secs as i64))
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    // 2024-01-15T00:00:00Z
    const JAN_15: u64 = 1705276800;

    #[test]
    fn unix_seconds_round_trip() {
        let ts = Timestamp::from_unix_secs(JAN_15);
        assert_eq!(ts.as_unix_secs(), JAN_15);
        assert_eq!(ts.as_datetime().year(), 2024);
        assert_eq!(ts.as_datetime().month(), 1);
        assert_eq!(ts.as_datetime().day(), 15);
    }

    #[test]
    fn ordering_follows_the_clock() {
        let earlier = Timestamp::from_unix_secs(JAN_15);
        let later = earlier.plus_secs(1);

        assert!(earlier.is_before(&later));
        assert!(later.is_after(&earlier));
        assert!(!earlier.is_after(&later));
        assert!(earlier < later);
    }

    #[test]
    fn add_days_moves_by_whole_days() {
        let ts = Timestamp::from_unix_secs(JAN_15);
        assert_eq!(ts.add_days(7).as_unix_secs(), JAN_15 + 7 * 86400);
        assert_eq!(ts.add_days(-1).as_unix_secs(), JAN_15 - 86400);
    }

    #[test]
    fn serializes_as_rfc3339_string() {
        let ts = Timestamp::from_unix_secs(JAN_15);
        let json = serde_json::to_string(&ts).unwrap();
        assert!(json.starts_with("\"2024-01-15T00:00:00"));

        let back: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ts);
    }

    #[test]
    fn default_is_roughly_now() {
        let before = Utc::now();
        let ts = Timestamp::default();
        assert!(ts.as_datetime() >= &before);
    }
}
