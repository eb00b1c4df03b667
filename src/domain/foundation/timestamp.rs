//! UTC instants for calculator and tenant records.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Serialized as RFC 3339; ordering follows time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    pub fn now() -> Self {
        Self(Utc::now())
    }

    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Shifted by `secs`, which may be negative.
    pub fn plus_secs(&self, secs: i64) -> Self {
        Self(self.0 + Duration::seconds(secs))
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(raw: &str) -> Timestamp {
        Timestamp::from_datetime(DateTime::parse_from_rfc3339(raw).unwrap().with_timezone(&Utc))
    }

    #[test]
    fn newer_records_sort_after_older_ones() {
        let created = at("2025-03-01T09:30:00Z");
        assert!(created.plus_secs(-1) < created);
        assert!(created < created.plus_secs(1));
        assert_eq!(created.plus_secs(3600), at("2025-03-01T10:30:00Z"));
    }

    #[test]
    fn json_form_is_rfc3339() {
        let created = at("2025-03-01T09:30:00Z");
        let json = serde_json::to_string(&created).unwrap();
        assert_eq!(json, "\"2025-03-01T09:30:00Z\"");
        assert_eq!(serde_json::from_str::<Timestamp>(&json).unwrap(), created);
    }
}
