use std::fmt::{Display, Formatter};
use std::str::FromStr;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde::de::Error as DeError;
use thiserror::Error;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// A UTC wall-clock time truncated to whole seconds, written as
/// `YYYY-MM-DD HH:MM:SS`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Timestamp(PrimitiveDateTime);

#[derive(Debug, Error)]
#[error("invalid timestamp {value:?}: {source}")]
pub struct TimestampParseError {
    value: String,
    source: time::error::Parse,
}

impl Timestamp {
    pub fn now() -> Self {
        Self::from_offset_date_time(OffsetDateTime::now_utc())
    }

    pub fn from_unix_timestamp(
        seconds: i64,
    ) -> Result<Self, time::error::ComponentRange> {
        OffsetDateTime::from_unix_timestamp(seconds)
            .map(Self::from_offset_date_time)
    }

    pub fn unix_timestamp(&self) -> i64 {
        self.0.assume_utc().unix_timestamp()
    }

    fn from_offset_date_time(value: OffsetDateTime) -> Self {
        let utc = value.to_offset(time::UtcOffset::UTC);
        Timestamp(
            PrimitiveDateTime::new(utc.date(), utc.time())
                .replace_nanosecond(0)
                .expect("zero nanoseconds are always valid"),
        )
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let formatted = self.0
            .format(TIMESTAMP_FORMAT)
            .map_err(|_| std::fmt::Error)?;
        f.write_str(&formatted)
    }
}

impl FromStr for Timestamp {
    type Err = TimestampParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PrimitiveDateTime::parse(s, TIMESTAMP_FORMAT)
            .map(Timestamp)
            .map_err(|source| TimestampParseError {
                value: s.to_owned(),
                source,
            })
    }
}

impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Timestamp::from_str(&s).map_err(DeError::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_fixed_width() {
        let ts = Timestamp::from_unix_timestamp(0).unwrap();
        assert_eq!(ts.to_string(), "1970-01-01 00:00:00");
        let ts = Timestamp::from_unix_timestamp(1_700_000_000).unwrap();
        assert_eq!(ts.to_string(), "2023-11-14 22:13:20");
    }

    #[test]
    fn parses_own_output() {
        let ts = Timestamp::from_unix_timestamp(1_700_000_000).unwrap();
        assert_eq!(Timestamp::from_str(&ts.to_string()).unwrap(), ts);
        assert_eq!(ts.unix_timestamp(), 1_700_000_000);
    }

    #[test]
    fn rejects_other_formats() {
        assert!(Timestamp::from_str("2023-11-14T22:13:20").is_err());
        assert!(Timestamp::from_str("2023-11-14").is_err());
        assert!(Timestamp::from_str("").is_err());
    }

    #[test]
    fn now_has_no_subsecond_part() {
        let now = Timestamp::now();
        assert_eq!(now.0.nanosecond(), 0);
    }

    #[test]
    fn textual_and_chronological_order_agree() {
        let earlier = Timestamp::from_unix_timestamp(999_999_999).unwrap();
        let later = Timestamp::from_unix_timestamp(1_000_000_000).unwrap();
        assert!(earlier < later);
        assert!(earlier.to_string() < later.to_string());
    }

    #[test]
    fn serializes_as_string() {
        let ts = Timestamp::from_unix_timestamp(0).unwrap();
        assert_eq!(serde_json::to_string(&ts).unwrap(), "\"1970-01-01 00:00:00\"");
        let back: Timestamp = serde_json::from_str("\"1970-01-01 00:00:00\"").unwrap();
        assert_eq!(back, ts);
    }
}
