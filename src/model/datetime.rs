//! Wire format for `hire_date`.
//!
//! Emitted as `YYYY-MM-DD HH:MM:SS`. Accepted with either a space or a `T`
//! separator, or as a bare date (midnight). Sub-second precision is dropped.

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Deserializer, Serializer, de::Error};

pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const ACCEPTED: [&str; 4] = [
    FORMAT,
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
];

pub fn parse(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();

    ACCEPTED
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
        .and_then(|dt| dt.with_nanosecond(0))
}

pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&value.format(FORMAT))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).ok_or_else(|| {
        D::Error::custom(format!(
            "invalid hire_date {raw:?}, expected YYYY-MM-DD HH:MM:SS"
        ))
    })
}

/// Same format for `Option<NaiveDateTime>` fields of partial updates.
pub mod option {
    use super::*;

    pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => super::serialize(dt, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => parse(&raw).map(Some).ok_or_else(|| {
                D::Error::custom(format!(
                    "invalid hire_date {raw:?}, expected YYYY-MM-DD HH:MM:SS"
                ))
            }),
            None => Ok(None),
        }
    }
}
