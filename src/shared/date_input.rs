// src/shared/date_input.rs
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{de, Deserialize, Deserializer};

use crate::shared::patch_field::PatchField;

/// Parse `YYYY-MM-DD`, an RFC 3339 datetime, or a naive ISO datetime into a
/// calendar date. Datetimes keep the date as written in their own offset.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|dt| dt.date())
        })
}

/// `deserialize_with` for `Option<NaiveDate>` fields. Pair with `#[serde(default)]`.
pub fn option_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|raw| {
            parse_date(&raw).ok_or_else(|| de::Error::custom(format!("invalid date: {raw}")))
        })
        .transpose()
}

/// `deserialize_with` for `PatchField<NaiveDate>`. Only called when the key is present,
/// so `null` maps to `Null`; pair with `#[serde(default)]` to keep omitted keys `Unset`.
pub fn patch_date<'de, D>(deserializer: D) -> Result<PatchField<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match option_date(deserializer)? {
        Some(date) => PatchField::Value(date),
        None => PatchField::Null,
    })
}
