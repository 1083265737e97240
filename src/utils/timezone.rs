use chrono::{DateTime, Local, NaiveDate, Utc};
use chrono_tz::Tz;
use std::str::FromStr;

use crate::error::AppError;

/// Timezone that decides which calendar day a recording belongs to
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) enum Timezone {
    #[default]
    Local,
    Named(Tz),
}

impl Timezone {
    /// Accepts "local", "utc"/"z" or an IANA name; blank means local
    pub(crate) fn parse(value: Option<&str>) -> Result<Self, AppError> {
        let raw = value.map(str::trim).unwrap_or_default();
        if raw.is_empty() || raw.eq_ignore_ascii_case("local") {
            return Ok(Timezone::Local);
        }
        if raw.eq_ignore_ascii_case("utc") || raw.eq_ignore_ascii_case("z") {
            return Ok(Timezone::Named(chrono_tz::UTC));
        }
        Tz::from_str(raw)
            .map(Timezone::Named)
            .map_err(|_| AppError::InvalidTimezone {
                input: raw.to_string(),
            })
    }

    pub(crate) fn date_of(self, instant: DateTime<Utc>) -> NaiveDate {
        match self {
            Timezone::Local => instant.with_timezone(&Local).date_naive(),
            Timezone::Named(tz) => instant.with_timezone(&tz).date_naive(),
        }
    }
}
