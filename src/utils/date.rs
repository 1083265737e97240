use chrono::{NaiveDate, Utc};

use crate::consts::RECORDING_DATE_FORMAT;
use crate::utils::Timezone;

/// Today's calendar date as seen in `tz`
pub(crate) fn today_in(tz: Timezone) -> NaiveDate {
    tz.date_of(Utc::now())
}

/// "05-March-2024": two-digit day, English month name, four-digit year
pub(crate) fn format_recording_date(date: NaiveDate) -> String {
    date.format(RECORDING_DATE_FORMAT).to_string()
}
