pub(crate) mod date;
pub(crate) mod timezone;

pub(crate) use date::{format_recording_date, today_in};
pub(crate) use timezone::Timezone;
