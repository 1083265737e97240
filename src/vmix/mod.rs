mod client;
mod status;

pub(crate) use client::fetch_status;
pub(crate) use status::{RecordingStatus, parse_status};
