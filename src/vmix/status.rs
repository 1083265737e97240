//! vMix status document parsing
//!
//! The API answers with a document shaped like
//! `<vmix><version>..</version><recording filename1="C:\..\x.mp4">True</recording>..</vmix>`.
//! Only the first `recording` child of the root element is considered.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::StatusError;

const RECORDING_TAG: &[u8] = b"recording";
const FILENAME_ATTR: &str = "filename1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecordingStatus {
    /// Path exactly as reported by vMix, not normalized or checked on disk
    pub(crate) path: String,
}

/// Parse the whole document and extract the active recording's file path.
///
/// The document must be well formed even past the `recording` element.
pub(crate) fn parse_status(xml: &str) -> Result<RecordingStatus, StatusError> {
    let mut reader = Reader::from_str(xml);
    let mut depth = 0usize;
    let mut seen_root = false;
    // Outer Option: element found; inner: its filename1 attribute
    let mut recording: Option<Option<String>> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                visit_element(&e, depth, &mut seen_root, &mut recording)?;
                depth += 1;
            }
            Event::Empty(e) => visit_element(&e, depth, &mut seen_root, &mut recording)?,
            Event::End(_) => depth = depth.saturating_sub(1),
            Event::Text(t) if depth == 0 && !t.iter().all(u8::is_ascii_whitespace) => {
                return Err(StatusError::Malformed("text outside the root element"));
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !seen_root {
        return Err(StatusError::Malformed("no root element"));
    }
    if depth != 0 {
        return Err(StatusError::Malformed("unclosed element"));
    }

    match recording.flatten() {
        Some(path) if !path.is_empty() => Ok(RecordingStatus { path }),
        _ => Err(StatusError::NoRecording),
    }
}

fn visit_element(
    element: &BytesStart<'_>,
    depth: usize,
    seen_root: &mut bool,
    recording: &mut Option<Option<String>>,
) -> Result<(), StatusError> {
    if depth == 0 {
        if *seen_root {
            return Err(StatusError::Malformed("more than one root element"));
        }
        *seen_root = true;
    } else if depth == 1 && recording.is_none() && element.name().as_ref() == RECORDING_TAG {
        *recording = Some(filename_attr(element)?);
    }
    Ok(())
}

fn filename_attr(element: &BytesStart<'_>) -> Result<Option<String>, StatusError> {
    let attr = element
        .try_get_attribute(FILENAME_ATTR)
        .map_err(quick_xml::Error::from)?;
    match attr {
        Some(attr) => Ok(Some(attr.unescape_value()?.into_owned())),
        None => Ok(None),
    }
}
