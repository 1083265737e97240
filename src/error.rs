use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors: each one is logged and ends the run with a non-zero exit code
#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("No project name provided (argv[1]).")]
    MissingProjectName,

    #[error("Invalid timezone: {input}")]
    InvalidTimezone { input: String },

    #[error("{0}")]
    Status(#[from] StatusError),

    #[error("{0}")]
    Rename(#[from] RenameError),
}

#[derive(Debug, Error)]
pub(crate) enum StatusError {
    #[error("vMix API error: {0}")]
    Request(#[from] ureq::Error),

    #[error("vMix API error: HTTP {0}")]
    HttpStatus(u16),

    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("XML parse error: {0}")]
    Malformed(&'static str),

    #[error("Recording filename not found in XML.")]
    NoRecording,
}

#[derive(Debug, Error)]
pub(crate) enum RenameError {
    #[error("Rename failed: {} has no file name", path.display())]
    NoFileName { path: PathBuf },

    #[error("Rename failed: new name \"{name}\" is not a plain file name")]
    InvalidName { name: String },

    #[error("Rename failed: {}: {source}", from.display())]
    Io {
        from: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Per-recipient notification failure, logged as a warning only
#[derive(Debug, Error)]
pub(crate) enum NotifyError {
    #[error("{0}")]
    Request(#[from] ureq::Error),

    #[error("HTTP {status}: {description}")]
    Rejected { status: u16, description: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_project_name_display() {
        assert_eq!(
            AppError::MissingProjectName.to_string(),
            "No project name provided (argv[1])."
        );
    }

    #[test]
    fn no_recording_display() {
        let e: AppError = StatusError::NoRecording.into();
        assert_eq!(e.to_string(), "Recording filename not found in XML.");
    }

    #[test]
    fn http_status_display() {
        assert_eq!(
            StatusError::HttpStatus(503).to_string(),
            "vMix API error: HTTP 503"
        );
    }

    #[test]
    fn rename_io_display_names_source() {
        let e = RenameError::Io {
            from: PathBuf::from("rec/vMix_LAST_RECORD.mp4"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        let msg = e.to_string();
        assert!(msg.starts_with("Rename failed: "));
        assert!(msg.contains("vMix_LAST_RECORD.mp4"));
        assert!(msg.ends_with("gone"));
    }

    #[test]
    fn invalid_name_display() {
        let e = RenameError::InvalidName {
            name: "../Escaped.mp4".to_string(),
        };
        assert_eq!(
            e.to_string(),
            r#"Rename failed: new name "../Escaped.mp4" is not a plain file name"#
        );
    }

    #[test]
    fn notify_rejected_display() {
        let e = NotifyError::Rejected {
            status: 400,
            description: "Bad Request: chat not found".to_string(),
        };
        assert_eq!(e.to_string(), "HTTP 400: Bad Request: chat not found");
    }
}
