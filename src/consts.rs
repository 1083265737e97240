use std::time::Duration;

/// vMix web controller status endpoint
pub(crate) const DEFAULT_API_URL: &str = "http://127.0.0.1:8088/api/";

/// Telegram Bot API base, the bot token path segment is appended per request
pub(crate) const DEFAULT_TELEGRAM_API: &str = "https://api.telegram.org";

/// vMix's default recording file name, replaced by the project name
pub(crate) const DEFAULT_MARKER: &str = "vMix_LAST_RECORD";

/// Extension used by the rebuild policy when the recording has none
pub(crate) const DEFAULT_EXTENSION: &str = ".mp4";

pub(crate) const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Log file name, placed next to the executable
pub(crate) const LOG_FILE_NAME: &str = "pmc_log.txt";

/// Timestamp prefix of every log line: "2025-01-15 09:30:00"
pub(crate) const LOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Date used in rebuilt names: "05-March-2024"
pub(crate) const RECORDING_DATE_FORMAT: &str = "%d-%B-%Y";

pub(crate) const TOKEN_VARS: [&str; 2] = ["TOKEN", "TELEGRAM_TOKEN"];
pub(crate) const CHAT_IDS_VARS: [&str; 2] = ["CHAT_IDS", "TELEGRAM_CHAT_IDS"];
