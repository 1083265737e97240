use std::time::Duration;

use serde::Deserialize;

use super::Notifier;
use crate::error::NotifyError;

/// Envelope of every Bot API response
#[derive(Debug, Deserialize)]
struct ApiReply {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

pub(crate) struct TelegramNotifier {
    agent: ureq::Agent,
    send_url: String,
}

impl TelegramNotifier {
    pub(crate) fn new(api_base: &str, token: &str, timeout: Duration) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();
        Self {
            agent,
            send_url: format!("{}/bot{token}/sendMessage", api_base.trim_end_matches('/')),
        }
    }
}

impl Notifier for TelegramNotifier {
    fn send(&self, chat_id: &str, text: &str) -> Result<(), NotifyError> {
        let mut response = self
            .agent
            .get(&self.send_url)
            .query("chat_id", chat_id)
            .query("text", text)
            .query("parse_mode", "Markdown")
            .call()?;

        let status = response.status();
        // Non-JSON bodies are tolerated; only an explicit "ok": false fails a 2xx
        let reply: Option<ApiReply> = response.body_mut().read_json().ok();
        if status.is_success() && reply.as_ref().is_none_or(|r| r.ok) {
            return Ok(());
        }

        Err(NotifyError::Rejected {
            status: status.as_u16(),
            description: reply
                .and_then(|r| r.description)
                .unwrap_or_else(|| "request rejected".to_string()),
        })
    }
}
