mod telegram;

pub(crate) use telegram::TelegramNotifier;

use crate::error::NotifyError;
use crate::logger::EventLog;

/// A messaging backend able to deliver one text to one recipient
pub(crate) trait Notifier {
    fn send(&self, chat_id: &str, text: &str) -> Result<(), NotifyError>;
}

pub(crate) fn recording_message(new_name: &str) -> String {
    format!("🎬 vMix recording:\n`{new_name}`")
}

/// Send `text` to every recipient in order, logging each outcome.
///
/// Failures never stop the loop. Returns the number of successful sends.
pub(crate) fn broadcast(
    notifier: &dyn Notifier,
    chat_ids: &[String],
    text: &str,
    log: &EventLog,
) -> usize {
    let mut sent = 0;
    for chat_id in chat_ids {
        match notifier.send(chat_id, text) {
            Ok(()) => {
                sent += 1;
                log.success(format!("Telegram sent to {chat_id}"));
            }
            Err(e) => log.warn(format!("Telegram error ({chat_id}): {e}")),
        }
    }
    sent
}
