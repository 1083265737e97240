use crate::config::RunConfig;
use crate::credentials::Credentials;
use crate::error::AppError;
use crate::logger::EventLog;
use crate::notify::{TelegramNotifier, broadcast, recording_message};
use crate::rename::{self, RenamePlan};
use crate::utils::{format_recording_date, today_in};
use crate::vmix::{fetch_status, parse_status};

/// One full run: fetch status, parse, rename, notify.
///
/// Every error returned here is fatal. Notification problems are logged inside
/// and never surface, since the rename already succeeded by then.
pub(crate) fn run(
    config: &RunConfig,
    project_name: &str,
    credentials: &Credentials,
    log: &EventLog,
) -> Result<(), AppError> {
    if credentials.telegram().is_none() {
        log.warn(
            "Telegram credentials not set (TOKEN/CHAT_IDS or TELEGRAM_TOKEN/TELEGRAM_CHAT_IDS), \
             Telegram will be skipped.",
        );
    }

    log.start(format!("Start: project_name={project_name}"));

    let body = fetch_status(&config.api_url, config.timeout)?;
    let status = parse_status(&body)?;
    log.info(format!("Found file: {}", status.path));

    let date = format_recording_date(today_in(config.timezone));
    let plan = RenamePlan::build(&status.path, project_name, &date, &config.policy)?;
    log.info(format!(
        "New name: {} (extension {}, folder {})",
        plan.new_name,
        plan.extension,
        plan.folder.display()
    ));

    rename::perform(&plan)?;
    log.success(format!("Renamed to: {}", plan.new_path.display()));

    match credentials.telegram() {
        Some((token, chat_ids)) => {
            let notifier = TelegramNotifier::new(&config.telegram_api, token, config.timeout);
            let sent = broadcast(&notifier, chat_ids, &recording_message(&plan.new_name), log);
            if sent < chat_ids.len() {
                log.warn(format!(
                    "Telegram delivered to {sent} of {} recipients.",
                    chat_ids.len()
                ));
            }
        }
        None => log.skip("Telegram skipped (no token or chat IDs)."),
    }

    log.done("Done.");
    Ok(())
}
