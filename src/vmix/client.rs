use std::time::Duration;

use crate::error::StatusError;

/// Fetch the raw XML status document from the vMix web API
pub(crate) fn fetch_status(api_url: &str, timeout: Duration) -> Result<String, StatusError> {
    let agent: ureq::Agent = ureq::Agent::config_builder()
        .timeout_global(Some(timeout))
        .http_status_as_error(false)
        .build()
        .into();

    let response = agent.get(api_url).call()?;
    let status = response.status();
    if !status.is_success() {
        return Err(StatusError::HttpStatus(status.as_u16()));
    }

    let mut body = response.into_body();
    Ok(body.read_to_string()?)
}
