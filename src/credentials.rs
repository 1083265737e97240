use crate::consts::{CHAT_IDS_VARS, TOKEN_VARS};

/// Telegram bot token and recipient chat ids
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct Credentials {
    pub(crate) token: Option<String>,
    pub(crate) chat_ids: Vec<String>,
}

impl Credentials {
    pub(crate) fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable lookup; the first non-blank value of each
    /// variable group wins
    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let first_set = |names: &[&str]| {
            names
                .iter()
                .filter_map(|&name| lookup(name))
                .map(|value| value.trim().to_string())
                .find(|value| !value.is_empty())
        };

        Self {
            token: first_set(TOKEN_VARS.as_slice()),
            chat_ids: first_set(CHAT_IDS_VARS.as_slice())
                .map(|raw| parse_list(&raw))
                .unwrap_or_default(),
        }
    }

    /// Token and recipients when notification is possible
    pub(crate) fn telegram(&self) -> Option<(&str, &[String])> {
        match &self.token {
            Some(token) if !self.chat_ids.is_empty() => Some((token.as_str(), self.chat_ids.as_slice())),
            _ => None,
        }
    }
}

/// Split a comma-separated value into trimmed, non-empty items, keeping order
pub(crate) fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}
