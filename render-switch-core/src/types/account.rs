//! 账户相关类型定义

use render_switch_provider::ProviderCredentials;

/// One configured control-plane account.
///
/// Accounts are loaded once at startup and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// Zero-based position in the configured account list
    pub index: usize,
    pub credentials: ProviderCredentials,
}

impl Account {
    /// Build the ordered account list from raw API keys.
    pub fn from_api_keys<I, S>(api_keys: I) -> Vec<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        api_keys
            .into_iter()
            .enumerate()
            .map(|(index, key)| Self {
                index,
                credentials: ProviderCredentials::Render {
                    api_key: key.into(),
                },
            })
            .collect()
    }
}
