//! Provider 公共工具函数

use reqwest::Client;

use crate::error::{ProviderError, Result};
use crate::types::ProviderOptions;

/// 创建带超时配置的 HTTP Client
pub fn create_http_client(provider: &str, options: &ProviderOptions) -> Result<Client> {
    Client::builder()
        .connect_timeout(options.connect_timeout)
        .timeout(options.request_timeout)
        .build()
        .map_err(|e| ProviderError::ClientInit {
            provider: provider.to_string(),
            detail: e.to_string(),
        })
}

/// Joins a base URL and an absolute path without doubling the slash.
pub fn join_url(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_url_strips_trailing_slash() {
        assert_eq!(
            join_url("https://api.render.com/v1/", "/services"),
            "https://api.render.com/v1/services"
        );
        assert_eq!(join_url("http://x", "/a"), "http://x/a");
    }

    #[test]
    fn client_builds_with_default_options() {
        assert!(create_http_client("render", &ProviderOptions::default()).is_ok());
    }
}
