//! Render control-plane provider

mod http;
mod provider;
mod types;

use reqwest::Client;

use crate::error::Result;
use crate::providers::common::create_http_client;
use crate::types::ProviderOptions;

pub(crate) const PROVIDER_NAME: &str = "render";
/// Render list endpoints 单页最大记录数
pub(crate) const PAGE_LIMIT: usize = 100;
/// Upper bound on followed cursors for one inventory listing.
pub(crate) const MAX_PAGES: usize = 50;
/// Statuses accepted for suspend/resume.
pub(crate) const ACCEPTED_STATUSES: [u16; 2] = [200, 202];

/// Render control-plane client for one account
pub struct RenderProvider {
    pub(crate) client: Client,
    pub(crate) api_key: String,
    pub(crate) base_url: String,
    pub(crate) clear_cache_on_deploy: bool,
}

impl RenderProvider {
    pub fn new(api_key: String, options: &ProviderOptions) -> Result<Self> {
        Ok(Self {
            client: create_http_client(PROVIDER_NAME, options)?,
            api_key,
            base_url: options.base_url.clone(),
            clear_cache_on_deploy: options.clear_cache_on_deploy,
        })
    }
}
