//! Provider factory abstract Trait

use std::sync::Arc;

use render_switch_provider::{create_provider, ProviderOptions, ServiceProvider};

use crate::error::CoreResult;
use crate::types::Account;

/// Builds the control-plane client for one account.
///
/// The orchestrator asks for a fresh client on every run, so implementations must
/// not hand out state that outlives a run.
pub trait ProviderFactory: Send + Sync {
    /// Create a client bound to `account`'s credentials.
    fn create(&self, account: &Account) -> CoreResult<Arc<dyn ServiceProvider>>;
}

/// Default factory producing real Render clients.
#[derive(Debug, Clone, Default)]
pub struct RenderProviderFactory {
    options: ProviderOptions,
}

impl RenderProviderFactory {
    #[must_use]
    pub fn new(options: ProviderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ProviderOptions {
        &self.options
    }
}

impl ProviderFactory for RenderProviderFactory {
    fn create(&self, account: &Account) -> CoreResult<Arc<dyn ServiceProvider>> {
        Ok(create_provider(&account.credentials, &self.options)?)
    }
}
