//! Test-only providers standing in for the Render API.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use render_switch_core::types::{ProviderError, RedeployOutcome, ServiceProvider, ServiceRecord};
use render_switch_core::{Account, CoreResult, LifecycleService, ProviderFactory};

use crate::handler::CommandHandler;

pub const ADMIN: i64 = 1_000;

/// Every account has one running `api-<i>` and one suspended `worker-<i>`;
/// every call succeeds.
struct HappyProvider {
    index: usize,
}

#[async_trait]
impl ServiceProvider for HappyProvider {
    fn id(&self) -> &'static str {
        "happy"
    }

    async fn list_services(&self) -> Result<Vec<ServiceRecord>, ProviderError> {
        Ok(vec![
            ServiceRecord::new(
                format!("srv-api-{}", self.index),
                format!("api-{}", self.index),
                "not_suspended",
            ),
            ServiceRecord::new(
                format!("srv-worker-{}", self.index),
                format!("worker-{}", self.index),
                "suspended",
            ),
        ])
    }

    async fn suspend_service(&self, _service_id: &str) -> Result<(), ProviderError> {
        Ok(())
    }

    async fn resume_service(&self, _service_id: &str) -> Result<(), ProviderError> {
        Ok(())
    }

    async fn trigger_deploy(&self, _service_id: &str) -> Result<RedeployOutcome, ProviderError> {
        Ok(RedeployOutcome::BuildStarted)
    }
}

#[derive(Default)]
pub struct CountingFactory {
    created: AtomicUsize,
}

impl CountingFactory {
    pub fn created(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }
}

impl ProviderFactory for CountingFactory {
    fn create(&self, account: &Account) -> CoreResult<Arc<dyn ServiceProvider>> {
        self.created.fetch_add(1, Ordering::SeqCst);
        Ok(Arc::new(HappyProvider {
            index: account.index,
        }))
    }
}

/// Handler for [`ADMIN`] over `accounts` happy accounts.
pub fn handler_with(accounts: usize) -> (CommandHandler, Arc<CountingFactory>) {
    let factory = Arc::new(CountingFactory::default());
    let service = LifecycleService::new(
        Account::from_api_keys((0..accounts).map(|i| format!("key-{i}"))),
        factory.clone(),
    );
    (CommandHandler::new(ADMIN, Arc::new(service)), factory)
}
