//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use render_switch_provider::{ProviderError, RedeployOutcome, ServiceProvider, ServiceRecord};
use tokio::sync::Mutex;

use crate::error::{CoreError, CoreResult};
use crate::services::LifecycleService;
use crate::traits::ProviderFactory;
use crate::types::Account;

pub fn http_error(status: u16, body: &str) -> ProviderError {
    ProviderError::HttpStatus {
        provider: "mock".to_string(),
        status,
        body: body.to_string(),
    }
}

pub fn network_error(detail: &str) -> ProviderError {
    ProviderError::NetworkError {
        provider: "mock".to_string(),
        detail: detail.to_string(),
    }
}

// ===== MockProvider =====

/// Scripted provider. Every call is appended to `calls` as `"<op>:<id>"`.
pub struct MockProvider {
    services: Result<Vec<ServiceRecord>, ProviderError>,
    list_delay: Option<Duration>,
    suspend_errors: HashMap<String, ProviderError>,
    resume_errors: HashMap<String, ProviderError>,
    deploy_results: HashMap<String, Result<RedeployOutcome, ProviderError>>,
    calls: Mutex<Vec<String>>,
}

impl MockProvider {
    pub fn new(services: Vec<ServiceRecord>) -> Self {
        Self {
            services: Ok(services),
            list_delay: None,
            suspend_errors: HashMap::new(),
            resume_errors: HashMap::new(),
            deploy_results: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_list(err: ProviderError) -> Self {
        Self {
            services: Err(err),
            ..Self::new(Vec::new())
        }
    }

    pub fn with_list_delay(mut self, delay: Duration) -> Self {
        self.list_delay = Some(delay);
        self
    }

    pub fn with_suspend_error(mut self, id: &str, err: ProviderError) -> Self {
        self.suspend_errors.insert(id.to_string(), err);
        self
    }

    pub fn with_resume_error(mut self, id: &str, err: ProviderError) -> Self {
        self.resume_errors.insert(id.to_string(), err);
        self
    }

    pub fn with_deploy_result(
        mut self,
        id: &str,
        result: Result<RedeployOutcome, ProviderError>,
    ) -> Self {
        self.deploy_results.insert(id.to_string(), result);
        self
    }

    pub async fn calls(&self) -> Vec<String> {
        self.calls.lock().await.clone()
    }

    async fn record(&self, op: &str, id: &str) {
        self.calls.lock().await.push(format!("{op}:{id}"));
    }
}

#[async_trait]
impl ServiceProvider for MockProvider {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn list_services(&self) -> render_switch_provider::Result<Vec<ServiceRecord>> {
        if let Some(delay) = self.list_delay {
            tokio::time::sleep(delay).await;
        }
        self.record("list", "*").await;
        self.services.clone()
    }

    async fn suspend_service(&self, service_id: &str) -> render_switch_provider::Result<()> {
        self.record("suspend", service_id).await;
        self.suspend_errors
            .get(service_id)
            .map_or(Ok(()), |e| Err(e.clone()))
    }

    async fn resume_service(&self, service_id: &str) -> render_switch_provider::Result<()> {
        self.record("resume", service_id).await;
        self.resume_errors
            .get(service_id)
            .map_or(Ok(()), |e| Err(e.clone()))
    }

    async fn trigger_deploy(
        &self,
        service_id: &str,
    ) -> render_switch_provider::Result<RedeployOutcome> {
        self.record("deploy", service_id).await;
        self.deploy_results
            .get(service_id)
            .cloned()
            .unwrap_or(Ok(RedeployOutcome::BuildStarted))
    }
}

// ===== MockProviderFactory =====

/// Hands out the scripted provider registered for each account index.
pub struct MockProviderFactory {
    providers: HashMap<usize, Arc<MockProvider>>,
    created: AtomicUsize,
}

impl MockProviderFactory {
    pub fn new(providers: Vec<MockProvider>) -> Self {
        Self {
            providers: providers
                .into_iter()
                .enumerate()
                .map(|(i, p)| (i, Arc::new(p)))
                .collect(),
            created: AtomicUsize::new(0),
        }
    }

    pub fn provider(&self, index: usize) -> Arc<MockProvider> {
        Arc::clone(&self.providers[&index])
    }

    /// Number of clients handed out so far.
    pub fn created(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }
}

impl ProviderFactory for MockProviderFactory {
    fn create(&self, account: &Account) -> CoreResult<Arc<dyn ServiceProvider>> {
        self.created.fetch_add(1, Ordering::SeqCst);
        self.providers
            .get(&account.index)
            .map(|p| Arc::clone(p) as Arc<dyn ServiceProvider>)
            .ok_or_else(|| {
                CoreError::Provider(ProviderError::ClientInit {
                    provider: "mock".to_string(),
                    detail: format!("no provider scripted for account {}", account.index),
                })
            })
    }
}

/// One account per scripted provider, wired into a service.
pub fn create_test_lifecycle_service(
    providers: Vec<MockProvider>,
) -> (LifecycleService, Arc<MockProviderFactory>) {
    let accounts = Account::from_api_keys((0..providers.len()).map(|i| format!("key-{i}")));
    let factory = Arc::new(MockProviderFactory::new(providers));
    let service = LifecycleService::new(accounts, factory.clone());
    (service, factory)
}
