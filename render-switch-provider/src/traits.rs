use async_trait::async_trait;

use crate::error::Result;
use crate::types::{RedeployOutcome, ServiceRecord};

/// Control-plane client bound to one account.
///
/// Every method is a single independent round-trip. Implementations never retry on
/// their own; retry policy, if any, belongs to the caller.
#[async_trait]
pub trait ServiceProvider: Send + Sync {
    /// 提供商标识符
    fn id(&self) -> &'static str;

    /// List the account's full service inventory.
    ///
    /// An empty inventory is a successful, empty result.
    async fn list_services(&self) -> Result<Vec<ServiceRecord>>;

    /// Request suspension of one service.
    async fn suspend_service(&self, service_id: &str) -> Result<()>;

    /// Request resumption of one service.
    async fn resume_service(&self, service_id: &str) -> Result<()>;

    /// Request a fresh deploy.
    ///
    /// Non-accepted statuses are reported as [`RedeployOutcome::Rejected`];
    /// only transport failures end up in `Err`.
    async fn trigger_deploy(&self, service_id: &str) -> Result<RedeployOutcome>;
}
