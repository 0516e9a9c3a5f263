//! 服务生命周期编排
//!
//! Applies one suspend/resume action to every eligible service of the selected
//! accounts, chains a redeploy after each successful resume, and collects the
//! results into a [`Report`].
//!
//! Failures stay local to the account (or service) they happened on: a rejected
//! credential on one account produces one failure line and the run moves on.

use std::sync::Arc;

use futures::stream::{self, StreamExt};
use uuid::Uuid;

use render_switch_provider::{ProviderError, ServiceProvider};

use crate::error::{CoreError, CoreResult};
use crate::index_spec::IndexSpec;
use crate::report::Report;
use crate::traits::ProviderFactory;
use crate::types::{Account, Action, Outcome, RedeployOutcome, ServiceRecord, SuspendState};

/// Accounts processed concurrently when no bound is configured
pub const DEFAULT_PARALLELISM: usize = 4;

/// Multi-account lifecycle orchestrator
///
/// Holds only read-only state, so one instance can serve concurrent runs.
pub struct LifecycleService {
    accounts: Vec<Account>,
    factory: Arc<dyn ProviderFactory>,
    parallelism: usize,
}

impl LifecycleService {
    /// 创建生命周期服务实例
    ///
    /// Accounts are addressed by position; an `index` field that disagrees with
    /// the position is overwritten.
    #[must_use]
    pub fn new(accounts: Vec<Account>, factory: Arc<dyn ProviderFactory>) -> Self {
        let accounts = accounts
            .into_iter()
            .enumerate()
            .map(|(position, mut account)| {
                if account.index != position {
                    log::warn!(
                        "Account listed at position {position} claims index {}, renumbering",
                        account.index
                    );
                    account.index = position;
                }
                account
            })
            .collect();
        Self {
            accounts,
            factory,
            parallelism: DEFAULT_PARALLELISM,
        }
    }

    /// Bound the number of accounts processed at once (minimum 1).
    #[must_use]
    pub fn with_parallelism(mut self, parallelism: usize) -> Self {
        self.parallelism = parallelism.max(1);
        self
    }

    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    /// Run `action` against the accounts selected by `spec`.
    ///
    /// Never fails: selection errors become a rejected report, everything else
    /// becomes outcome lines.
    pub async fn run(&self, action: Action, spec: &str) -> Report {
        let run_id = Uuid::new_v4();

        let selection = match self.resolve(spec) {
            Ok(selection) => selection,
            Err(e) => {
                log::warn!("[run {run_id}] {action} '{spec}' rejected: {e}");
                return Report::Rejected(e);
            }
        };
        log::info!(
            "[run {run_id}] {action} on {} account(s): {:?}",
            selection.len(),
            selection.ranges()
        );

        // `buffered` yields in input order, so the report stays in ascending
        // account order whatever the completion order is.
        let per_account: Vec<Vec<Outcome>> = stream::iter(
            selection
                .iter()
                .filter_map(|index| self.accounts.get(index))
                .map(|account| self.process_account(run_id, action, account)),
        )
        .buffered(self.parallelism)
        .collect()
        .await;

        let report = Report::Completed {
            action,
            outcomes: per_account.into_iter().flatten().collect(),
        };
        log::info!(
            "[run {run_id}] {action} finished: {} succeeded, {} failed",
            report.success_count(),
            report.failure_count()
        );
        report
    }

    /// Parse and bounds-check the selection. All-or-nothing: one bad index
    /// rejects the whole selection. Only the interval bounds are inspected, so
    /// an absurd range is rejected without being expanded.
    fn resolve(&self, spec: &str) -> CoreResult<IndexSpec> {
        let selection = IndexSpec::parse(spec, self.accounts.len())?;

        if selection
            .max()
            .is_some_and(|max| max >= self.accounts.len())
        {
            return Err(match self.accounts.len() {
                0 => CoreError::NoAccountsConfigured,
                n => CoreError::IndexOutOfRange { max: n - 1 },
            });
        }
        Ok(selection)
    }

    async fn process_account(&self, run_id: Uuid, action: Action, account: &Account) -> Vec<Outcome> {
        let index = account.index;

        let provider = match self.factory.create(account) {
            Ok(provider) => provider,
            Err(e) => {
                log::error!("[run {run_id}] Failed to create client for account {index}: {e}");
                return vec![Outcome::failure(
                    index,
                    format!("Failed to create client for account index {index}: {e}"),
                )];
            }
        };

        let services = match provider.list_services().await {
            Ok(services) => services,
            Err(e) => {
                log_provider_error(run_id, index, "list services", &e);
                return vec![Outcome::failure(
                    index,
                    format!(
                        "Failed to list services for account index {index}: {}",
                        e.brief()
                    ),
                )];
            }
        };

        if services.is_empty() {
            return vec![Outcome::notice(
                index,
                format!("No services found for the key at index {index}."),
            )];
        }

        let mut outcomes = Vec::new();
        for record in services {
            let Some((id, name, state)) = complete_fields(record) else {
                log::debug!("[run {run_id}] Skipping incomplete service record on account {index}");
                continue;
            };

            match (action, state) {
                (Action::Suspend, SuspendState::NotSuspended) => {
                    outcomes.push(
                        Self::suspend(run_id, provider.as_ref(), index, &id, &name)
                            .await,
                    );
                }
                (Action::Resume, SuspendState::Suspended) => {
                    outcomes.extend(
                        Self::resume(run_id, provider.as_ref(), index, &id, &name)
                            .await,
                    );
                }
                _ => {}
            }
        }
        outcomes
    }

    async fn suspend(
        run_id: Uuid,
        provider: &dyn ServiceProvider,
        index: usize,
        id: &str,
        name: &str,
    ) -> Outcome {
        match provider.suspend_service(id).await {
            Ok(()) => Outcome::success(index, format!("Service {name} suspended successfully.")),
            Err(e) => {
                log_provider_error(run_id, index, "suspend", &e);
                Outcome::failure(index, format!("Error suspending {name}: {}", e.summary()))
            }
        }
    }

    /// Resume, then always attempt a redeploy. A failed redeploy does not undo the
    /// resume line.
    async fn resume(
        run_id: Uuid,
        provider: &dyn ServiceProvider,
        index: usize,
        id: &str,
        name: &str,
    ) -> Vec<Outcome> {
        if let Err(e) = provider.resume_service(id).await {
            log_provider_error(run_id, index, "resume", &e);
            return vec![Outcome::failure(
                index,
                format!("Error activating {name}: {}", e.summary()),
            )];
        }

        let resumed = Outcome::success(index, format!("Service {name} activated successfully."));
        let redeploy = match provider.trigger_deploy(id).await {
            Ok(RedeployOutcome::BuildStarted) => Outcome::success(
                index,
                format!("Service '{name}' is restarting and its deploy is in progress."),
            ),
            Ok(RedeployOutcome::Accepted { .. }) => Outcome::success(
                index,
                format!("Redeploy started successfully for service '{name}'."),
            ),
            Ok(RedeployOutcome::Rejected { status, body }) => {
                log::warn!("[run {run_id}] Redeploy of {name} rejected on account {index}: {status}");
                Outcome::failure(index, format!("Error starting redeploy: {status} - {body}"))
            }
            Err(e) => {
                log_provider_error(run_id, index, "redeploy", &e);
                Outcome::failure(
                    index,
                    format!("An error occurred while attempting redeploy: {}", e.brief()),
                )
            }
        };
        vec![resumed, redeploy]
    }
}

/// `(id, name, state)` when all three are present and non-empty.
fn complete_fields(record: ServiceRecord) -> Option<(String, String, SuspendState)> {
    let id = record.id.filter(|s| !s.is_empty())?;
    let name = record.name.filter(|s| !s.is_empty())?;
    let state = record.suspended.filter(|s| !s.as_str().is_empty())?;
    Some((id, name, state))
}

fn log_provider_error(run_id: Uuid, index: usize, operation: &str, e: &ProviderError) {
    if e.is_expected() {
        log::warn!("[run {run_id}] {operation} failed on account {index}: {e}");
    } else {
        log::error!("[run {run_id}] {operation} failed on account {index}: {e}");
    }
}
