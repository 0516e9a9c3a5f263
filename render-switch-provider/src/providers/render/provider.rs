//! Render `ServiceProvider` trait 实现

use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::http_client::HttpUtils;
use crate::traits::ServiceProvider;
use crate::types::{RedeployOutcome, ServiceRecord};

use super::types::{CreateDeployRequest, RenderServiceItem};
use super::{ACCEPTED_STATUSES, MAX_PAGES, PAGE_LIMIT, PROVIDER_NAME, RenderProvider};

impl RenderProvider {
    fn status_error(status: u16, body: String) -> ProviderError {
        ProviderError::HttpStatus {
            provider: PROVIDER_NAME.to_string(),
            status,
            body,
        }
    }

    /// Shared body of suspend/resume: one POST, accepted statuses only.
    async fn transition(&self, service_id: &str, action: &str) -> Result<()> {
        let path = Self::service_path(service_id, action);
        let (status, body) = self.post::<()>(&path, None).await?;

        if ACCEPTED_STATUSES.contains(&status) {
            log::info!("[{PROVIDER_NAME}] {action} accepted for service {service_id} ({status})");
            Ok(())
        } else {
            log::warn!("[{PROVIDER_NAME}] {action} rejected for service {service_id} ({status})");
            Err(Self::status_error(status, body))
        }
    }
}

#[async_trait]
impl ServiceProvider for RenderProvider {
    fn id(&self) -> &'static str {
        PROVIDER_NAME
    }

    async fn list_services(&self) -> Result<Vec<ServiceRecord>> {
        let limit = PAGE_LIMIT.to_string();
        let mut services = Vec::new();
        let mut cursor: Option<String> = None;

        for _ in 0..MAX_PAGES {
            let mut query = vec![("limit", limit.as_str())];
            if let Some(ref c) = cursor {
                query.push(("cursor", c.as_str()));
            }

            let (status, body) = self.get("/services", &query).await?;
            if !(200..300).contains(&status) {
                return Err(Self::status_error(status, body));
            }

            // Render answers `null` or nothing at all for some empty inventories.
            let page: Vec<RenderServiceItem> = if body.trim().is_empty() {
                Vec::new()
            } else {
                HttpUtils::parse_json::<Option<Vec<RenderServiceItem>>>(&body, PROVIDER_NAME)?
                    .unwrap_or_default()
            };
            let page_len = page.len();
            cursor = page.last().and_then(|item| item.cursor.clone());

            services.extend(
                page.into_iter()
                    .map(|item| item.service.unwrap_or_default().into()),
            );

            if page_len < PAGE_LIMIT || cursor.is_none() {
                return Ok(services);
            }
        }

        log::warn!(
            "[{PROVIDER_NAME}] Service listing stopped after {MAX_PAGES} pages ({} services)",
            services.len()
        );
        Ok(services)
    }

    async fn suspend_service(&self, service_id: &str) -> Result<()> {
        self.transition(service_id, "suspend").await
    }

    async fn resume_service(&self, service_id: &str) -> Result<()> {
        self.transition(service_id, "resume").await
    }

    async fn trigger_deploy(&self, service_id: &str) -> Result<RedeployOutcome> {
        let path = Self::service_path(service_id, "deploys");
        let request = CreateDeployRequest::new(self.clear_cache_on_deploy);
        let (status, body) = self.post(&path, Some(&request)).await?;

        let outcome = match status {
            201 => RedeployOutcome::BuildStarted,
            200 | 202 => RedeployOutcome::Accepted { status },
            _ => RedeployOutcome::Rejected { status, body },
        };
        log::info!("[{PROVIDER_NAME}] Deploy requested for service {service_id} ({status})");
        Ok(outcome)
    }
}
