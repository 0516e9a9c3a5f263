//! Message handler: admin gate + command dispatch

use std::sync::Arc;

use render_switch_core::LifecycleService;

use crate::command::Command;

/// One inbound chat message.
#[derive(Debug, Clone)]
pub struct IncomingMessage {
    pub sender_id: i64,
    pub text: String,
}

/// Routes admin commands to the orchestrator.
pub struct CommandHandler {
    admin_id: i64,
    service: Arc<LifecycleService>,
}

impl CommandHandler {
    #[must_use]
    pub fn new(admin_id: i64, service: Arc<LifecycleService>) -> Self {
        Self { admin_id, service }
    }

    /// Handle a message and return the reply, if any.
    ///
    /// Messages from anyone but the admin, and text that is not a lifecycle
    /// command, get no reply.
    pub async fn handle(&self, message: &IncomingMessage) -> Option<String> {
        if message.sender_id != self.admin_id {
            tracing::debug!("Ignoring message from non-admin user {}", message.sender_id);
            return None;
        }

        match Command::parse(&message.text) {
            Ok(Some(command)) => {
                tracing::info!("{} requested for '{}'", command.action, command.indices);
                let report = self.service.run(command.action, &command.indices).await;
                Some(report.text())
            }
            Ok(None) => None,
            Err(e) => {
                tracing::debug!("Malformed command '{}': {e}", message.text);
                Some(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::USAGE;
    use crate::test_mocks::{handler_with, ADMIN};

    fn from(sender_id: i64, text: &str) -> IncomingMessage {
        IncomingMessage {
            sender_id,
            text: text.to_string(),
        }
    }

    #[tokio::test]
    async fn non_admin_is_ignored_without_network() {
        let (handler, factory) = handler_with(1);

        assert_eq!(handler.handle(&from(ADMIN + 1, "/suspend 0")).await, None);
        assert_eq!(factory.created(), 0);
    }

    #[tokio::test]
    async fn plain_text_is_ignored() {
        let (handler, _) = handler_with(1);
        assert_eq!(handler.handle(&from(ADMIN, "good morning")).await, None);
    }

    #[tokio::test]
    async fn missing_indices_gets_usage_hint() {
        let (handler, factory) = handler_with(1);

        let reply = handler.handle(&from(ADMIN, "/active")).await;

        assert_eq!(reply.as_deref(), Some(USAGE));
        assert_eq!(factory.created(), 0);
    }

    #[tokio::test]
    async fn suspend_command_returns_report() {
        let (handler, _) = handler_with(2);

        let reply = handler.handle(&from(ADMIN, "/suspend all")).await;

        assert_eq!(
            reply.as_deref(),
            Some("Service api-0 suspended successfully.\nService api-1 suspended successfully.")
        );
    }

    #[tokio::test]
    async fn active_command_resumes_and_redeploys() {
        let (handler, _) = handler_with(1);

        let reply = handler.handle(&from(ADMIN, "/active@bot 0")).await;

        assert_eq!(
            reply.as_deref(),
            Some(
                "Service worker-0 activated successfully.\n\
                 Service 'worker-0' is restarting and its deploy is in progress."
            )
        );
    }

    #[tokio::test]
    async fn bad_selection_is_reported_as_text() {
        let (handler, factory) = handler_with(2);

        let reply = handler.handle(&from(ADMIN, "/suspend 5")).await;

        assert_eq!(
            reply.as_deref(),
            Some("Error: one or more indices are invalid. Use numbers between 0 and 1, ranges or 'all'")
        );
        assert_eq!(factory.created(), 0);
    }
}
