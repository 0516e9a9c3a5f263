//! render-switch core library
//!
//! Business logic for switching Render services on and off across several accounts:
//! - account selection parsing ([`IndexSpec`])
//! - the suspend/resume/redeploy orchestration ([`LifecycleService`])
//! - plain-text reporting ([`Report`])
//!
//! Network access goes exclusively through the [`ProviderFactory`] seam, so the
//! whole crate can be exercised against mock providers.

pub mod error;
pub mod index_spec;
pub mod report;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use index_spec::IndexSpec;
pub use report::Report;
pub use services::LifecycleService;
pub use traits::{ProviderFactory, RenderProviderFactory};
pub use types::{Account, Action, Outcome, OutcomeKind};
