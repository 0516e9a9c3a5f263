//! # render-switch-provider
//!
//! Client for the Render control-plane API, scoped to what service lifecycle
//! management needs: listing an account's services, suspending and resuming them,
//! and triggering a deploy.
//!
//! Each client is bound to one account (one API key, sent as a bearer token).
//!
//! ## TLS Backend
//!
//! - **`rustls`** *(default)*: use rustls.
//! - **`native-tls`**: use the platform's native TLS implementation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use render_switch_provider::{
//!     create_provider, ProviderCredentials, ProviderOptions, SuspendState,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let credentials = ProviderCredentials::Render {
//!         api_key: std::env::var("RENDER_API_KEY")?,
//!     };
//!     let provider = create_provider(&credentials, &ProviderOptions::default())?;
//!
//!     for service in provider.list_services().await? {
//!         if service.suspended == Some(SuspendState::Suspended) {
//!             if let Some(id) = service.id.as_deref() {
//!                 provider.resume_service(id).await?;
//!                 provider.trigger_deploy(id).await?;
//!             }
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ProviderError>`](ProviderError). Nothing is
//! retried automatically; every call is bounded by the connect and request
//! timeouts in [`ProviderOptions`].

mod error;
mod factory;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export factory functions
pub use factory::create_provider;

pub use traits::ServiceProvider;

pub use types::{
    DEFAULT_API_BASE_URL, ProviderCredentials, ProviderOptions, RedeployOutcome, ServiceRecord,
    SuspendState,
};

pub use providers::RenderProvider;
