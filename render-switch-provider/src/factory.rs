//! Provider factory functions.

use std::sync::Arc;

use crate::error::Result;
use crate::providers::RenderProvider;
use crate::traits::ServiceProvider;
use crate::types::{ProviderCredentials, ProviderOptions};

/// Creates a [`ServiceProvider`] instance from the given credentials.
///
/// The concrete provider type is determined by the [`ProviderCredentials`] variant.
/// The returned provider is wrapped in `Arc<dyn ServiceProvider>` for easy sharing
/// across async tasks.
///
/// # Examples
///
/// ```rust,no_run
/// use render_switch_provider::{create_provider, ProviderCredentials, ProviderOptions};
///
/// let provider = create_provider(
///     &ProviderCredentials::Render { api_key: "rnd_xxx".to_string() },
///     &ProviderOptions::default(),
/// )
/// .unwrap();
/// ```
pub fn create_provider(
    credentials: &ProviderCredentials,
    options: &ProviderOptions,
) -> Result<Arc<dyn ServiceProvider>> {
    match credentials {
        ProviderCredentials::Render { api_key } => {
            Ok(Arc::new(RenderProvider::new(api_key.clone(), options)?))
        }
    }
}
