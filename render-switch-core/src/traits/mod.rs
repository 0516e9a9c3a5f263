//! Seams towards the network layer

mod provider_factory;

pub use provider_factory::{ProviderFactory, RenderProviderFactory};
