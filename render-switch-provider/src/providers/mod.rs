//! Control-plane provider implementations

/// Shared utilities used by provider implementations.
pub mod common;

mod render;

pub use render::RenderProvider;
