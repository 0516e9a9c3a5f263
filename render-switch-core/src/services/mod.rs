//! 业务逻辑服务层

mod lifecycle_service;

pub use lifecycle_service::{LifecycleService, DEFAULT_PARALLELISM};
