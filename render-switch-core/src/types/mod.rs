//! 类型定义模块

mod account;
mod action;
mod outcome;

pub use account::Account;
pub use action::Action;
pub use outcome::{Outcome, OutcomeKind};

// Re-export provider 库的公共类型
pub use render_switch_provider::{
    ProviderCredentials, ProviderError, ProviderOptions, RedeployOutcome, ServiceProvider,
    ServiceRecord, SuspendState,
};
