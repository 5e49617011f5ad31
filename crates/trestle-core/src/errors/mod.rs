//! Error taxonomy for the bridge.
//!
//! Nothing here is fatal to the hosting process: every failure path degrades
//! to "no push capability" with a diagnostic log.

mod channel_error;
mod config_error;

pub use channel_error::ChannelError;
pub use config_error::ConfigError;

/// Aggregate error for bridge operations.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error(transparent)]
    Channel(#[from] ChannelError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result alias used across the workspace.
pub type BridgeResult<T> = Result<T, BridgeError>;
