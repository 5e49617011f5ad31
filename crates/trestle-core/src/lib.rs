//! # trestle-core
//!
//! Foundation crate for the Trestle native bridge.
//! Defines all models, errors, config, constants, and the OS-facing traits.
//! The orchestration engine in `trestle-bridge` depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::BridgeConfig;
pub use errors::{BridgeError, BridgeResult, ChannelError, ConfigError};
pub use models::{
    AuthorizationDecision, AuthorizationState, DeviceSnapshot, FetchOutcome,
    NotificationAuthOptions, NotificationEvent, OsCapabilities, Payload, PermissionKind,
    PresentationOptions, PushToken, RawDeviceInfo, RegistrationOutcome,
};
