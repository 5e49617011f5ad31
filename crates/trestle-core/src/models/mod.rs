//! Value types crossing the bridge: telemetry snapshots, authorization
//! states, push tokens, notification events, and OS capability posture.

mod authorization;
mod capabilities;
mod device_snapshot;
mod fetch;
mod notification_event;
mod presentation;
mod push_token;

pub use authorization::{
    AuthorizationDecision, AuthorizationState, NotificationAuthOptions, PermissionKind,
};
pub use capabilities::OsCapabilities;
pub use device_snapshot::{DeviceSnapshot, RawDeviceInfo};
pub use fetch::FetchOutcome;
pub use notification_event::{NotificationEvent, Payload};
pub use presentation::PresentationOptions;
pub use push_token::{PushToken, RegistrationOutcome};
