use std::future::Future;

use crate::models::{
    AuthorizationDecision, NotificationAuthOptions, RawDeviceInfo, RegistrationOutcome,
};

/// OS permission-prompt surface.
///
/// Each call presents at most one OS prompt and resolves with the terminal
/// decision. Callers are responsible for never issuing a second prompt for
/// the same capability; the OS is not relied on to coalesce duplicates.
pub trait IPermissionPrompter: Send + Sync {
    /// Requests notification authorization with the given options.
    fn request_notification_authorization(
        &self,
        options: NotificationAuthOptions,
    ) -> impl Future<Output = AuthorizationDecision> + Send;

    /// Requests tracking authorization. Resolves `Unavailable` on platforms
    /// without the API.
    fn request_tracking_authorization(
        &self,
    ) -> impl Future<Output = AuthorizationDecision> + Send;
}

/// OS remote-notification registration surface.
pub trait IPushRegistrar: Send + Sync {
    /// Registers with the OS push service. Resolves once, with either the
    /// device token or the OS rejection reason.
    fn register_for_remote_notifications(
        &self,
    ) -> impl Future<Output = RegistrationOutcome> + Send;
}

/// Synchronous, side-effect-free read of OS memory and build metadata.
pub trait IDeviceInfoSource: Send + Sync {
    fn read(&self) -> RawDeviceInfo;
}
