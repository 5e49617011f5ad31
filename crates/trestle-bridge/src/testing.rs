//! Scripted fakes for the OS seams, used by the integration tests and by
//! hosts that need a headless bridge.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use serde_json::Value;

use trestle_core::models::{
    AuthorizationDecision, NotificationAuthOptions, Payload, PushToken, RawDeviceInfo,
    RegistrationOutcome,
};
use trestle_core::traits::{IDeviceInfoSource, IPermissionPrompter, IPushRegistrar};

/// Prompter returning pre-programmed decisions, with per-kind prompt
/// counters and an optional response delay for clock-driven tests.
pub struct ScriptedPrompter {
    notification: AuthorizationDecision,
    tracking: AuthorizationDecision,
    respond_after: Option<Duration>,
    notification_prompts: AtomicU32,
    tracking_prompts: AtomicU32,
    last_options: Mutex<Option<NotificationAuthOptions>>,
}

impl ScriptedPrompter {
    pub fn new(notification: AuthorizationDecision, tracking: AuthorizationDecision) -> Self {
        Self {
            notification,
            tracking,
            respond_after: None,
            notification_prompts: AtomicU32::new(0),
            tracking_prompts: AtomicU32::new(0),
            last_options: Mutex::new(None),
        }
    }

    /// Grants both capabilities.
    pub fn granting() -> Self {
        Self::new(
            AuthorizationDecision::Granted,
            AuthorizationDecision::Granted,
        )
    }

    /// Denies both capabilities.
    pub fn denying() -> Self {
        Self::new(AuthorizationDecision::Denied, AuthorizationDecision::Denied)
    }

    /// Delays every decision, so paused-clock tests can observe the
    /// in-flight state.
    pub fn with_response_delay(mut self, delay: Duration) -> Self {
        self.respond_after = Some(delay);
        self
    }

    pub fn notification_prompts(&self) -> u32 {
        self.notification_prompts.load(Ordering::Relaxed)
    }

    pub fn tracking_prompts(&self) -> u32 {
        self.tracking_prompts.load(Ordering::Relaxed)
    }

    /// Options the last notification prompt was asked with.
    pub fn last_notification_options(&self) -> Option<NotificationAuthOptions> {
        match self.last_options.lock() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}

impl IPermissionPrompter for ScriptedPrompter {
    async fn request_notification_authorization(
        &self,
        options: NotificationAuthOptions,
    ) -> AuthorizationDecision {
        self.notification_prompts.fetch_add(1, Ordering::Relaxed);
        match self.last_options.lock() {
            Ok(mut guard) => *guard = Some(options),
            Err(poisoned) => *poisoned.into_inner() = Some(options),
        }
        if let Some(delay) = self.respond_after {
            tokio::time::sleep(delay).await;
        }
        self.notification
    }

    async fn request_tracking_authorization(&self) -> AuthorizationDecision {
        self.tracking_prompts.fetch_add(1, Ordering::Relaxed);
        if let Some(delay) = self.respond_after {
            tokio::time::sleep(delay).await;
        }
        self.tracking
    }
}

/// Registrar resolving with a fixed outcome and counting registrations.
pub struct ScriptedRegistrar {
    outcome: RegistrationOutcome,
    respond_after: Option<Duration>,
    calls: AtomicU32,
}

impl ScriptedRegistrar {
    pub fn with_token(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            outcome: RegistrationOutcome::Success(PushToken::from_bytes(bytes)),
            respond_after: None,
            calls: AtomicU32::new(0),
        }
    }

    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            outcome: RegistrationOutcome::Failure {
                reason: reason.into(),
            },
            respond_after: None,
            calls: AtomicU32::new(0),
        }
    }

    pub fn with_response_delay(mut self, delay: Duration) -> Self {
        self.respond_after = Some(delay);
        self
    }

    pub fn call_count(&self) -> u32 {
        self.calls.load(Ordering::Relaxed)
    }
}

impl IPushRegistrar for ScriptedRegistrar {
    async fn register_for_remote_notifications(&self) -> RegistrationOutcome {
        self.calls.fetch_add(1, Ordering::Relaxed);
        if let Some(delay) = self.respond_after {
            tokio::time::sleep(delay).await;
        }
        self.outcome.clone()
    }
}

/// Device-info source returning a fixed raw read.
#[derive(Debug, Clone, Default)]
pub struct StaticDeviceInfoSource {
    raw: RawDeviceInfo,
}

impl StaticDeviceInfoSource {
    pub fn new(raw: RawDeviceInfo) -> Self {
        Self { raw }
    }

    /// A fully populated, plausible device.
    pub fn sample() -> Self {
        Self::new(RawDeviceInfo {
            total_memory_bytes: Some(8 * 1024 * 1024 * 1024),
            available_memory_bytes: Some(3 * 1024 * 1024 * 1024),
            low_memory: Some(false),
            model: Some("Pixel 8".to_string()),
            brand: Some("google".to_string()),
            os_version: Some("14".to_string()),
            sdk_version: Some(34),
            cpu_abis: vec!["arm64-v8a".to_string(), "armeabi-v7a".to_string()],
            hardware: Some("zuma".to_string()),
        })
    }
}

impl IDeviceInfoSource for StaticDeviceInfoSource {
    fn read(&self) -> RawDeviceInfo {
        self.raw.clone()
    }
}

/// Builds a payload map from string pairs.
pub fn payload(entries: &[(&str, &str)]) -> Payload {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
        .collect()
}
