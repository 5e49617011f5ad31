use serde::{Deserialize, Serialize};

/// The two OS capabilities gated by a permission prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionKind {
    Notification,
    Tracking,
}

impl PermissionKind {
    /// Stable label for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Notification => "notification",
            Self::Tracking => "tracking",
        }
    }
}

/// Lifecycle of a single permission request within one process lifetime.
///
/// Transitions are monotonic forward only; once a terminal state is reached
/// no further OS prompt is issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthorizationState {
    NotRequested,
    Requesting,
    Granted,
    Denied,
    Unavailable,
}

impl AuthorizationState {
    /// Whether the state can no longer change for this process lifetime.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Granted | Self::Denied | Self::Unavailable)
    }
}

/// Terminal answer delivered by the OS authorization callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthorizationDecision {
    Granted,
    Denied,
    /// The platform or OS version lacks the capability entirely.
    Unavailable,
}

impl From<AuthorizationDecision> for AuthorizationState {
    fn from(decision: AuthorizationDecision) -> Self {
        match decision {
            AuthorizationDecision::Granted => Self::Granted,
            AuthorizationDecision::Denied => Self::Denied,
            AuthorizationDecision::Unavailable => Self::Unavailable,
        }
    }
}

/// Options passed to the OS notification-authorization prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationAuthOptions {
    pub alert: bool,
    pub badge: bool,
    pub sound: bool,
    /// Request provisional (quiet) authorization instead of a user prompt.
    pub provisional: bool,
}

impl Default for NotificationAuthOptions {
    fn default() -> Self {
        Self {
            alert: true,
            badge: true,
            sound: true,
            provisional: false,
        }
    }
}
