use crate::constants::methods;

/// String-keyed payload map carried by channel messages.
pub type Payload = serde_json::Map<String, serde_json::Value>;

/// An OS-delivered notification event, constructed by the OS callback,
/// forwarded once, then discarded.
#[derive(Debug, Clone, PartialEq)]
pub enum NotificationEvent {
    /// Remote notification arrived while the app was foregrounded.
    Delivered { payload: Payload },
    /// The user interacted with a delivered notification.
    Tapped { payload: Payload },
}

impl NotificationEvent {
    /// Channel method this event is forwarded on.
    pub const fn method(&self) -> &'static str {
        match self {
            Self::Delivered { .. } => methods::NOTIFICATION_RECEIVED,
            Self::Tapped { .. } => methods::NOTIFICATION_TAPPED,
        }
    }

    pub fn payload(&self) -> &Payload {
        match self {
            Self::Delivered { payload } | Self::Tapped { payload } => payload,
        }
    }

    pub fn into_payload(self) -> Payload {
        match self {
            Self::Delivered { payload } | Self::Tapped { payload } => payload,
        }
    }
}
