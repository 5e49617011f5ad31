use std::fmt;

/// Opaque push token issued by the OS during remote-notification
/// registration. Rendered to consumers as lowercase hex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushToken(Vec<u8>);

impl PushToken {
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Lowercase hex rendering used on the channel wire.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }
}

impl fmt::Display for PushToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Result of one OS remote-notification registration attempt.
///
/// Produced at most once per registration call. A later successful
/// registration supersedes any earlier token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationOutcome {
    Success(PushToken),
    Failure { reason: String },
}
