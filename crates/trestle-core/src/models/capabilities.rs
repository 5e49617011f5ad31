use serde::{Deserialize, Serialize};

/// Capability posture of the hosting OS, probed once at startup.
///
/// Coarse-grained on purpose so the orchestration layer can branch on
/// posture without importing platform-specific adapter types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OsCapabilities {
    /// OS understands the banner/list presentation split.
    pub rich_presentation: bool,
    /// OS exposes a tracking-authorization API.
    pub tracking_authorization: bool,
}

impl OsCapabilities {
    /// Posture of a current-generation OS.
    pub const fn modern() -> Self {
        Self {
            rich_presentation: true,
            tracking_authorization: true,
        }
    }

    /// Posture of an OS predating the richer presentation and tracking APIs.
    pub const fn legacy() -> Self {
        Self {
            rich_presentation: false,
            tracking_authorization: false,
        }
    }
}

impl Default for OsCapabilities {
    fn default() -> Self {
        Self::modern()
    }
}
