use serde::{Deserialize, Serialize};

/// Result tag reported to the OS when a background-fetch window closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FetchOutcome {
    NewData,
    NoData,
    Failed,
}

impl FetchOutcome {
    /// Stable label for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NewData => "newData",
            Self::NoData => "noData",
            Self::Failed => "failed",
        }
    }
}
