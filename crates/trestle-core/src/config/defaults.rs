//! Default values for bridge configuration.

/// Channel name used symmetrically on both ends of the bridge.
pub const DEFAULT_CHANNEL_NAME: &str = "app.bridge/notifications";

/// Delay before the tracking-consent prompt fires, in milliseconds.
///
/// Keeps the OS from presenting two consent prompts in the same frame, which
/// can reorder them or silently skip one. Empirical tuning value; applied
/// uniformly regardless of how fast the notification flow resolves.
pub const DEFAULT_TRACKING_REQUEST_DELAY_MS: u64 = 2000;
