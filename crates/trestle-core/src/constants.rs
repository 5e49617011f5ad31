/// Trestle bridge version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Channel method names, used symmetrically on both ends of the bridge.
pub mod methods {
    /// Request direction (managed runtime -> native): device telemetry query.
    pub const GET_DEVICE_INFO: &str = "getDeviceInfo";

    /// Push direction (native -> managed runtime): new push token, lowercase hex.
    pub const UPDATE_TOKEN: &str = "updateToken";

    /// Push direction: user interacted with a delivered notification.
    pub const NOTIFICATION_TAPPED: &str = "notificationTapped";

    /// Push direction: remote notification delivered while the app is foregrounded.
    pub const NOTIFICATION_RECEIVED: &str = "notificationReceived";

    /// Push direction: a background fetch window opened.
    pub const BACKGROUND_FETCH: &str = "backgroundFetch";

    /// Push direction: the app was opened through a deep link.
    pub const LINK_OPENED: &str = "linkOpened";
}
