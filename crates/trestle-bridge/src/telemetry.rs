//! On-demand device telemetry.

use tracing::debug;

use trestle_core::models::DeviceSnapshot;
use trestle_core::traits::IDeviceInfoSource;

/// Stateless collector producing a fresh [`DeviceSnapshot`] per query.
///
/// Never fails from the caller's perspective: fields the source could not
/// supply take their OS-defined defaults during normalization. Concurrent
/// collections are independent; the collector only reads OS-exposed state.
pub struct TelemetryCollector<S: IDeviceInfoSource> {
    source: S,
}

impl<S: IDeviceInfoSource> TelemetryCollector<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Reads the OS and returns the normalized snapshot.
    pub fn collect(&self) -> DeviceSnapshot {
        let snapshot = DeviceSnapshot::from_raw(self.source.read());
        debug!(
            total_mb = snapshot.total_memory_mb,
            available_mb = snapshot.available_memory_mb,
            low_memory = snapshot.is_low_memory,
            "device telemetry collected"
        );
        snapshot
    }
}
