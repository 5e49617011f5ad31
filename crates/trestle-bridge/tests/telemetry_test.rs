use proptest::prelude::*;

use trestle_bridge::telemetry::TelemetryCollector;
use trestle_bridge::testing::StaticDeviceInfoSource;
use trestle_core::models::{DeviceSnapshot, RawDeviceInfo};

#[test]
fn collector_takes_a_fresh_equal_snapshot_per_call() {
    let collector = TelemetryCollector::new(StaticDeviceInfoSource::sample());
    let first = collector.collect();
    let second = collector.collect();
    assert_eq!(first, second);
    assert_eq!(first.to_map().len(), 9);
}

#[test]
fn collector_fills_os_defaults_for_a_bare_source() {
    let collector = TelemetryCollector::new(StaticDeviceInfoSource::default());
    let snapshot = collector.collect();
    assert_eq!(snapshot.cpu_abi, "");
    assert_eq!(snapshot.total_memory_mb, 0);
    assert_eq!(snapshot.to_map().len(), 9);
}

proptest! {
    // Memory figures and ABI lists are OS-supplied; the snapshot invariants
    // must hold for anything the OS could plausibly hand back.
    #[test]
    fn snapshot_invariants_hold_for_any_raw_read(
        total in any::<Option<u64>>(),
        available in any::<Option<u64>>(),
        low_memory in any::<Option<bool>>(),
        abis in prop::collection::vec("[a-z0-9-]{1,12}", 0..4),
    ) {
        let raw = RawDeviceInfo {
            total_memory_bytes: total,
            available_memory_bytes: available,
            low_memory,
            cpu_abis: abis.clone(),
            ..RawDeviceInfo::default()
        };
        let snapshot = DeviceSnapshot::from_raw(raw);

        prop_assert!(snapshot.available_memory_mb <= snapshot.total_memory_mb);
        prop_assert!(snapshot.available_memory_mb >= 0);
        prop_assert_eq!(snapshot.to_map().len(), 9);
        match abis.first() {
            Some(first) => {
                prop_assert_eq!(&snapshot.cpu_abi, first);
            }
            None => {
                prop_assert_eq!(snapshot.cpu_abi.as_str(), "");
            }
        }
    }
}
