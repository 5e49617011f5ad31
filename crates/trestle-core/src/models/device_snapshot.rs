use serde::{Deserialize, Serialize};

use crate::models::Payload;

const BYTES_PER_MB: u64 = 1024 * 1024;

/// Point-in-time read of OS memory and build metadata.
///
/// Created fresh per query and never cached. Serializes to the exact wire
/// keys the managed runtime expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceSnapshot {
    #[serde(rename = "totalMemoryMB")]
    pub total_memory_mb: i64,
    #[serde(rename = "availableMemoryMB")]
    pub available_memory_mb: i64,
    #[serde(rename = "isLowMemory")]
    pub is_low_memory: bool,
    #[serde(rename = "model")]
    pub model: String,
    #[serde(rename = "brand")]
    pub brand: String,
    #[serde(rename = "osVersion")]
    pub os_version: String,
    #[serde(rename = "sdkVersion")]
    pub sdk_version: i32,
    #[serde(rename = "cpuAbi")]
    pub cpu_abi: String,
    #[serde(rename = "hardware")]
    pub hardware: String,
}

/// Unnormalized OS read backing a [`DeviceSnapshot`].
///
/// Fields the OS could not supply stay `None`; normalization fills in the
/// OS-defined defaults instead of surfacing an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawDeviceInfo {
    pub total_memory_bytes: Option<u64>,
    pub available_memory_bytes: Option<u64>,
    pub low_memory: Option<bool>,
    pub model: Option<String>,
    pub brand: Option<String>,
    pub os_version: Option<String>,
    pub sdk_version: Option<i32>,
    /// Supported CPU ABIs, most-preferred first. May be empty.
    pub cpu_abis: Vec<String>,
    pub hardware: Option<String>,
}

impl DeviceSnapshot {
    /// Normalizes a raw OS read into a snapshot.
    ///
    /// Absent strings become empty, absent numerics zero, absent flags false,
    /// and the available-memory figure is clamped so it never exceeds the
    /// total.
    pub fn from_raw(raw: RawDeviceInfo) -> Self {
        let total_memory_mb = (raw.total_memory_bytes.unwrap_or(0) / BYTES_PER_MB) as i64;
        let available_memory_mb =
            ((raw.available_memory_bytes.unwrap_or(0) / BYTES_PER_MB) as i64).min(total_memory_mb);
        Self {
            total_memory_mb,
            available_memory_mb,
            is_low_memory: raw.low_memory.unwrap_or(false),
            model: raw.model.unwrap_or_default(),
            brand: raw.brand.unwrap_or_default(),
            os_version: raw.os_version.unwrap_or_default(),
            sdk_version: raw.sdk_version.unwrap_or(0),
            cpu_abi: raw.cpu_abis.into_iter().next().unwrap_or_default(),
            hardware: raw.hardware.unwrap_or_default(),
        }
    }

    /// Renders the snapshot as the string-keyed map sent over the channel.
    pub fn to_map(&self) -> Payload {
        match serde_json::to_value(self) {
            Ok(serde_json::Value::Object(map)) => map,
            _ => Payload::new(),
        }
    }
}
