//! Bridge configuration: the channel name and the tuning constants that the
//! source history showed drifting between variants are config fields here,
//! not literals.

pub mod defaults;

mod bridge_config;

pub use bridge_config::BridgeConfig;
