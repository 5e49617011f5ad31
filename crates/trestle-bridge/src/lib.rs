//! # trestle-bridge
//!
//! Orchestration engine for the Trestle native bridge: the bidirectional
//! channel to the managed runtime, the one-shot permission gates, the token
//! and event relays, the telemetry collector, and the startup sequencer that
//! wires them together without blocking launch.
//!
//! The one ordering invariant everything else leans on: the channel is
//! opened and published before any permission flow that could produce a
//! relay event starts.

pub mod channel;
pub mod completion;
pub mod gate;
pub mod orchestrator;
pub mod relay;
pub mod telemetry;
pub mod testing;
pub mod tracing_setup;

pub use channel::{BridgeChannel, ChannelSlot, OutboundMessage, RequestReceiver, RuntimeEndpoint};
pub use completion::CompletionHandle;
pub use gate::PermissionGate;
pub use orchestrator::{BridgeHandles, Orchestrator};
pub use relay::{EventRelay, TokenRelay};
pub use telemetry::TelemetryCollector;
