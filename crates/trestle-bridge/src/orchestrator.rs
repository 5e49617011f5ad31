//! Startup sequencer.
//!
//! Launch order: plugin registration, then the channel (opened and published
//! before any permission flow may start), then the notification and tracking
//! flows on spawned tasks. Launch itself never blocks on either flow.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::info;

use trestle_core::config::BridgeConfig;
use trestle_core::errors::BridgeResult;
use trestle_core::models::{AuthorizationState, OsCapabilities, PermissionKind};
use trestle_core::traits::{
    IDeviceInfoSource, IPermissionPrompter, IPluginRegistrar, IPushRegistrar, NoopPluginRegistrar,
};

use crate::channel::{serve_requests, BridgeChannel, ChannelSlot, RuntimeEndpoint};
use crate::gate::PermissionGate;
use crate::relay::{EventRelay, TokenRelay};
use crate::telemetry::TelemetryCollector;

/// Wires the bridge together at process start.
pub struct Orchestrator<P, R, S> {
    config: BridgeConfig,
    capabilities: OsCapabilities,
    prompter: Arc<P>,
    registrar: Arc<R>,
    device_info: S,
    plugins: Box<dyn IPluginRegistrar>,
}

/// Everything a host needs after launch: the channel ends, the relays fed by
/// OS callbacks, the gates for state inspection, and the spawned flow tasks.
pub struct BridgeHandles {
    pub channel: Arc<BridgeChannel>,
    /// Managed-runtime end of the channel, to be handed to the consumer.
    pub runtime: RuntimeEndpoint,
    pub slot: Arc<ChannelSlot>,
    pub notification_gate: Arc<PermissionGate>,
    pub tracking_gate: Arc<PermissionGate>,
    pub token_relay: Arc<TokenRelay>,
    pub event_relay: Arc<EventRelay>,
    pub request_dispatcher: JoinHandle<()>,
    pub notification_flow: JoinHandle<()>,
    pub tracking_flow: JoinHandle<()>,
}

impl<P, R, S> Orchestrator<P, R, S>
where
    P: IPermissionPrompter + 'static,
    R: IPushRegistrar + 'static,
    S: IDeviceInfoSource + 'static,
{
    pub fn new(
        config: BridgeConfig,
        capabilities: OsCapabilities,
        prompter: Arc<P>,
        registrar: Arc<R>,
        device_info: S,
    ) -> Self {
        Self {
            config,
            capabilities,
            prompter,
            registrar,
            device_info,
            plugins: Box::new(NoopPluginRegistrar),
        }
    }

    /// Replaces the no-op plugin registrar.
    pub fn with_plugin_registrar(mut self, plugins: impl IPluginRegistrar + 'static) -> Self {
        self.plugins = Box::new(plugins);
        self
    }

    /// Runs the launch sequence and returns immediately.
    ///
    /// Must run inside a tokio runtime. Neither permission flow is awaited;
    /// both resolve on their own tasks via OS callbacks.
    pub fn launch(self) -> BridgeResult<BridgeHandles> {
        self.config.validate()?;

        self.plugins.register_plugins();

        let (channel, requests, runtime) = BridgeChannel::open(self.config.channel_name.clone());
        let slot = Arc::new(ChannelSlot::new());
        slot.install(channel.clone());

        let request_dispatcher = tokio::spawn(serve_requests(
            requests,
            TelemetryCollector::new(self.device_info),
        ));

        let notification_gate = Arc::new(PermissionGate::new(PermissionKind::Notification));
        let tracking_gate = Arc::new(PermissionGate::new(PermissionKind::Tracking));
        let token_relay = Arc::new(TokenRelay::new(slot.clone()));
        let event_relay = Arc::new(EventRelay::new(slot.clone(), self.capabilities));

        let notification_flow = tokio::spawn({
            let gate = notification_gate.clone();
            let prompter = self.prompter.clone();
            let registrar = self.registrar.clone();
            let relay = token_relay.clone();
            let options = self.config.notification_options;
            async move {
                let state = gate
                    .request(move || async move {
                        prompter.request_notification_authorization(options).await
                    })
                    .await;
                if state == AuthorizationState::Granted {
                    let outcome = registrar.register_for_remote_notifications().await;
                    relay.registration_completed(outcome);
                }
            }
        });

        let tracking_flow = tokio::spawn({
            let gate = tracking_gate.clone();
            let prompter = self.prompter.clone();
            let delay = self.config.tracking_request_delay();
            let capabilities = self.capabilities;
            async move {
                // Fixed delay, independent of the notification flow, so the
                // OS never has to stack two consent prompts in one frame.
                tokio::time::sleep(delay).await;
                if capabilities.tracking_authorization {
                    gate.request(move || async move {
                        prompter.request_tracking_authorization().await
                    })
                    .await;
                } else {
                    gate.resolve_unavailable();
                }
            }
        });

        info!(channel = %channel.name(), "bridge launched");

        Ok(BridgeHandles {
            channel,
            runtime,
            slot,
            notification_gate,
            tracking_gate,
            token_relay,
            event_relay,
            request_dispatcher,
            notification_flow,
            tracking_flow,
        })
    }
}
