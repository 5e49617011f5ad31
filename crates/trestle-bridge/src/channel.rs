//! The single named bidirectional channel between the native layer and the
//! managed runtime, plus the write-once slot that publishes the native
//! handle to the relays.

use std::sync::{Arc, OnceLock};

use serde_json::Value;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};

use trestle_core::constants::methods;
use trestle_core::errors::ChannelError;
use trestle_core::traits::IDeviceInfoSource;

use crate::telemetry::TelemetryCollector;

/// Fire-and-forget message pushed from native to the managed runtime.
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundMessage {
    pub method: &'static str,
    pub args: Value,
}

/// Request from the managed runtime awaiting a native reply.
struct InboundCall {
    method: String,
    args: Value,
    reply: oneshot::Sender<Result<Value, ChannelError>>,
}

/// Native end of the bridge channel.
///
/// Push-direction sends are non-blocking; the managed runtime drains them at
/// its own pace. Constructed once at startup by the orchestrator.
pub struct BridgeChannel {
    name: String,
    outbound: mpsc::UnboundedSender<OutboundMessage>,
}

/// Stream of managed-runtime requests, drained by [`serve_requests`].
pub struct RequestReceiver {
    calls: mpsc::UnboundedReceiver<InboundCall>,
}

/// Managed-runtime end of the bridge channel.
pub struct RuntimeEndpoint {
    messages: mpsc::UnboundedReceiver<OutboundMessage>,
    calls: mpsc::UnboundedSender<InboundCall>,
}

impl BridgeChannel {
    /// Opens the channel under its well-known name and returns the native
    /// handle, the native request stream, and the managed-runtime end.
    ///
    /// Both ends share the one name by construction, so the two sides can
    /// never disagree on it.
    pub fn open(name: impl Into<String>) -> (Arc<Self>, RequestReceiver, RuntimeEndpoint) {
        let name = name.into();
        let (outbound_tx, outbound_rx) = mpsc::unbounded_channel();
        let (inbound_tx, inbound_rx) = mpsc::unbounded_channel();
        debug!(channel = %name, "bridge channel open");
        (
            Arc::new(Self {
                name,
                outbound: outbound_tx,
            }),
            RequestReceiver { calls: inbound_rx },
            RuntimeEndpoint {
                messages: outbound_rx,
                calls: inbound_tx,
            },
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Pushes a fire-and-forget message to the managed runtime.
    pub fn push(&self, method: &'static str, args: Value) -> Result<(), ChannelError> {
        self.outbound
            .send(OutboundMessage { method, args })
            .map_err(|_| ChannelError::Closed {
                method: method.to_string(),
            })
    }

    /// Pushes a new device token, lowercase hex, to the managed runtime.
    pub fn update_token(&self, token_hex: &str) -> Result<(), ChannelError> {
        self.push(methods::UPDATE_TOKEN, Value::String(token_hex.to_string()))
    }
}

impl RuntimeEndpoint {
    /// Issues a request-direction call and awaits the native reply.
    pub async fn call(
        &self,
        method: impl Into<String>,
        args: Value,
    ) -> Result<Value, ChannelError> {
        let method = method.into();
        let (reply_tx, reply_rx) = oneshot::channel();
        self.calls
            .send(InboundCall {
                method: method.clone(),
                args,
                reply: reply_tx,
            })
            .map_err(|_| ChannelError::Closed {
                method: method.clone(),
            })?;
        reply_rx
            .await
            .map_err(|_| ChannelError::Closed { method })?
    }

    /// Awaits the next push-direction message, or `None` once the native
    /// side is gone.
    pub async fn next_message(&mut self) -> Option<OutboundMessage> {
        self.messages.recv().await
    }

    /// Non-blocking drain of the push-direction queue.
    pub fn try_next_message(&mut self) -> Option<OutboundMessage> {
        self.messages.try_recv().ok()
    }
}

/// Answers managed-runtime requests until the runtime end closes.
///
/// `getDeviceInfo` takes a fresh telemetry snapshot per call; anything else
/// is answered with the not-implemented rejection.
pub async fn serve_requests<S: IDeviceInfoSource>(
    mut requests: RequestReceiver,
    collector: TelemetryCollector<S>,
) {
    while let Some(call) = requests.calls.recv().await {
        let response = match call.method.as_str() {
            methods::GET_DEVICE_INFO => Ok(Value::Object(collector.collect().to_map())),
            other => {
                debug!(method = other, "unhandled channel method");
                Err(ChannelError::NotImplemented {
                    method: other.to_string(),
                })
            }
        };
        if call.reply.send(response).is_err() {
            debug!(method = %call.method, "caller went away before the reply");
        }
    }
}

/// Write-once holder for the shared channel handle.
///
/// The orchestrator installs the handle exactly once at startup; relay
/// callbacks running on other tasks read it thereafter. A relay reading an
/// empty slot drops its event, which is the accepted degradation when an OS
/// callback outruns channel construction.
#[derive(Default)]
pub struct ChannelSlot {
    inner: OnceLock<Arc<BridgeChannel>>,
}

impl ChannelSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the handle. Returns false (and logs) if one was already
    /// installed; the original handle stays.
    pub fn install(&self, channel: Arc<BridgeChannel>) -> bool {
        let installed = self.inner.set(channel).is_ok();
        if !installed {
            warn!("channel handle already installed, ignoring replacement");
        }
        installed
    }

    pub fn get(&self) -> Option<&Arc<BridgeChannel>> {
        self.inner.get()
    }

    /// The handle, or the not-ready rejection naming the method whose event
    /// is about to be dropped.
    pub fn ready_for(&self, method: &'static str) -> Result<&Arc<BridgeChannel>, ChannelError> {
        self.inner.get().ok_or(ChannelError::NotReady { method })
    }

    pub fn is_ready(&self) -> bool {
        self.inner.get().is_some()
    }
}
