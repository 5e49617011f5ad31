use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use trestle_core::constants::methods;
use trestle_core::models::{
    FetchOutcome, NotificationEvent, OsCapabilities, Payload, PresentationOptions,
};

use crate::channel::ChannelSlot;
use crate::completion::CompletionHandle;

/// Forwards OS-delivered notification events to the managed runtime and
/// answers the OS hooks that demand a response.
pub struct EventRelay {
    slot: Arc<ChannelSlot>,
    capabilities: OsCapabilities,
}

impl EventRelay {
    pub fn new(slot: Arc<ChannelSlot>, capabilities: OsCapabilities) -> Self {
        Self { slot, capabilities }
    }

    /// Remote notification arrived while the app is foregrounded.
    ///
    /// The forward to the managed runtime is informational fire-and-forget;
    /// the returned presentation decision is what the OS is waiting on, and
    /// nothing here blocks it.
    pub fn notification_delivered(&self, payload: Payload) -> PresentationOptions {
        self.forward(NotificationEvent::Delivered { payload });
        if self.capabilities.rich_presentation {
            PresentationOptions::rich_default()
        } else {
            PresentationOptions::legacy_default()
        }
    }

    /// User interacted with a delivered notification.
    ///
    /// The OS completion fires exactly once, after the forward attempt,
    /// whether or not the forward reached the channel.
    pub fn notification_tapped(&self, payload: Payload, completion: &CompletionHandle<()>) {
        self.forward(NotificationEvent::Tapped { payload });
        completion.complete(());
    }

    /// A background-fetch window opened.
    ///
    /// Reports `NewData` when the fetch signal reached the managed runtime
    /// and `NoData` when it could not, completing exactly once either way.
    pub fn background_fetch(&self, completion: &CompletionHandle<FetchOutcome>) {
        let sent = self
            .slot
            .ready_for(methods::BACKGROUND_FETCH)
            .and_then(|channel| {
                channel.push(methods::BACKGROUND_FETCH, Value::Object(Payload::new()))
            });
        let outcome = match sent {
            Ok(()) => FetchOutcome::NewData,
            Err(err) => {
                warn!(error = %err, "skipping background fetch");
                FetchOutcome::NoData
            }
        };
        completion.complete(outcome);
    }

    /// The app was opened through a deep link. Returns whether the link was
    /// handed to the managed runtime.
    pub fn link_opened(&self, url: &str) -> bool {
        let mut payload = Payload::new();
        payload.insert("url".to_string(), Value::String(url.to_string()));
        let sent = self
            .slot
            .ready_for(methods::LINK_OPENED)
            .and_then(|channel| channel.push(methods::LINK_OPENED, Value::Object(payload)));
        match sent {
            Ok(()) => true,
            Err(err) => {
                warn!(url, error = %err, "dropping deep link");
                false
            }
        }
    }

    fn forward(&self, event: NotificationEvent) {
        let method = event.method();
        let sent = self
            .slot
            .ready_for(method)
            .and_then(|channel| channel.push(method, Value::Object(event.into_payload())));
        match sent {
            Ok(()) => debug!(method, "notification event forwarded"),
            Err(err) => warn!(method, error = %err, "dropping notification event"),
        }
    }
}
