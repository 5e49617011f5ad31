use std::sync::Arc;

use tracing::{debug, warn};

use trestle_core::constants::methods;
use trestle_core::models::RegistrationOutcome;

use crate::channel::ChannelSlot;

/// Forwards the OS-issued push token to the managed runtime.
///
/// Invoked once per OS registration callback. Exactly one token is logically
/// live; a later callback supersedes an earlier one and only the later value
/// is relayed.
pub struct TokenRelay {
    slot: Arc<ChannelSlot>,
}

impl TokenRelay {
    pub fn new(slot: Arc<ChannelSlot>) -> Self {
        Self { slot }
    }

    /// Handles one registration callback.
    ///
    /// Success forwards the lowercase-hex token over `updateToken` if the
    /// channel is up. Failure is logged and not forwarded; the managed
    /// runtime has no actionable response to a registration failure.
    pub fn registration_completed(&self, outcome: RegistrationOutcome) {
        match outcome {
            RegistrationOutcome::Success(token) => {
                let hex = token.to_hex();
                let sent = self
                    .slot
                    .ready_for(methods::UPDATE_TOKEN)
                    .and_then(|channel| channel.update_token(&hex));
                match sent {
                    Ok(()) => debug!(token = %hex, "push token relayed"),
                    Err(err) => warn!(error = %err, "dropping push token"),
                }
            }
            RegistrationOutcome::Failure { reason } => {
                warn!(reason = %reason, "remote-notification registration failed");
            }
        }
    }
}
