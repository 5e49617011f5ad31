use std::sync::Arc;

use serde_json::Value;

use trestle_bridge::channel::{BridgeChannel, ChannelSlot};
use trestle_bridge::completion::CompletionHandle;
use trestle_bridge::relay::{EventRelay, TokenRelay};
use trestle_bridge::testing::payload;
use trestle_core::constants::methods;
use trestle_core::models::{
    FetchOutcome, OsCapabilities, PresentationOptions, PushToken, RegistrationOutcome,
};

fn ready_slot(name: &str) -> (Arc<ChannelSlot>, trestle_bridge::channel::RuntimeEndpoint) {
    let slot = Arc::new(ChannelSlot::new());
    let (channel, _requests, endpoint) = BridgeChannel::open(name.to_string());
    slot.install(channel);
    (slot, endpoint)
}

// ── Token relay ──────────────────────────────────────────────────────────

#[tokio::test]
async fn successful_registration_relays_the_hex_token_once() {
    let (slot, mut endpoint) = ready_slot("test/notifications");
    let relay = TokenRelay::new(slot);

    relay.registration_completed(RegistrationOutcome::Success(PushToken::from_bytes([
        0x1a, 0x2b,
    ])));

    let message = endpoint.next_message().await.unwrap();
    assert_eq!(message.method, methods::UPDATE_TOKEN);
    assert_eq!(message.args, Value::String("1a2b".into()));
    assert!(endpoint.try_next_message().is_none());
}

#[tokio::test]
async fn token_before_channel_is_dropped() {
    let slot = Arc::new(ChannelSlot::new());
    let relay = TokenRelay::new(slot.clone());

    relay.registration_completed(RegistrationOutcome::Success(PushToken::from_bytes([0x01])));

    // Wiring the channel afterwards does not replay the dropped token.
    let (channel, _requests, mut endpoint) = BridgeChannel::open("test/notifications");
    slot.install(channel);
    assert!(endpoint.try_next_message().is_none());
}

#[tokio::test]
async fn registration_failure_is_not_forwarded() {
    let (slot, mut endpoint) = ready_slot("test/notifications");
    let relay = TokenRelay::new(slot);

    relay.registration_completed(RegistrationOutcome::Failure {
        reason: "no network entitlement".to_string(),
    });

    assert!(endpoint.try_next_message().is_none());
}

#[tokio::test]
async fn a_later_token_supersedes_the_earlier_one() {
    let (slot, mut endpoint) = ready_slot("test/notifications");
    let relay = TokenRelay::new(slot);

    relay.registration_completed(RegistrationOutcome::Success(PushToken::from_bytes([0x01])));
    relay.registration_completed(RegistrationOutcome::Success(PushToken::from_bytes([0x02])));

    assert_eq!(
        endpoint.next_message().await.unwrap().args,
        Value::String("01".into())
    );
    assert_eq!(
        endpoint.next_message().await.unwrap().args,
        Value::String("02".into())
    );
}

// ── Event relay: foreground delivery ─────────────────────────────────────

#[tokio::test]
async fn delivery_forwards_and_returns_the_rich_bitmask() {
    let (slot, mut endpoint) = ready_slot("test/notifications");
    let relay = EventRelay::new(slot, OsCapabilities::modern());

    let options = relay.notification_delivered(payload(&[("title", "hello")]));

    assert_eq!(options, PresentationOptions::rich_default());
    let message = endpoint.next_message().await.unwrap();
    assert_eq!(message.method, methods::NOTIFICATION_RECEIVED);
    assert_eq!(message.args["title"], "hello");
}

#[tokio::test]
async fn delivery_on_a_legacy_os_returns_the_three_option_bitmask() {
    let (slot, _endpoint) = ready_slot("test/notifications");
    let relay = EventRelay::new(slot, OsCapabilities::legacy());

    let options = relay.notification_delivered(payload(&[]));
    assert_eq!(options, PresentationOptions::legacy_default());
}

#[tokio::test]
async fn delivery_before_channel_still_answers_the_os() {
    let relay = EventRelay::new(Arc::new(ChannelSlot::new()), OsCapabilities::modern());

    // Forward is dropped; the OS still gets its presentation decision.
    let options = relay.notification_delivered(payload(&[("k", "v")]));
    assert_eq!(options, PresentationOptions::rich_default());
}

// ── Event relay: tap ─────────────────────────────────────────────────────

#[tokio::test]
async fn tap_forwards_then_completes_exactly_once() {
    let (slot, mut endpoint) = ready_slot("test/notifications");
    let relay = EventRelay::new(slot, OsCapabilities::modern());
    let (completion, receiver) = CompletionHandle::new("tap");

    relay.notification_tapped(payload(&[("action", "open")]), &completion);

    let message = endpoint.next_message().await.unwrap();
    assert_eq!(message.method, methods::NOTIFICATION_TAPPED);
    assert_eq!(message.args["action"], "open");
    assert!(receiver.await.is_ok());
    assert!(completion.is_complete());
}

#[tokio::test]
async fn tap_with_no_channel_still_completes() {
    let relay = EventRelay::new(Arc::new(ChannelSlot::new()), OsCapabilities::modern());
    let (completion, receiver) = CompletionHandle::new("tap");

    relay.notification_tapped(payload(&[]), &completion);

    assert!(receiver.await.is_ok());
}

// ── Event relay: background fetch and deep links ─────────────────────────

#[tokio::test]
async fn background_fetch_reports_new_data_when_forwarded() {
    let (slot, mut endpoint) = ready_slot("test/notifications");
    let relay = EventRelay::new(slot, OsCapabilities::modern());
    let (completion, receiver) = CompletionHandle::new("fetch");

    relay.background_fetch(&completion);

    assert_eq!(receiver.await.unwrap(), FetchOutcome::NewData);
    assert_eq!(
        endpoint.next_message().await.unwrap().method,
        methods::BACKGROUND_FETCH
    );
}

#[tokio::test]
async fn background_fetch_reports_no_data_without_a_channel() {
    let relay = EventRelay::new(Arc::new(ChannelSlot::new()), OsCapabilities::modern());
    let (completion, receiver) = CompletionHandle::new("fetch");

    relay.background_fetch(&completion);

    assert_eq!(receiver.await.unwrap(), FetchOutcome::NoData);
}

#[tokio::test]
async fn deep_link_is_handled_only_when_the_channel_is_up() {
    let relay = EventRelay::new(Arc::new(ChannelSlot::new()), OsCapabilities::modern());
    assert!(!relay.link_opened("app://inbox"));

    let (slot, mut endpoint) = ready_slot("test/notifications");
    let relay = EventRelay::new(slot, OsCapabilities::modern());
    assert!(relay.link_opened("app://inbox"));

    let message = endpoint.next_message().await.unwrap();
    assert_eq!(message.method, methods::LINK_OPENED);
    assert_eq!(message.args["url"], "app://inbox");
}
