//! Integration tests for palbot-commands: full message flow through the send gate.

use async_trait::async_trait;
use futures::future::join_all;
use mockall::mock;
use palbot_commands::{
    ChatTransport, Dispatcher, GateOutcome, GateSettings, ManualClock, ReplyFormatter,
};
use palbot_common::test_utils::chat_fixtures::{event, event_from, other_sender, test_target};
use palbot_common::test_utils::init_test_logging;
use palbot_common::{ChatTarget, PalbotError, Result};
use palbot_i18n::{Catalog, Locale};
use palbot_palworld::{Player, PlayerList, ServerMetrics, StatusSource};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

mock! {
    pub Status {}

    #[async_trait]
    impl StatusSource for Status {
        async fn fetch_metrics(&self) -> Result<ServerMetrics>;
        async fn fetch_players(&self) -> Result<PlayerList>;
    }
}

#[derive(Default)]
struct RecordingTransport {
    sent: Mutex<Vec<(ChatTarget, String)>>,
}

impl RecordingTransport {
    fn texts(&self) -> Vec<String> {
        self.sent.lock().iter().map(|(_, text)| text.clone()).collect()
    }
}

#[async_trait]
impl ChatTransport for RecordingTransport {
    async fn send(&self, target: &ChatTarget, text: &str) -> Result<()> {
        self.sent.lock().push((target.clone(), text.to_string()));
        Ok(())
    }
}

#[derive(Default)]
struct BrokenTransport {
    attempts: AtomicUsize,
}

#[async_trait]
impl ChatTransport for BrokenTransport {
    async fn send(&self, _target: &ChatTarget, _text: &str) -> Result<()> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(PalbotError::transport("channel unavailable"))
    }
}

fn sample_metrics() -> ServerMetrics {
    ServerMetrics {
        server_fps: 60,
        current_player_num: 2,
        server_frame_time: 16.666,
        max_player_num: 32,
        uptime: 5400,
        days: 4,
    }
}

fn players(count: usize) -> PlayerList {
    PlayerList {
        players: (1..=count)
            .map(|n| Player {
                name: format!("Pal{n}"),
                account_name: format!("tamer{n}"),
                user_id: format!("steam_{n}"),
                level: 10,
                ..Player::default()
            })
            .collect(),
    }
}

fn status_with_metrics() -> MockStatus {
    let mut status = MockStatus::new();
    status
        .expect_fetch_metrics()
        .returning(|| Ok(sample_metrics()));
    status
}

struct Harness {
    dispatcher: Dispatcher<ManualClock>,
    transport: Arc<RecordingTransport>,
    clock: ManualClock,
}

fn harness(status: MockStatus, locale: Locale) -> Harness {
    harness_with(status, locale, GateSettings::default())
}

fn harness_with(status: MockStatus, locale: Locale, settings: GateSettings) -> Harness {
    init_test_logging();
    let clock = ManualClock::new();
    let transport = Arc::new(RecordingTransport::default());
    let replies = ReplyFormatter::new(Catalog::new(locale).unwrap());
    let dispatcher = Dispatcher::with_clock(
        Arc::new(status),
        transport.clone(),
        replies,
        settings,
        clock.clone(),
    );

    Harness {
        dispatcher,
        transport,
        clock,
    }
}

#[tokio::test]
async fn test_metrics_spam_gets_one_notice() {
    let h = harness(status_with_metrics(), Locale::English);

    let first = h.dispatcher.handle_event(&event("/metrics")).await;
    h.clock.advance(Duration::from_secs(2));
    let second = h.dispatcher.handle_event(&event("/metrics")).await;
    h.clock.advance(Duration::from_secs(2));
    let third = h.dispatcher.handle_event(&event("/metrics")).await;

    assert_eq!(first, Some(GateOutcome::Sent));
    assert_eq!(second, Some(GateOutcome::Noticed));
    assert_eq!(third, Some(GateOutcome::Suppressed));

    let texts = h.transport.texts();
    assert_eq!(texts.len(), 2);
    assert!(texts[0].contains("Players: 2/32"));
    assert!(texts[0].contains("Frame time: 16.67 ms"));
    assert_eq!(
        texts[1],
        "⏱️ Easy there! You have to wait a moment before you can use this command again."
    );
}

#[tokio::test]
async fn test_replies_go_to_the_inbound_target() {
    let h = harness(status_with_metrics(), Locale::English);

    h.dispatcher.handle_event(&event("/metrics")).await;

    let sent = h.transport.sent.lock();
    assert_eq!(sent[0].0, test_target());
}

#[tokio::test]
async fn test_cooldown_expires_and_notice_rearms() {
    let mut status = MockStatus::new();
    let mut seq = mockall::Sequence::new();
    status
        .expect_fetch_metrics()
        .times(2)
        .in_sequence(&mut seq)
        .returning(|| Ok(sample_metrics()));
    status
        .expect_fetch_metrics()
        .times(2)
        .in_sequence(&mut seq)
        .returning(|| {
            Ok(ServerMetrics {
                current_player_num: 7,
                server_frame_time: 33.3333,
                uptime: 9000,
                ..sample_metrics()
            })
        });
    let h = harness(status, Locale::English);

    h.dispatcher.handle_event(&event("/metrics")).await;
    h.clock.advance(Duration::from_secs(5));
    h.dispatcher.handle_event(&event("/metrics")).await;

    h.clock.advance(Duration::from_secs(25));
    let reopened = h.dispatcher.handle_event(&event("/metrics")).await;
    h.clock.advance(Duration::from_secs(2));
    let notice = h.dispatcher.handle_event(&event("/metrics")).await;

    assert_eq!(reopened, Some(GateOutcome::Sent));
    assert_eq!(notice, Some(GateOutcome::Noticed));

    let texts = h.transport.texts();
    assert_eq!(texts.len(), 4);
    assert_eq!(texts[1], texts[3]);
    assert_ne!(texts[0], texts[2]);
    assert!(texts[2].contains("Players: 7/32"));
    assert!(texts[2].contains("Frame time: 33.33 ms"));
    assert_eq!(shape(&texts[0]), shape(&texts[2]));
}

/// Reply text with every digit blanked, so fresh numbers compare equal.
fn shape(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_ascii_digit() { '#' } else { c })
        .collect::<String>()
        .split('#')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("#")
}

#[tokio::test]
async fn test_empty_server_reports_no_players() {
    let mut status = MockStatus::new();
    status
        .expect_fetch_players()
        .times(1)
        .returning(|| Ok(PlayerList::default()));
    let h = harness(status, Locale::English);

    h.dispatcher.handle_event(&event("/players")).await;

    assert_eq!(h.transport.texts(), ["🕵️ No players online."]);
}

#[tokio::test]
async fn test_large_server_is_truncated() {
    let mut status = MockStatus::new();
    status.expect_fetch_players().returning(|| Ok(players(12)));
    let h = harness(status, Locale::English);

    h.dispatcher.handle_event(&event("/players")).await;

    let text = &h.transport.texts()[0];
    assert!(text.contains("*Pal10*"));
    assert!(!text.contains("*Pal11*"));
    assert!(text.ends_with("Level: 10... (showing at most 10)"));
}

#[tokio::test]
async fn test_fetch_error_still_passes_the_gate() {
    let mut status = MockStatus::new();
    status
        .expect_fetch_players()
        .returning(|| Err(PalbotError::status_api_with_status("unauthorized", 401)));
    let h = harness(status, Locale::English);

    let outcome = h.dispatcher.handle_event(&event("/players")).await;

    assert_eq!(outcome, Some(GateOutcome::Sent));
    assert_eq!(h.transport.texts(), ["❌ Could not fetch the player list."]);
}

#[tokio::test]
async fn test_global_throttle_spans_senders() {
    let h = harness(status_with_metrics(), Locale::English);

    let first = h.dispatcher.handle_event(&event("/metrics")).await;
    let other = h
        .dispatcher
        .handle_event(&event_from(&other_sender(), "/metrics"))
        .await;
    h.clock.advance(Duration::from_secs(1));
    let retried = h
        .dispatcher
        .handle_event(&event_from(&other_sender(), "/metrics"))
        .await;

    assert_eq!(first, Some(GateOutcome::Sent));
    assert_eq!(other, Some(GateOutcome::Throttled));
    assert_eq!(retried, Some(GateOutcome::Sent));
    assert_eq!(h.dispatcher.cooldowns().tracked_pairs(), 2);
}

#[tokio::test]
async fn test_commands_have_separate_cooldowns() {
    let mut status = status_with_metrics();
    status.expect_fetch_players().returning(|| Ok(players(1)));
    let h = harness(status, Locale::English);

    h.dispatcher.handle_event(&event("/metrics")).await;
    h.clock.advance(Duration::from_secs(1));
    let outcome = h.dispatcher.handle_event(&event("/players")).await;

    assert_eq!(outcome, Some(GateOutcome::Sent));
}

#[tokio::test]
async fn test_non_commands_never_query_the_server() {
    let mut status = MockStatus::new();
    status.expect_fetch_metrics().never();
    status.expect_fetch_players().never();
    let h = harness(status, Locale::English);

    for text in ["hello", "/metrics please", "/Players", ""] {
        assert_eq!(h.dispatcher.handle_event(&event(text)).await, None);
    }
    assert!(h.transport.texts().is_empty());
}

#[tokio::test]
async fn test_dutch_notice() {
    let h = harness(status_with_metrics(), Locale::Dutch);

    h.dispatcher.handle_event(&event("/metrics")).await;
    h.clock.advance(Duration::from_secs(1));
    h.dispatcher.handle_event(&event("/metrics")).await;

    assert_eq!(
        h.transport.texts()[1],
        "⏱️ Rustig aan! Je moet even wachten tot je dit commando weer kan gebruiken."
    );
}

#[tokio::test]
async fn test_simultaneous_requests_send_once() {
    let h = harness(status_with_metrics(), Locale::English);
    let events: Vec<_> = (0..5).map(|_| event("/metrics")).collect();

    let outcomes = join_all(events.iter().map(|e| h.dispatcher.handle_event(e))).await;

    let count = |wanted| outcomes.iter().filter(|o| **o == Some(wanted)).count();
    assert_eq!(count(GateOutcome::Sent), 1);
    assert!(count(GateOutcome::Noticed) <= 1);
    assert_eq!(
        count(GateOutcome::Sent)
            + count(GateOutcome::Noticed)
            + count(GateOutcome::Suppressed)
            + count(GateOutcome::Throttled),
        5
    );
    assert_eq!(h.transport.texts().len(), 1 + count(GateOutcome::Noticed));
}

#[tokio::test]
async fn test_simultaneous_requests_without_throttle_notice_once() {
    let settings = GateSettings {
        global_interval: Duration::ZERO,
        ..GateSettings::default()
    };
    let h = harness_with(status_with_metrics(), Locale::English, settings);
    let events: Vec<_> = (0..6).map(|_| event("/metrics")).collect();

    let outcomes = join_all(events.iter().map(|e| h.dispatcher.handle_event(e))).await;

    let count = |wanted| outcomes.iter().filter(|o| **o == Some(wanted)).count();
    assert_eq!(count(GateOutcome::Sent), 1);
    assert_eq!(count(GateOutcome::Noticed), 1);
    assert_eq!(count(GateOutcome::Suppressed), 4);
    assert_eq!(count(GateOutcome::Throttled), 0);

    let texts = h.transport.texts();
    assert_eq!(texts.len(), 2);
    assert!(texts.iter().any(|t| t.contains("Players: 2/32")));
    assert!(texts.iter().any(|t| t.starts_with("⏱️")));
}

#[tokio::test]
async fn test_send_failures_are_not_retried() {
    init_test_logging();
    let transport = Arc::new(BrokenTransport::default());
    let dispatcher = Dispatcher::with_clock(
        Arc::new(status_with_metrics()),
        transport.clone(),
        ReplyFormatter::new(Catalog::new(Locale::English).unwrap()),
        GateSettings::default(),
        ManualClock::new(),
    );

    let outcome = dispatcher.handle_event(&event("/metrics")).await;

    assert_eq!(outcome, Some(GateOutcome::Sent));
    assert_eq!(transport.attempts.load(Ordering::SeqCst), 1);
}
