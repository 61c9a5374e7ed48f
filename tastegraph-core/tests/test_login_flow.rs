//! Integration tests for the login screen controller.
//!
//! Tests:
//! - Platform login fires `on_login` synchronously with the full fixture set
//! - Blank share links never leave `Idle`
//! - Share-link join goes `Idle -> Joining -> Idle` around the 1500 ms delay
//! - Re-entry while joining is ignored
//! - Teardown mid-join suppresses the callback
//! - Dropping a pending join returns the form to `Idle`
//! - Joiner failures return to `Idle` without a callback

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tastegraph_core::common::{Artist, JoinPhase, MatchPercentage, Platform, User};
use tastegraph_core::config::Config;
use tastegraph_core::fixtures::FixtureSet;
use tastegraph_core::id::SequentialIdGenerator;
use tastegraph_core::join::{JoinError, JoinOutcome, MockShareJoiner, ShareJoiner};
use tastegraph_core::login::{JoinResolution, LoginController};

const JOIN_DELAY: Duration = Duration::from_millis(1500);

fn controller() -> LoginController {
    let ids = Arc::new(SequentialIdGenerator::new("user"));
    let fixtures = FixtureSet::builtin();
    let joiner = Arc::new(MockShareJoiner::from_config(
        &Config::default(),
        ids.clone(),
        fixtures.clone(),
    ));
    LoginController::new(ids, joiner, fixtures)
}

type Joined = Arc<Mutex<Vec<(User, MatchPercentage, JoinPhase)>>>;

/// Start a join on its own task, recording the callback arguments and the
/// form phase observed from inside the callback.
fn spawn_join(
    controller: &LoginController,
) -> (tokio::task::JoinHandle<JoinResolution>, Joined) {
    let joined: Joined = Arc::new(Mutex::new(Vec::new()));
    let recorder = joined.clone();
    let observer = controller.clone();
    let task_controller = controller.clone();
    let handle = tokio::spawn(async move {
        task_controller
            .join_via_share_link(move |user, pct| {
                let phase = observer.form().phase();
                recorder.lock().unwrap().push((user, pct, phase));
            })
            .await
    });
    (handle, joined)
}

#[test]
fn test_select_platform_builds_full_user_for_every_platform() {
    let controller = controller();

    for platform in Platform::ALL {
        let mut received = None;
        controller.select_platform(platform, |user| received = Some(user));

        let user = received.expect("on_login must fire before select_platform returns");
        assert_eq!(user.platform, platform);
        assert_eq!(user.name, "Music Lover");
        assert_eq!(user.top_artists.len(), 10);
        assert_eq!(user.top_artists, FixtureSet::builtin().all());
    }
}

#[test]
fn test_select_platform_uses_injected_ids() {
    let controller = controller();
    let mut ids = Vec::new();
    controller.select_platform(Platform::Spotify, |user| ids.push(user.id));
    controller.select_platform(Platform::Apple, |user| ids.push(user.id));
    assert_eq!(ids, vec!["user-1", "user-2"]);
}

#[test]
fn test_select_platform_uses_injected_fixtures() {
    let fixtures = Arc::new(
        FixtureSet::new(vec![Artist {
            id: "x".into(),
            name: "Solo".into(),
            genre: "Indie".into(),
            play_count: 3,
            image_url: "https://example.com/solo.jpg".into(),
            connections: vec![],
        }])
        .unwrap(),
    );
    let ids = Arc::new(SequentialIdGenerator::new("u"));
    let joiner = Arc::new(MockShareJoiner::from_config(
        &Config::default(),
        ids.clone(),
        fixtures.clone(),
    ));
    let controller = LoginController::new(ids, joiner, fixtures);

    let mut received = None;
    controller.select_platform(Platform::Youtube, |user| received = Some(user));
    let user = received.unwrap();
    assert_eq!(user.top_artists.len(), 1);
    assert_eq!(user.top_artists[0].name, "Solo");
}

#[tokio::test(start_paused = true)]
async fn test_whitespace_link_is_ignored() {
    let controller = controller();
    controller.set_share_link_text("  ");
    assert!(!controller.form().render_state().join_enabled);

    let mut fired = false;
    let resolution = controller
        .join_via_share_link(|_, _| fired = true)
        .await;

    assert_eq!(resolution, JoinResolution::Ignored);
    assert!(!fired);
    assert_eq!(controller.form().phase(), JoinPhase::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_empty_link_is_ignored() {
    let controller = controller();
    let mut fired = false;
    let resolution = controller
        .join_via_share_link(|_, _| fired = true)
        .await;
    assert_eq!(resolution, JoinResolution::Ignored);
    assert!(!fired);
}

#[tokio::test(start_paused = true)]
async fn test_join_transitions_around_delay() {
    let controller = controller();
    controller.set_share_link_text("https://share/link/abc");
    let mut rx = controller.subscribe();

    let (handle, joined) = spawn_join(&controller);

    rx.changed().await.unwrap();
    let render = rx.borrow_and_update().render_state();
    assert!(!render.join_enabled);
    assert_eq!(render.join_label, "Joining...");

    tokio::time::advance(JOIN_DELAY - Duration::from_millis(1)).await;
    assert!(joined.lock().unwrap().is_empty());
    assert_eq!(controller.form().phase(), JoinPhase::Joining);

    let resolution = handle.await.unwrap();
    let pct = MatchPercentage::new(86).unwrap();
    assert_eq!(resolution, JoinResolution::Joined(pct));

    let joined = joined.lock().unwrap();
    assert_eq!(joined.len(), 1);
    let (user, match_percentage, phase_at_callback) = &joined[0];
    assert_eq!(user.name, "Friend");
    assert_eq!(user.platform, Platform::Spotify);
    assert_eq!(user.top_artists.len(), 5);
    assert_eq!(user.top_artists, FixtureSet::builtin().first(5));
    assert_eq!(match_percentage.value(), 86);
    assert!(match_percentage.value() <= 100);
    assert_eq!(*phase_at_callback, JoinPhase::Joining);

    let render = controller.form().render_state();
    assert!(render.join_enabled);
    assert_eq!(render.join_label, "Join");
}

#[tokio::test(start_paused = true)]
async fn test_reentry_while_joining_is_ignored() {
    let controller = controller();
    controller.set_share_link_text("https://share/link/abc");
    let mut rx = controller.subscribe();

    let (handle, joined) = spawn_join(&controller);
    rx.changed().await.unwrap();

    let mut second_fired = false;
    let second = controller
        .join_via_share_link(|_, _| second_fired = true)
        .await;
    assert_eq!(second, JoinResolution::Ignored);
    assert!(!second_fired);

    assert!(matches!(handle.await.unwrap(), JoinResolution::Joined(_)));
    assert_eq!(joined.lock().unwrap().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_teardown_mid_join_suppresses_callback() {
    let controller = controller();
    controller.set_share_link_text("https://share/link/abc");
    let mut rx = controller.subscribe();

    let (handle, joined) = spawn_join(&controller);
    rx.changed().await.unwrap();

    tokio::time::advance(Duration::from_millis(500)).await;
    controller.teardown();

    assert_eq!(handle.await.unwrap(), JoinResolution::Cancelled);
    tokio::time::advance(JOIN_DELAY).await;
    assert!(joined.lock().unwrap().is_empty());
    assert_eq!(controller.form().phase(), JoinPhase::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_join_after_teardown_is_ignored() {
    let controller = controller();
    controller.set_share_link_text("https://share/link/abc");
    controller.teardown();

    let mut fired = false;
    let resolution = controller
        .join_via_share_link(|_, _| fired = true)
        .await;
    assert_eq!(resolution, JoinResolution::Ignored);
    assert!(!fired);
    assert_eq!(controller.form().phase(), JoinPhase::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_dropped_join_returns_to_idle() {
    let controller = controller();
    controller.set_share_link_text("https://share/link/abc");

    let mut fired = false;
    let timed_out = tokio::time::timeout(
        Duration::from_millis(100),
        controller.join_via_share_link(|_, _| fired = true),
    )
    .await;
    assert!(timed_out.is_err());
    assert!(!fired);

    let render = controller.form().render_state();
    assert_eq!(controller.form().phase(), JoinPhase::Idle);
    assert!(render.join_enabled);
    assert_eq!(render.join_label, "Join");

    let mut second_fired = false;
    let second = controller
        .join_via_share_link(|_, _| second_fired = true)
        .await;
    assert!(matches!(second, JoinResolution::Joined(_)));
    assert!(second_fired);
}

struct RejectingJoiner;

#[async_trait]
impl ShareJoiner for RejectingJoiner {
    async fn attempt_join(&self, link: &str) -> Result<JoinOutcome, JoinError> {
        Err(JoinError::Rejected(link.to_string()))
    }
}

#[tokio::test]
async fn test_failed_join_returns_to_idle_without_callback() {
    let controller = LoginController::new(
        Arc::new(SequentialIdGenerator::new("user")),
        Arc::new(RejectingJoiner),
        FixtureSet::builtin(),
    );
    controller.set_share_link_text("  bad-link ");

    let mut fired = false;
    let resolution = controller
        .join_via_share_link(|_, _| fired = true)
        .await;

    assert_eq!(
        resolution,
        JoinResolution::Failed(JoinError::Rejected("bad-link".into()))
    );
    assert!(!fired);
    assert_eq!(controller.form().phase(), JoinPhase::Idle);
}

#[tokio::test]
async fn test_zero_delay_joiner_resolves_immediately() {
    let ids = Arc::new(SequentialIdGenerator::new("friend"));
    let fixtures = FixtureSet::builtin();
    let joiner = Arc::new(MockShareJoiner::new(
        ids.clone(),
        fixtures.clone(),
        Duration::ZERO,
        MatchPercentage::new(40).unwrap(),
    ));
    let controller = LoginController::new(ids, joiner, fixtures);
    controller.set_share_link_text("link");

    let mut received = None;
    let resolution = controller
        .join_via_share_link(|user, pct| received = Some((user.id, pct.value())))
        .await;

    assert!(matches!(resolution, JoinResolution::Joined(_)));
    assert_eq!(received, Some(("friend-1".to_string(), 40)));
}
