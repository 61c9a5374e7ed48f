//! Login screen controller.
//!
//! Owns the login form state and the injected capabilities, and hands a
//! `User` to the host through one of two callbacks:
//!
//! - `select_platform` builds a user synchronously and calls `on_login`
//!   before returning.
//! - `join_via_share_link` enters `Joining`, awaits the share joiner, calls
//!   `on_join_share`, then returns to `Idle`.
//!
//! Form state lives in a watch channel so views can mirror it. After
//! `teardown` a pending join resolves to `Cancelled` and its callback is
//! never invoked.

use crate::config::Config;
use crate::fixtures::FixtureSet;
use crate::id::{IdGenerator, RandomIdGenerator};
use crate::join::{JoinError, JoinOutcome, MockShareJoiner, ShareJoiner};
use std::sync::Arc;
use tastegraph_common::{LoginForm, MatchPercentage, Platform, User};
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

pub const LOGIN_USER_NAME: &str = "Music Lover";
pub const LOGIN_PROFILE_IMAGE: &str =
    "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=400";

/// How a call to `join_via_share_link` ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinResolution {
    /// Blank link, a join already in flight, or the controller was torn down.
    /// Nothing changed.
    Ignored,
    /// `on_join_share` was invoked with this percentage
    Joined(MatchPercentage),
    /// Torn down while waiting; the callback was suppressed
    Cancelled,
    /// The joiner failed; no callback was invoked
    Failed(JoinError),
}

struct Inner {
    ids: Arc<dyn IdGenerator>,
    joiner: Arc<dyn ShareJoiner>,
    fixtures: Arc<FixtureSet>,
    form: watch::Sender<LoginForm>,
    shutdown: CancellationToken,
}

/// Returns the form to `Idle` when dropped, including when the join future
/// itself is dropped mid-flight.
struct JoiningGuard<'a>(&'a watch::Sender<LoginForm>);

impl Drop for JoiningGuard<'_> {
    fn drop(&mut self) {
        self.0.send_modify(|form| form.finish_join());
    }
}

/// Cheap to clone; all clones share the same form and shutdown token.
#[derive(Clone)]
pub struct LoginController {
    inner: Arc<Inner>,
}

impl LoginController {
    pub fn new(
        ids: Arc<dyn IdGenerator>,
        joiner: Arc<dyn ShareJoiner>,
        fixtures: Arc<FixtureSet>,
    ) -> Self {
        let (form, _) = watch::channel(LoginForm::new());
        Self {
            inner: Arc::new(Inner {
                ids,
                joiner,
                fixtures,
                form,
                shutdown: CancellationToken::new(),
            }),
        }
    }

    /// Production wiring: random ids, built-in fixtures, mock joiner with
    /// the configured delay and match percentage.
    pub fn from_config(config: &Config) -> Self {
        let ids: Arc<dyn IdGenerator> = Arc::new(RandomIdGenerator);
        let fixtures = FixtureSet::builtin();
        let joiner = Arc::new(MockShareJoiner::from_config(
            config,
            ids.clone(),
            fixtures.clone(),
        ));
        Self::new(ids, joiner, fixtures)
    }

    /// Snapshot of the current form state
    pub fn form(&self) -> LoginForm {
        self.inner.form.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<LoginForm> {
        self.inner.form.subscribe()
    }

    pub fn set_share_link_text(&self, text: impl Into<String>) {
        let text = text.into();
        self.inner.form.send_if_modified(|form| {
            if form.share_link_text() == text {
                return false;
            }
            form.set_share_link_text(text);
            true
        });
    }

    /// Log in with a platform. `on_login` runs exactly once before this
    /// returns.
    pub fn select_platform<F>(&self, platform: Platform, on_login: F)
    where
        F: FnOnce(User),
    {
        let user = User {
            id: self.inner.ids.new_id(),
            name: LOGIN_USER_NAME.to_string(),
            platform,
            profile_image: LOGIN_PROFILE_IMAGE.to_string(),
            top_artists: self.inner.fixtures.all().to_vec(),
        };
        info!("Logged in via {platform} as {}", user.id);
        on_login(user);
    }

    /// Join another user's session through the current share link.
    ///
    /// `on_join_share` runs at most once, and only when the join completes
    /// before teardown. The form is back to `Idle` whenever this returns
    /// anything other than `Ignored` (which leaves the form untouched), and
    /// also when the returned future is dropped before completing.
    pub async fn join_via_share_link<F>(&self, on_join_share: F) -> JoinResolution
    where
        F: FnOnce(User, MatchPercentage),
    {
        if self.is_torn_down() {
            debug!("Join requested after teardown, ignoring");
            return JoinResolution::Ignored;
        }

        let mut link = None;
        self.inner.form.send_if_modified(|form| {
            link = form.begin_join();
            link.is_some()
        });
        let Some(link) = link else {
            debug!("Join guard rejected request");
            return JoinResolution::Ignored;
        };
        let _joining = JoiningGuard(&self.inner.form);

        let attempt = tokio::select! {
            biased;
            _ = self.inner.shutdown.cancelled() => None,
            result = self.inner.joiner.attempt_join(&link) => Some(result),
        };

        match attempt {
            None => {
                info!("Join cancelled by teardown");
                JoinResolution::Cancelled
            }
            Some(Ok(JoinOutcome {
                user,
                match_percentage,
            })) => {
                info!("Joined shared session of {} ({match_percentage})", user.id);
                on_join_share(user, match_percentage);
                JoinResolution::Joined(match_percentage)
            }
            Some(Err(e)) => {
                warn!("Join failed: {e}");
                JoinResolution::Failed(e)
            }
        }
    }

    /// Stop delivering results. Any join still waiting resolves to
    /// `Cancelled` without invoking its callback.
    pub fn teardown(&self) {
        self.inner.shutdown.cancel();
    }

    pub fn is_torn_down(&self) -> bool {
        self.inner.shutdown.is_cancelled()
    }
}
