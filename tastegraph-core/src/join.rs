//! Share-link join capability.
//!
//! Joining another user's taste session is modelled as an async call that
//! eventually yields the remote user and a match percentage. The mock
//! implementation waits a fixed delay and answers from fixture data; a real
//! implementation would resolve the link over the network.

use crate::config::Config;
use crate::fixtures::FixtureSet;
use crate::id::IdGenerator;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tastegraph_common::{MatchPercentage, Platform, User};
use thiserror::Error;
use tracing::debug;

pub const FRIEND_NAME: &str = "Friend";
pub const FRIEND_PROFILE_IMAGE: &str =
    "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400";
/// Number of fixture artists the joined friend shares
pub const FRIEND_ARTIST_COUNT: usize = 5;

/// Error type for join attempts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JoinError {
    #[error("share link rejected: {0}")]
    Rejected(String),
}

/// Result of a successful join
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinOutcome {
    pub user: User,
    pub match_percentage: MatchPercentage,
}

#[async_trait]
pub trait ShareJoiner: Send + Sync {
    /// Resolve a (trimmed, non-empty) share link into the user behind it.
    async fn attempt_join(&self, link: &str) -> Result<JoinOutcome, JoinError>;
}

/// Simulated join: sleeps `delay`, then returns a fixed friend profile
/// listening to the first five fixture artists.
pub struct MockShareJoiner {
    ids: Arc<dyn IdGenerator>,
    fixtures: Arc<FixtureSet>,
    delay: Duration,
    match_percentage: MatchPercentage,
}

impl MockShareJoiner {
    pub fn new(
        ids: Arc<dyn IdGenerator>,
        fixtures: Arc<FixtureSet>,
        delay: Duration,
        match_percentage: MatchPercentage,
    ) -> Self {
        Self {
            ids,
            fixtures,
            delay,
            match_percentage,
        }
    }

    pub fn from_config(
        config: &Config,
        ids: Arc<dyn IdGenerator>,
        fixtures: Arc<FixtureSet>,
    ) -> Self {
        Self::new(ids, fixtures, config.join_delay, config.match_percentage)
    }
}

#[async_trait]
impl ShareJoiner for MockShareJoiner {
    async fn attempt_join(&self, link: &str) -> Result<JoinOutcome, JoinError> {
        debug!("Simulating join for {link} ({:?})", self.delay);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let user = User {
            id: self.ids.new_id(),
            name: FRIEND_NAME.to_string(),
            platform: Platform::Spotify,
            profile_image: FRIEND_PROFILE_IMAGE.to_string(),
            top_artists: self.fixtures.first(FRIEND_ARTIST_COUNT).to_vec(),
        };

        Ok(JoinOutcome {
            user,
            match_percentage: self.match_percentage,
        })
    }
}
