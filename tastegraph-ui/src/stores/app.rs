//! Top-level application state store

use dioxus::prelude::*;
use tastegraph_common::{MatchPercentage, User};

/// How the active session was established
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SessionKind {
    /// Logged in through a platform button
    Own,
    /// Joined a friend through a share link
    Shared { match_percentage: MatchPercentage },
}

#[derive(Clone, Debug, PartialEq)]
pub struct ActiveSession {
    pub user: User,
    pub kind: SessionKind,
}

impl ActiveSession {
    pub fn match_percentage(&self) -> Option<MatchPercentage> {
        match self.kind {
            SessionKind::Own => None,
            SessionKind::Shared { match_percentage } => Some(match_percentage),
        }
    }
}

/// Top-level application state
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct AppState {
    /// `None` while the login screen is shown
    pub session: Option<ActiveSession>,
}
