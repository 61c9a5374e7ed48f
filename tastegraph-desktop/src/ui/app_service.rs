//! AppService owns the Store<AppState> and the hand-off from the login
//! screen into a session.
//!
//! UI components access AppService via `use_app()`.

use crate::ui::app_context::AppContext;
use dioxus::prelude::*;
use tastegraph_core::common::User;
use tastegraph_core::config::Config;
use tastegraph_ui::stores::{ActiveSession, AppState, AppStateStoreExt, SessionKind};
use tracing::info;

/// Created inside the Dioxus component tree because Store<AppState> is not Send-safe.
#[derive(Clone)]
pub struct AppService {
    /// Reactive application state
    pub state: Store<AppState>,
    /// Application configuration
    pub config: Config,
}

impl AppService {
    pub fn new(context: &AppContext) -> Self {
        Self {
            state: Store::new(AppState::default()),
            config: context.config.clone(),
        }
    }

    /// Take ownership of a user handed over by the login screen
    pub fn begin_session(&self, user: User, kind: SessionKind) {
        info!("Session started for {} ({:?})", user.id, kind);
        self.state.session().set(Some(ActiveSession { user, kind }));
    }

    pub fn end_session(&self) {
        info!("Session ended");
        self.state.session().set(None);
    }
}

pub fn use_app() -> AppService {
    use_context::<AppService>()
}
