/// Trigger label while idle
pub const JOIN_LABEL: &str = "Join";
/// Trigger label while a join is in flight
pub const JOINING_LABEL: &str = "Joining...";

/// Where the share-link join flow currently is.
///
/// There is no "joined" state: once the result is handed to the host the
/// form goes straight back to `Idle`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JoinPhase {
    #[default]
    Idle,
    Joining,
}

/// What the login screen should render for a given form state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoginRenderState {
    pub platform_buttons_enabled: bool,
    pub share_input_enabled: bool,
    pub join_enabled: bool,
    pub join_label: &'static str,
}

/// Pure state of the login screen: the share-link text field and the join
/// phase. Holds the join guard but performs no I/O.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    share_link_text: String,
    phase: JoinPhase,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn share_link_text(&self) -> &str {
        &self.share_link_text
    }

    /// The text field stays editable while a join is in flight.
    pub fn set_share_link_text(&mut self, text: impl Into<String>) {
        self.share_link_text = text.into();
    }

    pub fn phase(&self) -> JoinPhase {
        self.phase
    }

    pub fn is_joining(&self) -> bool {
        self.phase == JoinPhase::Joining
    }

    pub fn can_join(&self) -> bool {
        !self.share_link_text.trim().is_empty() && !self.is_joining()
    }

    pub fn join_label(&self) -> &'static str {
        if self.is_joining() {
            JOINING_LABEL
        } else {
            JOIN_LABEL
        }
    }

    /// Enter `Joining` and return the trimmed link to join.
    ///
    /// Returns `None` without touching state when the field is blank or a
    /// join is already running. Callers must enforce this guard even if the
    /// trigger is rendered disabled.
    pub fn begin_join(&mut self) -> Option<String> {
        if !self.can_join() {
            return None;
        }
        self.phase = JoinPhase::Joining;
        Some(self.share_link_text.trim().to_string())
    }

    /// Return to `Idle` after the result has been handed off.
    pub fn finish_join(&mut self) {
        self.phase = JoinPhase::Idle;
    }

    pub fn render_state(&self) -> LoginRenderState {
        LoginRenderState {
            platform_buttons_enabled: true,
            share_input_enabled: true,
            join_enabled: self.can_join(),
            join_label: self.join_label(),
        }
    }
}
