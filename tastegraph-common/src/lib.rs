mod login_form;
mod model;

pub use login_form::{JoinPhase, LoginForm, LoginRenderState, JOINING_LABEL, JOIN_LABEL};
pub use model::{
    Artist, MatchPercentage, MatchPercentageOutOfRange, ParsePlatformError, Platform, User,
};
