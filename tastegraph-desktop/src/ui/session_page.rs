//! Session page - shows whoever the login screen handed over

use crate::ui::app_service::use_app;
use dioxus::prelude::*;
use tastegraph_ui::stores::AppStateStoreExt;
use tastegraph_ui::SessionView;

#[component]
pub fn SessionPage() -> Element {
    let app = use_app();
    let session = app.state.session().read().clone();

    let Some(session) = session else {
        return rsx! {};
    };
    let match_percentage = session.match_percentage();

    rsx! {
        SessionView {
            user: session.user,
            match_percentage,
            on_logout: move |_| app.end_session(),
        }
    }
}
