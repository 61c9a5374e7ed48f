//! Login screen wrapper - owns the LoginController, delegates UI to LoginView

use crate::ui::app_service::use_app;
use dioxus::prelude::*;
use tastegraph_core::common::Platform;
use tastegraph_core::login::{JoinResolution, LoginController};
use tastegraph_ui::stores::SessionKind;
use tastegraph_ui::LoginView;
use tracing::debug;

/// Login screen.
///
/// A fresh controller is created per mount and torn down on unmount, so a
/// join still waiting when the screen goes away never reaches the app.
#[component]
pub fn LoginScreen() -> Element {
    let app = use_app();
    let controller = use_hook(|| LoginController::from_config(&app.config));
    let mut form = use_signal(|| controller.form());

    // Mirror controller state into the signal
    use_future({
        let controller = controller.clone();
        move || {
            let controller = controller.clone();
            async move {
                let mut rx = controller.subscribe();
                while rx.changed().await.is_ok() {
                    let next = rx.borrow_and_update().clone();
                    form.set(next);
                }
            }
        }
    });

    use_drop({
        let controller = controller.clone();
        move || controller.teardown()
    });

    let on_platform_select = {
        let controller = controller.clone();
        let app = app.clone();
        move |platform: Platform| {
            controller.select_platform(platform, |user| {
                app.begin_session(user, SessionKind::Own);
            });
        }
    };

    let on_share_link_change = {
        let controller = controller.clone();
        move |text: String| controller.set_share_link_text(text)
    };

    let on_join = {
        let controller = controller.clone();
        let app = app.clone();
        move |_| {
            let controller = controller.clone();
            let app = app.clone();
            spawn(async move {
                let resolution = controller
                    .join_via_share_link(|user, match_percentage| {
                        app.begin_session(user, SessionKind::Shared { match_percentage });
                    })
                    .await;
                if resolution == JoinResolution::Ignored {
                    debug!("Join click ignored");
                }
            });
        }
    };

    let current = form.read().clone();

    rsx! {
        LoginView {
            share_link: current.share_link_text().to_string(),
            render: current.render_state(),
            on_platform_select,
            on_share_link_change,
            on_join,
        }
    }
}
