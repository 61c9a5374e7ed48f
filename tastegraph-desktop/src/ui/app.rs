use crate::ui::app_context::AppContext;
use crate::ui::app_service::{use_app, AppService};
use crate::ui::login_screen::LoginScreen;
use crate::ui::session_page::SessionPage;

use dioxus::desktop::{Config as DioxusConfig, WindowBuilder};
use dioxus::prelude::*;
use tastegraph_ui::stores::AppStateStoreExt;
use tracing::debug;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

pub fn make_config() -> DioxusConfig {
    DioxusConfig::default()
        .with_window(make_window())
        .with_background_color((0x00, 0x00, 0x00, 0xff))
}

fn make_window() -> WindowBuilder {
    WindowBuilder::new()
        .with_title("Music Taste Visualizer")
        .with_decorations(true)
        .with_inner_size(dioxus::desktop::LogicalSize::new(560, 860))
}

pub fn launch_app(context: AppContext) {
    LaunchBuilder::desktop()
        .with_cfg(make_config())
        .with_context_provider(move || Box::new(context.clone()))
        .launch(App);
}

#[component]
pub fn App() -> Element {
    debug!("Rendering app component");

    let context = use_context::<AppContext>();
    let app_service = use_hook(|| AppService::new(&context));
    use_context_provider(|| app_service.clone());

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Script { src: TAILWIND_CDN }
        MainContent {}
    }
}

/// Login screen until a session exists, then the session summary
#[component]
fn MainContent() -> Element {
    let app = use_app();
    let has_session = app.state.session().read().is_some();

    rsx! {
        div { class: "min-h-screen",
            if has_session {
                SessionPage {}
            } else {
                LoginScreen {}
            }
        }
    }
}
