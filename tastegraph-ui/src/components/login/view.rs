//! Full login page

use super::{PlatformButtonsView, ShareLinkJoinView};
use crate::components::icons::HeadphonesIcon;
use dioxus::prelude::*;
use tastegraph_common::{LoginRenderState, Platform};

/// Pure view component for the login screen.
///
/// The caller owns the form state and decides what a platform click or a
/// join click does; this component only renders and reports.
#[component]
pub fn LoginView(
    /// Current share-link text
    share_link: String,
    /// Enabled flags and join label derived from the form
    render: LoginRenderState,
    on_platform_select: EventHandler<Platform>,
    on_share_link_change: EventHandler<String>,
    on_join: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "min-h-screen flex items-center justify-center bg-black relative overflow-hidden",
            div { class: "absolute inset-0 bg-gradient-to-r from-black/70 via-black/40 to-black/70" }
            div { class: "absolute inset-0 bg-gradient-to-b from-black/60 via-transparent to-black/60" }

            div { class: "max-w-md w-full mx-4 relative z-10",
                div { class: "text-center mb-8",
                    div { class: "flex justify-center mb-6",
                        div { class: "w-20 h-20 bg-green-500 rounded-full flex items-center justify-center",
                            HeadphonesIcon { class: "w-10 h-10 text-black" }
                        }
                    }
                    h1 { class: "text-4xl font-bold mb-3 text-white", "Music Taste Visualizer" }
                    p { class: "text-gray-400 text-lg",
                        "Discover your music taste graph and blend playlists with friends"
                    }
                }

                div { class: "bg-gray-900/90 rounded-lg p-8 border border-gray-800/50 shadow-2xl",
                    h2 { class: "text-xl font-bold mb-6 text-white", "Connect your music platform" }

                    PlatformButtonsView {
                        disabled: !render.platform_buttons_enabled,
                        on_select: move |p| on_platform_select.call(p),
                    }

                    ShareLinkJoinView {
                        share_link,
                        render,
                        on_share_link_change: move |v| on_share_link_change.call(v),
                        on_join: move |_| on_join.call(()),
                    }
                }

                p { class: "text-xs text-gray-500 text-center mt-6",
                    "This is a demo app with mock data. No real authentication is performed."
                }
            }
        }
    }
}
