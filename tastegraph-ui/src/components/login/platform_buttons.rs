//! "Continue with ..." buttons, one per platform

use crate::components::icons::{MusicIcon, PlayCircleIcon};
use crate::components::{Button, ButtonSize, ButtonVariant};
use dioxus::prelude::*;
use tastegraph_common::Platform;

fn variant_for(platform: Platform) -> ButtonVariant {
    match platform {
        Platform::Spotify => ButtonVariant::Primary,
        Platform::Apple => ButtonVariant::Secondary,
        Platform::Youtube => ButtonVariant::Danger,
    }
}

/// The login form keeps these enabled even while a share-link join is in
/// flight.
#[component]
pub fn PlatformButtonsView(
    #[props(default)] disabled: bool,
    on_select: EventHandler<Platform>,
) -> Element {
    let buttons = Platform::ALL.map(|platform| (platform, platform.label()));

    rsx! {
        div { class: "space-y-4 mb-8",
            for (platform, label) in buttons {
                Button {
                    key: "{platform}",
                    variant: variant_for(platform),
                    size: ButtonSize::Large,
                    id: Some(format!("login-{platform}")),
                    disabled,
                    onclick: move |_| on_select.call(platform),
                    if platform == Platform::Spotify {
                        MusicIcon { class: "w-5 h-5" }
                    } else {
                        PlayCircleIcon { class: "w-5 h-5" }
                    }
                    "Continue with {label}"
                }
            }
        }
    }
}
