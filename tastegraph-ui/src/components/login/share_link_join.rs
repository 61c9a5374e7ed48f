//! Share-link input and join trigger

use crate::components::icons::LoaderIcon;
use crate::components::{Button, ButtonSize, ButtonVariant, TextInput};
use dioxus::prelude::*;
use tastegraph_common::{LoginRenderState, JOINING_LABEL};

/// Text field plus "Join" trigger.
///
/// The field stays editable while joining. The trigger's enabled state and
/// label come from `render` so this view holds no join logic of its own.
#[component]
pub fn ShareLinkJoinView(
    share_link: String,
    render: LoginRenderState,
    on_share_link_change: EventHandler<String>,
    on_join: EventHandler<()>,
) -> Element {
    let joining = render.join_label == JOINING_LABEL;

    rsx! {
        div { class: "border-t border-gray-700 pt-6",
            h3 { class: "text-sm font-medium text-gray-300 mb-4", "Join a friend's taste sharing" }
            div { class: "flex gap-3",
                div { class: "flex-1",
                    TextInput {
                        value: share_link,
                        on_input: move |v| on_share_link_change.call(v),
                        placeholder: "Paste share link here...",
                        disabled: !render.share_input_enabled,
                        id: Some("share-link-input".to_string()),
                    }
                }
                Button {
                    variant: ButtonVariant::Primary,
                    size: ButtonSize::Medium,
                    id: Some("share-link-join".to_string()),
                    disabled: !render.join_enabled,
                    onclick: move |_| on_join.call(()),
                    if joining {
                        LoaderIcon {}
                    }
                    "{render.join_label}"
                }
            }
        }
    }
}
