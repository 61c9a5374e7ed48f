//! Post-login session summary - who is logged in and their top artists

use crate::components::icons::LogOutIcon;
use crate::components::{Button, ButtonSize, ButtonVariant};
use dioxus::prelude::*;
use tastegraph_common::{Artist, MatchPercentage, User};

/// Names of an artist's connections that appear in `artists`, in edge order.
/// Edges pointing outside the list are dropped.
fn connection_names(artist: &Artist, artists: &[Artist]) -> Vec<String> {
    artist
        .connections
        .iter()
        .filter_map(|id| artists.iter().find(|a| &a.id == id))
        .map(|a| a.name.clone())
        .collect()
}

#[component]
pub fn SessionView(
    user: User,
    /// Set when the session came from a share link
    match_percentage: Option<MatchPercentage>,
    on_logout: EventHandler<()>,
) -> Element {
    let rows: Vec<(Artist, String)> = user
        .top_artists
        .iter()
        .map(|artist| {
            let connected = connection_names(artist, &user.top_artists).join(", ");
            (artist.clone(), connected)
        })
        .collect();
    let platform_label = user.platform.label();

    rsx! {
        div { class: "min-h-screen bg-black text-white",
            div { class: "container mx-auto p-6 max-w-3xl",
                div { class: "flex items-center gap-6 mb-8",
                    img {
                        class: "w-20 h-20 rounded-full object-cover",
                        src: "{user.profile_image}",
                        alt: "{user.name}",
                    }
                    div { class: "flex-1",
                        h1 { class: "text-3xl font-bold", "{user.name}" }
                        p { class: "text-gray-400", "Connected with {platform_label}" }
                        if let Some(pct) = match_percentage {
                            p { class: "text-green-400 font-semibold mt-1", "{pct} taste match" }
                        }
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        size: ButtonSize::Small,
                        onclick: move |_| on_logout.call(()),
                        LogOutIcon {}
                        "Log out"
                    }
                }

                h2 { class: "text-xl font-bold mb-4", "Top artists" }
                ul { class: "space-y-3",
                    for (artist, connected) in rows {
                        li {
                            key: "{artist.id}",
                            class: "flex items-center gap-4 p-3 rounded-lg bg-gray-900",
                            img {
                                class: "w-12 h-12 rounded-md object-cover",
                                src: "{artist.image_url}",
                                alt: "{artist.name}",
                            }
                            div { class: "flex-1",
                                p { class: "font-semibold", "{artist.name}" }
                                p { class: "text-sm text-gray-400", "{artist.genre} · {artist.play_count} plays" }
                                if !connected.is_empty() {
                                    p { class: "text-xs text-gray-500", "Connected to {connected}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artist(id: &str, connections: &[&str]) -> Artist {
        Artist {
            id: id.to_string(),
            name: format!("Artist {id}"),
            genre: "K-Pop".to_string(),
            play_count: 1,
            image_url: "https://example.com/a.jpg".to_string(),
            connections: connections.iter().map(|c| c.to_string()).collect(),
        }
    }

    #[test]
    fn test_connection_names_skip_artists_outside_the_list() {
        let artists = vec![artist("1", &["2", "9"]), artist("2", &["1"])];
        assert_eq!(connection_names(&artists[0], &artists), vec!["Artist 2"]);
        assert_eq!(connection_names(&artists[1], &artists), vec!["Artist 1"]);
    }
}
