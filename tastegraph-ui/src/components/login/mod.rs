//! Login screen views

mod platform_buttons;
mod share_link_join;
mod view;

pub use platform_buttons::PlatformButtonsView;
pub use share_link_join::ShareLinkJoinView;
pub use view::LoginView;
