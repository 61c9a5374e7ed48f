//! Shared UI components

pub mod button;
pub mod icons;
pub mod login;
pub mod session;
pub mod text_input;

pub use button::{Button, ButtonSize, ButtonVariant, ChromelessButton};
pub use icons::{HeadphonesIcon, LoaderIcon, LogOutIcon, MusicIcon, PlayCircleIcon};
pub use login::{LoginView, PlatformButtonsView, ShareLinkJoinView};
pub use session::SessionView;
pub use text_input::TextInput;
