pub mod app;
pub mod app_context;
pub mod app_service;
pub mod login_screen;
pub mod session_page;

pub use app::*;
pub use app_context::AppContext;
