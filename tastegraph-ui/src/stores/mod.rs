//! Store types for UI state management
//!
//! The login screen keeps its own form state; these stores hold what the
//! host application owns once a login or join has been handed off.

pub mod app;

pub use app::*;
