//! tastegraph-ui - UI types and components for tastegraph
//!
//! Contains stores and pure view components. Views receive state through
//! props and report user actions through callbacks; they never perform the
//! login or join themselves.

pub mod components;
pub mod stores;

pub use components::*;
