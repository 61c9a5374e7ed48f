//! tastegraph-core - login capabilities and orchestration
//!
//! Fixture data, id generation, the share-link join capability, and the
//! controller that drives the login screen.

pub mod config;
pub mod fixtures;
pub mod id;
pub mod join;
pub mod login;

pub use tastegraph_common as common;
