//! Session state, configuration and the collaborators the dashboard depends on.

pub mod config;
pub mod error;
pub mod extract;
pub mod format;
pub mod session;
pub mod storage;
