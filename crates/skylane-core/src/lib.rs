//! Skylane Core Library
//!
//! Graph engine for the skylane route network CLI: the location registry,
//! directed weighted routes, and the reachability, shortest-path, and
//! alternate-route engines.

pub mod error;
pub mod format;
pub mod logging;
pub mod network;
