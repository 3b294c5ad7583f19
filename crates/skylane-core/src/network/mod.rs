//! Directed, weighted route network and its traversal engines.

pub mod algos;
mod graph;
mod types;

pub use algos::{alternate_route, can_reach, shortest_path};
pub use graph::Network;
pub use types::{Location, LocationId, Route, RoutePath};
