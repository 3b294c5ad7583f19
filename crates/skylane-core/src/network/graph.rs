use std::collections::HashMap;

use super::types::{Location, LocationId, Route};
use crate::error::{Result, SkylaneError};

/// In-memory directed route network.
///
/// Sole owner of every location and route. Ids are caller-assigned and
/// unique per network. Locations keep registration order for listing, and
/// each location keeps its outgoing routes in insertion order, so traversal
/// enumeration is deterministic for a fixed mutation history.
#[derive(Debug, Default)]
pub struct Network {
    nodes: Vec<Node>,
    by_id: HashMap<LocationId, usize>,
}

#[derive(Debug)]
struct Node {
    location: Location,
    routes: Vec<Route>,
}

impl Network {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a location under a caller-assigned id
    pub fn add_location(&mut self, id: LocationId, name: impl Into<String>) -> Result<()> {
        if self.by_id.contains_key(&id) {
            return Err(SkylaneError::DuplicateLocation { id });
        }
        self.by_id.insert(id, self.nodes.len());
        self.nodes.push(Node {
            location: Location {
                id,
                name: name.into(),
            },
            routes: Vec::new(),
        });
        Ok(())
    }

    pub fn location(&self, id: LocationId) -> Option<&Location> {
        self.index_of(id).map(|i| &self.nodes[i].location)
    }

    pub fn contains(&self, id: LocationId) -> bool {
        self.by_id.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Add a directed route from `from` to `to`.
    ///
    /// The weight of an existing route is never updated through this call;
    /// re-adding an existing (from, to) pair is rejected instead.
    pub fn add_route(&mut self, from: LocationId, to: LocationId, weight: u32) -> Result<()> {
        let source = self
            .index_of(from)
            .ok_or(SkylaneError::UnknownLocation { id: from })?;
        if !self.contains(to) {
            return Err(SkylaneError::UnknownLocation { id: to });
        }
        if from == to {
            return Err(SkylaneError::SelfRoute { id: from });
        }

        let node = &mut self.nodes[source];
        if node.routes.iter().any(|r| r.to == to) {
            return Err(SkylaneError::DuplicateRoute { from, to });
        }
        node.routes.push(Route { to, weight });
        Ok(())
    }

    /// Remove a directed route, preserving the relative order of the rest
    pub fn remove_route(&mut self, from: LocationId, to: LocationId) -> Result<()> {
        let source = self
            .index_of(from)
            .ok_or(SkylaneError::UnknownLocation { id: from })?;
        let node = &mut self.nodes[source];
        match node.routes.iter().position(|r| r.to == to) {
            Some(position) => {
                node.routes.remove(position);
                Ok(())
            }
            None => Err(SkylaneError::RouteNotFound { from, to }),
        }
    }

    pub fn has_route(&self, from: LocationId, to: LocationId) -> bool {
        self.index_of(from)
            .is_some_and(|i| self.nodes[i].routes.iter().any(|r| r.to == to))
    }

    /// Outgoing routes of a location in insertion order
    pub fn routes(&self, id: LocationId) -> Option<&[Route]> {
        self.index_of(id).map(|i| self.nodes[i].routes.as_slice())
    }

    /// Locations in registration order
    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.nodes.iter().map(|n| &n.location)
    }

    pub(crate) fn index_of(&self, id: LocationId) -> Option<usize> {
        self.by_id.get(&id).copied()
    }

    pub(crate) fn location_at(&self, index: usize) -> &Location {
        &self.nodes[index].location
    }

    pub(crate) fn routes_at(&self, index: usize) -> &[Route] {
        &self.nodes[index].routes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn network_abc() -> Network {
        let mut network = Network::new();
        network.add_location(1, "A").unwrap();
        network.add_location(2, "B").unwrap();
        network.add_location(3, "C").unwrap();
        network
    }

    #[test]
    fn registers_locations_in_order() {
        let network = network_abc();
        let ids: Vec<_> = network.locations().map(|l| l.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(network.location(2).unwrap().name, "B");
    }

    #[test]
    fn rejects_duplicate_location_id() {
        let mut network = network_abc();
        let err = network.add_location(2, "Bravo").unwrap_err();
        assert!(matches!(err, SkylaneError::DuplicateLocation { id: 2 }));
        // The original registration is untouched
        assert_eq!(network.len(), 3);
        assert_eq!(network.location(2).unwrap().name, "B");
    }

    #[test]
    fn rejects_route_with_unknown_endpoint() {
        let mut network = network_abc();
        assert!(matches!(
            network.add_route(9, 1, 5).unwrap_err(),
            SkylaneError::UnknownLocation { id: 9 }
        ));
        assert!(matches!(
            network.add_route(1, 9, 5).unwrap_err(),
            SkylaneError::UnknownLocation { id: 9 }
        ));
    }

    #[test]
    fn rejects_self_route() {
        let mut network = network_abc();
        let err = network.add_route(1, 1, 5).unwrap_err();
        assert!(matches!(err, SkylaneError::SelfRoute { id: 1 }));
    }

    #[test]
    fn rejects_duplicate_route_without_updating_weight() {
        let mut network = network_abc();
        network.add_route(1, 2, 5).unwrap();
        let err = network.add_route(1, 2, 7).unwrap_err();
        assert!(matches!(err, SkylaneError::DuplicateRoute { from: 1, to: 2 }));

        let routes = network.routes(1).unwrap();
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].weight, 5);
    }

    #[test]
    fn routes_are_directed() {
        let mut network = network_abc();
        network.add_route(1, 2, 5).unwrap();
        assert!(network.has_route(1, 2));
        assert!(!network.has_route(2, 1));
    }

    #[test]
    fn remove_route_preserves_relative_order() {
        let mut network = network_abc();
        network.add_location(4, "D").unwrap();
        network.add_route(1, 2, 5).unwrap();
        network.add_route(1, 3, 6).unwrap();
        network.add_route(1, 4, 7).unwrap();

        network.remove_route(1, 3).unwrap();
        let destinations: Vec<_> = network.routes(1).unwrap().iter().map(|r| r.to).collect();
        assert_eq!(destinations, vec![2, 4]);
    }

    #[test]
    fn remove_missing_route_reports_not_found() {
        let mut network = network_abc();
        let err = network.remove_route(1, 3).unwrap_err();
        assert!(matches!(err, SkylaneError::RouteNotFound { from: 1, to: 3 }));
        assert!(matches!(
            network.remove_route(9, 1).unwrap_err(),
            SkylaneError::UnknownLocation { id: 9 }
        ));
    }

    #[test]
    fn add_then_remove_restores_pre_add_state() {
        let mut network = network_abc();
        network.add_route(1, 2, 5).unwrap();
        network.add_route(2, 3, 5).unwrap();

        network.add_route(1, 3, 20).unwrap();
        network.remove_route(1, 3).unwrap();

        assert!(!network.has_route(1, 3));
        let destinations: Vec<_> = network.routes(1).unwrap().iter().map(|r| r.to).collect();
        assert_eq!(destinations, vec![2]);
    }
}
