use serde::Serialize;

/// Caller-assigned location identifier
pub type LocationId = u32;

/// A named vertex in the route network
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
}

/// A directed, weighted connection stored on its source location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Route {
    pub to: LocationId,
    pub weight: u32,
}

/// A computed path through the network, endpoints inclusive.
///
/// `total_weight` accumulates in u64 so summing u32 route weights over a
/// simple path cannot overflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutePath {
    pub from: LocationId,
    pub to: LocationId,
    pub total_weight: u64,
    pub stops: Vec<LocationId>,
}
