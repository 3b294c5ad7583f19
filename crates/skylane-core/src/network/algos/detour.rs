use crate::error::{Result, SkylaneError};
use crate::network::types::{LocationId, RoutePath};
use crate::network::Network;

/// Minimum-weight path from `from` to `to` that differs from `reference` in
/// length or in at least one position.
///
/// Exhaustive depth-first enumeration of simple paths. The visited buffer is
/// path-local and unwound on backtrack, so a node excluded for one branch
/// becomes eligible again for its siblings. Exponential in the worst case;
/// no simple path outlives node-count-many hops, which bounds the recursion
/// depth. On equal candidate weights the first path found in enumeration
/// order (route insertion order) wins.
///
/// Returns `Unreachable` when no complete path reaches `to` at all, and
/// `NoAlternateRoute` when every complete path equals the reference.
#[tracing::instrument(skip(network, reference), fields(from = %from, to = %to))]
pub fn alternate_route(
    network: &Network,
    from: LocationId,
    to: LocationId,
    reference: &[LocationId],
) -> Result<RoutePath> {
    let (Some(source), Some(target)) = (network.index_of(from), network.index_of(to)) else {
        return Err(SkylaneError::Unreachable { from, to });
    };

    let mut search = DetourSearch {
        network,
        target,
        reference,
        visited: vec![false; network.len()],
        path: vec![from],
        reached: false,
        best: None,
    };
    search.visited[source] = true;
    search.explore(source, 0);

    match search.best {
        Some((total_weight, stops)) => Ok(RoutePath {
            from,
            to,
            total_weight,
            stops,
        }),
        None if search.reached => Err(SkylaneError::NoAlternateRoute { from, to }),
        None => Err(SkylaneError::Unreachable { from, to }),
    }
}

struct DetourSearch<'a> {
    network: &'a Network,
    target: usize,
    reference: &'a [LocationId],
    visited: Vec<bool>,
    path: Vec<LocationId>,
    reached: bool,
    best: Option<(u64, Vec<LocationId>)>,
}

impl DetourSearch<'_> {
    fn explore(&mut self, current: usize, weight: u64) {
        if current == self.target {
            self.reached = true;
            let differs = self.path.as_slice() != self.reference;
            // Strict comparison: the first candidate at a given weight wins
            if differs && self.best.as_ref().is_none_or(|(best, _)| weight < *best) {
                self.best = Some((weight, self.path.clone()));
            }
            return;
        }

        let network = self.network;
        for route in network.routes_at(current) {
            let Some(next) = network.index_of(route.to) else {
                continue;
            };
            if self.visited[next] {
                continue;
            }
            self.visited[next] = true;
            self.path.push(route.to);
            self.explore(next, weight + u64::from(route.weight));
            self.path.pop();
            self.visited[next] = false;
        }
    }
}
