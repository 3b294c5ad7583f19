use std::collections::VecDeque;

use crate::network::types::LocationId;
use crate::network::Network;

/// Whether `to` can be reached from `from` over zero or more routes.
///
/// Weight is ignored; any number of hops counts. `from == to` is reachable
/// even without a self-loop. An unregistered endpoint is a normal "no route"
/// outcome, not an error.
#[tracing::instrument(skip(network), fields(from = %from, to = %to))]
pub fn can_reach(network: &Network, from: LocationId, to: LocationId) -> bool {
    let (Some(source), Some(target)) = (network.index_of(from), network.index_of(to)) else {
        return false;
    };
    if source == target {
        return true;
    }

    let mut visited = vec![false; network.len()];
    let mut queue = VecDeque::new();
    visited[source] = true;
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        if current == target {
            return true;
        }
        for route in network.routes_at(current) {
            // Endpoints are validated on insert, so the lookup cannot miss.
            let Some(next) = network.index_of(route.to) else {
                continue;
            };
            if !visited[next] {
                visited[next] = true;
                queue.push_back(next);
            }
        }
    }

    false
}
