use crate::error::{Result, SkylaneError};
use crate::network::types::{LocationId, RoutePath};
use crate::network::Network;

const INFINITY: u64 = u64::MAX;

/// Minimum total-weight path from `from` to `to`, endpoints inclusive.
///
/// Dijkstra with a linear minimum-extraction scan. The networks in scope are
/// small, so the O(n^2) extraction holds up and keeps equal-distance
/// tie-breaking pinned to registration order. Returns `Unreachable` when no
/// path exists or either endpoint is unregistered.
#[tracing::instrument(skip(network), fields(from = %from, to = %to))]
pub fn shortest_path(network: &Network, from: LocationId, to: LocationId) -> Result<RoutePath> {
    let (Some(source), Some(target)) = (network.index_of(from), network.index_of(to)) else {
        return Err(SkylaneError::Unreachable { from, to });
    };

    let n = network.len();
    let mut dist = vec![INFINITY; n];
    let mut prev: Vec<Option<usize>> = vec![None; n];
    let mut settled = vec![false; n];
    dist[source] = 0;

    loop {
        // Unsettled node with the smallest tentative distance
        let mut current = None;
        for i in 0..n {
            if settled[i] || dist[i] == INFINITY {
                continue;
            }
            if current.is_none_or(|c: usize| dist[i] < dist[c]) {
                current = Some(i);
            }
        }
        let Some(current) = current else {
            break;
        };
        settled[current] = true;
        if current == target {
            // Settled distances are final, so stop early.
            break;
        }

        for route in network.routes_at(current) {
            let Some(next) = network.index_of(route.to) else {
                continue;
            };
            let candidate = dist[current] + u64::from(route.weight);
            if candidate < dist[next] {
                dist[next] = candidate;
                prev[next] = Some(current);
            }
        }
    }

    if dist[target] == INFINITY {
        return Err(SkylaneError::Unreachable { from, to });
    }

    // Walk predecessor links back from the target, then reverse
    let mut stops = Vec::new();
    let mut cursor = Some(target);
    while let Some(index) = cursor {
        stops.push(network.location_at(index).id);
        cursor = prev[index];
    }
    stops.reverse();

    Ok(RoutePath {
        from,
        to,
        total_weight: dist[target],
        stops,
    })
}
