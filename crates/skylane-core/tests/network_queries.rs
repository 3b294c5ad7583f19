//! Integration tests for the network query engines
//!
//! Cross-checks the Dijkstra and alternate-route engines against a
//! brute-force enumeration of simple paths on small generated networks.

use skylane_core::error::SkylaneError;
use skylane_core::network::{alternate_route, can_reach, shortest_path, LocationId, Network};

/// Deterministic xorshift generator so the generated networks are stable
/// across runs without pulling in an RNG dependency.
struct XorShift(u64);

impl XorShift {
    fn next(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
}

/// Enumerate every simple path from `from` to `to` and return
/// (total weight, stops) for each.
fn all_simple_paths(
    network: &Network,
    from: LocationId,
    to: LocationId,
) -> Vec<(u64, Vec<LocationId>)> {
    fn explore(
        network: &Network,
        current: LocationId,
        to: LocationId,
        weight: u64,
        path: &mut Vec<LocationId>,
        found: &mut Vec<(u64, Vec<LocationId>)>,
    ) {
        if current == to {
            found.push((weight, path.clone()));
            return;
        }
        let Some(routes) = network.routes(current) else {
            return;
        };
        for route in routes {
            if path.contains(&route.to) {
                continue;
            }
            path.push(route.to);
            explore(
                network,
                route.to,
                to,
                weight + u64::from(route.weight),
                path,
                found,
            );
            path.pop();
        }
    }

    let mut found = Vec::new();
    if network.contains(from) && network.contains(to) {
        let mut path = vec![from];
        explore(network, from, to, 0, &mut path, &mut found);
    }
    found
}

fn generated_network(seed: u64, nodes: u32, edge_chance_pct: u64) -> Network {
    let mut rng = XorShift(seed);
    let mut network = Network::new();
    for id in 1..=nodes {
        network.add_location(id, format!("L{id}")).unwrap();
    }
    for from in 1..=nodes {
        for to in 1..=nodes {
            if from == to {
                continue;
            }
            if rng.next() % 100 < edge_chance_pct {
                let weight = (rng.next() % 50) as u32;
                network.add_route(from, to, weight).unwrap();
            }
        }
    }
    network
}

#[test]
fn spec_scenario_shortest_and_alternate() {
    let mut network = Network::new();
    network.add_location(1, "A").unwrap();
    network.add_location(2, "B").unwrap();
    network.add_location(3, "C").unwrap();
    network.add_route(1, 2, 5).unwrap();
    network.add_route(2, 3, 5).unwrap();
    network.add_route(1, 3, 20).unwrap();

    let shortest = shortest_path(&network, 1, 3).unwrap();
    assert_eq!(shortest.total_weight, 10);
    assert_eq!(shortest.stops, vec![1, 2, 3]);

    let detour = alternate_route(&network, 1, 3, &shortest.stops).unwrap();
    assert_eq!(detour.total_weight, 20);
    assert_eq!(detour.stops, vec![1, 3]);
}

#[test]
fn disconnected_location_is_unreachable() {
    let mut network = Network::new();
    network.add_location(1, "A").unwrap();
    network.add_location(4, "D").unwrap();
    network.add_location(2, "B").unwrap();
    network.add_route(1, 2, 5).unwrap();

    assert!(!can_reach(&network, 1, 4));
    assert!(matches!(
        shortest_path(&network, 1, 4).unwrap_err(),
        SkylaneError::Unreachable { from: 1, to: 4 }
    ));
}

#[test]
fn removing_the_only_edges_leaves_a_location_reachable_only_from_itself() {
    let mut network = Network::new();
    network.add_location(1, "A").unwrap();
    network.add_location(2, "B").unwrap();
    network.add_location(3, "C").unwrap();
    network.add_route(1, 2, 5).unwrap();
    network.add_route(2, 3, 5).unwrap();

    network.remove_route(2, 3).unwrap();

    assert!(can_reach(&network, 3, 3));
    for other in [1, 2] {
        assert!(!can_reach(&network, other, 3));
        assert!(!can_reach(&network, 3, other));
    }
}

#[test]
fn dijkstra_matches_brute_force_on_generated_networks() {
    for seed in 1..=20u64 {
        let nodes = 3 + (seed % 5) as u32; // 3..=7
        let network = generated_network(seed.wrapping_mul(0x9e37_79b9), nodes, 35);

        for from in 1..=nodes {
            for to in 1..=nodes {
                let paths = all_simple_paths(&network, from, to);
                let best = paths.iter().map(|(w, _)| *w).min();

                match shortest_path(&network, from, to) {
                    Ok(path) => {
                        assert_eq!(
                            Some(path.total_weight),
                            best,
                            "seed {seed}: wrong weight for {from}->{to}"
                        );
                        assert_eq!(path.stops.first(), Some(&from));
                        assert_eq!(path.stops.last(), Some(&to));
                        // The reported stops must actually cost the reported weight
                        let mut walked = 0u64;
                        for pair in path.stops.windows(2) {
                            let route = network
                                .routes(pair[0])
                                .unwrap()
                                .iter()
                                .find(|r| r.to == pair[1])
                                .expect("path uses a route that is not in the network");
                            walked += u64::from(route.weight);
                        }
                        assert_eq!(walked, path.total_weight);
                    }
                    Err(SkylaneError::Unreachable { .. }) => {
                        assert!(best.is_none(), "seed {seed}: missed a path {from}->{to}");
                    }
                    Err(other) => panic!("unexpected error: {other}"),
                }
            }
        }
    }
}

#[test]
fn alternate_route_matches_brute_force_on_generated_networks() {
    for seed in 1..=12u64 {
        let nodes = 3 + (seed % 4) as u32; // 3..=6
        let network = generated_network(seed.wrapping_mul(0xdead_beef), nodes, 40);

        for from in 1..=nodes {
            for to in 1..=nodes {
                let Ok(reference) = shortest_path(&network, from, to) else {
                    continue;
                };

                let differing_best = all_simple_paths(&network, from, to)
                    .into_iter()
                    .filter(|(_, stops)| *stops != reference.stops)
                    .map(|(w, _)| w)
                    .min();

                match alternate_route(&network, from, to, &reference.stops) {
                    Ok(detour) => {
                        assert_ne!(detour.stops, reference.stops);
                        assert_eq!(
                            Some(detour.total_weight),
                            differing_best,
                            "seed {seed}: wrong detour weight for {from}->{to}"
                        );
                    }
                    Err(SkylaneError::NoAlternateRoute { .. }) => {
                        assert!(
                            differing_best.is_none(),
                            "seed {seed}: missed a detour {from}->{to}"
                        );
                    }
                    Err(other) => panic!("unexpected error: {other}"),
                }
            }
        }
    }
}

#[test]
fn reachability_agrees_with_shortest_path_existence() {
    for seed in 1..=10u64 {
        let network = generated_network(seed.wrapping_mul(0x5bd1_e995), 6, 25);
        for from in 1..=6 {
            for to in 1..=6 {
                let reachable = can_reach(&network, from, to);
                assert_eq!(reachable, shortest_path(&network, from, to).is_ok());
            }
        }
    }
}
