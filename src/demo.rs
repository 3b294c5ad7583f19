//! Built-in demo network
//!
//! One-shot subcommands need a network to run against, so every invocation
//! seeds the same preset locations and routes; weights are approximate
//! flight distances in kilometres.

use skylane_core::error::Result;
use skylane_core::network::Network;

pub fn demo_network() -> Result<Network> {
    let mut network = Network::new();

    for (id, name) in [
        (1, "New Delhi"),
        (2, "Mumbai"),
        (3, "Bengaluru"),
        (4, "Chennai"),
        (5, "Kolkata"),
    ] {
        network.add_location(id, name)?;
    }

    for (from, to, weight) in [
        (1, 2, 1400),
        (2, 3, 980),
        (3, 4, 350),
        (1, 3, 2170),
        (1, 5, 1500),
        (4, 5, 1660),
    ] {
        network.add_route(from, to, weight)?;
    }

    Ok(network)
}
