//! Shared path reporting for the shortest and alternate commands

use serde::Serialize;

use skylane_core::network::{LocationId, Network, RoutePath};

/// A computed path with display names resolved, ready for output
#[derive(Debug, Serialize)]
pub struct PathReport {
    pub from: LocationId,
    pub to: LocationId,
    pub total_weight: u64,
    pub stops: Vec<Stop>,
}

/// One stop along a reported path
#[derive(Debug, Serialize)]
pub struct Stop {
    pub id: LocationId,
    pub name: String,
}

impl PathReport {
    pub fn build(network: &Network, path: &RoutePath) -> Self {
        let stops = path
            .stops
            .iter()
            .map(|&id| Stop {
                id,
                name: display_name(network, id),
            })
            .collect();
        Self {
            from: path.from,
            to: path.to,
            total_weight: path.total_weight,
            stops,
        }
    }

    /// One-line rendering: `1 (New Delhi) -> 3 (Bengaluru)`
    pub fn render_stops(&self) -> String {
        self.stops
            .iter()
            .map(|stop| format!("{} ({})", stop.id, stop.name))
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}

pub fn display_name(network: &Network, id: LocationId) -> String {
    network
        .location(id)
        .map(|l| l.name.clone())
        .unwrap_or_else(|| "?".to_string())
}
