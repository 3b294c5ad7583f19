//! `skylane alternate` command - cheapest path differing from the shortest
//!
//! Computes the shortest path first and uses it as the reference the
//! alternate search must avoid reproducing.

use serde::Serialize;

use super::report::PathReport;
use crate::cli::{Cli, OutputFormat};
use skylane_core::error::Result;
use skylane_core::network::{alternate_route, shortest_path, LocationId, Network};

#[derive(Debug, Serialize)]
struct AlternateReport {
    reference: PathReport,
    alternate: PathReport,
}

/// Execute the alternate command
pub fn execute(cli: &Cli, network: &Network, from: LocationId, to: LocationId) -> Result<()> {
    let reference = shortest_path(network, from, to)?;
    let detour = alternate_route(network, from, to, &reference.stops)?;

    let report = AlternateReport {
        reference: PathReport::build(network, &reference),
        alternate: PathReport::build(network, &detour),
    };

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Human => {
            println!(
                "Shortest route (total weight {}):",
                report.reference.total_weight
            );
            println!("  {}", report.reference.render_stops());
            println!(
                "Alternate route (total weight {}):",
                report.alternate.total_weight
            );
            println!("  {}", report.alternate.render_stops());
        }
    }

    Ok(())
}
