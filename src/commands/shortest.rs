//! `skylane shortest` command - minimum-weight path query

use super::report::PathReport;
use crate::cli::{Cli, OutputFormat};
use skylane_core::error::Result;
use skylane_core::network::{shortest_path, LocationId, Network};

/// Execute the shortest command
pub fn execute(cli: &Cli, network: &Network, from: LocationId, to: LocationId) -> Result<()> {
    let path = shortest_path(network, from, to)?;
    let report = PathReport::build(network, &path);

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Human => {
            println!("Shortest route (total weight {}):", report.total_weight);
            println!("  {}", report.render_stops());
        }
    }

    Ok(())
}
