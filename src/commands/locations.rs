//! `skylane locations` command - list registered locations

use serde::Serialize;

use crate::cli::{Cli, OutputFormat};
use skylane_core::error::Result;
use skylane_core::network::{Location, Network};

#[derive(Debug, Serialize)]
struct LocationsReport<'a> {
    count: usize,
    locations: Vec<&'a Location>,
}

/// Execute the locations command
pub fn execute(cli: &Cli, network: &Network) -> Result<()> {
    let locations: Vec<&Location> = network.locations().collect();

    match cli.format {
        OutputFormat::Json => {
            let report = LocationsReport {
                count: locations.len(),
                locations,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Human => {
            if locations.is_empty() {
                if !cli.quiet {
                    println!("No locations in the network");
                }
                return Ok(());
            }
            for location in locations {
                println!("{}: {}", location.id, location.name);
            }
        }
    }

    Ok(())
}
