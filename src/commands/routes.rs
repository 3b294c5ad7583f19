//! `skylane routes` command - display the route map

use serde::Serialize;

use super::report::display_name;
use crate::cli::{Cli, OutputFormat};
use skylane_core::error::Result;
use skylane_core::network::{LocationId, Network};

#[derive(Debug, Serialize)]
struct RouteMapEntry {
    from: LocationId,
    name: String,
    routes: Vec<RouteLeg>,
}

#[derive(Debug, Serialize)]
struct RouteLeg {
    to: LocationId,
    name: String,
    weight: u32,
}

fn route_map(network: &Network) -> Vec<RouteMapEntry> {
    network
        .locations()
        .map(|location| RouteMapEntry {
            from: location.id,
            name: location.name.clone(),
            routes: network
                .routes(location.id)
                .unwrap_or_default()
                .iter()
                .map(|route| RouteLeg {
                    to: route.to,
                    name: display_name(network, route.to),
                    weight: route.weight,
                })
                .collect(),
        })
        .collect()
}

/// Execute the routes command
pub fn execute(cli: &Cli, network: &Network) -> Result<()> {
    let entries = route_map(network);

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        OutputFormat::Human => {
            if entries.is_empty() {
                if !cli.quiet {
                    println!("No locations in the network");
                }
                return Ok(());
            }
            for entry in entries {
                print!("{} ({}) ->", entry.from, entry.name);
                if entry.routes.is_empty() {
                    print!(" [no outgoing routes]");
                }
                for leg in &entry.routes {
                    print!(" {} ({}, {})", leg.to, leg.name, leg.weight);
                }
                println!();
            }
        }
    }

    Ok(())
}
