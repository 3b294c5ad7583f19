//! `skylane reach` command - boolean connectivity check

use crate::cli::{Cli, OutputFormat};
use skylane_core::error::Result;
use skylane_core::network::{can_reach, LocationId, Network};

/// Execute the reach command
pub fn execute(cli: &Cli, network: &Network, from: LocationId, to: LocationId) -> Result<()> {
    let reachable = can_reach(network, from, to);

    match cli.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "from": from,
                    "to": to,
                    "reachable": reachable,
                })
            );
        }
        OutputFormat::Human => {
            if reachable {
                println!("Route exists from {} to {}", from, to);
            } else {
                println!("No route from {} to {}", from, to);
            }
        }
    }

    Ok(())
}
