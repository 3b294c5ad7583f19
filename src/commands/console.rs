//! `skylane console` command - interactive session over one network
//!
//! Line-oriented commands mutate and query a single in-memory network for
//! the lifetime of the process; nothing is persisted. Recoverable errors
//! are printed and the loop continues.

use std::io::{self, BufRead, Write};

use super::report::PathReport;
use crate::cli::Cli;
use skylane_core::error::{Result, SkylaneError};
use skylane_core::network::{alternate_route, can_reach, shortest_path, LocationId, Network};

/// Execute the console command
pub fn execute(cli: &Cli, mut network: Network) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    if !cli.quiet {
        println!("skylane console - type 'help' for commands, 'quit' to leave");
    }

    let mut line = String::new();
    loop {
        if !cli.quiet {
            print!("> ");
            stdout.flush()?;
        }

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((&command, args)) = tokens.split_first() else {
            continue;
        };

        match command {
            "quit" | "exit" => break,
            "help" => print_help(),
            _ => {
                if let Err(err) = run_command(&mut network, command, args) {
                    println!("error: {}", err);
                }
            }
        }
    }

    Ok(())
}

fn run_command(network: &mut Network, command: &str, args: &[&str]) -> Result<()> {
    match command {
        "locations" => show_locations(network),
        "routes" => show_routes(network),
        "add-location" => {
            let id = parse_id(args.first().copied())?;
            let name = args[1..].join(" ");
            if name.is_empty() {
                return Err(SkylaneError::UsageError(
                    "usage: add-location <id> <name>".to_string(),
                ));
            }
            network.add_location(id, name)?;
            println!("Added location {}", id);
        }
        "add-route" => {
            let (from, to) = parse_endpoints(args)?;
            let weight = args
                .get(2)
                .ok_or_else(|| {
                    SkylaneError::UsageError("usage: add-route <from> <to> <weight>".to_string())
                })?
                .parse()
                .map_err(|_| SkylaneError::UsageError("weight must be a non-negative integer".to_string()))?;
            network.add_route(from, to, weight)?;
            println!("Added route {} -> {} ({})", from, to, weight);
        }
        "remove-route" => {
            let (from, to) = parse_endpoints(args)?;
            network.remove_route(from, to)?;
            println!("Removed route {} -> {}", from, to);
        }
        "reach" => {
            let (from, to) = parse_endpoints(args)?;
            if can_reach(network, from, to) {
                println!("Route exists from {} to {}", from, to);
            } else {
                println!("No route from {} to {}", from, to);
            }
        }
        "shortest" => {
            let (from, to) = parse_endpoints(args)?;
            let report = PathReport::build(network, &shortest_path(network, from, to)?);
            println!(
                "Shortest route (total weight {}): {}",
                report.total_weight,
                report.render_stops()
            );
        }
        "alternate" => {
            let (from, to) = parse_endpoints(args)?;
            let reference = shortest_path(network, from, to)?;
            let report = PathReport::build(network, &alternate_route(network, from, to, &reference.stops)?);
            println!(
                "Alternate route (total weight {}): {}",
                report.total_weight,
                report.render_stops()
            );
        }
        other => {
            println!("unknown command: {} (try 'help')", other);
        }
    }

    Ok(())
}

fn show_locations(network: &Network) {
    if network.is_empty() {
        println!("No locations in the network");
    }
    for location in network.locations() {
        println!("{}: {}", location.id, location.name);
    }
}

fn show_routes(network: &Network) {
    if network.is_empty() {
        println!("No locations in the network");
    }
    for location in network.locations() {
        print!("{} ({}) ->", location.id, location.name);
        let routes = network.routes(location.id).unwrap_or_default();
        if routes.is_empty() {
            print!(" [no outgoing routes]");
        }
        for route in routes {
            print!(" {} ({})", route.to, route.weight);
        }
        println!();
    }
}

fn parse_id(token: Option<&str>) -> Result<LocationId> {
    let token = token.ok_or_else(|| SkylaneError::UsageError("missing location id".to_string()))?;
    token
        .parse()
        .map_err(|_| SkylaneError::UsageError(format!("invalid location id: {}", token)))
}

fn parse_endpoints(args: &[&str]) -> Result<(LocationId, LocationId)> {
    let from = parse_id(args.first().copied())?;
    let to = parse_id(args.get(1).copied())?;
    Ok((from, to))
}

fn print_help() {
    println!("Commands:");
    println!("  locations                       list locations");
    println!("  routes                          display the route map");
    println!("  add-location <id> <name>        register a location");
    println!("  add-route <from> <to> <weight>  add a directed route");
    println!("  remove-route <from> <to>        remove a route");
    println!("  reach <from> <to>               check connectivity");
    println!("  shortest <from> <to>            minimum-weight path");
    println!("  alternate <from> <to>           cheapest differing path");
    println!("  quit                            leave the console");
}
