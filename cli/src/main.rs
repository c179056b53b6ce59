//! Prints the Adjacency table of a Point Graph and the cheapest Route between two Points.
//!
//! # Usage
//!
//! ```bash
//! # built-in sample, Route from A to F
//! waypoint
//!
//! # own data, only mutually declared connections
//! waypoint --file points.json --mutual --from Home --to Work
//! ```
//!
//! Set `RUST_LOG=debug` to see how the Graph is built and searched.

use std::env;
use std::path::PathBuf;

use log::info;
use waypoint_astar::{dataset, prelude::*, table};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let config = match parse_args(&args[1..]) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            print_usage(args.first().map_or("waypoint", String::as_str));
            std::process::exit(1);
        }
    };

    if let Err(e) = run(config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[derive(Debug, PartialEq)]
struct Config {
    file: Option<PathBuf>,
    graph: GraphConfig,
    from: String,
    to: String,
    show_table: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            file: None,
            graph: GraphConfig::default(),
            from: "A".to_string(),
            to: "F".to_string(),
            show_table: true,
        }
    }
}

fn parse_args(args: &[String]) -> Result<Config, String> {
    let mut config = Config::default();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        let mut value = |flag: &str| {
            iter.next()
                .cloned()
                .ok_or_else(|| format!("Missing value for {}", flag))
        };
        match arg.as_str() {
            "--file" | "-f" => config.file = Some(PathBuf::from(value(arg)?)),
            "--from" => config.from = value(arg)?,
            "--to" => config.to = value(arg)?,
            "--mutual" => config.graph = GraphConfig::MUTUAL,
            "--no-table" => config.show_table = false,
            other => return Err(format!("Unknown argument: {}", other)),
        }
    }

    Ok(config)
}

fn print_usage(program: &str) {
    eprintln!(
        "Usage: {} [--file <points.json>] [--mutual] [--from <name>] [--to <name>] [--no-table]",
        program
    );
}

fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let points = match &config.file {
        Some(path) => {
            info!("loading Points from {}", path.display());
            dataset::load(path)?
        }
        None => dataset::sample_points(),
    };

    let graph = Graph::new(points, config.graph);

    if config.show_table {
        print!("{}", table::render(&table::adjacency_rows(&graph)));
    }

    let path = graph.find_path(&config.from, &config.to)?;
    println!("Route: {} (cost {:.2})", path.join(" -> "), path.cost());

    Ok(())
}
