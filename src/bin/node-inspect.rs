use std::path::PathBuf;

use clap::{Parser, Subcommand};

use relay_node::config::load_config;
use relay_node::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "node-inspect")]
#[command(about = "Validate and inspect relay node configuration", long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error).
    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a config file and build every node
    Check { file: PathBuf },
    /// Print node snapshots as JSON
    Show { file: PathBuf },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init(&cli.log_level)?;

    match cli.command {
        Commands::Check { file } => {
            let config = load_config(&file)?;
            let nodes = config.build_nodes()?;
            for node in &nodes {
                let options = node.options();
                println!(
                    "{:<16} {:<24} network={:<6} priority={:<4} tls={} http={} filter={}",
                    node.name(),
                    node.addr(),
                    if options.network.is_empty() { "-" } else { options.network.as_str() },
                    options.priority,
                    options.tls.is_some(),
                    options.http.is_some(),
                    options.filter.is_some(),
                );
            }
            println!("{} node(s) OK", nodes.len());
        }
        Commands::Show { file } => {
            let config = load_config(&file)?;
            let snapshots: Vec<_> = config
                .build_nodes()?
                .iter()
                .map(|node| node.snapshot())
                .collect();
            for snapshot in &snapshots {
                metrics::record_node(snapshot);
            }
            println!("{}", serde_json::to_string_pretty(&snapshots)?);
        }
    }

    Ok(())
}
