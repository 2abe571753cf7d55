//! CLI entry point for the `adjg` command-line tool.

use std::io;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use adjgraph::cli::commands;
use adjgraph::GraphError;

#[derive(Parser)]
#[command(
    name = "adjg",
    about = "adjg — inspect undirected graphs described as JSON"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show node and edge counts
    Info {
        /// Path to the graph JSON file
        file: PathBuf,
    },
    /// Breadth-first order over every node
    Bfs {
        /// Path to the graph JSON file
        file: PathBuf,
        /// Node to start from
        #[arg(long, default_value = "0")]
        source: usize,
    },
    /// List connected components
    Components {
        /// Path to the graph JSON file
        file: PathBuf,
    },
    /// Dump adjacency lists
    Adjacency {
        /// Path to the graph JSON file
        file: PathBuf,
        /// Only show this node
        #[arg(long)]
        node: Option<usize>,
    },
    /// Check whether an edge is present
    Present {
        /// Path to the graph JSON file
        file: PathBuf,
        /// First endpoint
        src: usize,
        /// Second endpoint
        dst: usize,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    adjgraph::cli::init_logging(cli.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = match cli.command {
        Commands::Info { file } => commands::cmd_info(&file, json, &mut out),
        Commands::Bfs { file, source } => commands::cmd_bfs(&file, source, json, &mut out),
        Commands::Components { file } => commands::cmd_components(&file, json, &mut out),
        Commands::Adjacency { file, node } => {
            commands::cmd_adjacency(&file, node, json, &mut out)
        }
        Commands::Present { file, src, dst } => {
            commands::cmd_present(&file, src, dst, json, &mut out)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::Json(_) | GraphError::TooManyNodes { .. } => 2,
            GraphError::InvalidNode(_) | GraphError::InvalidEdge { .. } => 4,
            _ => 5,
        };
        process::exit(code);
    }
}
