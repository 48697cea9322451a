use std::path::PathBuf;

use clap::{Parser, Subcommand};
use graphwalk::LoaderConfig;

/// graphwalk - load adjacency-list graphs, inspect them and search for paths
#[derive(Debug, Parser)]
#[command(name = "graphwalk", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared across all subcommands.
#[derive(Debug, Parser)]
pub struct GlobalOptions {
    /// Emit output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose (debug-level) logging output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Reject blank lines, irregular whitespace, long names and empty input.
    #[arg(long, global = true)]
    pub strict: bool,
}

impl GlobalOptions {
    /// Loader configuration selected by `--strict`.
    pub fn loader_config(&self) -> LoaderConfig {
        if self.strict {
            LoaderConfig::strict()
        } else {
            LoaderConfig::permissive()
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every node with its neighbors, in input order.
    List {
        /// Path to the adjacency list file.
        #[arg(value_name = "FILE")]
        path: PathBuf,
    },

    /// Print the neighbors of a single node (nothing if the node does not exist).
    Neighbors {
        /// Path to the adjacency list file.
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Name of the node.
        #[arg(value_name = "NODE")]
        node: String,
    },

    /// List all edges with their costs.
    Edges {
        /// Path to the adjacency list file.
        #[arg(value_name = "FILE")]
        path: PathBuf,
    },

    /// Find a path between two nodes with depth-first search.
    Path {
        /// Path to the adjacency list file.
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Start node.
        #[arg(value_name = "FROM")]
        from: String,

        /// Target node.
        #[arg(value_name = "TO")]
        to: String,
    },

    /// List every node reachable from a start node, in depth-first order.
    Reach {
        /// Path to the adjacency list file.
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Start node.
        #[arg(value_name = "NODE")]
        node: String,
    },

    /// Render the graph in Graphviz DOT format.
    Dot {
        /// Path to the adjacency list file.
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Graph label (defaults to the file name).
        #[arg(long)]
        title: Option<String>,
    },

    /// Run the demo script: listing, a search D -> C and a search D -> E.
    Demo {
        /// Path to the adjacency list file.
        #[arg(value_name = "FILE")]
        path: PathBuf,
    },
}
