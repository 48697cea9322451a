use std::path::Path;

use log::debug;
use serde::Serialize;

use crate::{app::GlobalOptions, commands::common::load_graph, output::print_output};

#[derive(Debug, Serialize)]
struct NeighborsOutput {
    node: String,
    exists: bool,
    neighbors: Vec<String>,
}

pub fn run(path: &Path, node: &str, opts: &GlobalOptions) -> anyhow::Result<()> {
    let graph = load_graph(path, opts)?;

    let exists = graph.has_node(node);
    if !exists {
        debug!("node '{node}' does not exist, no neighbors");
    }

    let output = NeighborsOutput {
        node: node.to_string(),
        exists,
        neighbors: graph
            .neighbors_of(node)
            .into_iter()
            .map(str::to_string)
            .collect(),
    };

    print_output(&output, opts, |out| {
        for neighbor in &out.neighbors {
            println!("{neighbor}");
        }
    })
}
