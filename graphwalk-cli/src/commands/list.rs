use std::path::Path;

use serde::Serialize;

use crate::{app::GlobalOptions, commands::common::load_graph, output::print_output};

#[derive(Debug, Serialize)]
struct NodeListing {
    name: String,
    neighbors: Vec<String>,
}

pub fn run(path: &Path, opts: &GlobalOptions) -> anyhow::Result<()> {
    let graph = load_graph(path, opts)?;

    let nodes: Vec<NodeListing> = graph
        .nodes()
        .map(|node| NodeListing {
            name: node.name().to_string(),
            neighbors: node.neighbors().map(str::to_string).collect(),
        })
        .collect();

    print_output(&nodes, opts, |_| {
        for line in graph.list_all() {
            println!("{line}");
        }
    })
}
