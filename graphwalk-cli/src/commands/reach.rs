use std::path::Path;

use anyhow::Context;
use serde::Serialize;

use crate::{app::GlobalOptions, commands::common::load_graph, output::print_output};

#[derive(Debug, Serialize)]
struct ReachOutput {
    node: String,
    reachable: Vec<String>,
}

pub fn run(path: &Path, node: &str, opts: &GlobalOptions) -> anyhow::Result<()> {
    let graph = load_graph(path, opts)?;

    let reachable = graph
        .reachable_from(node)
        .with_context(|| format!("cannot walk from '{node}'"))?;

    let output = ReachOutput {
        node: node.to_string(),
        reachable: reachable.into_iter().map(str::to_string).collect(),
    };

    print_output(&output, opts, |out| {
        println!(
            "{} of {} nodes reachable from {}",
            out.reachable.len(),
            graph.node_count(),
            out.node
        );
        for name in &out.reachable {
            println!("  {name}");
        }
    })
}
