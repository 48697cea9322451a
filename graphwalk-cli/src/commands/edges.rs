use std::path::Path;

use graphwalk::graph::Cost;
use serde::Serialize;

use crate::{
    app::GlobalOptions,
    commands::common::load_graph,
    output::{print_output, EdgeTable},
};

#[derive(Debug, Serialize)]
struct EdgeOutput {
    from: String,
    to: String,
    cost: Cost,
}

pub fn run(path: &Path, opts: &GlobalOptions) -> anyhow::Result<()> {
    let graph = load_graph(path, opts)?;

    let edges: Vec<EdgeOutput> = graph
        .edges()
        .map(|edge| EdgeOutput {
            from: edge.from.to_string(),
            to: edge.to.to_string(),
            cost: edge.cost,
        })
        .collect();

    print_output(&edges, opts, |edges| {
        println!(
            "{} nodes, {} edges",
            graph.node_count(),
            graph.edge_count()
        );
        if edges.is_empty() {
            return;
        }
        println!();
        let mut table = EdgeTable::new();
        for edge in edges {
            table.push(&edge.from, &edge.to, edge.cost);
        }
        table.print();
    })
}
