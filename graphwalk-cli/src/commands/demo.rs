use std::path::Path;

use serde::Serialize;

use crate::{
    app::GlobalOptions,
    commands::common::{describe_search, load_graph, search, PathOutput},
    output::print_output,
};

/// Searches run by the demo, in order: one that succeeds on the demo input and one whose
/// target exists but cannot be reached.
const DEMO_SEARCHES: [(&str, &str); 2] = [("D", "C"), ("D", "E")];

#[derive(Debug, Serialize)]
struct DemoOutput {
    nodes: Vec<String>,
    searches: Vec<PathOutput>,
}

pub fn run(path: &Path, opts: &GlobalOptions) -> anyhow::Result<()> {
    let graph = load_graph(path, opts)?;

    let searches = DEMO_SEARCHES
        .iter()
        .map(|(from, to)| search(&graph, from, to))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let output = DemoOutput {
        nodes: graph.list_all(),
        searches,
    };

    print_output(&output, opts, |out| {
        println!("Initial graph");
        for line in &out.nodes {
            println!("{line}");
        }

        for search in &out.searches {
            println!();
            println!("Depth-first search {} -> {}", search.from, search.to);
            println!("{}", describe_search(search));
            for name in &search.path {
                println!("  {name}");
            }
        }
    })
}
