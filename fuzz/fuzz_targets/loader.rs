#![no_main]

use graphwalk::{Graph, LoaderConfig};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    let _ = Graph::from_adjacency_with(input, &LoaderConfig::strict());

    if let Ok(graph) = Graph::from_adjacency(input) {
        let first = graph.nodes().next().map(|node| node.name().to_string());
        let last = graph.nodes().last().map(|node| node.name().to_string());
        if let (Some(first), Some(last)) = (first, last) {
            if let Ok(path) = graph.find_path(&first, &last) {
                for pair in path.windows(2) {
                    assert!(graph.has_edge(pair[0], pair[1]));
                }
            }
        }
    }
});
