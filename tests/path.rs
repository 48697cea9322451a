//! Integration tests for depth-first path search and reachability.

use graphwalk::{prelude::*, Error};

/// Checks that `path` is a real walk through `graph` from `from` to `to`.
fn assert_valid_path(graph: &Graph, path: &[&str], from: &str, to: &str) {
    assert_eq!(path.first(), Some(&from), "path {path:?} must start at {from}");
    assert_eq!(path.last(), Some(&to), "path {path:?} must end at {to}");
    for pair in path.windows(2) {
        assert!(
            graph.has_edge(pair[0], pair[1]),
            "{} -> {} is not an edge",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn test_demo_search() -> Result<()> {
    let graph = Graph::from_adjacency("D A\r\nA B\r\nA C")?;

    assert_eq!(graph.find_path("D", "C")?, vec!["D", "A", "C"]);
    Ok(())
}

#[test]
fn test_unreachable_existing_node() -> Result<()> {
    let graph = Graph::from_adjacency("D A\r\nA B C\r\nB C\r\nE D")?;

    // E reaches D, but D never reaches E
    assert!(graph.find_path("D", "E")?.is_empty());
    assert_valid_path(&graph, &graph.find_path("E", "C")?, "E", "C");
    Ok(())
}

#[test]
fn test_no_way_back() -> Result<()> {
    let graph = Graph::from_adjacency("A B\r\nB C")?;

    assert!(graph.find_path("C", "A")?.is_empty());
    assert_eq!(graph.find_path("A", "C")?, vec!["A", "B", "C"]);
    Ok(())
}

#[test]
fn test_start_is_target() -> Result<()> {
    let graph = Graph::from_adjacency("A B")?;

    assert_eq!(graph.find_path("A", "A")?, vec!["A"]);
    assert_eq!(graph.find_path("B", "B")?, vec!["B"]);
    Ok(())
}

#[test]
fn test_repeated_search_is_identical() -> Result<()> {
    let graph = Graph::from_adjacency("D A\r\nA B C\r\nB C\r\nE D")?;

    let first = graph.find_path("D", "C")?;
    let second = graph.find_path("D", "C")?;
    assert_eq!(first, second);
    assert_eq!(first, vec!["D", "A", "B", "C"]);

    // A search through nodes explored by earlier searches is not cut short
    assert!(graph.find_path("D", "E")?.is_empty());
    assert_eq!(graph.find_path("A", "C")?, vec!["A", "B", "C"]);
    assert_eq!(graph.find_path("E", "C")?, vec!["E", "D", "A", "B", "C"]);
    Ok(())
}

#[test]
fn test_first_added_edge_wins() -> Result<()> {
    let graph = Graph::from_adjacency("S X Y\r\nX T\r\nY T")?;
    assert_eq!(graph.find_path("S", "T")?, vec!["S", "X", "T"]);

    let graph = Graph::from_adjacency("S Y X\r\nX T\r\nY T")?;
    assert_eq!(graph.find_path("S", "T")?, vec!["S", "Y", "T"]);
    Ok(())
}

#[test]
fn test_cycles_do_not_hang() -> Result<()> {
    let graph = Graph::from_adjacency("A B\r\nB C\r\nC A D\r\nD D")?;

    assert_valid_path(&graph, &graph.find_path("B", "D")?, "B", "D");
    assert_eq!(graph.find_path("A", "A")?, vec!["A"]);
    assert!(graph.find_path("D", "A")?.is_empty());
    Ok(())
}

#[test]
fn test_dead_ends_are_backtracked() -> Result<()> {
    let graph = Graph::from_adjacency("S A B C\r\nA X\r\nB Y\r\nC T")?;

    assert_eq!(graph.find_path("S", "T")?, vec!["S", "C", "T"]);
    Ok(())
}

#[test]
fn test_every_found_path_is_valid() -> Result<()> {
    let graph = Graph::from_adjacency(
        "n0 n1 n2\r\nn1 n3\r\nn2 n3 n4\r\nn3 n5\r\nn4 n5 n0\r\nn5 n6\r\nn6 n2\r\nn7 n0",
    )?;
    let names: Vec<String> = graph.nodes().map(|node| node.name().to_string()).collect();

    for from in &names {
        let reachable = graph.reachable_from(from)?;
        for to in &names {
            let path = graph.find_path(from, to)?;
            if reachable.contains(&to.as_str()) {
                assert_valid_path(&graph, &path, from, to);
            } else {
                assert!(path.is_empty(), "{from} -> {to} should have no path");
            }
        }
    }
    Ok(())
}

#[test]
fn test_unknown_endpoint_is_an_error() -> Result<()> {
    let graph = Graph::from_adjacency("A B")?;

    let err = graph.find_path("A", "Z").unwrap_err();
    assert!(matches!(err, Error::NodeNotFound(ref name) if name == "Z"));
    assert_eq!(err.to_string(), "Node 'Z' does not exist");

    assert!(matches!(
        graph.find_path("Z", "A"),
        Err(Error::NodeNotFound(_))
    ));
    Ok(())
}

#[test]
fn test_search_after_edits() -> Result<()> {
    let mut graph = Graph::from_adjacency("A B\r\nB C")?;

    assert!(graph.remove_edge("B", "C"));
    assert!(graph.find_path("A", "C")?.is_empty());

    assert!(graph.add_edge("A", "C"));
    assert_eq!(graph.find_path("A", "C")?, vec!["A", "C"]);

    graph.remove_node("C");
    assert!(graph.find_path("A", "C").is_err());
    Ok(())
}

#[test]
fn test_reachable_from() -> Result<()> {
    let graph = Graph::from_adjacency("D A\r\nA B C\r\nB C\r\nE D")?;

    assert_eq!(graph.reachable_from("A")?, vec!["A", "B", "C"]);
    assert_eq!(graph.reachable_from("C")?, vec!["C"]);
    assert!(graph.reachable_from("nope").is_err());
    Ok(())
}

#[test]
fn test_reachable_from_parallel_edges() -> Result<()> {
    let graph = Graph::from_adjacency("A B B\r\nB A")?;

    let reachable = graph.reachable_from("A")?;
    assert_eq!(reachable, vec!["A", "B"]);
    assert_eq!(reachable.len(), graph.node_count());
    Ok(())
}

#[test]
fn test_reachable_from_is_preorder() -> Result<()> {
    let graph = Graph::from_adjacency("A B C\r\nB C D\r\nC D")?;

    // C is entered through B before A's own edge to it is considered
    assert_eq!(graph.reachable_from("A")?, vec!["A", "B", "C", "D"]);
    assert_eq!(graph.reachable_from("B")?, vec!["B", "C", "D"]);
    Ok(())
}

#[test]
fn test_format_path() -> Result<()> {
    let graph = Graph::from_adjacency("D A\r\nA B\r\nA C")?;

    assert_eq!(format_path(&graph.find_path("D", "C")?), "D -> A -> C");
    assert_eq!(format_path(&[]), "");
    Ok(())
}

#[test]
fn test_generic_graph_search() -> Result<()> {
    let mut graph: DirectedGraph<u32, ()> = DirectedGraph::new();
    let nodes: Vec<NodeId> = (0..4).map(|i| graph.add_node(i)).collect();
    graph.add_edge(nodes[0], nodes[1], ())?;
    graph.add_edge(nodes[1], nodes[2], ())?;
    graph.add_edge(nodes[2], nodes[0], ())?;

    assert_eq!(
        find_path(&graph, nodes[0], nodes[2]),
        vec![nodes[0], nodes[1], nodes[2]]
    );
    assert!(find_path(&graph, nodes[0], nodes[3]).is_empty());
    assert_eq!(dfs(&graph, nodes[1]).count(), 3);
    Ok(())
}
