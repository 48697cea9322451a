//! Integration tests for editing and querying the named graph.
//!
//! Every test loads a graph from an adjacency list and checks the registry operations
//! through the public API only.

use graphwalk::{prelude::*, Error};

const DEMO: &str = "D A\r\nA B C\r\nB C\r\nE D";

fn demo() -> Result<Graph> {
    Graph::from_adjacency(DEMO)
}

/// Every subject or destination token becomes a node, nothing else does.
#[test]
fn test_has_node_matches_input_tokens() -> Result<()> {
    let graph = demo()?;

    for name in ["A", "B", "C", "D", "E"] {
        assert!(graph.has_node(name), "{name} should exist");
    }
    assert!(!graph.has_node("F"));
    assert!(!graph.has_node(""));
    assert!(!graph.has_node("a"));
    assert_eq!(graph.node_count(), 5);
    Ok(())
}

/// Neighbors come back exactly as listed on the node's line.
#[test]
fn test_neighbors_follow_input_order() -> Result<()> {
    let graph = Graph::from_adjacency("A C B D\r\nD A")?;

    assert_eq!(graph.neighbors_of("A"), vec!["C", "B", "D"]);
    assert_eq!(graph.neighbors_of("D"), vec!["A"]);
    assert!(graph.neighbors_of("B").is_empty());
    assert!(graph.neighbors_of("unknown").is_empty());
    Ok(())
}

#[test]
fn test_list_all() -> Result<()> {
    let graph = demo()?;

    assert_eq!(
        graph.list_all(),
        vec!["D: A", "A: B, C", "B: C", "C:", "E: D"]
    );
    Ok(())
}

#[test]
fn test_add_and_remove_node_roundtrip() -> Result<()> {
    let mut graph = demo()?;

    graph.add_node("X")?;
    assert!(graph.has_node("X"));
    assert!(graph.add_edge("A", "X"));
    assert!(graph.add_edge("E", "X"));
    assert!(graph.add_edge("X", "B"));

    assert!(graph.remove_node("X"));
    assert!(!graph.has_node("X"));
    for node in graph.nodes() {
        assert!(
            !node.neighbors().any(|name| name == "X"),
            "{} still points at X",
            node.name()
        );
    }
    assert_eq!(graph.neighbors_of("A"), vec!["B", "C"]);
    assert_eq!(graph.edge_count(), 5);
    Ok(())
}

#[test]
fn test_remove_unknown_node_is_noop() -> Result<()> {
    let mut graph = demo()?;
    let before = graph.list_all();

    assert!(!graph.remove_node("nope"));
    assert_eq!(graph.list_all(), before);
    Ok(())
}

#[test]
fn test_duplicate_node_is_rejected() -> Result<()> {
    let mut graph = demo()?;

    let err = graph.add_node("A").unwrap_err();
    assert!(matches!(err, Error::DuplicateNode(ref name) if name == "A"));
    assert_eq!(err.to_string(), "Node 'A' already exists");

    // The existing node keeps its edges
    assert_eq!(graph.neighbors_of("A"), vec!["B", "C"]);
    assert_eq!(graph.node_count(), 5);
    Ok(())
}

#[test]
fn test_add_edge_between_existing_nodes() -> Result<()> {
    let mut graph = demo()?;

    assert!(!graph.has_edge("C", "E"));
    assert!(graph.add_edge("C", "E"));
    assert!(graph.has_edge("C", "E"));
    assert_eq!(graph.neighbors_of("C"), vec!["E"]);
    Ok(())
}

#[test]
fn test_add_edge_with_missing_endpoint_leaves_graph_unchanged() -> Result<()> {
    let mut graph = demo()?;
    let before = graph.list_all();

    assert!(!graph.add_edge("A", "Z"));
    assert!(!graph.add_edge("Z", "A"));
    assert!(!graph.has_node("Z"));
    assert_eq!(graph.list_all(), before);
    assert_eq!(graph.edge_count(), 5);
    Ok(())
}

#[test]
fn test_remove_edge() -> Result<()> {
    let mut graph = demo()?;

    assert!(graph.remove_edge("A", "B"));
    assert!(!graph.has_edge("A", "B"));
    assert_eq!(graph.neighbors_of("A"), vec!["C"]);
    // Both nodes survive
    assert!(graph.has_node("B"));

    assert!(!graph.remove_edge("A", "B"));
    assert!(!graph.remove_edge("A", "nope"));
    assert!(!graph.remove_edge("nope", "A"));
    Ok(())
}

#[test]
fn test_get_node_view() -> Result<()> {
    let graph = demo()?;

    let a = graph.get_node("A").expect("A exists");
    assert_eq!(a.name(), "A");
    assert_eq!(a.out_degree(), 2);
    assert_eq!(a.to_string(), "A: B, C");
    assert!(graph.get_node("Q").is_none());
    Ok(())
}

#[test]
fn test_edges_listing_and_costs() -> Result<()> {
    let mut graph = demo()?;
    assert!(graph.add_edge_with_cost("C", "D", 42));

    let edges: Vec<(&str, &str, Cost)> = graph
        .edges()
        .map(|edge| (edge.from, edge.to, edge.cost))
        .collect();

    assert_eq!(
        edges,
        vec![
            ("D", "A", 0),
            ("A", "B", 0),
            ("A", "C", 0),
            ("B", "C", 0),
            ("C", "D", 42),
            ("E", "D", 0),
        ]
    );
    Ok(())
}

#[test]
fn test_node_listing_survives_removal_in_the_middle() -> Result<()> {
    let mut graph = demo()?;
    graph.remove_node("B");
    graph.add_node("F")?;

    assert_eq!(graph.list_all(), vec!["D: A", "A: C", "C:", "E: D", "F:"]);
    Ok(())
}

#[test]
fn test_empty_graph() {
    let graph = Graph::new();

    assert!(graph.is_empty());
    assert!(graph.list_all().is_empty());
    assert_eq!(graph.edges().count(), 0);
    assert_eq!(graph.to_string(), "");
}
