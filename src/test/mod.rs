//! Graph fixtures shared by the unit tests.

use crate::Graph;

/// The adjacency list used by the demo: `D -> A`, `A -> B`, `A -> C`, `B -> C`, `E -> D`.
pub const DEMO_INPUT: &str = "D A\r\nA B C\r\nB C\r\nE D";

/// Loads [`DEMO_INPUT`].
pub fn demo_graph() -> Graph {
    Graph::from_adjacency(DEMO_INPUT).unwrap()
}

/// `A -> B -> C`, no edge back.
pub fn chain_graph() -> Graph {
    Graph::from_adjacency("A B\r\nB C").unwrap()
}
