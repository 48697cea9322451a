//! Edge identifiers and edge values.
//!
//! [`EdgeId`] is the strongly-typed index of an edge inside a
//! [`DirectedGraph`](crate::graph::DirectedGraph). [`Edge`] is the value handed out by the
//! named [`Graph`](crate::graph::Graph): a directed connection between two named nodes with
//! an associated [`Cost`].

use std::fmt;

/// Numeric cost attached to every edge.
///
/// Edges loaded from an adjacency list always carry a cost of `0`. Costs are stored and
/// reported, but no algorithm in this crate interprets them.
pub type Cost = i32;

/// A strongly-typed identifier for edges within a directed graph.
///
/// Like [`NodeId`](crate::graph::NodeId), edge ids are assigned sequentially and never
/// reused after an edge is removed.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    /// Creates a new `EdgeId` from a raw slot index.
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        EdgeId(index)
    }

    /// Returns the raw slot index of this edge.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeId({})", self.0)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// A directed edge between two named nodes.
///
/// The edge borrows the endpoint names from the graph that produced it; it does not own or
/// duplicate its endpoints.
///
/// # Examples
///
/// ```rust
/// use graphwalk::{Edge, Graph};
///
/// let mut graph = Graph::new();
/// graph.add_node("A")?;
/// graph.add_node("B")?;
/// graph.add_edge_with_cost("A", "B", 7);
///
/// let edges: Vec<Edge<'_>> = graph.edges().collect();
/// assert_eq!(edges[0].to_string(), "A -> B (7)");
/// # Ok::<(), graphwalk::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge<'g> {
    /// Name of the node owning this edge
    pub from: &'g str,
    /// Name of the destination node
    pub to: &'g str,
    /// Cost of the edge (unused by the search algorithms)
    pub cost: Cost,
}

impl fmt::Display for Edge<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.from, self.to, self.cost)
    }
}
