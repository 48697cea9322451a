//! Node identifiers and node views.
//!
//! This module provides [`NodeId`], the strongly-typed index of a node inside a
//! [`DirectedGraph`](crate::graph::DirectedGraph), and [`NodeRef`], a borrowed view of a
//! named node inside a [`Graph`](crate::graph::Graph).

use std::fmt;

use crate::graph::{Edge, Graph};

/// A strongly-typed identifier for nodes within a directed graph.
///
/// `NodeId` wraps a `usize` slot index. Ids are assigned sequentially starting from 0 when
/// nodes are added, and are never reused: removing a node leaves its slot empty, so the
/// ids of all remaining nodes stay valid and ascending id order equals insertion order.
///
/// # Examples
///
/// ```rust
/// use graphwalk::graph::{DirectedGraph, NodeId};
///
/// let mut graph: DirectedGraph<&str, ()> = DirectedGraph::new();
/// let a = graph.add_node("A");
/// let b = graph.add_node("B");
///
/// assert_eq!(a, NodeId::new(0));
/// assert!(a < b);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Creates a new `NodeId` from a raw slot index.
    ///
    /// Normal usage obtains ids from [`DirectedGraph::add_node`](crate::graph::DirectedGraph::add_node)
    /// or [`Graph::node_id`](crate::graph::Graph::node_id).
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        NodeId(index)
    }

    /// Returns the raw slot index of this node.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

impl From<usize> for NodeId {
    #[inline]
    fn from(index: usize) -> Self {
        NodeId(index)
    }
}

impl From<NodeId> for usize {
    #[inline]
    fn from(node: NodeId) -> Self {
        node.0
    }
}

/// A borrowed view of one named node and its outgoing edges.
///
/// Returned by [`Graph::get_node`] and [`Graph::nodes`]. The neighbor list is a projection
/// over the edge list, so the two always agree.
///
/// # Examples
///
/// ```rust
/// use graphwalk::Graph;
///
/// let graph = Graph::from_adjacency("A B C")?;
/// let a = graph.get_node("A").unwrap();
///
/// assert_eq!(a.name(), "A");
/// assert_eq!(a.neighbors().collect::<Vec<_>>(), vec!["B", "C"]);
/// assert_eq!(a.out_degree(), 2);
/// # Ok::<(), graphwalk::Error>(())
/// ```
#[derive(Clone, Copy)]
pub struct NodeRef<'g> {
    graph: &'g Graph,
    id: NodeId,
    name: &'g str,
}

impl<'g> NodeRef<'g> {
    pub(crate) fn new(graph: &'g Graph, id: NodeId, name: &'g str) -> Self {
        NodeRef { graph, id, name }
    }

    /// Returns the node's name.
    #[must_use]
    pub fn name(&self) -> &'g str {
        self.name
    }

    /// Returns the node's id inside the underlying [`DirectedGraph`](crate::graph::DirectedGraph).
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the outgoing edges of this node in the order they were added.
    pub fn edges(&self) -> impl Iterator<Item = Edge<'g>> + 'g {
        self.graph.edges_from(self.id)
    }

    /// Returns the names of the destination nodes of all outgoing edges, in edge order.
    pub fn neighbors(&self) -> impl Iterator<Item = &'g str> + 'g {
        self.edges().map(|edge| edge.to)
    }

    /// Returns the number of outgoing edges.
    #[must_use]
    pub fn out_degree(&self) -> usize {
        self.edges().count()
    }
}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("neighbors", &self.neighbors().collect::<Vec<_>>())
            .finish()
    }
}

impl fmt::Display for NodeRef<'_> {
    /// Renders the node as `name: n1, n2`, or `name:` when it has no neighbors.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.name)?;
        for (i, neighbor) in self.neighbors().enumerate() {
            if i == 0 {
                write!(f, " {neighbor}")?;
            } else {
                write!(f, ", {neighbor}")?;
            }
        }
        Ok(())
    }
}
