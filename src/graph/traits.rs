//! Trait definitions for graph abstractions.
//!
//! The algorithms in [`crate::graph::algorithms`] are written against these traits rather
//! than a concrete graph type:
//!
//! - [`GraphBase`] - Core properties: node counts and node iteration
//! - [`Successors`] - Forward edge traversal (outgoing edges)
//!
//! Node ids may be sparse once nodes have been removed, so the traits distinguish between
//! the number of live nodes ([`GraphBase::node_count`]) and the exclusive upper bound of all
//! ids ever handed out ([`GraphBase::node_bound`]). Algorithms size their per-node state
//! with the latter.

use crate::graph::NodeId;

/// Base trait providing core graph properties.
pub trait GraphBase {
    /// Returns the number of live nodes in the graph.
    fn node_count(&self) -> usize;

    /// Returns an exclusive upper bound for the index of every node id in the graph.
    ///
    /// Every live node satisfies `node.index() < node_bound()`. For graphs that never
    /// removed a node this equals [`node_count`](GraphBase::node_count).
    fn node_bound(&self) -> usize;

    /// Returns an iterator over all live node identifiers, in ascending id order.
    fn node_ids(&self) -> impl Iterator<Item = NodeId>;

    /// Returns `true` if `node` refers to a live node of this graph.
    fn contains_node(&self, node: NodeId) -> bool;
}

/// Trait for graphs that support forward edge traversal.
///
/// # Examples
///
/// ```rust
/// use graphwalk::graph::{DirectedGraph, NodeId, Successors};
///
/// let mut graph: DirectedGraph<&str, ()> = DirectedGraph::new();
/// let a = graph.add_node("A");
/// let b = graph.add_node("B");
/// let c = graph.add_node("C");
///
/// graph.add_edge(a, b, ())?;
/// graph.add_edge(a, c, ())?;
///
/// let successors: Vec<NodeId> = Successors::successors(&graph, a).collect();
/// assert_eq!(successors, vec![b, c]);
/// # Ok::<(), graphwalk::Error>(())
/// ```
pub trait Successors: GraphBase {
    /// Returns the destination nodes of all outgoing edges of `node`, in the order the
    /// edges were added.
    ///
    /// Unknown or removed nodes have no successors.
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId>;
}
