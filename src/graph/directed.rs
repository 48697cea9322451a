//! Core directed graph implementation.
//!
//! This module provides [`DirectedGraph`], the id-based adjacency-list graph that backs the
//! named [`Graph`](crate::graph::Graph). Nodes and edges live in slot vectors indexed by
//! [`NodeId`] and [`EdgeId`]; removing an element empties its slot instead of shifting the
//! others, so ids handed out earlier stay valid and iteration order stays insertion order.

use log::trace;

use crate::{
    graph::{
        edge::EdgeId,
        node::NodeId,
        traits::{GraphBase, Successors},
    },
    Error, Result,
};

/// Internal storage for edge data and endpoints.
#[derive(Debug, Clone)]
struct EdgeData<E> {
    /// Source node of the edge
    source: NodeId,
    /// Target node of the edge
    target: NodeId,
    /// User-provided edge data
    data: E,
}

/// A directed multigraph with typed node and edge data.
///
/// `DirectedGraph` supports:
///
/// - Generic node data (`N`) and edge data (`E`)
/// - Forward (successors) traversal via insertion-ordered adjacency lists
/// - Multiple edges between the same pair of nodes, including self-loops
/// - Removal of nodes (cascading to every attached edge) and of single edges
///
/// # Memory Layout
///
/// - Nodes are stored in a slot vector indexed by `NodeId`
/// - Edges are stored in a slot vector indexed by `EdgeId`
/// - Adjacency lists (outgoing/incoming) store `EdgeId` references in insertion order
///
/// Removed slots are never reused; [`node_bound`](Self::node_bound) reports the size of the
/// id space for algorithms that keep per-node state in flat vectors. A graph that sees many
/// add/remove cycles therefore keeps growing its slot vectors, and every traversal sizes its
/// visited set by `node_bound` rather than by the live node count. Rebuilding the graph
/// (see [`Graph::compact`](crate::graph::Graph::compact)) resets both.
///
/// # Examples
///
/// ```rust
/// use graphwalk::graph::DirectedGraph;
///
/// let mut graph: DirectedGraph<&str, i32> = DirectedGraph::new();
///
/// let a = graph.add_node("A");
/// let b = graph.add_node("B");
/// let c = graph.add_node("C");
///
/// graph.add_edge(a, b, 10)?;
/// graph.add_edge(b, c, 20)?;
/// graph.add_edge(a, c, 30)?;
///
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edge_count(), 3);
///
/// // Removing B drops A->B and B->C as well
/// graph.remove_node(b)?;
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.edge_count(), 1);
/// assert_eq!(graph.successors(a).collect::<Vec<_>>(), vec![c]);
/// # Ok::<(), graphwalk::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct DirectedGraph<N, E> {
    /// Node data storage, `None` for removed nodes
    nodes: Vec<Option<N>>,
    /// Edge data storage, `None` for removed edges
    edges: Vec<Option<EdgeData<E>>>,
    /// Outgoing edges per node (adjacency list for successors)
    outgoing: Vec<Vec<EdgeId>>,
    /// Incoming edges per node, detached when a node is removed
    incoming: Vec<Vec<EdgeId>>,
    /// Number of live nodes
    node_count: usize,
    /// Number of live edges
    edge_count: usize,
}

impl<N, E> Default for DirectedGraph<N, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N, E> DirectedGraph<N, E> {
    /// Creates a new empty directed graph.
    #[must_use]
    pub fn new() -> Self {
        DirectedGraph {
            nodes: Vec::new(),
            edges: Vec::new(),
            outgoing: Vec::new(),
            incoming: Vec::new(),
            node_count: 0,
            edge_count: 0,
        }
    }

    /// Creates a new directed graph with pre-allocated capacity.
    ///
    /// # Arguments
    ///
    /// * `node_capacity` - Expected number of nodes
    /// * `edge_capacity` - Expected number of edges
    #[must_use]
    pub fn with_capacity(node_capacity: usize, edge_capacity: usize) -> Self {
        DirectedGraph {
            nodes: Vec::with_capacity(node_capacity),
            edges: Vec::with_capacity(edge_capacity),
            outgoing: Vec::with_capacity(node_capacity),
            incoming: Vec::with_capacity(node_capacity),
            node_count: 0,
            edge_count: 0,
        }
    }

    /// Adds a new node with the given data to the graph.
    ///
    /// The node is assigned the next sequential `NodeId`. Ids of removed nodes are not
    /// reused.
    pub fn add_node(&mut self, data: N) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(Some(data));
        self.outgoing.push(Vec::new());
        self.incoming.push(Vec::new());
        self.node_count += 1;
        id
    }

    /// Removes a node and every edge that starts or ends at it.
    ///
    /// # Returns
    ///
    /// The data of the removed node.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GraphError`] if `node` is not a live node of this graph.
    pub fn remove_node(&mut self, node: NodeId) -> Result<N> {
        let data = self
            .nodes
            .get_mut(node.index())
            .and_then(Option::take)
            .ok_or_else(|| Error::GraphError(format!("node {node} does not exist")))?;

        let mut attached = std::mem::take(&mut self.outgoing[node.index()]);
        attached.append(&mut self.incoming[node.index()]);
        for edge in attached {
            // Self-loops show up in both lists; the second detach is a no-op
            if self.detach_edge(edge).is_some() {
                trace!("removed edge {edge} attached to {node}");
            }
        }

        self.node_count -= 1;
        Ok(data)
    }

    /// Returns a reference to the data associated with the given node.
    #[must_use]
    pub fn node(&self, node: NodeId) -> Option<&N> {
        self.nodes.get(node.index()).and_then(Option::as_ref)
    }

    /// Returns `true` if `node` refers to a live node.
    #[must_use]
    pub fn contains_node(&self, node: NodeId) -> bool {
        self.node(node).is_some()
    }

    /// Returns the number of live nodes in the graph.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Returns the exclusive upper bound of all node ids handed out so far.
    #[must_use]
    pub fn node_bound(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the graph contains no live nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.node_count == 0
    }

    /// Returns an iterator over all live node identifiers, in insertion order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes().map(|(id, _)| id)
    }

    /// Returns an iterator over all live nodes with their identifiers, in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &N)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|data| (NodeId::new(i), data)))
    }

    /// Adds a directed edge from `source` to `target` with the given data.
    ///
    /// The edge is appended to the end of `source`'s outgoing list. Multiple edges between
    /// the same pair of nodes are allowed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GraphError`] if either `source` or `target` is not a live node.
    pub fn add_edge(&mut self, source: NodeId, target: NodeId, data: E) -> Result<EdgeId> {
        if !self.contains_node(source) {
            return Err(Error::GraphError(format!(
                "source node {source} does not exist in graph with {} nodes",
                self.node_count
            )));
        }
        if !self.contains_node(target) {
            return Err(Error::GraphError(format!(
                "target node {target} does not exist in graph with {} nodes",
                self.node_count
            )));
        }

        let id = EdgeId::new(self.edges.len());
        self.edges.push(Some(EdgeData {
            source,
            target,
            data,
        }));

        self.outgoing[source.index()].push(id);
        self.incoming[target.index()].push(id);
        self.edge_count += 1;

        Ok(id)
    }

    /// Removes a single edge.
    ///
    /// # Returns
    ///
    /// The data of the removed edge.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GraphError`] if `edge` is not a live edge of this graph.
    pub fn remove_edge(&mut self, edge: EdgeId) -> Result<E> {
        self.detach_edge(edge)
            .map(|removed| removed.data)
            .ok_or_else(|| Error::GraphError(format!("edge {edge} does not exist")))
    }

    /// Unlinks an edge from both adjacency lists and empties its slot.
    fn detach_edge(&mut self, edge: EdgeId) -> Option<EdgeData<E>> {
        let removed = self.edges.get_mut(edge.index())?.take()?;

        if let Some(out) = self.outgoing.get_mut(removed.source.index()) {
            out.retain(|&e| e != edge);
        }
        if let Some(inc) = self.incoming.get_mut(removed.target.index()) {
            inc.retain(|&e| e != edge);
        }

        self.edge_count -= 1;
        Some(removed)
    }

    /// Returns a reference to the data associated with the given edge.
    #[must_use]
    pub fn edge(&self, edge: EdgeId) -> Option<&E> {
        self.edge_slot(edge).map(|e| &e.data)
    }

    /// Returns the `(source, target)` endpoints of the given edge.
    #[must_use]
    pub fn edge_endpoints(&self, edge: EdgeId) -> Option<(NodeId, NodeId)> {
        self.edge_slot(edge).map(|e| (e.source, e.target))
    }

    fn edge_slot(&self, edge: EdgeId) -> Option<&EdgeData<E>> {
        self.edges.get(edge.index()).and_then(Option::as_ref)
    }

    /// Returns the number of live edges in the graph.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns the outgoing edges of `node` in insertion order.
    ///
    /// Unknown or removed nodes yield an empty iterator.
    pub fn outgoing_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        self.outgoing
            .get(node.index())
            .into_iter()
            .flat_map(|edges| edges.iter().copied())
    }

    /// Returns the destination of every outgoing edge of `node`, in edge order.
    ///
    /// A node connected twice to the same destination yields it twice.
    pub fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.outgoing_edges(node)
            .filter_map(|edge| self.edge_slot(edge).map(|e| e.target))
    }

    /// Returns the first outgoing edge of `source` that ends at `target`.
    #[must_use]
    pub fn find_edge(&self, source: NodeId, target: NodeId) -> Option<EdgeId> {
        self.outgoing_edges(source)
            .find(|&edge| self.edge_endpoints(edge).is_some_and(|(_, t)| t == target))
    }
}

impl<N, E> GraphBase for DirectedGraph<N, E> {
    fn node_count(&self) -> usize {
        self.node_count
    }

    fn node_bound(&self) -> usize {
        self.nodes.len()
    }

    fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        DirectedGraph::node_ids(self)
    }

    fn contains_node(&self, node: NodeId) -> bool {
        DirectedGraph::contains_node(self, node)
    }
}

impl<N, E> Successors for DirectedGraph<N, E> {
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        DirectedGraph::successors(self, node)
    }
}
