//! Name-indexed directed graph.
//!
//! [`Graph`] is the registry the rest of the crate works with: every node has a unique
//! name, every edge points from one named node to another and carries a [`Cost`]. It is a
//! thin layer over [`DirectedGraph<String, Cost>`](DirectedGraph) plus a name index, so the
//! structural operations (cascading removal, insertion-ordered adjacency) come from the
//! id-based graph and this module only translates between names and ids.
//!
//! # Conventions
//!
//! - Queries on unknown names return an empty result (`false`, `None`, an empty `Vec`).
//! - Mutations on unknown names are no-ops that report `false`.
//! - Only the path and reachability searches treat an unknown name as an error, since an
//!   empty result there would be indistinguishable from "no path".

use std::{collections::HashMap, fmt, fmt::Write as _, path::Path};

use log::debug;

use crate::{
    config::LoaderConfig,
    graph::{
        algorithms::{dfs, find_path},
        Cost, DirectedGraph, Edge, EdgeId, NodeId, NodeRef,
    },
    loader,
    utils::escape_dot,
    Error, Result,
};

/// A directed graph whose nodes are identified by unique names.
///
/// Nodes are listed in insertion order and every node's edges are kept in the order they
/// were added. Node names are unique: loading reuses existing nodes, and [`add_node`]
/// rejects a name that is already present.
///
/// # Examples
///
/// ```rust
/// use graphwalk::Graph;
///
/// let mut graph = Graph::from_adjacency("D A\r\nA B C")?;
///
/// assert_eq!(graph.list_all(), vec!["D: A", "A: B, C", "B:", "C:"]);
/// assert_eq!(graph.find_path("D", "C")?, vec!["D", "A", "C"]);
///
/// graph.remove_node("A");
/// assert!(graph.find_path("D", "C")?.is_empty());
/// # Ok::<(), graphwalk::Error>(())
/// ```
///
/// [`add_node`]: Graph::add_node
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// Node names and edge costs
    graph: DirectedGraph<String, Cost>,
    /// Name to node id lookup
    index: HashMap<String, NodeId>,
}

impl Graph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Graph {
            graph: DirectedGraph::new(),
            index: HashMap::new(),
        }
    }

    /// Creates an empty graph with room for the given number of nodes and edges.
    #[must_use]
    pub fn with_capacity(node_capacity: usize, edge_capacity: usize) -> Self {
        Graph {
            graph: DirectedGraph::with_capacity(node_capacity, edge_capacity),
            index: HashMap::with_capacity(node_capacity),
        }
    }

    /// Builds a graph from an adjacency list using the permissive [`LoaderConfig`].
    ///
    /// Each line lists a subject node followed by the destinations of its outgoing edges.
    /// See [`crate::loader`] for the format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Malformed`] if the input cannot be parsed. With the default
    /// configuration this only happens for names exceeding the configured limit, which is
    /// unlimited, so permissive loading of text never fails.
    pub fn from_adjacency(input: &str) -> Result<Self> {
        loader::load_str(input, &LoaderConfig::default())
    }

    /// Builds a graph from an adjacency list using the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Malformed`] for lines the configuration rejects, and
    /// [`Error::Empty`] if `reject_empty` is set and the input contains no nodes.
    pub fn from_adjacency_with(input: &str, config: &LoaderConfig) -> Result<Self> {
        loader::load_str(input, config)
    }

    /// Loads a graph from an adjacency list file using the permissive configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileError`] if the file cannot be read, or [`Error::Malformed`] if
    /// it is not valid UTF-8 text.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        loader::load_file(path, &LoaderConfig::default())
    }

    /// Loads a graph from an adjacency list file using the given configuration.
    ///
    /// # Errors
    ///
    /// See [`Graph::from_file`] and [`Graph::from_adjacency_with`].
    pub fn from_file_with<P: AsRef<Path>>(path: P, config: &LoaderConfig) -> Result<Self> {
        loader::load_file(path, config)
    }

    /// Returns the id of the node with the given name.
    #[must_use]
    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.index.get(name).copied()
    }

    /// Returns the id of the node with the given name, or [`Error::NodeNotFound`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] if no node has that name.
    pub fn resolve(&self, name: &str) -> Result<NodeId> {
        self.node_id(name)
            .ok_or_else(|| Error::NodeNotFound(name.to_string()))
    }

    /// Returns the name of the node with the given id.
    #[must_use]
    pub fn name(&self, node: NodeId) -> Option<&str> {
        self.graph.node(node).map(String::as_str)
    }

    /// Returns the id of the named node, creating it first if it does not exist yet.
    ///
    /// This is the idempotent insertion used while loading: a name seen before, whether as
    /// subject or as destination, maps to the same node every time.
    pub fn ensure_node(&mut self, name: &str) -> NodeId {
        if let Some(id) = self.node_id(name) {
            return id;
        }
        self.insert_node(name)
    }

    fn insert_node(&mut self, name: &str) -> NodeId {
        let id = self.graph.add_node(name.to_string());
        self.index.insert(name.to_string(), id);
        debug!("added node '{name}' as {id}");
        id
    }

    /// Adds a node without edges.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateNode`] if a node with that name already exists. The graph
    /// is left unchanged in that case.
    pub fn add_node(&mut self, name: &str) -> Result<NodeId> {
        if self.index.contains_key(name) {
            debug!("rejected duplicate node '{name}'");
            return Err(Error::DuplicateNode(name.to_string()));
        }
        Ok(self.insert_node(name))
    }

    /// Removes a node together with every edge that starts or ends at it.
    ///
    /// Returns `false` if no node has that name.
    pub fn remove_node(&mut self, name: &str) -> bool {
        let Some(id) = self.index.remove(name) else {
            debug!("remove_node: '{name}' does not exist");
            return false;
        };

        let edges_before = self.graph.edge_count();
        let removed = self.graph.remove_node(id).is_ok();
        debug!(
            "removed node '{name}' and {} attached edges",
            edges_before - self.graph.edge_count()
        );
        removed
    }

    /// Adds an edge with cost `0` from `from` to `to`.
    ///
    /// Returns `false` and leaves the graph unchanged if either endpoint does not exist.
    /// Adding the same edge twice creates two parallel edges.
    pub fn add_edge(&mut self, from: &str, to: &str) -> bool {
        self.add_edge_with_cost(from, to, 0)
    }

    /// Adds an edge with the given cost from `from` to `to`.
    ///
    /// Returns `false` and leaves the graph unchanged if either endpoint does not exist.
    pub fn add_edge_with_cost(&mut self, from: &str, to: &str, cost: Cost) -> bool {
        let (Some(source), Some(target)) = (self.node_id(from), self.node_id(to)) else {
            debug!("add_edge: '{from}' -> '{to}' ignored, endpoint missing");
            return false;
        };

        self.connect(source, target, cost)
    }

    /// Appends an edge between two known nodes.
    pub(crate) fn connect(&mut self, source: NodeId, target: NodeId, cost: Cost) -> bool {
        match self.graph.add_edge(source, target, cost) {
            Ok(edge) => {
                debug!("added edge {edge}: {source} -> {target} ({cost})");
                true
            }
            Err(err) => {
                debug!("add_edge: {err}");
                false
            }
        }
    }

    /// Removes the first edge from `from` to `to`.
    ///
    /// Returns `false` if either node or the edge does not exist. Parallel edges added
    /// later stay in place.
    pub fn remove_edge(&mut self, from: &str, to: &str) -> bool {
        let Some(edge) = self.find_edge(from, to) else {
            debug!("remove_edge: no edge '{from}' -> '{to}'");
            return false;
        };

        match self.graph.remove_edge(edge) {
            Ok(_) => {
                debug!("removed edge {edge}: '{from}' -> '{to}'");
                true
            }
            Err(_) => false,
        }
    }

    fn find_edge(&self, from: &str, to: &str) -> Option<EdgeId> {
        let source = self.node_id(from)?;
        let target = self.node_id(to)?;
        self.graph.find_edge(source, target)
    }

    /// Returns `true` if `from` has an outgoing edge to `to`.
    #[must_use]
    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        self.find_edge(from, to).is_some()
    }

    /// Returns `true` if a node with that name exists.
    #[must_use]
    pub fn has_node(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Returns a view of the named node, or `None` if it does not exist.
    #[must_use]
    pub fn get_node(&self, name: &str) -> Option<NodeRef<'_>> {
        let id = self.node_id(name)?;
        self.node_ref(id)
    }

    fn node_ref(&self, id: NodeId) -> Option<NodeRef<'_>> {
        self.name(id).map(|name| NodeRef::new(self, id, name))
    }

    /// Returns the destination names of the node's outgoing edges, in edge order.
    ///
    /// An unknown name yields an empty vector.
    #[must_use]
    pub fn neighbors_of(&self, name: &str) -> Vec<&str> {
        self.get_node(name)
            .map(|node| node.neighbors().collect())
            .unwrap_or_default()
    }

    /// Renders every node as `"name: n1, n2"` in insertion order.
    ///
    /// A node without neighbors renders as `"name:"`.
    #[must_use]
    pub fn list_all(&self) -> Vec<String> {
        self.nodes().map(|node| node.to_string()).collect()
    }

    /// Returns all nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeRef<'_>> + '_ {
        self.graph
            .nodes()
            .map(move |(id, name)| NodeRef::new(self, id, name.as_str()))
    }

    /// Returns all edges, grouped by source node in insertion order and then in the order
    /// the edges were added.
    pub fn edges(&self) -> impl Iterator<Item = Edge<'_>> + '_ {
        self.graph.node_ids().flat_map(move |id| self.edges_from(id))
    }

    /// Returns the outgoing edges of a node in the order they were added.
    pub(crate) fn edges_from(&self, node: NodeId) -> impl Iterator<Item = Edge<'_>> + '_ {
        let from = self.name(node).unwrap_or_default();
        self.graph.outgoing_edges(node).filter_map(move |edge| {
            let (_, target) = self.graph.edge_endpoints(edge)?;
            Some(Edge {
                from,
                to: self.name(target)?,
                cost: *self.graph.edge(edge)?,
            })
        })
    }

    /// Finds a path from `from` to `to` with a depth-first search.
    ///
    /// The search explores edges in insertion order and returns the first path it finds,
    /// which is not necessarily the shortest. Every call starts from a clean visited set,
    /// so repeated searches return the same result.
    ///
    /// # Returns
    ///
    /// The node names along the path, starting with `from` and ending with `to`; a single
    /// name if `from == to`; an empty vector if `to` is not reachable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] if either name is unknown.
    pub fn find_path(&self, from: &str, to: &str) -> Result<Vec<&str>> {
        let start = self.resolve(from)?;
        let target = self.resolve(to)?;

        let path = find_path(&self.graph, start, target);
        debug!("find_path '{from}' -> '{to}': {} nodes", path.len());

        Ok(path.into_iter().filter_map(|id| self.name(id)).collect())
    }

    /// Returns the names of all nodes reachable from `name`, in depth-first pre-order.
    ///
    /// The start node itself comes first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] if the name is unknown.
    pub fn reachable_from(&self, name: &str) -> Result<Vec<&str>> {
        let start = self.resolve(name)?;
        Ok(dfs(&self.graph, start)
            .filter_map(|id| self.name(id))
            .collect())
    }

    /// Renders the graph in Graphviz DOT format.
    ///
    /// # Arguments
    ///
    /// * `title` - Optional graph label
    #[must_use]
    pub fn to_dot(&self, title: Option<&str>) -> String {
        let mut dot = String::new();

        dot.push_str("digraph Graph {\n");
        if let Some(name) = title {
            let _ = writeln!(dot, "    label=\"{}\";", escape_dot(name));
            dot.push_str("    labelloc=t;\n");
        }
        dot.push_str("    node [shape=ellipse, fontname=\"Courier\", fontsize=10];\n");
        dot.push_str("    rankdir=LR;\n\n");

        for node in self.nodes() {
            let _ = writeln!(dot, "    \"{}\";", escape_dot(node.name()));
        }

        dot.push('\n');

        for edge in self.edges() {
            let _ = write!(
                dot,
                "    \"{}\" -> \"{}\"",
                escape_dot(edge.from),
                escape_dot(edge.to)
            );
            if edge.cost != 0 {
                let _ = write!(dot, " [label=\"{}\"]", edge.cost);
            }
            dot.push_str(";\n");
        }

        dot.push_str("}\n");
        dot
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns `true` if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    /// Rebuilds the graph without the slots left behind by removed nodes and edges.
    ///
    /// Removal never reuses ids, so a graph edited over many add/remove cycles keeps
    /// growing its storage, and every search sizes its visited set by the number of ids
    /// ever handed out. Compacting renumbers the live nodes densely while keeping node
    /// order, edge order and costs. [`NodeId`]s obtained before the call are invalidated;
    /// names stay valid.
    pub fn compact(&mut self) {
        let bound = self.graph.node_bound();
        let mut compacted = Graph::with_capacity(self.node_count(), self.edge_count());

        for node in self.nodes() {
            let id = compacted.graph.add_node(node.name().to_string());
            compacted.index.insert(node.name().to_string(), id);
        }
        for edge in self.edges() {
            if let (Some(source), Some(target)) =
                (compacted.node_id(edge.from), compacted.node_id(edge.to))
            {
                let _ = compacted.graph.add_edge(source, target, edge.cost);
            }
        }

        debug!(
            "compacted graph from {bound} to {} node slots",
            compacted.graph.node_bound()
        );
        *self = compacted;
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in self.nodes() {
            writeln!(f, "{node}")?;
        }
        Ok(())
    }
}

/// Renders a path as `A -> B -> C`.
///
/// An empty path renders as an empty string.
///
/// # Examples
///
/// ```rust
/// use graphwalk::graph::format_path;
///
/// assert_eq!(format_path(&["D", "A", "C"]), "D -> A -> C");
/// assert_eq!(format_path(&[]), "");
/// ```
#[must_use]
pub fn format_path(path: &[&str]) -> String {
    path.join(" -> ")
}
