//! Graph traversal.
//!
//! [`dfs`] walks every node reachable from a start node in depth-first pre-order. It is
//! lazy, so callers that only need a prefix of the walk do not pay for the rest.

use crate::{
    graph::{NodeId, Successors},
    utils::VisitedSet,
};

/// Depth-first search iterator over graph nodes.
///
/// Performs an iterative (non-recursive) traversal starting from a given node and yields
/// each reachable node exactly once, before any of its descendants. Successors are visited
/// in edge insertion order.
///
/// # Examples
///
/// ```rust
/// use graphwalk::graph::{algorithms::dfs, DirectedGraph, NodeId};
///
/// let mut graph: DirectedGraph<char, ()> = DirectedGraph::new();
/// let a = graph.add_node('A');
/// let b = graph.add_node('B');
/// let c = graph.add_node('C');
/// graph.add_edge(a, b, ())?;
/// graph.add_edge(a, c, ())?;
///
/// let visited: Vec<NodeId> = dfs(&graph, a).collect();
/// assert_eq!(visited, vec![a, b, c]);
/// # Ok::<(), graphwalk::Error>(())
/// ```
pub struct DfsIterator<'g, G: Successors> {
    graph: &'g G,
    stack: Vec<NodeId>,
    visited: VisitedSet,
}

impl<'g, G: Successors> DfsIterator<'g, G> {
    fn new(graph: &'g G, start: NodeId) -> Self {
        let stack = if graph.contains_node(start) {
            vec![start]
        } else {
            Vec::new()
        };

        DfsIterator {
            graph,
            stack,
            visited: VisitedSet::new(graph.node_bound()),
        }
    }
}

impl<G: Successors> Iterator for DfsIterator<'_, G> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let node = self.stack.pop()?;
            // A node can be queued more than once; it is entered on the first pop only
            if !self.visited.insert(node) {
                continue;
            }

            // Push in reverse so that the first edge is explored first
            let successors: Vec<NodeId> = self.graph.successors(node).collect();
            for &succ in successors.iter().rev() {
                if !self.visited.contains(succ) {
                    self.stack.push(succ);
                }
            }

            return Some(node);
        }
    }
}

/// Returns a depth-first search iterator starting from the given node.
///
/// The start node is yielded first. Nodes not reachable from the start are never
/// visited; an unknown start node yields nothing.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V) for the visited set and stack
pub fn dfs<G: Successors>(graph: &G, start: NodeId) -> DfsIterator<'_, G> {
    DfsIterator::new(graph, start)
}
