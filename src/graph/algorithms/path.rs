//! Depth-first path search.
//!
//! [`find_path`] answers "is there a directed path from `start` to `target`, and if so,
//! which one does a depth-first walk find first?". It does not look for the shortest path.
//!
//! # Algorithm
//!
//! The search keeps an explicit stack of frames. Each frame holds a node of the current
//! path together with the successors of that node which have not been tried yet, so the
//! stack itself *is* the path from `start` to the node being explored:
//!
//! 1. Push `start` and mark it visited.
//! 2. Take the next untried successor of the top frame.
//!    - If it is the target, the frames plus the target form the result.
//!    - If it was not visited yet, mark it and push a frame for it.
//!    - Already visited successors are skipped.
//! 3. A frame without untried successors is popped (backtracking).
//! 4. An empty stack means the target is unreachable.
//!
//! Successors are tried in edge insertion order, so when several paths exist the result
//! follows the first edge added at every step. The visited set is allocated per call;
//! repeated searches on the same graph are independent of each other.

use log::trace;

use crate::{
    graph::{NodeId, Successors},
    utils::VisitedSet,
};

/// One node on the current search path and the successors still to be tried from it.
struct Frame {
    node: NodeId,
    pending: std::vec::IntoIter<NodeId>,
}

impl Frame {
    fn enter<G: Successors>(graph: &G, node: NodeId) -> Self {
        let successors: Vec<NodeId> = graph.successors(node).collect();
        Frame {
            node,
            pending: successors.into_iter(),
        }
    }
}

/// Finds a directed path from `start` to `target` using depth-first search.
///
/// # Arguments
///
/// * `graph` - The graph to search
/// * `start` - The first node of the path
/// * `target` - The node the path has to end at
///
/// # Returns
///
/// The nodes of the path, beginning with `start` and ending with `target`, where every
/// consecutive pair is connected by an edge. If `start == target` the path is the single
/// node. An empty vector means that no path exists, or that one of the endpoints is not
/// part of the graph.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V) for the visited set and the frame stack
///
/// # Examples
///
/// ```rust
/// use graphwalk::graph::{algorithms::find_path, DirectedGraph};
///
/// // D -> A, A -> B, A -> C
/// let mut graph: DirectedGraph<&str, ()> = DirectedGraph::new();
/// let d = graph.add_node("D");
/// let a = graph.add_node("A");
/// let b = graph.add_node("B");
/// let c = graph.add_node("C");
/// graph.add_edge(d, a, ())?;
/// graph.add_edge(a, b, ())?;
/// graph.add_edge(a, c, ())?;
///
/// assert_eq!(find_path(&graph, d, c), vec![d, a, c]);
/// assert!(find_path(&graph, c, d).is_empty());
/// # Ok::<(), graphwalk::Error>(())
/// ```
pub fn find_path<G: Successors>(graph: &G, start: NodeId, target: NodeId) -> Vec<NodeId> {
    if !graph.contains_node(start) || !graph.contains_node(target) {
        return Vec::new();
    }
    if start == target {
        return vec![start];
    }

    let mut visited = VisitedSet::new(graph.node_bound());
    visited.insert(start);

    let mut stack = vec![Frame::enter(graph, start)];

    loop {
        let next = match stack.last_mut() {
            Some(frame) => frame.pending.next(),
            None => break,
        };

        match next {
            Some(node) if node == target => {
                let mut path: Vec<NodeId> = stack.iter().map(|frame| frame.node).collect();
                path.push(target);
                trace!("dfs: reached {target} after visiting {} nodes", visited.len());
                return path;
            }
            Some(node) => {
                if visited.insert(node) {
                    trace!("dfs: enter {node}");
                    stack.push(Frame::enter(graph, node));
                }
            }
            None => {
                if let Some(frame) = stack.pop() {
                    trace!("dfs: backtrack from {}", frame.node);
                }
            }
        }
    }

    trace!("dfs: {target} unreachable, {} nodes visited", visited.len());
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::DirectedGraph;

    fn build(node_count: usize, edges: &[(usize, usize)]) -> (DirectedGraph<usize, ()>, Vec<NodeId>) {
        let mut graph = DirectedGraph::new();
        let nodes: Vec<NodeId> = (0..node_count).map(|i| graph.add_node(i)).collect();
        for &(from, to) in edges {
            graph.add_edge(nodes[from], nodes[to], ()).unwrap();
        }
        (graph, nodes)
    }

    #[test]
    fn test_start_equals_target() {
        let (graph, n) = build(1, &[]);
        assert_eq!(find_path(&graph, n[0], n[0]), vec![n[0]]);
    }

    #[test]
    fn test_linear_path() {
        let (graph, n) = build(3, &[(0, 1), (1, 2)]);
        assert_eq!(find_path(&graph, n[0], n[2]), vec![n[0], n[1], n[2]]);
        assert!(find_path(&graph, n[2], n[0]).is_empty());
    }

    #[test]
    fn test_dead_end_is_backtracked() {
        // 0 -> 1 (dead end), 0 -> 2 -> 3
        let (graph, n) = build(4, &[(0, 1), (0, 2), (2, 3)]);
        assert_eq!(find_path(&graph, n[0], n[3]), vec![n[0], n[2], n[3]]);
    }

    #[test]
    fn test_first_edge_wins() {
        // Two routes to 3: via 1 (added first) and via 2
        let (graph, n) = build(4, &[(0, 1), (0, 2), (1, 3), (2, 3)]);
        assert_eq!(find_path(&graph, n[0], n[3]), vec![n[0], n[1], n[3]]);
    }

    #[test]
    fn test_cycle_terminates() {
        // 0 -> 1 -> 2 -> 0, no way to 3
        let (graph, n) = build(4, &[(0, 1), (1, 2), (2, 0)]);
        assert!(find_path(&graph, n[0], n[3]).is_empty());
        assert_eq!(find_path(&graph, n[1], n[0]), vec![n[1], n[2], n[0]]);
    }

    #[test]
    fn test_self_loop() {
        let (graph, n) = build(2, &[(0, 0), (0, 1)]);
        assert_eq!(find_path(&graph, n[0], n[1]), vec![n[0], n[1]]);
    }

    #[test]
    fn test_visited_node_is_not_reexplored() {
        // 0 -> 1 -> 3 (dead end), 0 -> 2 -> 1, 2 -> 4
        // From 2, node 1 is already known as a dead end and must be skipped.
        let (graph, n) = build(5, &[(0, 1), (1, 3), (0, 2), (2, 1), (2, 4)]);
        assert_eq!(find_path(&graph, n[0], n[4]), vec![n[0], n[2], n[4]]);
    }

    #[test]
    fn test_repeated_searches_are_independent() {
        let (graph, n) = build(3, &[(0, 1), (1, 2)]);
        let first = find_path(&graph, n[0], n[2]);
        let second = find_path(&graph, n[0], n[2]);
        assert_eq!(first, second);
        assert_eq!(find_path(&graph, n[1], n[2]), vec![n[1], n[2]]);
    }

    #[test]
    fn test_unknown_endpoints() {
        let (graph, n) = build(2, &[(0, 1)]);
        assert!(find_path(&graph, n[0], NodeId::new(7)).is_empty());
        assert!(find_path(&graph, NodeId::new(7), n[0]).is_empty());
    }

    #[test]
    fn test_removed_node_breaks_path() {
        let (mut graph, n) = build(3, &[(0, 1), (1, 2)]);
        graph.remove_node(n[1]).unwrap();
        assert!(find_path(&graph, n[0], n[2]).is_empty());
    }
}
