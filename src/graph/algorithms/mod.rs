//! Graph algorithms.
//!
//! # Available Algorithms
//!
//! - [`find_path`] - Depth-first search for a path between two nodes
//! - [`dfs`] - Lazy depth-first pre-order traversal (reachability)
//!
//! Both work on any graph implementing [`Successors`](crate::graph::Successors), allocate
//! their visitation state per call and explore edges in insertion order.
//!
//! | Algorithm | Time Complexity | Result |
//! |-----------|-----------------|--------|
//! | `find_path` | O(V + E) | *a* path, not necessarily the shortest |
//! | `dfs` | O(V + E) | every reachable node, once |

mod path;
mod traversal;

pub use path::find_path;
pub use traversal::{dfs, DfsIterator};
