//! Directed graph infrastructure.
//!
//! This module provides the in-memory graph the crate is built around, in two layers:
//!
//! - **Id-based core**: [`NodeId`], [`EdgeId`] and [`DirectedGraph`] store nodes and
//!   edges in slot vectors with insertion-ordered adjacency lists. Nodes and edges can be
//!   removed; removing a node cascades to every edge attached to it.
//! - **Named registry**: [`Graph`] maps unique node names onto the core and exposes the
//!   string-based operations (add/remove nodes and edges, neighbor queries, listing and
//!   path search).
//!
//! Algorithms in [`algorithms`] are written against the [`GraphBase`] and [`Successors`]
//! traits, so they work on any [`DirectedGraph`] regardless of its node and edge data.
//!
//! # Design Principles
//!
//! ## Strongly-Typed Identifiers
//!
//! Node and edge identifiers use newtype wrappers to prevent accidental mixing of indices.
//!
//! ## Single Source of Truth for Adjacency
//!
//! Each node owns exactly one ordered list of outgoing edges. Neighbor names are computed
//! from that list on demand ([`NodeRef::neighbors`]), so edges and neighbors cannot drift
//! apart.
//!
//! ## Stateless Searches
//!
//! Nodes carry no traversal state. Every search allocates its own visited set, so a
//! search never observes leftovers from an earlier one.
//!
//! # Usage Examples
//!
//! ```rust
//! use graphwalk::graph::{format_path, Graph};
//!
//! let mut graph = Graph::new();
//! for name in ["D", "A", "B", "C"] {
//!     graph.add_node(name)?;
//! }
//! graph.add_edge("D", "A");
//! graph.add_edge("A", "B");
//! graph.add_edge("A", "C");
//!
//! let path = graph.find_path("D", "C")?;
//! assert_eq!(format_path(&path), "D -> A -> C");
//! # Ok::<(), graphwalk::Error>(())
//! ```

pub mod algorithms;

mod directed;
mod edge;
mod named;
mod node;
mod traits;

pub use directed::DirectedGraph;
pub use edge::{Cost, Edge, EdgeId};
pub use named::{format_path, Graph};
pub use node::{NodeId, NodeRef};
pub use traits::{GraphBase, Successors};
