//! # graphwalk Prelude
//!
//! This module provides a convenient prelude for the most commonly used types from the
//! graphwalk library. Import this module to get quick access to graph loading, editing and
//! path search.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all graphwalk operations
pub use crate::Error;

/// The result type used throughout graphwalk
pub use crate::Result;

/// Configuration for adjacency list loading
pub use crate::LoaderConfig;

// ================================================================================================
// Named Graph
// ================================================================================================

/// Name-indexed directed graph and its borrowed views
pub use crate::graph::{Edge, Graph, NodeRef};

/// Edge cost type
pub use crate::graph::Cost;

/// Path rendering
pub use crate::graph::format_path;

// ================================================================================================
// Id-based Graph and Algorithms
// ================================================================================================

/// Generic directed graph and its identifiers
pub use crate::graph::{DirectedGraph, EdgeId, NodeId};

/// Traits the algorithms are written against
pub use crate::graph::{GraphBase, Successors};

/// Depth-first search and traversal
pub use crate::graph::algorithms::{dfs, find_path};
