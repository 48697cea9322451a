// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # graphwalk
//!
//! An in-memory directed graph built from a plain-text adjacency list, with name-based
//! node and edge editing and a depth-first path search.
//!
//! ## Features
//!
//! - **Adjacency list loading** - One line per node, CRLF or LF separated, with a
//!   permissive default and a strict mode that reports irregular input with line numbers
//! - **Name-indexed registry** - Unique node names, O(1) lookup, insertion-ordered listing
//! - **Consistent editing** - Adding and removing nodes and edges keeps neighbor lists and
//!   edge lists in sync, node removal cascades to every attached edge
//! - **Depth-first path search** - Iterative, explores edges in insertion order and keeps
//!   no state between searches
//!
//! ## Quick Start
//!
//! ```rust
//! use graphwalk::prelude::*;
//!
//! let graph = Graph::from_adjacency("D A\r\nA B C\r\nE D")?;
//!
//! for line in graph.list_all() {
//!     println!("{line}");
//! }
//!
//! let path = graph.find_path("D", "C")?;
//! assert_eq!(format_path(&path), "D -> A -> C");
//!
//! // E exists, but nothing leads there from D
//! assert!(graph.find_path("D", "E")?.is_empty());
//! # Ok::<(), graphwalk::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`prelude`] - Convenient re-exports of commonly used types
//! - [`graph`] - The id-based [`graph::DirectedGraph`], the named [`Graph`] and the
//!   [`graph::algorithms`] working on them
//! - [`loader`] - Adjacency list parsing, configured through [`LoaderConfig`]
//! - [`Error`] and [`Result`] - Error handling
//!
//! ## Logging
//!
//! The library reports through the [`log`] facade: registry mutations at `debug`, every
//! step of a path search at `trace`, load summaries at `info` and tolerated irregular
//! input at `warn`. No logger is installed by the library itself.

#[macro_use]
pub(crate) mod error;
pub(crate) mod utils;

/// Shared functionality which is used in unit tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types.
///
/// # Example
///
/// ```rust
/// use graphwalk::prelude::*;
///
/// let mut graph = Graph::new();
/// graph.add_node("A")?;
/// assert!(graph.has_node("A"));
/// # Ok::<(), graphwalk::Error>(())
/// ```
pub mod prelude;

/// Loader configuration presets.
pub mod config;

/// Directed graph types and algorithms.
pub mod graph;

/// Adjacency list parsing.
pub mod loader;

/// `graphwalk` Result type
///
/// A type alias for `std::result::Result<T, Error>` where the error type is always
/// [`Error`].
///
/// # Examples
///
/// ```rust
/// use graphwalk::{Graph, Result};
///
/// fn load(input: &str) -> Result<Graph> {
///     Graph::from_adjacency(input)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// `graphwalk` Error type
///
/// # Examples
///
/// ```rust
/// use graphwalk::{Error, Graph, LoaderConfig};
///
/// match Graph::from_adjacency_with("A  B", &LoaderConfig::strict()) {
///     Ok(graph) => println!("{} nodes", graph.node_count()),
///     Err(Error::Malformed { message, .. }) => println!("Malformed: {}", message),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub use error::Error;

/// The name-indexed directed graph.
///
/// See [`graph::Graph`] for the full API.
pub use graph::{Edge, Graph, NodeRef};

/// Options for parsing adjacency lists.
pub use config::LoaderConfig;
