//! Internal helpers shared by the graph algorithms and renderers.

mod dot;
mod visited;

pub(crate) use dot::escape_dot;
pub use visited::VisitedSet;
