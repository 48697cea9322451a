pub mod common;
pub mod demo;
pub mod dot;
pub mod edges;
pub mod list;
pub mod neighbors;
pub mod path;
pub mod reach;
