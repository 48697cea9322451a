//! Adjacency list loader.
//!
//! Reads the plain-text graph description and builds a [`Graph`] from it.
//!
//! # Format
//!
//! ```text
//! D A
//! A B C
//! B C
//! E D
//! ```
//!
//! Every line describes one subject node: the first token is its name, the remaining
//! tokens are the destinations of its outgoing edges, in order. Lines are separated by
//! `\r\n`; a bare `\n` is accepted as well.
//!
//! - A name that only ever appears as a destination still becomes a node, without edges.
//! - A name is created once, the first time it appears anywhere. Later occurrences reuse
//!   that node, so node order is the order of first appearance.
//! - A subject listed on several lines accumulates the edges of all of them.
//! - Listing a destination twice creates two parallel edges.
//!
//! Every loaded edge has a cost of `0`. How blank lines, irregular whitespace and overly
//! long names are treated is decided by [`LoaderConfig`].

use std::path::Path;

use log::{info, warn};

use crate::{config::LoaderConfig, graph::Graph, Error, Result};

/// One parsed, non-blank line of an adjacency list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyRow<'a> {
    /// 1-based line number in the input
    pub line: usize,
    /// Name of the node the line describes
    pub subject: &'a str,
    /// Destinations of the subject's outgoing edges, in input order
    pub neighbors: Vec<&'a str>,
}

/// Parses a single line of an adjacency list.
///
/// # Arguments
///
/// * `line_no` - 1-based line number, used in error messages
/// * `line` - The line without its terminator
/// * `config` - Rules for irregular input
///
/// # Returns
///
/// `Ok(None)` for a blank line that the configuration allows to skip.
///
/// # Errors
///
/// Returns [`Error::Malformed`] if the line violates the configuration.
pub fn parse_line<'a>(
    line_no: usize,
    line: &'a str,
    config: &LoaderConfig,
) -> Result<Option<AdjacencyRow<'a>>> {
    // A lone '\r' left by mixed line endings is never part of a name
    let line = line.strip_suffix('\r').unwrap_or(line);

    if line.trim().is_empty() {
        if config.skip_blank_lines {
            return Ok(None);
        }
        return Err(malformed_error!("line {}: blank line", line_no));
    }

    let tokens: Vec<&str> = if config.allow_repeated_separators {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != line.split(' ').count() {
            warn!("line {line_no}: irregular whitespace between names");
        }
        tokens
    } else {
        let tokens: Vec<&str> = line.split(' ').collect();
        if tokens.iter().any(|token| token.is_empty()) {
            return Err(malformed_error!(
                "line {}: names must be separated by a single space",
                line_no
            ));
        }
        if let Some(token) = tokens.iter().find(|token| token.contains(char::is_whitespace)) {
            return Err(malformed_error!(
                "line {}: name '{}' contains whitespace",
                line_no,
                token.escape_debug()
            ));
        }
        tokens
    };

    if let Some(token) = tokens.iter().find(|token| !config.name_fits(token)) {
        return Err(malformed_error!(
            "line {}: name '{}' is longer than {} bytes",
            line_no,
            token,
            config.max_name_len
        ));
    }

    let mut tokens = tokens.into_iter();
    let Some(subject) = tokens.next() else {
        return Ok(None);
    };

    Ok(Some(AdjacencyRow {
        line: line_no,
        subject,
        neighbors: tokens.collect(),
    }))
}

/// Parses every line of an adjacency list into rows, skipping blank lines.
///
/// # Errors
///
/// Returns the first [`Error::Malformed`] reported by [`parse_line`].
pub fn parse_rows<'a>(input: &'a str, config: &LoaderConfig) -> Result<Vec<AdjacencyRow<'a>>> {
    let mut rows = Vec::new();
    for (index, line) in input.lines().enumerate() {
        if let Some(row) = parse_line(index + 1, line, config)? {
            rows.push(row);
        }
    }
    Ok(rows)
}

/// Builds a graph from adjacency list text.
///
/// # Errors
///
/// Returns [`Error::Malformed`] for lines the configuration rejects, and [`Error::Empty`]
/// if `config.reject_empty` is set and no node was found.
///
/// # Examples
///
/// ```rust
/// use graphwalk::{loader, LoaderConfig};
///
/// let graph = loader::load_str("D A\r\nA B C\r\n", &LoaderConfig::default())?;
/// assert_eq!(graph.neighbors_of("A"), vec!["B", "C"]);
/// assert!(graph.has_node("C"));
/// # Ok::<(), graphwalk::Error>(())
/// ```
pub fn load_str(input: &str, config: &LoaderConfig) -> Result<Graph> {
    let rows = parse_rows(input, config)?;

    let edge_hint = rows.iter().map(|row| row.neighbors.len()).sum();
    let mut graph = Graph::with_capacity(rows.len(), edge_hint);
    for row in &rows {
        let subject = graph.ensure_node(row.subject);
        for neighbor in &row.neighbors {
            let target = graph.ensure_node(neighbor);
            graph.connect(subject, target, 0);
        }
    }

    if config.reject_empty && graph.is_empty() {
        return Err(Error::Empty);
    }

    info!(
        "loaded {} nodes and {} edges from {} lines",
        graph.node_count(),
        graph.edge_count(),
        rows.len()
    );
    Ok(graph)
}

/// Reads an adjacency list file and builds a graph from it.
///
/// # Errors
///
/// Returns [`Error::FileError`] if the file cannot be read, [`Error::Malformed`] if it is
/// not valid UTF-8 or a line is rejected, and [`Error::Empty`] as for [`load_str`].
pub fn load_file<P: AsRef<Path>>(path: P, config: &LoaderConfig) -> Result<Graph> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    let input = String::from_utf8(bytes)
        .map_err(|err| malformed_error!("{}: not valid UTF-8 - {}", path.display(), err))?;

    info!("loading adjacency list from {}", path.display());
    load_str(&input, config)
}
