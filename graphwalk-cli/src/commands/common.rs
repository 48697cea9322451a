use std::path::Path;

use anyhow::Context;
use graphwalk::{Graph, LoaderConfig};
use serde::Serialize;

use crate::app::GlobalOptions;

/// Load an adjacency list file with the loader configuration selected on the command line.
pub fn load_graph(path: &Path, opts: &GlobalOptions) -> anyhow::Result<Graph> {
    load_graph_with(path, &opts.loader_config())
}

/// Load an adjacency list file with an explicit loader configuration.
pub fn load_graph_with(path: &Path, config: &LoaderConfig) -> anyhow::Result<Graph> {
    Graph::from_file_with(path, config)
        .with_context(|| format!("failed to load graph: {}", path.display()))
}

/// Extract a display-friendly filename from a path.
pub fn file_display_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |f| f.to_string_lossy().to_string(),
    )
}

/// Result of a single path search.
#[derive(Debug, Serialize)]
pub struct PathOutput {
    pub from: String,
    pub to: String,
    pub found: bool,
    pub path: Vec<String>,
}

/// Run a path search, turning unknown node names into a reported error.
pub fn search(graph: &Graph, from: &str, to: &str) -> anyhow::Result<PathOutput> {
    let path = graph
        .find_path(from, to)
        .with_context(|| format!("cannot search from '{from}' to '{to}'"))?;

    Ok(PathOutput {
        from: from.to_string(),
        to: to.to_string(),
        found: !path.is_empty(),
        path: path.into_iter().map(str::to_string).collect(),
    })
}

/// Human-readable rendering of a search result.
pub fn describe_search(out: &PathOutput) -> String {
    if out.found {
        let names: Vec<&str> = out.path.iter().map(String::as_str).collect();
        format!("path found: {}", graphwalk::graph::format_path(&names))
    } else {
        format!("no path from {} to {}", out.from, out.to)
    }
}
