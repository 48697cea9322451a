use std::path::Path;

use serde::Serialize;

use crate::{
    app::GlobalOptions,
    commands::common::{file_display_name, load_graph},
    output::print_output,
};

#[derive(Debug, Serialize)]
struct DotOutput {
    title: String,
    dot: String,
}

pub fn run(path: &Path, title: Option<&str>, opts: &GlobalOptions) -> anyhow::Result<()> {
    let graph = load_graph(path, opts)?;

    let title = title.map_or_else(|| file_display_name(path), str::to_string);
    let output = DotOutput {
        dot: graph.to_dot(Some(&title)),
        title,
    };

    print_output(&output, opts, |out| print!("{}", out.dot))
}
