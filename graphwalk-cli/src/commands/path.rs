use std::path::Path;

use crate::{
    app::GlobalOptions,
    commands::common::{describe_search, load_graph, search},
    output::print_output,
};

pub fn run(path: &Path, from: &str, to: &str, opts: &GlobalOptions) -> anyhow::Result<()> {
    let graph = load_graph(path, opts)?;
    let output = search(&graph, from, to)?;

    print_output(&output, opts, |out| println!("{}", describe_search(out)))
}
