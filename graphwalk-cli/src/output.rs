use std::io::{self, Write};

use anyhow::Context;
use comfy_table::{presets, Cell, CellAlignment, ContentArrangement, Table};
use graphwalk::graph::Cost;
use serde::Serialize;

use crate::app::GlobalOptions;

/// Emit `data` as pretty JSON on stdout under `--json`, otherwise hand it to `human`.
pub fn print_output<T: Serialize>(
    data: &T,
    opts: &GlobalOptions,
    human: impl FnOnce(&T),
) -> anyhow::Result<()> {
    if !opts.json {
        human(data);
        return Ok(());
    }

    let stdout = io::stdout();
    write_json(&mut stdout.lock(), data)
}

fn write_json<T: Serialize, W: Write>(out: &mut W, data: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, data).context("failed to serialize output")?;
    writeln!(out).context("failed to write output")?;
    Ok(())
}

/// Borderless `From / To / Cost` table for edge listings.
///
/// Names are left-aligned, costs right-aligned so that their digits line up.
pub struct EdgeTable {
    table: Table,
}

impl EdgeTable {
    pub fn new() -> Self {
        let mut table = Table::new();
        table
            .load_preset(presets::NOTHING)
            .set_content_arrangement(ContentArrangement::Disabled)
            .set_header(["From", "To", "Cost"]);

        let layout = [
            (CellAlignment::Left, (0, 1)),
            (CellAlignment::Left, (1, 1)),
            (CellAlignment::Right, (1, 0)),
        ];
        for (i, (align, padding)) in layout.into_iter().enumerate() {
            if let Some(col) = table.column_mut(i) {
                col.set_cell_alignment(align);
                col.set_padding(padding);
            }
        }

        Self { table }
    }

    pub fn push(&mut self, from: &str, to: &str, cost: Cost) {
        self.table
            .add_row([Cell::new(from), Cell::new(to), Cell::new(cost)]);
    }

    /// Header first, then one line per edge, trailing blanks removed.
    pub fn render(&self) -> Vec<String> {
        self.table
            .to_string()
            .lines()
            .map(|line| line.trim_end().to_string())
            .collect()
    }

    pub fn print(&self) {
        for line in self.render() {
            println!("{line}");
        }
    }
}
