//! The `labcoach experiments` command.

use anyhow::Result;
use comfy_table::Table;

use labcoach_core::catalog;

pub fn execute() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Id", "Experiment", "Steps", "Hints"]);

    for definition in catalog::all() {
        table.add_row(vec![
            definition.id.to_string(),
            definition.display_name.to_string(),
            definition.steps.len().to_string(),
            definition.hints.map_or(0, |h| h.len()).to_string(),
        ]);
    }

    println!("{table}");
    Ok(())
}
