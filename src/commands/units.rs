//! Units command: the duration table callers pick `--smallest` from.

use reltime::util::human_millis;
use reltime::DurationUnit;

pub fn run_units() -> anyhow::Result<()> {
    use comfy_table::{Cell, CellAlignment, Table};

    let mut table = Table::new();
    table.set_header(vec!["Unit", "Milliseconds", "Length"]);
    for unit in DurationUnit::ALL {
        table.add_row(vec![
            Cell::new(unit.label()),
            Cell::new(unit.as_millis()).set_alignment(CellAlignment::Right),
            Cell::new(human_millis(unit.as_millis().unsigned_abs())),
        ]);
    }
    println!("{table}");
    println!("Month and year are fixed averages over a 365-day year.");

    Ok(())
}
