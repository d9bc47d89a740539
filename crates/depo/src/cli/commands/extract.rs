//! Implementation of `depo extract`.

use std::process::ExitCode;

use comfy_table::{Cell, Table, presets::UTF8_FULL_CONDENSED};

use crate::cli::{
    args::ExtractCommand,
    commands::{extract_file, fail},
};

/// Shows the testimony items one witness file extracts to.
pub fn run(cmd: &ExtractCommand) -> ExitCode {
    let (witness, items) = match extract_file(&cmd.file) {
        Ok(extracted) => extracted,
        Err(message) => return fail(&message),
    };

    if cmd.json {
        match serde_json::to_string_pretty(&items) {
            Ok(json) => println!("{json}"),
            Err(e) => return fail(&format!("failed to serialize JSON: {e}")),
        }
        return ExitCode::SUCCESS;
    }

    println!(
        "{} (witness #{}): {} items",
        witness.name,
        witness.number,
        items.len()
    );

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Q", "Location", "Text"]);
    for item in &items {
        table.add_row(vec![
            Cell::new(item.question),
            Cell::new(&item.location),
            Cell::new(depo_index::limit_to(&item.text, 60)),
        ]);
    }
    println!("{table}");

    ExitCode::SUCCESS
}
