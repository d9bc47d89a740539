//! Implementation of `depo search`.

use std::{process::ExitCode, sync::Arc};

use comfy_table::{Cell, Table, presets::UTF8_FULL_CONDENSED};
use depo_index::SearchMatch;
use depo_search::{FsBlobLoader, SearchService, SearchState, ServiceConfig};

use crate::cli::{args::SearchCommand, commands::fail};

/// Directory the packed index is unpacked into, under the data root.
const INDEX_DIR_NAME: &str = "search-index";

/// Initializes the coordinator and runs one query.
pub fn run(cmd: &SearchCommand) -> ExitCode {
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => return fail(&format!("failed to start runtime: {e}")),
    };

    let loader = Arc::new(FsBlobLoader::new(&cmd.data));
    let config = ServiceConfig::new(cmd.index.clone(), cmd.data.join(INDEX_DIR_NAME));
    let service = SearchService::new(SearchState::new(), loader, config);

    let matches = runtime.block_on(async {
        service.initialize().await?;
        service.find_matches(&cmd.query).await
    });

    let matches = match matches {
        Ok(m) => m,
        Err(e) => return fail(&e.to_string()),
    };

    output_matches(&matches, cmd)
}

/// Renders matches as a table or JSON.
fn output_matches(matches: &[SearchMatch], cmd: &SearchCommand) -> ExitCode {
    let shown = &matches[..matches.len().min(cmd.limit)];

    if cmd.json {
        return match serde_json::to_string_pretty(shown) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(e) => fail(&format!("failed to serialize JSON: {e}")),
        };
    }

    if matches.is_empty() {
        println!("no matches");
        return ExitCode::SUCCESS;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Score", "Witness", "Q", "Text"]);
    for m in shown {
        table.add_row(vec![
            Cell::new(format!("{:.2}", m.score)),
            Cell::new(&m.witness),
            Cell::new(m.question),
            Cell::new(&m.formatted_text),
        ]);
    }
    println!("{table}");

    if matches.len() > shown.len() {
        println!("({} of {} matches shown)", shown.len(), matches.len());
    }

    ExitCode::SUCCESS
}
