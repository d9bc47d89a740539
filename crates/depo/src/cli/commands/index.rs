//! Implementation of `depo index`.

use std::{fs, process::ExitCode};

use depo_document::IndexItem;
use depo_index::{build_index, pack};
use tracing::info;

use crate::cli::{
    args::IndexCommand,
    commands::{extract_file, fail},
};

/// Extracts every witness file in the corpus and packs the built index.
pub fn run(cmd: &IndexCommand) -> ExitCode {
    let mut files: Vec<_> = match fs::read_dir(&cmd.corpus) {
        Ok(entries) => entries
            .filter_map(|e| e.ok().map(|e| e.path()))
            .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
            .collect(),
        Err(e) => return fail(&format!("failed to read {}: {e}", cmd.corpus.display())),
    };
    files.sort();

    let mut items: Vec<IndexItem> = Vec::new();
    let mut witnesses = 0usize;

    for file in &files {
        // Overview pages carry no testimony.
        let stem = file.file_stem().map(|s| s.to_string_lossy().into_owned());
        if stem.as_deref().is_some_and(|s| s.contains("Overview")) {
            continue;
        }

        match extract_file(file) {
            Ok((witness, extracted)) => {
                info!(
                    witness = %witness.name,
                    items = extracted.len(),
                    file = %file.display(),
                    "extracted"
                );
                items.extend(extracted);
                witnesses += 1;
            }
            Err(message) => return fail(&message),
        }
    }

    if items.is_empty() {
        return fail("corpus produced no testimony items");
    }

    // Build into a scratch directory next to the output, pack, clean up.
    let build_dir = cmd.out.with_extension("build");
    let result = build_index(&items, &build_dir).and_then(|count| {
        let blob = pack(&build_dir)?;
        fs::write(&cmd.out, &blob)?;
        Ok((count, blob.len()))
    });
    let cleanup = fs::remove_dir_all(&build_dir);

    match result {
        Ok((count, bytes)) => {
            if let Err(e) = cleanup {
                return fail(&format!("failed to clean up {}: {e}", build_dir.display()));
            }
            println!(
                "indexed {count} passages from {witnesses} witnesses into {} ({bytes} bytes)",
                cmd.out.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => fail(&e.to_string()),
    }
}
