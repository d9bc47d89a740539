//! Command implementations.

pub mod extract;
pub mod index;
pub mod search;

use std::{fs, path::Path, process::ExitCode};

use depo_document::{DocumentTree, ExtractError, IndexItem, Witness, extract};

/// Loads one witness corpus file and extracts its testimony items.
///
/// The witness identity comes from the file stem (`NN_Name`).
pub(crate) fn extract_file(file: &Path) -> Result<(Witness, Vec<IndexItem>), String> {
    let stem = file
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .ok_or_else(|| format!("not a file path: {}", file.display()))?;

    let witness = Witness::from_file_stem(&stem).map_err(|e| e.to_string())?;

    let bytes = fs::read(file).map_err(|e| format!("failed to read {}: {e}", file.display()))?;
    let tree: DocumentTree = serde_json::from_slice(&bytes)
        .map_err(|e| format!("failed to parse {}: {e}", file.display()))?;

    let items = extract(&tree, &witness).map_err(|e: ExtractError| e.to_string())?;
    Ok((witness, items))
}

/// Prints an error and returns a failure exit code.
pub(crate) fn fail(message: &str) -> ExitCode {
    eprintln!("error: {message}");
    ExitCode::FAILURE
}
