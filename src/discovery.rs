// src/discovery.rs
use std::fs;
use std::path::Path;

use tracing::debug;
use walkdir::WalkDir;

use crate::error::{RankError, Result};

/// Reads every `*.{extension}` file directly inside `dir`.
///
/// Returns `(file name, content)` pairs sorted by file name. Subdirectories
/// are not descended into.
///
/// # Errors
/// Returns `Io` if the directory or a document cannot be read and
/// `EmptyCorpus` if no document matches.
pub fn read_corpus(dir: &Path, extension: &str) -> Result<Vec<(String, String)>> {
    let suffix = format!(".{}", extension.trim_start_matches('.'));
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    let mut documents = Vec::new();
    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if !name.ends_with(&suffix) {
            continue;
        }
        let content = fs::read_to_string(entry.path()).map_err(|source| RankError::Io {
            source,
            path: entry.path().to_path_buf(),
        })?;
        documents.push((name, content));
    }

    debug!(dir = %dir.display(), documents = documents.len(), "read corpus");
    if documents.is_empty() {
        return Err(RankError::EmptyCorpus {
            path: dir.to_path_buf(),
        });
    }
    Ok(documents)
}
