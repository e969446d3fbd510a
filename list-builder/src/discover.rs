use std::fs;
use std::path::{Path, PathBuf};

use crate::error::BuildError;

/// Where to look for per-source grouped pages.
#[derive(Debug, Clone)]
pub struct SourceQuery {
    pub base_dir: PathBuf,
    /// File name suffix, e.g. "_leetcode_grouped.html".
    pub suffix: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    /// Directory name, capitalised.
    pub tag: String,
}

/// Find `<base_dir>/<dir>/<name><suffix>` files, sorted by path.
pub fn discover_sources(query: &SourceQuery) -> Result<Vec<SourceFile>, BuildError> {
    let base_dir = &query.base_dir;
    if !base_dir.is_dir() {
        return Err(BuildError::BaseDirMissing(base_dir.clone()));
    }

    let mut sources = Vec::new();
    for dir in read_dir_paths(base_dir)? {
        if !dir.is_dir() {
            continue;
        }
        let tag = capitalize(&dir.file_name().unwrap_or_default().to_string_lossy());

        for path in read_dir_paths(&dir)? {
            let matches = path.is_file()
                && path
                    .file_name()
                    .map_or(false, |name| name.to_string_lossy().ends_with(&query.suffix));
            if matches {
                sources.push(SourceFile {
                    path,
                    tag: tag.clone(),
                });
            }
        }
    }

    sources.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(sources)
}

fn read_dir_paths(dir: &Path) -> Result<Vec<PathBuf>, BuildError> {
    fs::read_dir(dir)
        .map_err(|e| BuildError::io(dir, e))?
        .map(|entry| entry.map(|e| e.path()).map_err(|e| BuildError::io(dir, e)))
        .collect()
}

/// "microsoft" -> "Microsoft", "JPMORGAN" -> "Jpmorgan"
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
