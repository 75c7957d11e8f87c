//! Rubric discovery on disk

use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{debug, warn};
use walkdir::WalkDir;

use super::defaults::find_default;
use super::Rubric;
use crate::document::DocumentFormat;
use crate::error::{GradeError, Result};
use crate::trace_time;

/// A rubric and the file it came from
#[derive(Debug, Clone)]
pub struct RubricFile {
    pub path: PathBuf,
    pub rubric: Rubric,
}

/// A document that looked like a rubric but failed to load
#[derive(Debug, Clone)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    pub rubrics: Vec<RubricFile>,
    pub skipped: Vec<SkippedFile>,
}

/// Load every rubric document under `dir`, sorted by path.
///
/// Files that fail to parse are collected in `skipped` instead of
/// aborting the scan.
pub fn scan_dir(dir: &Path) -> Result<ScanResult> {
    let start = Instant::now();
    if !dir.is_dir() {
        return Err(GradeError::DocumentNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut paths: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && DocumentFormat::is_document(e.path()))
        .map(|e| e.into_path())
        .collect();
    paths.sort();

    let mut result = ScanResult::default();
    for path in paths {
        match Rubric::load(&path) {
            Ok(rubric) => result.rubrics.push(RubricFile { path, rubric }),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "skipping rubric document");
                result.skipped.push(SkippedFile {
                    path,
                    reason: e.to_string(),
                });
            }
        }
    }

    debug!(
        found = result.rubrics.len(),
        skipped = result.skipped.len(),
        "scan_rubrics"
    );
    trace_time!(start, "scan_rubrics");
    Ok(result)
}

/// Load a rubric from a document path, or a built-in template by id
pub fn resolve(reference: &str) -> Result<Rubric> {
    let path = Path::new(reference);
    if path.exists() {
        return Rubric::load(path);
    }
    if let Some(rubric) = find_default(reference) {
        debug!(rubric = %rubric.id, "builtin_rubric");
        return Ok(rubric);
    }
    if DocumentFormat::is_document(path) {
        Err(GradeError::DocumentNotFound {
            path: path.to_path_buf(),
        })
    } else {
        Err(GradeError::not_found("rubric", reference))
    }
}
