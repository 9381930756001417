//
// batch.rs
// Dicom-Iod-rs
//
// Runs overlay extraction, validation or summaries over every DICOM file of a directory in parallel.
//
// Dicom-Iod-rs contributors - October 2026

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, warn};
use walkdir::WalkDir;

use crate::cli::BatchOperation;
use crate::{extract, summary, validate};

/// Per-directory counts reported at the end of a run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub files: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub changed: usize,
}

/// Files ending in `.dcm` (any case) below `dir`.
pub fn dicom_files(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry
                .path()
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("dcm"))
        })
        .map(|entry| entry.into_path())
        .collect()
}

fn output_for(input: &Path, dir: &Path, output_dir: Option<&Path>) -> Option<PathBuf> {
    let output_dir = output_dir?;
    let relative = input.strip_prefix(dir).unwrap_or(input);
    let target = output_dir.join(relative);
    Some(extract::default_output_path(&target))
}

/// Returns whether the file was changed (overlays extracted) or passed validation.
fn process_file(
    path: &Path,
    dir: &Path,
    operation: BatchOperation,
    output_dir: Option<&Path>,
) -> Result<bool> {
    match operation {
        BatchOperation::ExtractOverlays => {
            let output = output_for(path, dir, output_dir);
            if let Some(parent) = output.as_deref().and_then(Path::parent) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            Ok(extract::extract_file(path, output.as_deref())?.extracted)
        }
        BatchOperation::Validate => Ok(validate::check_file(path)?.valid),
        BatchOperation::Summarize => {
            let summary = summary::read_summary(path)?;
            println!("{}: {}", path.display(), serde_json::to_string(&summary)?);
            Ok(false)
        }
    }
}

pub fn process_directory(
    dir: &Path,
    operation: BatchOperation,
    output_dir: Option<&Path>,
) -> Result<BatchReport> {
    let files = dicom_files(dir);
    info!(directory = %dir.display(), operation = ?operation, files = files.len(), "starting batch");

    let outcomes: Vec<Result<bool>> = files
        .par_iter()
        .map(|path| process_file(path, dir, operation, output_dir))
        .collect();

    let mut report = BatchReport {
        files: files.len(),
        ..Default::default()
    };
    for (path, outcome) in files.iter().zip(outcomes) {
        match outcome {
            Ok(changed) => {
                report.succeeded += 1;
                if changed {
                    report.changed += 1;
                }
            }
            Err(err) => {
                report.failed += 1;
                warn!(file = %path.display(), "{:#}", err);
            }
        }
    }
    info!(
        succeeded = report.succeeded,
        failed = report.failed,
        changed = report.changed,
        "batch finished"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn finds_dicom_files_recursively() {
        let root = tempdir().expect("tmpdir");
        fs::create_dir_all(root.path().join("series/1")).expect("mkdir");
        fs::write(root.path().join("a.dcm"), b"").expect("write");
        fs::write(root.path().join("series/1/b.DCM"), b"").expect("write");
        fs::write(root.path().join("notes.txt"), b"").expect("write");
        let mut files = dicom_files(root.path());
        files.sort();
        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("a.dcm"));
    }

    #[test]
    fn outputs_mirror_the_input_tree() {
        let output = output_for(
            Path::new("/in/series/1/b.dcm"),
            Path::new("/in"),
            Some(Path::new("/out")),
        );
        assert_eq!(output, Some(PathBuf::from("/out/series/1/b-overlays.dcm")));
        assert_eq!(output_for(Path::new("/in/a.dcm"), Path::new("/in"), None), None);
    }

    #[test]
    fn unreadable_files_are_counted_as_failures() {
        let root = tempdir().expect("tmpdir");
        fs::write(root.path().join("broken.dcm"), b"not dicom").expect("write");
        let report = process_directory(root.path(), BatchOperation::Summarize, None).expect("batch");
        assert_eq!(report.files, 1);
        assert_eq!(report.failed, 1);
        assert_eq!(report.succeeded, 0);
    }
}
