//
// extract.rs
// Dicom-Iod-rs
//
// File-level overlay extraction: opens a DICOM file, moves embedded overlay bitmaps into
// Overlay Data and writes the derived file.
//
// Dicom-Iod-rs contributors - October 2026

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dicom::object::open_file;
use tracing::info;

use crate::models::ExtractionReport;
use crate::modules::OverlayPlaneModule;

/// `<stem>-overlays.dcm` next to the input.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "dicom".to_string());
    input.with_file_name(format!("{}-overlays.dcm", stem))
}

/// Extracts every embedded overlay plane of `input`.
///
/// The derived file is only written when something was extracted.
pub fn extract_file(input: &Path, output: Option<&Path>) -> Result<ExtractionReport> {
    let mut obj = open_file(input)
        .with_context(|| format!("Failed to open DICOM file {}", input.display()))?;

    let mut module = OverlayPlaneModule::new(&mut obj);
    let planes: Vec<String> = module
        .planes()
        .iter()
        .filter(|plane| !plane.has_overlay_data())
        .map(|plane| format!("{:04X}", plane.group()))
        .collect();
    let extracted = module
        .extract_embedded_overlays()
        .with_context(|| format!("Failed to extract overlays from {}", input.display()))?;

    let output = if extracted {
        let path = output
            .map(Path::to_path_buf)
            .unwrap_or_else(|| default_output_path(input));
        obj.write_to_file(&path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!(input = %input.display(), output = %path.display(), planes = planes.len(), "extracted embedded overlays");
        Some(path.display().to_string())
    } else {
        None
    };

    Ok(ExtractionReport {
        input: input.display().to_string(),
        output,
        extracted,
        planes: if extracted { planes } else { Vec::new() },
    })
}
