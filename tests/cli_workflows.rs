//
// cli_workflows.rs
// Dicom-Iod-rs
//
// The library entry points behind the CLI verbs, run against files on disk.
//
// Dicom-Iod-rs contributors - October 2026

mod common;

use std::fs;

use dicom_iod::batch::process_directory;
use dicom_iod::cli::BatchOperation;
use dicom_iod::{dump, summary, validate};
use tempfile::tempdir;

use common::*;

#[test]
fn batch_extraction_mirrors_the_input_tree() {
    let input = tempdir().expect("input dir");
    let output = tempdir().expect("output dir");
    fs::create_dir_all(input.path().join("study/series")).expect("mkdir");
    write_file(embedded_overlay_image(1), &input.path().join("a.dcm"));
    write_file(
        embedded_overlay_image(2),
        &input.path().join("study/series/b.dcm"),
    );
    fs::write(input.path().join("broken.dcm"), b"not dicom").expect("write");

    let report = process_directory(
        input.path(),
        BatchOperation::ExtractOverlays,
        Some(output.path()),
    )
    .expect("batch");
    assert_eq!(report.files, 3);
    assert_eq!(report.succeeded, 2);
    assert_eq!(report.failed, 1);
    assert_eq!(report.changed, 2);

    let nested = output.path().join("study/series/b-overlays.dcm");
    assert!(output.path().join("a-overlays.dcm").exists());
    assert!(nested.exists());

    let summary = summary::read_summary(&nested).expect("summary");
    assert_eq!(summary.overlays.len(), 1);
    assert!(!summary.overlays[0].embedded);
    assert_eq!(summary.overlays[0].frames, Some(2));

    let validation = process_directory(output.path(), BatchOperation::Validate, None)
        .expect("validate batch");
    assert_eq!(validation.files, 2);
    assert_eq!(validation.failed, 0);
    assert_eq!(validation.changed, 2);
}

#[test]
fn legacy_file_summary_serializes() {
    let dir = tempdir().expect("tmpdir");
    let path = dir.path().join("legacy.dcm");
    write_file(embedded_overlay_image(1), &path);

    let summary = summary::read_summary(&path).expect("summary");
    let json = serde_json::to_value(&summary).expect("json");
    assert_eq!(json["transfer_syntax"], "1.2.840.10008.1.2.1");
    assert_eq!(json["sop_instance_uid"], INSTANCE_UID);
    assert_eq!(json["overlays"][0]["group"], "6000");
    assert_eq!(json["overlays"][0]["embedded"], true);
    assert_eq!(json["overlays"][0]["bit_position"], 12);
    assert_eq!(json["patient"]["id"], "OVL-001");
}

#[test]
fn dump_groups_attributes_by_module() {
    let dir = tempdir().expect("tmpdir");
    let path = dir.path().join("legacy.dcm");
    write_file(embedded_overlay_image(1), &path);

    let text = dump::dump_to_string(&path, 4, 64).expect("dump");
    assert!(text.contains("[Patient]"));
    assert!(text.contains("[Overlay Plane]"));
    assert!(text.contains("[SOP Common]"));
    assert!(text.contains("LEGACY"));
    assert!(!text.contains("[Basic Film Box]"));
}

#[test]
fn check_file_reports_missing_type_one_attributes() {
    let dir = tempdir().expect("tmpdir");
    let path = dir.path().join("legacy.dcm");
    let mut obj = embedded_overlay_image(1);
    dicom_iod::AttributeProviderMut::remove(&mut obj, dicom_iod::tags::SERIES_INSTANCE_UID);
    write_file(obj, &path);

    let report = validate::check_file(&path).expect("validate");
    assert!(!report.valid);
    assert_eq!(report.missing_tags, vec!["SeriesInstanceUID"]);
    assert!(report.overlay_problems.is_empty());
    assert!(report.has_pixel_data);
}
