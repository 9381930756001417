//
// validate.rs
// Dicom-Iod-rs
//
// Checks Type 1 attributes of the modules present in a file and the consistency of its overlay planes.
//
// Dicom-Iod-rs contributors - October 2026

use std::path::Path;

use anyhow::{Context, Result};
use dicom::core::dictionary::DataDictionary;
use dicom::core::Tag;
use dicom::dictionary_std::StandardDataDictionary;
use dicom::object::open_file;

use crate::dataset::AttributeProvider;
use crate::models::ValidationSummary;
use crate::modules::{GeneralSeriesModule, MultiFrameFunctionalGroupsModule, OverlayPlaneModule};
use crate::pixel::UncompressedPixelData;
use crate::summary::is_pet_series;
use crate::tags;

const SOP_COMMON_REQUIRED: [Tag; 2] = [tags::SOP_CLASS_UID, tags::SOP_INSTANCE_UID];
const GENERAL_SERIES_REQUIRED: [Tag; 2] = [tags::MODALITY, tags::SERIES_INSTANCE_UID];
const PET_SERIES_REQUIRED: [Tag; 6] = [
    tags::SERIES_DATE,
    tags::SERIES_TIME,
    tags::UNITS,
    tags::COUNTS_SOURCE,
    tags::SERIES_TYPE,
    tags::DECAY_CORRECTION,
];
const MULTI_FRAME_REQUIRED: [Tag; 2] = [tags::PER_FRAME_FUNCTIONAL_GROUPS_SEQUENCE, tags::NUMBER_OF_FRAMES];

fn tag_label(tag: Tag) -> String {
    StandardDataDictionary::default()
        .by_tag(tag)
        .map(|entry| entry.alias.to_string())
        .unwrap_or_else(|| tag.to_string())
}

fn missing<P: AttributeProvider>(provider: &P, required: &[Tag], out: &mut Vec<String>) {
    out.extend(
        required
            .iter()
            .filter(|&&tag| !provider.has_value(tag))
            .map(|&tag| tag_label(tag)),
    );
}

/// Plane problems, one message per plane and issue.
pub fn overlay_problems<P: AttributeProvider>(provider: &P) -> Vec<String> {
    let module = OverlayPlaneModule::new(provider);
    let total_frames: i32 = provider.get_int(tags::NUMBER_OF_FRAMES).unwrap_or(1);
    let mut problems = Vec::new();
    for plane in module.planes() {
        let group = format!("{:04X}", plane.group());
        if plane.rows().is_none() || plane.columns().is_none() {
            problems.push(format!("overlay {group}: rows and columns are required"));
        }
        if plane.overlay_type().is_none() {
            problems.push(format!("overlay {group}: overlay type is required"));
        }
        if plane.origin().is_none() {
            problems.push(format!("overlay {group}: overlay origin is required"));
        }
        if plane.has_overlay_data() {
            if plane.bits_allocated() != Some(1) || plane.bit_position() != Some(0) {
                problems.push(format!(
                    "overlay {group}: separate overlay data needs bits allocated 1 and bit position 0"
                ));
            }
        } else if let Err(err) = UncompressedPixelData::from_provider(provider) {
            problems.push(format!("overlay {group}: embedded in unusable pixel data ({err})"));
        }
        match plane.is_valid_multi_frame_overlay(total_frames) {
            Ok(true) => {}
            Ok(false) => problems.push(format!(
                "overlay {group}: frames do not fit the {total_frames} image frame(s)"
            )),
            Err(err) => problems.push(format!("overlay {group}: {err}")),
        }
    }
    problems
}

pub fn validate_obj<P: AttributeProvider>(provider: &P) -> ValidationSummary {
    let mut missing_tags = Vec::new();
    missing(provider, &SOP_COMMON_REQUIRED, &mut missing_tags);
    if GeneralSeriesModule::new(provider).has_values() {
        missing(provider, &GENERAL_SERIES_REQUIRED, &mut missing_tags);
    }
    if is_pet_series(provider) {
        missing(provider, &PET_SERIES_REQUIRED, &mut missing_tags);
    }
    if MultiFrameFunctionalGroupsModule::new(provider).has_values() {
        missing(provider, &MULTI_FRAME_REQUIRED, &mut missing_tags);
    }
    let overlay_problems = overlay_problems(provider);

    ValidationSummary {
        valid: missing_tags.is_empty() && overlay_problems.is_empty(),
        missing_tags,
        overlay_problems,
        has_pixel_data: provider.attribute(tags::PIXEL_DATA).is_some(),
    }
}

/// Validates a file and prints the report; problems are reported, not returned as errors.
pub fn check_file(path: &Path) -> Result<ValidationSummary> {
    let obj = open_file(path)
        .with_context(|| format!("Failed to open DICOM file {}", path.display()))?;
    let summary = validate_obj(&obj);

    println!(
        "{}: {}",
        path.display(),
        if summary.valid { "valid" } else { "invalid" }
    );
    println!("  Transfer Syntax: {}", obj.meta().transfer_syntax());
    for tag in &summary.missing_tags {
        println!("  missing {}", tag);
    }
    for problem in &summary.overlay_problems {
        println!("  {}", problem);
    }
    Ok(summary)
}
