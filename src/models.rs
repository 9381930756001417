//
// models.rs
// Dicom-Iod-rs
//
// Serializable summaries of the typed modules, overlay planes and extraction runs.
//
// Dicom-Iod-rs contributors - October 2026

use serde::Serialize;

use crate::modules::{DimensionIndex, XRay3DAcquisition};

/// Identification fields shown by `info` and returned by the web API.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DatasetSummary {
    pub sop_class_uid: Option<String>,
    pub sop_instance_uid: Option<String>,
    pub transfer_syntax: Option<String>,
    pub patient: Option<PatientSummary>,
    pub series: Option<SeriesSummary>,
    pub overlays: Vec<OverlaySummary>,
    pub multi_frame: Option<MultiFrameSummary>,
    pub pet_series: Option<PetSeriesSummary>,
    pub film_box: Option<FilmBoxSummary>,
    pub tomosynthesis: Vec<XRay3DAcquisition>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PatientSummary {
    pub name: Option<String>,
    pub id: Option<String>,
    pub birth_date_time: Option<String>,
    pub sex: Option<String>,
    pub identity_removed: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SeriesSummary {
    pub modality: Option<String>,
    pub series_instance_uid: Option<String>,
    pub series_number: Option<i32>,
    pub series_date_time: Option<String>,
    pub description: Option<String>,
    pub body_part_examined: Option<String>,
    pub laterality: Option<String>,
}

/// One overlay plane; `embedded` is true when the bitmap still lives in the pixel data.
#[derive(Debug, Clone, Serialize)]
pub struct OverlaySummary {
    pub group: String,
    pub rows: Option<u16>,
    pub columns: Option<u16>,
    pub overlay_type: Option<String>,
    pub origin: Option<[i16; 2]>,
    pub bits_allocated: Option<u16>,
    pub bit_position: Option<u16>,
    pub frames: Option<i32>,
    pub label: Option<String>,
    pub description: Option<String>,
    pub embedded: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct MultiFrameSummary {
    pub number_of_frames: Option<i32>,
    pub per_frame_items: usize,
    pub has_shared_groups: bool,
    pub dimension_organization_type: Option<String>,
    pub dimensions: Vec<DimensionIndex>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PetSeriesSummary {
    pub units: Option<String>,
    pub counts_source: Option<String>,
    pub series_type: Option<String>,
    pub decay_correction: Option<String>,
    pub corrected_image: Vec<String>,
    pub number_of_slices: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct FilmBoxSummary {
    pub image_display_format: Option<String>,
    pub maximum_image_boxes: Option<u32>,
    pub film_orientation: Option<String>,
    pub film_size: Option<String>,
    pub film_width_inches: Option<f64>,
    pub film_height_inches: Option<f64>,
    pub magnification_type: Option<String>,
}

/// Outcome of extracting embedded overlays from one file.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionReport {
    pub input: String,
    pub output: Option<String>,
    pub extracted: bool,
    pub planes: Vec<String>,
}

/// Missing Type 1 attributes and inconsistent overlay planes.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationSummary {
    pub valid: bool,
    pub missing_tags: Vec<String>,
    pub overlay_problems: Vec<String>,
    pub has_pixel_data: bool,
}
