//
// summary.rs
// Dicom-Iod-rs
//
// Builds serializable summaries from the typed modules and prints them for the `info` command.
//
// Dicom-Iod-rs contributors - October 2026

use std::path::Path;

use anyhow::{Context, Result};
use dicom::object::{open_file, DefaultDicomObject};

use crate::dataset::AttributeProvider;
use crate::models::{
    DatasetSummary, FilmBoxSummary, MultiFrameSummary, OverlaySummary, PatientSummary,
    PetSeriesSummary, SeriesSummary,
};
use crate::modules::overlay::OverlayPlane;
use crate::modules::{
    BasicFilmBoxModule, BreastTomosynthesisAcquisitionModule, FilmSizeUnit, GeneralSeriesModule,
    MultiFrameDimensionModule, MultiFrameFunctionalGroupsModule, OverlayPlaneModule,
    PatientModule, PetSeriesModule, SopCommonModule,
};
use crate::tags;
use crate::values::format_datetime;

pub fn patient_summary<P: AttributeProvider>(provider: P) -> Option<PatientSummary> {
    let module = PatientModule::new(provider);
    if !module.has_values() {
        return None;
    }
    Some(PatientSummary {
        name: module.patients_name().map(|name| name.to_string()),
        id: module.patient_id(),
        birth_date_time: module.patients_birth_date_time().map(format_datetime),
        sex: module.patients_sex().map(|sex| sex.to_string()),
        identity_removed: module.patient_identity_removed().map(|flag| flag.to_string()),
    })
}

pub fn series_summary<P: AttributeProvider>(provider: P) -> Option<SeriesSummary> {
    let module = GeneralSeriesModule::new(provider);
    if !module.has_values() {
        return None;
    }
    Some(SeriesSummary {
        modality: module.modality().map(|m| m.to_string()),
        series_instance_uid: module.series_instance_uid(),
        series_number: module.series_number(),
        series_date_time: module.series_date_time().map(format_datetime),
        description: module.series_description(),
        body_part_examined: module.body_part_examined(),
        laterality: module.laterality().map(|l| l.to_string()),
    })
}

pub fn overlay_summary<P: AttributeProvider>(plane: &OverlayPlane<P>) -> OverlaySummary {
    OverlaySummary {
        group: format!("{:04X}", plane.group()),
        rows: plane.rows(),
        columns: plane.columns(),
        overlay_type: plane.overlay_type().map(|t| t.to_string()),
        origin: plane.origin(),
        bits_allocated: plane.bits_allocated(),
        bit_position: plane.bit_position(),
        frames: plane.number_of_frames_in_overlay(),
        label: plane.label(),
        description: plane.description(),
        embedded: !plane.has_overlay_data(),
    }
}

pub fn overlay_summaries<P: AttributeProvider>(provider: P) -> Vec<OverlaySummary> {
    let module = OverlayPlaneModule::new(provider);
    module.planes().iter().map(overlay_summary).collect()
}

pub fn multi_frame_summary<P: AttributeProvider>(provider: P) -> Option<MultiFrameSummary> {
    let groups = MultiFrameFunctionalGroupsModule::new(&provider);
    let dimensions = MultiFrameDimensionModule::new(&provider);
    if !groups.has_values() && !dimensions.has_values() {
        return None;
    }
    Some(MultiFrameSummary {
        number_of_frames: groups.number_of_frames(),
        per_frame_items: groups.per_frame_functional_groups().len(),
        has_shared_groups: groups.shared_functional_groups().is_some(),
        dimension_organization_type: dimensions.dimension_organization_type(),
        dimensions: dimensions.dimension_indices(),
    })
}

/// Series Date and Time are shared with General Series, so PET is keyed on the modality.
pub fn is_pet_series<P: AttributeProvider>(provider: &P) -> bool {
    provider.get_string(tags::MODALITY).as_deref() == Some("PT")
}

pub fn pet_series_summary<P: AttributeProvider>(provider: P) -> Option<PetSeriesSummary> {
    if !is_pet_series(&provider) {
        return None;
    }
    let module = PetSeriesModule::new(provider);
    Some(PetSeriesSummary {
        units: module.units().map(|u| u.to_string()),
        counts_source: module.counts_source().map(|c| c.to_string()),
        series_type: module.series_type(),
        decay_correction: module.decay_correction().map(|d| d.to_string()),
        corrected_image: module
            .corrected_image()
            .iter()
            .map(ToString::to_string)
            .collect(),
        number_of_slices: module.number_of_slices(),
    })
}

/// Unparseable display formats and film sizes are reported as absent.
pub fn film_box_summary<P: AttributeProvider>(provider: P) -> Option<FilmBoxSummary> {
    let module = BasicFilmBoxModule::new(provider);
    if !module.has_values() {
        return None;
    }
    let format = module.image_display_format().ok().flatten();
    let size = module.film_size_id().ok().flatten();
    Some(FilmBoxSummary {
        image_display_format: format.as_ref().map(ToString::to_string),
        maximum_image_boxes: format.as_ref().map(|f| f.maximum_image_boxes()),
        film_orientation: module.film_orientation().map(|o| o.to_string()),
        film_size: size.as_ref().map(ToString::to_string),
        film_width_inches: size.as_ref().map(|s| s.width(FilmSizeUnit::Inch)),
        film_height_inches: size.as_ref().map(|s| s.height(FilmSizeUnit::Inch)),
        magnification_type: module.magnification_type().map(|m| m.to_string()),
    })
}

/// Summary of every module present in the data set.
pub fn summarize<P: AttributeProvider>(provider: &P) -> DatasetSummary {
    let sop = SopCommonModule::new(provider);
    DatasetSummary {
        sop_class_uid: sop.sop_class_uid(),
        sop_instance_uid: sop.sop_instance_uid(),
        transfer_syntax: None,
        patient: patient_summary(provider),
        series: series_summary(provider),
        overlays: overlay_summaries(provider),
        multi_frame: multi_frame_summary(provider),
        pet_series: pet_series_summary(provider),
        film_box: film_box_summary(provider),
        tomosynthesis: BreastTomosynthesisAcquisitionModule::new(provider).acquisitions(),
    }
}

pub fn summarize_file(obj: &DefaultDicomObject) -> DatasetSummary {
    DatasetSummary {
        transfer_syntax: Some(obj.meta().transfer_syntax().trim_end_matches('\0').to_string()),
        ..summarize(obj)
    }
}

pub fn read_summary(path: &Path) -> Result<DatasetSummary> {
    let obj = open_file(path)
        .with_context(|| format!("Failed to open DICOM file {}", path.display()))?;
    Ok(summarize_file(&obj))
}

fn or_na(value: Option<&str>) -> &str {
    value.unwrap_or("N/A")
}

pub fn print_info(path: &Path) -> Result<()> {
    let summary = read_summary(path)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    println!("{}", "=".repeat(80));
    println!("DICOM File Information: {}", name);
    println!("{}", "=".repeat(80));
    println!("SOP Class:       {}", or_na(summary.sop_class_uid.as_deref()));
    println!("SOP Instance:    {}", or_na(summary.sop_instance_uid.as_deref()));
    println!("Transfer Syntax: {}", or_na(summary.transfer_syntax.as_deref()));

    if let Some(patient) = &summary.patient {
        println!("\nPATIENT");
        println!("  Name: {}", or_na(patient.name.as_deref()));
        println!("  ID:   {}", or_na(patient.id.as_deref()));
        println!("  Sex:  {}", or_na(patient.sex.as_deref()));
    }

    if let Some(series) = &summary.series {
        println!("\nSERIES");
        println!("  Modality: {}", or_na(series.modality.as_deref()));
        println!("  UID:      {}", or_na(series.series_instance_uid.as_deref()));
        if let Some(number) = series.series_number {
            println!("  Number:   {}", number);
        }
    }

    if let Some(pet) = &summary.pet_series {
        println!("\nPET SERIES");
        println!("  Units:         {}", or_na(pet.units.as_deref()));
        println!("  Counts Source: {}", or_na(pet.counts_source.as_deref()));
        println!("  Series Type:   {}", or_na(pet.series_type.as_deref()));
    }

    if let Some(multi_frame) = &summary.multi_frame {
        println!("\nMULTI-FRAME");
        if let Some(frames) = multi_frame.number_of_frames {
            println!("  Frames: {}", frames);
        }
        println!("  Per-frame items: {}", multi_frame.per_frame_items);
        println!("  Dimensions: {}", multi_frame.dimensions.len());
    }

    if let Some(film_box) = &summary.film_box {
        println!("\nFILM BOX");
        println!("  Display Format: {}", or_na(film_box.image_display_format.as_deref()));
        println!("  Film Size:      {}", or_na(film_box.film_size.as_deref()));
    }

    if !summary.tomosynthesis.is_empty() {
        println!("\nBREAST TOMOSYNTHESIS");
        println!("  Acquisitions: {}", summary.tomosynthesis.len());
    }

    println!("\nOVERLAYS");
    if summary.overlays.is_empty() {
        println!("  none");
    }
    for overlay in &summary.overlays {
        print_overlay(overlay);
    }
    Ok(())
}

pub fn print_overlay(overlay: &OverlaySummary) {
    println!(
        "  {} {}x{} type {} bit {} {}",
        overlay.group,
        overlay.rows.unwrap_or(0),
        overlay.columns.unwrap_or(0),
        or_na(overlay.overlay_type.as_deref()),
        overlay.bit_position.unwrap_or(0),
        if overlay.embedded { "(embedded)" } else { "(separate)" }
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicom::core::VR;
    use dicom::object::InMemDicomObject;

    use crate::dataset::AttributeProviderMut;

    #[test]
    fn absent_modules_are_skipped() {
        let mut obj = InMemDicomObject::new_empty();
        obj.put_string(tags::SOP_INSTANCE_UID, VR::UI, "1.2.3");
        obj.put_string(tags::PATIENT_ID, VR::LO, "PAT-7");
        let summary = summarize(&obj);
        assert_eq!(summary.sop_instance_uid.as_deref(), Some("1.2.3"));
        assert_eq!(summary.patient.and_then(|p| p.id).as_deref(), Some("PAT-7"));
        assert!(summary.series.is_none());
        assert!(summary.pet_series.is_none());
        assert!(summary.overlays.is_empty());
    }

    #[test]
    fn film_box_reports_geometry() {
        let mut obj = InMemDicomObject::new_empty();
        obj.put_string(tags::IMAGE_DISPLAY_FORMAT, VR::ST, "STANDARD\\2,3");
        obj.put_string(tags::FILM_SIZE_ID, VR::CS, "8INX10IN");
        let film_box = film_box_summary(&obj).unwrap();
        assert_eq!(film_box.maximum_image_boxes, Some(6));
        assert_eq!(film_box.film_width_inches, Some(8.0));
        assert_eq!(film_box.film_height_inches, Some(10.0));
    }
}
