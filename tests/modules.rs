//
// modules.rs
// Dicom-Iod-rs
//
// Typed modules written through their setters, saved to disk and read back through
// their getters and the summary layer.
//
// Dicom-Iod-rs contributors - October 2026

mod common;

use chrono::NaiveDate;
use dicom::core::{Tag, VR};
use dicom::object::{open_file, InMemDicomObject};
use dicom_iod::modules::general_series::Modality;
use dicom_iod::modules::pet_series::{CorrectedImage, CountsSource, DecayCorrection, PetUnits};
use dicom_iod::modules::{
    BreastTomosynthesisAcquisitionModule, DimensionIndex, FunctionalGroup, GeneralSeriesModule,
    MultiFrameDimensionModule, MultiFrameFunctionalGroupsModule, PatientModule, PatientSex,
    PetSeriesModule, SopCommonModule, XRay3DAcquisition,
};
use dicom_iod::sequences::{
    AnnotationUnits, GraphicAnnotationSequenceItem, GraphicObject, GraphicType, TextObject,
};
use dicom_iod::values::PersonName;
use dicom_iod::{summary, tags, validate, AttributeProvider, AttributeProviderMut, IodError};
use tempfile::tempdir;

const PET_IMAGE: &str = "1.2.840.10008.5.1.4.1.1.128";

fn pet_dataset() -> InMemDicomObject {
    let mut obj = InMemDicomObject::new_empty();
    let series_time = NaiveDate::from_ymd_opt(2024, 3, 5).and_then(|d| d.and_hms_opt(8, 30, 0));

    let mut sop = SopCommonModule::new(&mut obj);
    sop.set_sop_class_uid(PET_IMAGE).unwrap();
    sop.set_sop_instance_uid(common::INSTANCE_UID).unwrap();
    sop.set_specific_character_set(Some("ISO_IR 100"));

    let mut patient = PatientModule::new(&mut obj);
    patient.set_patients_name(Some(&PersonName::new("Doe", "Jane")));
    patient.set_patient_id(Some("PET-042"));
    patient.set_patients_sex(Some(PatientSex::Female));

    let mut series = GeneralSeriesModule::new(&mut obj);
    series.set_modality(Some(Modality::Pt)).unwrap();
    series
        .set_series_instance_uid("1.2.826.0.1.3680043.2.1125.90")
        .unwrap();
    series.set_series_number(Some(3));

    let mut pet = PetSeriesModule::new(&mut obj);
    pet.set_series_date_time(series_time).unwrap();
    pet.set_units(Some(PetUnits::BecquerelsPerMillilitre)).unwrap();
    pet.set_counts_source(Some(CountsSource::Emission)).unwrap();
    pet.set_series_type("STATIC", "IMAGE").unwrap();
    pet.set_decay_correction(Some(DecayCorrection::Start)).unwrap();
    pet.set_number_of_slices(2);
    pet.set_corrected_image(&[CorrectedImage::Decay, CorrectedImage::Attenuation]);

    let mut groups = MultiFrameFunctionalGroupsModule::new(&mut obj);
    groups.set_number_of_frames(2);
    let mut orientation = InMemDicomObject::new_empty();
    orientation.put_f64s(
        tags::IMAGE_ORIENTATION_PATIENT,
        VR::DS,
        &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
    );
    groups.put_shared_group(FunctionalGroup::PlaneOrientation, orientation);
    for frame in 1..=2 {
        let mut position = InMemDicomObject::new_empty();
        position.put_f64s(
            tags::IMAGE_POSITION_PATIENT,
            VR::DS,
            &[0.0, 0.0, f64::from(frame) * 2.5],
        );
        groups
            .put_frame_group(frame, FunctionalGroup::PlanePosition, position)
            .unwrap();
    }

    let mut dimensions = MultiFrameDimensionModule::new(&mut obj);
    dimensions
        .set_dimension_organization_uids(&["1.2.826.0.1.3680043.2.1125.91"])
        .unwrap();
    dimensions
        .set_dimension_indices(&[DimensionIndex::new(tags::IMAGE_POSITION_PATIENT)
            .with_functional_group(tags::PLANE_POSITION_SEQUENCE)])
        .unwrap();
    obj
}

#[test]
fn modules_survive_a_file_round_trip() {
    let dir = tempdir().expect("tmpdir");
    let path = dir.path().join("pet.dcm");
    common::write_file(pet_dataset(), &path);
    let obj = open_file(&path).expect("open");

    let patient = PatientModule::new(&obj);
    assert_eq!(patient.patients_name().map(|n| n.family_name), Some("Doe".to_string()));
    assert_eq!(patient.patients_sex(), Some(PatientSex::Female));

    let pet = PetSeriesModule::new(&obj);
    assert_eq!(pet.units(), Some(PetUnits::BecquerelsPerMillilitre));
    assert_eq!(pet.series_type().as_deref(), Some("STATIC\\IMAGE"));
    assert_eq!(
        pet.corrected_image(),
        vec![CorrectedImage::Decay, CorrectedImage::Attenuation]
    );
    assert_eq!(
        pet.series_date_time(),
        NaiveDate::from_ymd_opt(2024, 3, 5).and_then(|d| d.and_hms_opt(8, 30, 0))
    );

    let groups = MultiFrameFunctionalGroupsModule::new(&obj);
    let (_, frame_specific) = groups
        .functional_group(2, FunctionalGroup::PlanePosition)
        .unwrap()
        .expect("plane position");
    assert!(frame_specific);
    let (_, frame_specific) = groups
        .functional_group(2, FunctionalGroup::PlaneOrientation)
        .unwrap()
        .expect("plane orientation");
    assert!(!frame_specific);
    let position = groups
        .frame_attribute(2, tags::IMAGE_POSITION_PATIENT)
        .unwrap()
        .expect("position");
    assert_eq!(position.to_multi_float64().expect("floats"), vec![0.0, 0.0, 5.0]);
    assert!(groups.frame_attribute(1, tags::WINDOW_CENTER).unwrap().is_none());
    assert!(matches!(
        groups.frame_attribute(0, tags::IMAGE_POSITION_PATIENT),
        Err(IodError::ArgumentOutOfRange { .. })
    ));

    let dimensions = MultiFrameDimensionModule::new(&obj);
    let (position, index) = dimensions
        .find_dimension_index(tags::IMAGE_POSITION_PATIENT, None, None, None)
        .expect("dimension");
    assert_eq!(position, 0);
    assert_eq!(index.functional_group_pointer, Some(tags::PLANE_POSITION_SEQUENCE));

    let summary = summary::summarize_file(&obj);
    assert_eq!(summary.sop_class_uid.as_deref(), Some(PET_IMAGE));
    assert_eq!(summary.pet_series.as_ref().and_then(|p| p.units.as_deref()), Some("BQML"));
    assert_eq!(summary.multi_frame.as_ref().map(|m| m.per_frame_items), Some(2));
    assert!(validate::validate_obj(&obj).valid);
}

#[test]
fn missing_pet_attributes_fail_validation() {
    let mut obj = pet_dataset();
    obj.remove(tags::DECAY_CORRECTION);
    let report = validate::validate_obj(&obj);
    assert!(!report.valid);
    assert_eq!(report.missing_tags, vec!["DecayCorrection"]);
}

#[test]
fn type_one_setters_refuse_clearing() {
    let mut obj = pet_dataset();
    let mut pet = PetSeriesModule::new(&mut obj);
    assert!(matches!(
        pet.set_units(None),
        Err(IodError::RequiredAttribute { .. })
    ));
    assert_eq!(pet.units(), Some(PetUnits::BecquerelsPerMillilitre));
    let mut sop = SopCommonModule::new(&mut obj);
    assert!(sop.set_sop_instance_uid("").is_err());
    assert_eq!(sop.sop_instance_uid().as_deref(), Some(common::INSTANCE_UID));
}

#[test]
fn tomosynthesis_and_annotations_nest_in_sequences() {
    let mut obj = InMemDicomObject::new_empty();
    let acquisition = XRay3DAcquisition {
        field_of_view_shape: "RECTANGLE".into(),
        kvp: Some(28.0),
        primary_positioner_scan_arc: Some(25.0),
        ..Default::default()
    };
    BreastTomosynthesisAcquisitionModule::new(&mut obj)
        .set_acquisitions(&[acquisition.clone()])
        .unwrap();

    let mut annotation = GraphicAnnotationSequenceItem::empty();
    annotation.set_graphic_layer("FINDINGS").unwrap();
    annotation
        .append_text_object(&TextObject::new("Mass, upper outer quadrant"))
        .unwrap();
    annotation
        .append_graphic_object(&GraphicObject::new(
            AnnotationUnits::Pixel,
            GraphicType::Circle,
            vec![[120.0, 80.0], [130.0, 80.0]],
        ))
        .unwrap();
    obj.put_items(tags::GRAPHIC_ANNOTATION_SEQUENCE, vec![annotation.into_inner()]);

    let dir = tempdir().expect("tmpdir");
    let path = dir.path().join("tomo.dcm");
    obj.put_string(tags::SOP_CLASS_UID, VR::UI, common::SECONDARY_CAPTURE);
    obj.put_string(tags::SOP_INSTANCE_UID, VR::UI, common::INSTANCE_UID);
    common::write_file(obj, &path);
    let read = open_file(&path).expect("open");

    let acquisitions = BreastTomosynthesisAcquisitionModule::new(&read).acquisitions();
    assert_eq!(acquisitions, vec![acquisition]);

    let item = read
        .get_item(tags::GRAPHIC_ANNOTATION_SEQUENCE, 0)
        .expect("annotation item");
    let annotation = GraphicAnnotationSequenceItem::new(item);
    assert_eq!(annotation.graphic_layer().as_deref(), Some("FINDINGS"));
    assert_eq!(
        annotation.text_objects()[0].unformatted_text_value,
        "Mass, upper outer quadrant"
    );
    let graphics = annotation.graphic_objects();
    assert_eq!(graphics.len(), 1);
    assert_eq!(graphics[0].graphic_type, GraphicType::Circle);
    assert_eq!(graphics[0].graphic_data[1], [130.0, 80.0]);
    assert_eq!(item.vr(Tag(0x0070, 0x0009)), Some(VR::SQ));
}
