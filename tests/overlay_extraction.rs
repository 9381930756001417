//
// overlay_extraction.rs
// Dicom-Iod-rs
//
// Embedded overlay extraction end to end: in memory, through files on disk, and the
// refusal paths for pixel data that cannot carry an overlay.
//
// Dicom-Iod-rs contributors - October 2026

mod common;

use dicom::core::{PrimitiveValue, Tag, VR};
use dicom::object::{open_file, InMemDicomObject};
use dicom_iod::extract::extract_file;
use dicom_iod::modules::{OverlayPlaneModule, OverlayType};
use dicom_iod::pixel::UncompressedPixelData;
use dicom_iod::{tags, AttributeProvider, AttributeProviderMut, IodError};
use tempfile::tempdir;

use common::*;

#[test]
fn multi_frame_overlay_moves_out_of_pixel_data() {
    let mut obj = embedded_overlay_image(2);
    let mut module = OverlayPlaneModule::new(&mut obj);
    assert!(module.extract_embedded_overlays().expect("extract"));

    let plane = module.plane(0).expect("plane");
    assert!(plane.has_overlay_data());
    assert_eq!(plane.overlay_data_vr(), Some(VR::OW));
    assert_eq!(plane.bits_allocated(), Some(1));
    assert_eq!(plane.bit_position(), Some(0));
    assert_eq!(plane.number_of_frames_in_overlay(), Some(2));
    assert_eq!(plane.overlay_type(), Some(OverlayType::Graphics));
    assert_eq!(plane.overlay_frame_bits(1).expect("frame 1"), expected_bits(0));
    assert_eq!(plane.overlay_frame_bits(2).expect("frame 2"), expected_bits(1));
    assert_eq!(plane.overlay_data_bit_offset(2).expect("offset"), 16);

    let words = pixel_words(&obj);
    assert_eq!(words.len(), 32);
    assert!(words.iter().all(|w| w & (1 << OVERLAY_BIT) == 0));
    assert_eq!(words[0], PIXEL_BASE);
    assert_eq!(words[31], PIXEL_BASE + 15);
}

#[test]
fn second_extraction_finds_nothing() {
    let mut obj = embedded_overlay_image(1);
    let mut module = OverlayPlaneModule::new(&mut obj);
    assert!(module.extract_embedded_overlays().expect("first"));
    assert!(!module.extract_embedded_overlays().expect("second"));
    let plane = module.plane(0).expect("plane");
    assert!(!plane.is_multi_frame());
    assert_eq!(plane.relevant_overlay_frame(1, 1).expect("frame"), Some(1));
}

#[test]
fn extraction_round_trips_through_files() {
    let dir = tempdir().expect("tmpdir");
    let input = dir.path().join("legacy.dcm");
    write_file(embedded_overlay_image(2), &input);

    let output = dir.path().join("modern.dcm");
    let report = extract_file(&input, Some(&output)).expect("extract");
    assert!(report.extracted);
    assert_eq!(report.planes, vec!["6000"]);
    assert_eq!(report.output.as_deref(), Some(output.display().to_string().as_str()));

    let written = open_file(&output).expect("open output");
    let module = OverlayPlaneModule::new(&written);
    let plane = module.plane(0).expect("plane");
    assert_eq!(plane.rows(), Some(SIDE));
    assert_eq!(plane.label().as_deref(), Some("LEGACY"));
    assert_eq!(plane.overlay_frame_bits(2).expect("frame 2"), expected_bits(1));
    let pixel_data = UncompressedPixelData::from_provider(&written).expect("pixels");
    assert_eq!(pixel_data.number_of_frames, 2);
    assert!(pixel_data
        .data()
        .chunks_exact(2)
        .all(|pair| u16::from_le_bytes([pair[0], pair[1]]) & (1 << OVERLAY_BIT) == 0));

    let again = extract_file(&output, None).expect("re-run");
    assert!(!again.extracted);
    assert!(again.output.is_none());
    assert!(!dir.path().join("modern-overlays.dcm").exists());
}

#[test]
fn absent_or_empty_pixel_data_is_not_an_error() {
    let mut obj = embedded_overlay_image(1);
    obj.remove(tags::PIXEL_DATA);
    assert!(!OverlayPlaneModule::new(&mut obj)
        .extract_embedded_overlays()
        .expect("missing pixel data"));

    obj.put_value(tags::PIXEL_DATA, VR::OW, PrimitiveValue::Empty);
    assert!(!OverlayPlaneModule::new(&mut obj)
        .extract_embedded_overlays()
        .expect("empty pixel data"));
}

#[test]
fn pixel_data_without_spare_bits_is_rejected() {
    let mut obj = embedded_overlay_image(1);
    obj.put_value(tags::BITS_STORED, VR::US, 16_u16);
    obj.put_value(tags::HIGH_BIT, VR::US, 15_u16);
    let err = OverlayPlaneModule::new(&mut obj)
        .extract_embedded_overlays()
        .expect_err("no spare bit");
    assert!(matches!(err, IodError::EmbeddedOverlay { .. }));
}

#[test]
fn colour_pixel_data_is_rejected() {
    let mut obj = embedded_overlay_image(1);
    obj.put_value(tags::SAMPLES_PER_PIXEL, VR::US, 3_u16);
    obj.put_words(tags::PIXEL_DATA, VR::OW, vec![PIXEL_BASE; 3 * 16]);
    let before = pixel_words(&obj);
    let err = OverlayPlaneModule::new(&mut obj)
        .extract_embedded_overlays()
        .expect_err("three samples per pixel");
    assert!(matches!(err, IodError::EmbeddedOverlay { .. }));
    assert_eq!(pixel_words(&obj), before);
}

#[test]
fn bit_position_inside_stored_bits_is_rejected() {
    for bit_position in [0_u16, 5, 11] {
        let mut obj = embedded_overlay_image(1);
        obj.put_value(Tag(0x6000, 0x0102), VR::US, bit_position);
        let before = pixel_words(&obj);
        let err = OverlayPlaneModule::new(&mut obj)
            .extract_embedded_overlays()
            .expect_err("overlapping bit");
        assert!(matches!(err, IodError::EmbeddedOverlay { .. }));
        assert_eq!(pixel_words(&obj), before);
        assert!(!OverlayPlaneModule::new(&obj)
            .plane(0)
            .expect("plane")
            .has_overlay_data());
    }
}

#[test]
fn extracted_frames_map_one_to_one() {
    let mut obj = embedded_overlay_image(3);
    let mut module = OverlayPlaneModule::new(&mut obj);
    assert!(module.extract_embedded_overlays().expect("extract"));
    let plane = module.plane(0).expect("plane");
    assert!(plane.is_valid_multi_frame_overlay(3).expect("valid"));
    assert!(!plane.is_valid_multi_frame_overlay(2).expect("too few frames"));
    for frame in 1..=3 {
        assert_eq!(plane.relevant_overlay_frame(frame, 3).expect("frame"), Some(frame));
    }
    for frame in [0, 4] {
        assert!(matches!(
            plane.relevant_overlay_frame(frame, 3),
            Err(IodError::ArgumentOutOfRange { .. })
        ));
    }
}

#[test]
fn planes_with_overlay_data_are_left_alone() {
    let mut obj = embedded_overlay_image(1);
    obj.put_words(Tag(0x6000, tags::OVERLAY_DATA), VR::OW, vec![0x0001]);
    let before = pixel_words(&obj);
    assert!(!OverlayPlaneModule::new(&mut obj)
        .extract_embedded_overlays()
        .expect("extract"));
    assert_eq!(pixel_words(&obj), before);
}

#[test]
fn embed_is_the_inverse_of_extract() {
    let mut obj = InMemDicomObject::new_empty();
    obj.put_value(tags::ROWS, VR::US, 2_u16);
    obj.put_value(tags::COLUMNS, VR::US, 4_u16);
    obj.put_value(tags::BITS_ALLOCATED, VR::US, 8_u16);
    obj.put_value(tags::BITS_STORED, VR::US, 7_u16);
    obj.put_value(tags::HIGH_BIT, VR::US, 6_u16);
    obj.put_bytes(tags::PIXEL_DATA, VR::OB, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    let bits = [true, false, false, true, true, true, false, false];

    let mut pixel_data = UncompressedPixelData::from_provider(&obj).expect("pixels");
    let mut module = OverlayPlaneModule::new(&mut obj);
    {
        let mut plane = module.plane_mut(3).expect("plane 3");
        plane.embed_overlay(&mut pixel_data, 7, &bits).expect("embed");
        plane.set_overlay_type(Some(OverlayType::Roi)).expect("type");
        plane.set_origin(Some([1, 1])).expect("origin");
        assert!(!plane.has_overlay_data());
    }
    assert!(module.has_overlay_plane(3));
    assert!(module.extract_embedded_overlays().expect("extract"));
    let plane = module.plane(3).expect("plane 3");
    assert_eq!(plane.group(), 0x6006);
    assert_eq!(plane.overlay_frame_bits(1).expect("bits"), bits.to_vec());
    assert_eq!(obj.get_bytes(tags::PIXEL_DATA), Some(vec![1, 2, 3, 4, 5, 6, 7, 8]));
}
