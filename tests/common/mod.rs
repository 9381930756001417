//
// mod.rs
// Dicom-Iod-rs
//
// Fixtures shared by the integration tests: legacy images with overlays embedded in
// unused pixel bits, written to disk with a file meta group.
//
// Dicom-Iod-rs contributors - October 2026

#![allow(dead_code)]

use std::path::Path;

use dicom::core::{Tag, VR};
use dicom::dictionary_std::StandardDataDictionary;
use dicom::object::{FileDicomObject, FileMetaTableBuilder, InMemDicomObject};
use dicom::transfer_syntax::entries::EXPLICIT_VR_LITTLE_ENDIAN;
use dicom_iod::modules::{OverlayPlaneModule, OverlayType};
use dicom_iod::tags;
use dicom_iod::AttributeProviderMut;

pub const SECONDARY_CAPTURE: &str = "1.2.840.10008.5.1.4.1.1.7";
pub const INSTANCE_UID: &str = "1.2.826.0.1.3680043.2.1125.77";
pub const SIDE: u16 = 4;
pub const PIXEL_BASE: u16 = 100;
pub const OVERLAY_BIT: u16 = 12;

/// Frame 1 marks the diagonal, every other frame the anti-diagonal.
pub fn overlay_bit(frame: usize, pixel: usize) -> bool {
    let side = usize::from(SIDE);
    let (row, column) = (pixel / side, pixel % side);
    if frame == 0 {
        row == column
    } else {
        row + column == side - 1
    }
}

pub fn expected_bits(frame: usize) -> Vec<bool> {
    (0..usize::from(SIDE * SIDE))
        .map(|pixel| overlay_bit(frame, pixel))
        .collect()
}

/// 16-bit MONOCHROME2 image, 12 bits stored, with plane 6000 embedded at bit 12.
pub fn embedded_overlay_image(frames: u16) -> InMemDicomObject {
    let mut obj = InMemDicomObject::new_empty();
    obj.put_string(tags::SOP_CLASS_UID, VR::UI, SECONDARY_CAPTURE);
    obj.put_string(tags::SOP_INSTANCE_UID, VR::UI, INSTANCE_UID);
    obj.put_string(tags::MODALITY, VR::CS, "OT");
    obj.put_string(tags::SERIES_INSTANCE_UID, VR::UI, "1.2.826.0.1.3680043.2.1125.78");
    obj.put_string(tags::PATIENT_ID, VR::LO, "OVL-001");
    obj.put_value(tags::ROWS, VR::US, SIDE);
    obj.put_value(tags::COLUMNS, VR::US, SIDE);
    obj.put_value(tags::SAMPLES_PER_PIXEL, VR::US, 1_u16);
    obj.put_string(tags::PHOTOMETRIC_INTERPRETATION, VR::CS, "MONOCHROME2");
    obj.put_value(tags::BITS_ALLOCATED, VR::US, 16_u16);
    obj.put_value(tags::BITS_STORED, VR::US, 12_u16);
    obj.put_value(tags::HIGH_BIT, VR::US, 11_u16);
    obj.put_value(tags::PIXEL_REPRESENTATION, VR::US, 0_u16);
    obj.put_int(tags::NUMBER_OF_FRAMES, frames);

    let pixels = usize::from(SIDE * SIDE);
    let words = (0..usize::from(frames))
        .flat_map(|frame| {
            (0..pixels).map(move |pixel| {
                let value = PIXEL_BASE + pixel as u16;
                if overlay_bit(frame, pixel) {
                    value | (1 << OVERLAY_BIT)
                } else {
                    value
                }
            })
        })
        .collect();
    obj.put_words(tags::PIXEL_DATA, VR::OW, words);

    {
        let mut module = OverlayPlaneModule::new(&mut obj);
        let mut plane = module.plane_mut(0).expect("plane 0");
        plane.set_rows(SIDE);
        plane.set_columns(SIDE);
        plane.set_overlay_type(Some(OverlayType::Graphics)).expect("type");
        plane.set_origin(Some([1, 1])).expect("origin");
        plane.set_label(Some("LEGACY"));
    }
    obj.put_value(Tag(0x6000, tags::OVERLAY_BIT_POSITION), VR::US, OVERLAY_BIT);
    obj.put_value(Tag(0x6000, tags::OVERLAY_BITS_ALLOCATED), VR::US, 16_u16);
    obj
}

/// Pixel Data read back as 16-bit samples.
pub fn pixel_words(obj: &InMemDicomObject) -> Vec<u16> {
    use dicom_iod::AttributeProvider;
    obj.get_bytes(tags::PIXEL_DATA)
        .expect("pixel data")
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect()
}

pub fn write_file(obj: InMemDicomObject, path: &Path) {
    let meta = FileMetaTableBuilder::new()
        .transfer_syntax(EXPLICIT_VR_LITTLE_ENDIAN.uid())
        .media_storage_sop_class_uid(SECONDARY_CAPTURE)
        .media_storage_sop_instance_uid(INSTANCE_UID)
        .build()
        .expect("meta");
    let mut file_obj = FileDicomObject::new_empty_with_dict_and_meta(StandardDataDictionary, meta);
    for element in obj {
        file_obj.put(element);
    }
    file_obj.write_to_file(path).expect("write fixture");
}
