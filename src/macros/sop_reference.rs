//
// sop_reference.rs
// Dicom-Iod-rs
//
// SOP Instance Reference and Image SOP Instance Reference macros (Tables 10-11 and 10-3).
//
// Dicom-Iod-rs contributors - October 2026

use dicom::core::{Tag, VR};
use dicom::object::InMemDicomObject;
use serde::Serialize;

use crate::dataset::{AttributeProvider, AttributeProviderMut};
use crate::tags;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SopInstanceReference {
    pub referenced_sop_class_uid: String,
    pub referenced_sop_instance_uid: String,
}

impl SopInstanceReference {
    pub fn new(class_uid: impl Into<String>, instance_uid: impl Into<String>) -> Self {
        Self {
            referenced_sop_class_uid: class_uid.into(),
            referenced_sop_instance_uid: instance_uid.into(),
        }
    }

    pub fn from_item(item: &InMemDicomObject) -> Self {
        Self {
            referenced_sop_class_uid: item
                .get_string(tags::REFERENCED_SOP_CLASS_UID)
                .unwrap_or_default(),
            referenced_sop_instance_uid: item
                .get_string(tags::REFERENCED_SOP_INSTANCE_UID)
                .unwrap_or_default(),
        }
    }

    pub fn to_item(&self) -> InMemDicomObject {
        let mut item = InMemDicomObject::new_empty();
        item.put_string(tags::REFERENCED_SOP_CLASS_UID, VR::UI, &self.referenced_sop_class_uid);
        item.put_string(
            tags::REFERENCED_SOP_INSTANCE_UID,
            VR::UI,
            &self.referenced_sop_instance_uid,
        );
        item
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImageSopInstanceReference {
    #[serde(flatten)]
    pub reference: SopInstanceReference,
    /// 1-based frame numbers; empty means the whole instance.
    pub referenced_frame_numbers: Vec<i32>,
}

impl ImageSopInstanceReference {
    pub fn from_item(item: &InMemDicomObject) -> Self {
        Self {
            reference: SopInstanceReference::from_item(item),
            referenced_frame_numbers: item.get_ints(tags::REFERENCED_FRAME_NUMBER),
        }
    }

    pub fn to_item(&self) -> InMemDicomObject {
        let mut item = self.reference.to_item();
        if !self.referenced_frame_numbers.is_empty() {
            item.put_ints(tags::REFERENCED_FRAME_NUMBER, &self.referenced_frame_numbers);
        }
        item
    }
}

/// First item of a single-item reference sequence.
pub fn get_reference<P: AttributeProvider + ?Sized>(
    provider: &P,
    tag: Tag,
) -> Option<SopInstanceReference> {
    provider.get_item(tag, 0).map(SopInstanceReference::from_item)
}

pub fn get_references<P: AttributeProvider + ?Sized>(
    provider: &P,
    tag: Tag,
) -> Vec<SopInstanceReference> {
    provider
        .get_items(tag)
        .map(|items| items.iter().map(SopInstanceReference::from_item).collect())
        .unwrap_or_default()
}

/// Replaces a reference sequence; an empty list removes it.
pub fn put_references<P: AttributeProviderMut + ?Sized>(
    provider: &mut P,
    tag: Tag,
    references: &[SopInstanceReference],
) {
    provider.put_items_or_remove(tag, references.iter().map(SopInstanceReference::to_item).collect());
}

pub fn get_image_references<P: AttributeProvider + ?Sized>(
    provider: &P,
    tag: Tag,
) -> Vec<ImageSopInstanceReference> {
    provider
        .get_items(tag)
        .map(|items| items.iter().map(ImageSopInstanceReference::from_item).collect())
        .unwrap_or_default()
}

pub fn put_image_references<P: AttributeProviderMut + ?Sized>(
    provider: &mut P,
    tag: Tag,
    references: &[ImageSopInstanceReference],
) {
    provider.put_items_or_remove(
        tag,
        references.iter().map(ImageSopInstanceReference::to_item).collect(),
    );
}
