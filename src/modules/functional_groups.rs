//
// functional_groups.rs
// Dicom-Iod-rs
//
// Multi-frame Functional Groups module (C.7.6.16) and per-frame attribute lookup.
//
// Dicom-Iod-rs contributors - October 2026

use chrono::NaiveDateTime;
use dicom::core::{Tag, VR};
use dicom::object::mem::InMemElement;
use dicom::object::InMemDicomObject;

use crate::dataset::{AttributeProvider, AttributeProviderMut};
use crate::error::{check_range, IodError, Result};
use crate::tags;
use crate::values::datetime::{get_date_time, put_date_time};
use crate::values::ImageOrientationPatient;

/// Functional group macros that frame attributes are resolved through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionalGroup {
    PixelMeasures,
    FrameContent,
    PlanePosition,
    PlaneOrientation,
    FrameAnatomy,
    PixelValueTransformation,
    FrameVoiLut,
}

impl FunctionalGroup {
    pub const ALL: [FunctionalGroup; 7] = [
        FunctionalGroup::PixelMeasures,
        FunctionalGroup::FrameContent,
        FunctionalGroup::PlanePosition,
        FunctionalGroup::PlaneOrientation,
        FunctionalGroup::FrameAnatomy,
        FunctionalGroup::PixelValueTransformation,
        FunctionalGroup::FrameVoiLut,
    ];

    /// The single-item sequence that carries the macro inside a functional group item.
    pub fn sequence_tag(self) -> Tag {
        match self {
            FunctionalGroup::PixelMeasures => tags::PIXEL_MEASURES_SEQUENCE,
            FunctionalGroup::FrameContent => tags::FRAME_CONTENT_SEQUENCE,
            FunctionalGroup::PlanePosition => tags::PLANE_POSITION_SEQUENCE,
            FunctionalGroup::PlaneOrientation => tags::PLANE_ORIENTATION_SEQUENCE,
            FunctionalGroup::FrameAnatomy => tags::FRAME_ANATOMY_SEQUENCE,
            FunctionalGroup::PixelValueTransformation => tags::PIXEL_VALUE_TRANSFORMATION_SEQUENCE,
            FunctionalGroup::FrameVoiLut => tags::FRAME_VOI_LUT_SEQUENCE,
        }
    }

    /// Attributes nested in the macro's sequence item that map one to one
    /// onto a frame. Code sequences that may hold several items are left out.
    pub fn nested_tags(self) -> &'static [Tag] {
        match self {
            FunctionalGroup::PixelMeasures => &[tags::PIXEL_SPACING, tags::SLICE_THICKNESS],
            FunctionalGroup::FrameContent => &[
                tags::FRAME_ACQUISITION_NUMBER,
                tags::FRAME_REFERENCE_DATE_TIME,
                tags::FRAME_ACQUISITION_DATE_TIME,
                tags::FRAME_ACQUISITION_DURATION,
                tags::DIMENSION_INDEX_VALUES,
                tags::TEMPORAL_POSITION_INDEX,
                tags::STACK_ID,
                tags::IN_STACK_POSITION_NUMBER,
            ],
            FunctionalGroup::PlanePosition => &[tags::IMAGE_POSITION_PATIENT],
            FunctionalGroup::PlaneOrientation => &[tags::IMAGE_ORIENTATION_PATIENT],
            FunctionalGroup::FrameAnatomy => &[tags::FRAME_LATERALITY],
            FunctionalGroup::PixelValueTransformation => {
                &[tags::RESCALE_INTERCEPT, tags::RESCALE_SLOPE, tags::RESCALE_TYPE]
            }
            FunctionalGroup::FrameVoiLut => &[
                tags::WINDOW_CENTER,
                tags::WINDOW_WIDTH,
                tags::WINDOW_CENTER_WIDTH_EXPLANATION,
            ],
        }
    }

    pub fn for_tag(tag: Tag) -> Option<FunctionalGroup> {
        Self::ALL
            .into_iter()
            .find(|group| group.nested_tags().contains(&tag))
    }
}

fn check_frame(frame: i32) -> Result<usize> {
    check_range("frame number", frame.into(), 1, i32::MAX.into())?;
    Ok((frame - 1) as usize)
}

iod_module!(
    /// Multi-frame Functional Groups module.
    MultiFrameFunctionalGroupsModule
);

impl<P> MultiFrameFunctionalGroupsModule<P> {
    pub const DEFINED_TAGS: [Tag; 12] = [
        tags::SHARED_FUNCTIONAL_GROUPS_SEQUENCE,
        tags::PER_FRAME_FUNCTIONAL_GROUPS_SEQUENCE,
        tags::INSTANCE_NUMBER,
        tags::CONTENT_DATE,
        tags::CONTENT_TIME,
        tags::NUMBER_OF_FRAMES,
        tags::CONCATENATION_FRAME_OFFSET_NUMBER,
        tags::REPRESENTATIVE_FRAME_NUMBER,
        tags::CONCATENATION_UID,
        tags::SOP_INSTANCE_UID_OF_CONCATENATION_SOURCE,
        tags::IN_CONCATENATION_NUMBER,
        tags::IN_CONCATENATION_TOTAL_NUMBER,
    ];
}

impl<P: AttributeProvider> MultiFrameFunctionalGroupsModule<P> {
    pub fn has_values(&self) -> bool {
        self.provider.has_value(tags::SHARED_FUNCTIONAL_GROUPS_SEQUENCE)
            || self.provider.has_value(tags::PER_FRAME_FUNCTIONAL_GROUPS_SEQUENCE)
    }

    pub fn shared_functional_groups(&self) -> Option<&InMemDicomObject> {
        self.provider
            .get_item(tags::SHARED_FUNCTIONAL_GROUPS_SEQUENCE, 0)
    }

    pub fn per_frame_functional_groups(&self) -> &[InMemDicomObject] {
        self.provider
            .get_items(tags::PER_FRAME_FUNCTIONAL_GROUPS_SEQUENCE)
            .unwrap_or_default()
    }

    /// Functional group item describing `group` for a 1-based frame.
    ///
    /// The per-frame item wins when it carries the macro; otherwise the shared
    /// item is used. The flag is `true` for a frame-specific result.
    pub fn functional_group(
        &self,
        frame: i32,
        group: FunctionalGroup,
    ) -> Result<Option<(&InMemDicomObject, bool)>> {
        let index = check_frame(frame)?;
        let sequence = group.sequence_tag();
        if let Some(item) = self
            .provider
            .get_item(tags::PER_FRAME_FUNCTIONAL_GROUPS_SEQUENCE, index)
            .filter(|item| item.has_value(sequence))
        {
            return Ok(Some((item, true)));
        }
        Ok(self
            .shared_functional_groups()
            .filter(|item| item.has_value(sequence))
            .map(|item| (item, false)))
    }

    /// Plane orientation of a 1-based frame, per-frame or shared.
    pub fn image_orientation_patient(&self, frame: i32) -> Result<Option<ImageOrientationPatient>> {
        let group = FunctionalGroup::PlaneOrientation;
        Ok(self
            .functional_group(frame, group)?
            .and_then(|(item, _)| item.get_item(group.sequence_tag(), 0))
            .and_then(ImageOrientationPatient::from_provider))
    }

    /// Resolves an attribute held by a functional group macro for a 1-based frame.
    pub fn frame_attribute(&self, frame: i32, tag: Tag) -> Result<Option<&InMemElement>> {
        let Some(group) = FunctionalGroup::for_tag(tag) else {
            check_frame(frame)?;
            return Ok(None);
        };
        let Some((item, _)) = self.functional_group(frame, group)? else {
            return Ok(None);
        };
        Ok(item
            .get_item(group.sequence_tag(), 0)
            .and_then(|macro_item| macro_item.attribute(tag)))
    }

    pub fn instance_number(&self) -> Option<i32> {
        self.provider.get_int(tags::INSTANCE_NUMBER)
    }

    pub fn content_date_time(&self) -> Option<NaiveDateTime> {
        get_date_time(&self.provider, tags::CONTENT_DATE, tags::CONTENT_TIME)
    }

    pub fn number_of_frames(&self) -> Option<i32> {
        self.provider.get_int(tags::NUMBER_OF_FRAMES)
    }

    pub fn concatenation_frame_offset_number(&self) -> Option<i32> {
        self.provider.get_int(tags::CONCATENATION_FRAME_OFFSET_NUMBER)
    }

    pub fn representative_frame_number(&self) -> Option<i32> {
        self.provider.get_int(tags::REPRESENTATIVE_FRAME_NUMBER)
    }

    pub fn concatenation_uid(&self) -> Option<String> {
        self.provider.get_string(tags::CONCATENATION_UID)
    }

    pub fn sop_instance_uid_of_concatenation_source(&self) -> Option<String> {
        self.provider
            .get_string(tags::SOP_INSTANCE_UID_OF_CONCATENATION_SOURCE)
    }

    pub fn in_concatenation_number(&self) -> Option<i32> {
        self.provider.get_int(tags::IN_CONCATENATION_NUMBER)
    }

    pub fn in_concatenation_total_number(&self) -> Option<i32> {
        self.provider.get_int(tags::IN_CONCATENATION_TOTAL_NUMBER)
    }
}

impl<P: AttributeProviderMut> MultiFrameFunctionalGroupsModule<P> {
    /// Leaves the shared sequence present and empty.
    pub fn initialize_attributes(&mut self) {
        self.set_shared_functional_groups(None);
    }

    pub fn set_shared_functional_groups(&mut self, item: Option<InMemDicomObject>) {
        match item {
            Some(item) => self
                .provider
                .put_items(tags::SHARED_FUNCTIONAL_GROUPS_SEQUENCE, vec![item]),
            None => self
                .provider
                .put_empty(tags::SHARED_FUNCTIONAL_GROUPS_SEQUENCE, VR::SQ),
        }
    }

    pub fn set_per_frame_functional_groups(&mut self, items: Vec<InMemDicomObject>) -> Result<()> {
        if items.is_empty() {
            return Err(IodError::RequiredAttribute {
                name: "PerFrameFunctionalGroupsSequence",
            });
        }
        self.provider
            .put_items(tags::PER_FRAME_FUNCTIONAL_GROUPS_SEQUENCE, items);
        Ok(())
    }

    /// Stores a macro item in the shared functional groups.
    pub fn put_shared_group(&mut self, group: FunctionalGroup, macro_item: InMemDicomObject) {
        let mut shared = self
            .shared_functional_groups()
            .cloned()
            .unwrap_or_else(InMemDicomObject::new_empty);
        shared.put_items(group.sequence_tag(), vec![macro_item]);
        self.set_shared_functional_groups(Some(shared));
    }

    /// Stores a macro item for a 1-based frame, growing the per-frame sequence as needed.
    pub fn put_frame_group(
        &mut self,
        frame: i32,
        group: FunctionalGroup,
        macro_item: InMemDicomObject,
    ) -> Result<()> {
        let index = check_frame(frame)?;
        let mut items = self.per_frame_functional_groups().to_vec();
        if items.len() <= index {
            items.resize_with(index + 1, InMemDicomObject::new_empty);
        }
        items[index].put_items(group.sequence_tag(), vec![macro_item]);
        self.provider
            .put_items(tags::PER_FRAME_FUNCTIONAL_GROUPS_SEQUENCE, items);
        Ok(())
    }

    pub fn set_instance_number(&mut self, value: i32) {
        self.provider.put_int(tags::INSTANCE_NUMBER, value);
    }

    pub fn set_content_date_time(&mut self, value: Option<NaiveDateTime>) -> Result<()> {
        let value = value.ok_or(IodError::RequiredAttribute {
            name: "ContentDateTime",
        })?;
        put_date_time(
            &mut self.provider,
            tags::CONTENT_DATE,
            tags::CONTENT_TIME,
            Some(value),
        );
        Ok(())
    }

    pub fn set_number_of_frames(&mut self, value: i32) {
        self.provider.put_int(tags::NUMBER_OF_FRAMES, value);
    }

    pub fn set_concatenation_frame_offset_number(&mut self, value: Option<i32>) {
        self.put_int_or_remove(tags::CONCATENATION_FRAME_OFFSET_NUMBER, value);
    }

    pub fn set_representative_frame_number(&mut self, value: Option<i32>) {
        self.put_int_or_remove(tags::REPRESENTATIVE_FRAME_NUMBER, value);
    }

    pub fn set_concatenation_uid(&mut self, value: Option<&str>) {
        self.provider
            .put_string_or_remove(tags::CONCATENATION_UID, VR::UI, value);
    }

    pub fn set_sop_instance_uid_of_concatenation_source(&mut self, value: Option<&str>) {
        self.provider.put_string_or_remove(
            tags::SOP_INSTANCE_UID_OF_CONCATENATION_SOURCE,
            VR::UI,
            value,
        );
    }

    pub fn set_in_concatenation_number(&mut self, value: Option<i32>) {
        self.put_int_or_remove(tags::IN_CONCATENATION_NUMBER, value);
    }

    pub fn set_in_concatenation_total_number(&mut self, value: Option<i32>) {
        self.put_int_or_remove(tags::IN_CONCATENATION_TOTAL_NUMBER, value);
    }

    fn put_int_or_remove(&mut self, tag: Tag, value: Option<i32>) {
        match value {
            Some(v) => self.provider.put_int(tag, v),
            None => {
                self.provider.remove(tag);
            }
        }
    }
}
