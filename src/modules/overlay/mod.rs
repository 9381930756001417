//
// mod.rs
// Dicom-Iod-rs
//
// Overlay Plane (C.9.2) and Multi-frame Overlay (C.9.3) modules, including embedded overlay extraction.
//
// Dicom-Iod-rs contributors - October 2026

mod embedded;

use dicom::core::value::{PrimitiveValue, Value};
use dicom::core::{Tag, VR};
use tracing::{debug, info};

use crate::dataset::{AttributeProvider, AttributeProviderMut};
use crate::error::{check_range, IodError, Result};
use crate::pixel::UncompressedPixelData;
use crate::tags;
use crate::values::defined_terms;

pub use embedded::packed_length;

/// Number of repeating 60xx groups.
pub const MAX_OVERLAY_PLANES: usize = 16;

defined_terms! {
    pub enum OverlayType ("OverlayType") {
        Graphics => "G",
        Roi => "R",
    }
}

defined_terms! {
    pub enum OverlaySubtype ("OverlaySubtype") {
        User => "USER",
        Automated => "AUTOMATED",
    }
}

/// Element numbers of one overlay group, in the order they are reported.
const PLANE_ELEMENTS: [u16; 15] = [
    tags::OVERLAY_BIT_POSITION,
    tags::OVERLAY_BITS_ALLOCATED,
    tags::OVERLAY_COLUMNS,
    tags::OVERLAY_DATA,
    tags::OVERLAY_DESCRIPTION,
    tags::OVERLAY_LABEL,
    tags::OVERLAY_ORIGIN,
    tags::OVERLAY_ROWS,
    tags::OVERLAY_SUBTYPE,
    tags::OVERLAY_TYPE,
    tags::ROI_AREA,
    tags::ROI_MEAN,
    tags::ROI_STANDARD_DEVIATION,
    tags::NUMBER_OF_FRAMES_IN_OVERLAY,
    tags::IMAGE_FRAME_ORIGIN,
];

fn overlay_group(index: usize) -> u16 {
    tags::OVERLAY_GROUP_BASE + 2 * index as u16
}

/// One overlay plane (group `0x6000 + 2 * index`) of a data set.
#[derive(Debug)]
pub struct OverlayPlane<P> {
    index: usize,
    provider: P,
}

impl<P> OverlayPlane<P> {
    pub fn new(index: usize, provider: P) -> Result<Self> {
        check_range("index", index as i64, 0, MAX_OVERLAY_PLANES as i64 - 1)?;
        Ok(Self { index, provider })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn group(&self) -> u16 {
        overlay_group(self.index)
    }

    /// Offset added to a group 6000 tag to address this plane.
    pub fn tag_offset(&self) -> u32 {
        self.index as u32 * 2 * 0x10000
    }

    pub fn tag(&self, element: u16) -> Tag {
        Tag(self.group(), element)
    }

    pub fn defined_tags(&self) -> Vec<Tag> {
        PLANE_ELEMENTS.iter().map(|&e| self.tag(e)).collect()
    }
}

impl<P: AttributeProvider> OverlayPlane<P> {
    /// False for legacy planes whose bits live in the pixel data.
    pub fn has_overlay_data(&self) -> bool {
        self.provider.has_value(self.tag(tags::OVERLAY_DATA))
    }

    pub fn overlay_data_vr(&self) -> Option<VR> {
        self.provider.vr(self.tag(tags::OVERLAY_DATA))
    }

    pub fn rows(&self) -> Option<u16> {
        self.provider.get_int(self.tag(tags::OVERLAY_ROWS))
    }

    pub fn columns(&self) -> Option<u16> {
        self.provider.get_int(self.tag(tags::OVERLAY_COLUMNS))
    }

    pub fn overlay_type(&self) -> Option<OverlayType> {
        self.provider.get_term(self.tag(tags::OVERLAY_TYPE))
    }

    /// Row and column of the first overlay pixel relative to the image, 1-based.
    pub fn origin(&self) -> Option<[i16; 2]> {
        match self.provider.get_ints::<i16>(self.tag(tags::OVERLAY_ORIGIN))[..] {
            [row, column] => Some([row, column]),
            _ => None,
        }
    }

    pub fn bits_allocated(&self) -> Option<u16> {
        self.provider.get_int(self.tag(tags::OVERLAY_BITS_ALLOCATED))
    }

    pub fn bit_position(&self) -> Option<u16> {
        self.provider.get_int(self.tag(tags::OVERLAY_BIT_POSITION))
    }

    /// Packed bitmap bytes, LSB first.
    pub fn overlay_data(&self) -> Option<Vec<u8>> {
        self.provider.get_bytes(self.tag(tags::OVERLAY_DATA))
    }

    pub fn description(&self) -> Option<String> {
        self.provider.get_string(self.tag(tags::OVERLAY_DESCRIPTION))
    }

    pub fn subtype(&self) -> Option<OverlaySubtype> {
        self.provider.get_term(self.tag(tags::OVERLAY_SUBTYPE))
    }

    pub fn label(&self) -> Option<String> {
        self.provider.get_string(self.tag(tags::OVERLAY_LABEL))
    }

    pub fn roi_area(&self) -> Option<i32> {
        self.provider.get_int(self.tag(tags::ROI_AREA))
    }

    pub fn roi_mean(&self) -> Option<f64> {
        self.provider.get_f64(self.tag(tags::ROI_MEAN))
    }

    pub fn roi_standard_deviation(&self) -> Option<f64> {
        self.provider.get_f64(self.tag(tags::ROI_STANDARD_DEVIATION))
    }

    pub fn number_of_frames_in_overlay(&self) -> Option<i32> {
        self.provider.get_int(self.tag(tags::NUMBER_OF_FRAMES_IN_OVERLAY))
    }

    pub fn image_frame_origin(&self) -> Option<i32> {
        self.provider.get_int(self.tag(tags::IMAGE_FRAME_ORIGIN))
    }

    /// Uses the Multi-frame Overlay module.
    pub fn is_multi_frame(&self) -> bool {
        self.number_of_frames_in_overlay().is_some()
    }

    /// Number of Frames in Overlay plus Image Frame Origin minus 1 must not exceed the image frame count.
    pub fn is_valid_multi_frame_overlay(&self, total_image_frames: i32) -> Result<bool> {
        check_range("total_image_frames", total_image_frames.into(), 1, i64::from(i32::MAX))?;
        let count = i64::from(self.number_of_frames_in_overlay().unwrap_or(1));
        let origin = i64::from(self.image_frame_origin().unwrap_or(1));
        Ok(count + origin - 1 <= i64::from(total_image_frames))
    }

    /// Maps a 1-based image frame to the overlay frame drawn on it, if any.
    ///
    /// Embedded planes map frames one to one, a single-frame overlay applies
    /// to every image frame, and a multi-frame overlay covers only
    /// `[origin, origin + count)`.
    pub fn relevant_overlay_frame(
        &self,
        image_frame: i32,
        total_image_frames: i32,
    ) -> Result<Option<i32>> {
        check_range(
            "image_frame",
            image_frame.into(),
            1,
            total_image_frames.into(),
        )?;
        if !self.has_overlay_data() {
            return Ok(Some(image_frame));
        }
        if !self.is_multi_frame() {
            return Ok(Some(1));
        }
        let origin = i64::from(self.image_frame_origin().unwrap_or(1));
        let count = i64::from(self.number_of_frames_in_overlay().unwrap_or(1));
        let frame = i64::from(image_frame);
        if frame >= origin && frame < origin + count {
            Ok(i32::try_from(frame - origin + 1).ok())
        } else {
            Ok(None)
        }
    }

    /// Like [`Self::relevant_overlay_frame`], with invalid image frames mapping to `None`.
    pub fn try_relevant_overlay_frame(&self, image_frame: i32, total_image_frames: i32) -> Option<i32> {
        self.relevant_overlay_frame(image_frame, total_image_frames)
            .ok()
            .flatten()
    }

    /// Bits per overlay frame.
    pub fn overlay_frame_length(&self) -> usize {
        usize::from(self.rows().unwrap_or(0)) * usize::from(self.columns().unwrap_or(0))
    }

    pub fn try_overlay_data_bit_offset(&self, overlay_frame: i32) -> Option<usize> {
        if !self.has_overlay_data() {
            return None;
        }
        let count = self.number_of_frames_in_overlay().unwrap_or(1);
        if overlay_frame < 1 || overlay_frame > count {
            return None;
        }
        Some(self.overlay_frame_length() * (overlay_frame as usize - 1))
    }

    /// Offset in bits of a 1-based overlay frame within the overlay data.
    pub fn overlay_data_bit_offset(&self, overlay_frame: i32) -> Result<usize> {
        if !self.has_overlay_data() {
            return Err(IodError::OverlayEmbedded);
        }
        self.try_overlay_data_bit_offset(overlay_frame).ok_or_else(|| {
            IodError::ArgumentOutOfRange {
                name: "overlay_frame",
                value: overlay_frame.into(),
                min: 1,
                max: self.number_of_frames_in_overlay().unwrap_or(1).into(),
            }
        })
    }

    /// Unpacks one overlay frame, row-major, one entry per overlay pixel.
    pub fn overlay_frame_bits(&self, overlay_frame: i32) -> Result<Vec<bool>> {
        let offset = self.overlay_data_bit_offset(overlay_frame)?;
        let data = self.overlay_data().unwrap_or_default();
        Ok((offset..offset + self.overlay_frame_length())
            .map(|bit| data.get(bit / 8).is_some_and(|byte| byte & (1 << (bit % 8)) != 0))
            .collect())
    }
}

impl<P: AttributeProviderMut> OverlayPlane<P> {
    pub fn set_rows(&mut self, rows: u16) {
        let tag = self.tag(tags::OVERLAY_ROWS);
        self.provider.put_value(tag, VR::US, PrimitiveValue::from(rows));
    }

    pub fn set_columns(&mut self, columns: u16) {
        let tag = self.tag(tags::OVERLAY_COLUMNS);
        self.provider.put_value(tag, VR::US, PrimitiveValue::from(columns));
    }

    pub fn set_overlay_type(&mut self, value: Option<OverlayType>) -> Result<()> {
        let tag = self.tag(tags::OVERLAY_TYPE);
        self.provider.put_required_term(tag, value)
    }

    pub fn set_origin(&mut self, value: Option<[i16; 2]>) -> Result<()> {
        let origin = value.ok_or(IodError::RequiredAttribute { name: "OverlayOrigin" })?;
        let tag = self.tag(tags::OVERLAY_ORIGIN);
        self.provider
            .put_value(tag, VR::SS, PrimitiveValue::I16(origin.iter().copied().collect()));
        Ok(())
    }

    /// Only 1 is permitted.
    pub fn set_bits_allocated(&mut self, value: u16) -> Result<()> {
        if value != 1 {
            return Err(IodError::InvalidValue {
                name: "OverlayBitsAllocated",
                value: value.to_string(),
            });
        }
        let tag = self.tag(tags::OVERLAY_BITS_ALLOCATED);
        self.provider.put_value(tag, VR::US, PrimitiveValue::from(value));
        Ok(())
    }

    /// Only 0 is permitted.
    pub fn set_bit_position(&mut self, value: u16) -> Result<()> {
        if value != 0 {
            return Err(IodError::InvalidValue {
                name: "OverlayBitPosition",
                value: value.to_string(),
            });
        }
        let tag = self.tag(tags::OVERLAY_BIT_POSITION);
        self.provider.put_value(tag, VR::US, PrimitiveValue::from(value));
        Ok(())
    }

    /// Stores packed overlay bytes as OW words, or as OB when the attribute is already OB.
    pub fn set_overlay_data(&mut self, data: &[u8]) -> Result<()> {
        if data.is_empty() {
            return Err(IodError::RequiredAttribute { name: "OverlayData" });
        }
        let tag = self.tag(tags::OVERLAY_DATA);
        if self.overlay_data_vr() == Some(VR::OB) {
            let mut bytes = data.to_vec();
            if bytes.len() % 2 == 1 {
                bytes.push(0);
            }
            self.provider.put_bytes(tag, VR::OB, bytes);
        } else {
            let words = data
                .chunks(2)
                .map(|pair| u16::from_le_bytes([pair[0], pair.get(1).copied().unwrap_or(0)]))
                .collect();
            self.provider.put_words(tag, VR::OW, words);
        }
        Ok(())
    }

    pub fn set_description(&mut self, value: Option<&str>) {
        let tag = self.tag(tags::OVERLAY_DESCRIPTION);
        self.provider.put_string_or_remove(tag, VR::LO, value);
    }

    pub fn set_subtype(&mut self, value: Option<OverlaySubtype>) {
        let tag = self.tag(tags::OVERLAY_SUBTYPE);
        self.provider.put_term_or_remove(tag, value);
    }

    pub fn set_label(&mut self, value: Option<&str>) {
        let tag = self.tag(tags::OVERLAY_LABEL);
        self.provider.put_string_or_remove(tag, VR::LO, value);
    }

    pub fn set_roi_area(&mut self, value: Option<i32>) {
        let tag = self.tag(tags::ROI_AREA);
        match value {
            Some(v) => self.provider.put_int(tag, v),
            None => {
                self.provider.remove(tag);
            }
        }
    }

    pub fn set_roi_mean(&mut self, value: Option<f64>) {
        let tag = self.tag(tags::ROI_MEAN);
        match value {
            Some(v) => self.provider.put_f64(tag, VR::DS, v),
            None => {
                self.provider.remove(tag);
            }
        }
    }

    pub fn set_roi_standard_deviation(&mut self, value: Option<f64>) {
        let tag = self.tag(tags::ROI_STANDARD_DEVIATION);
        match value {
            Some(v) => self.provider.put_f64(tag, VR::DS, v),
            None => {
                self.provider.remove(tag);
            }
        }
    }

    pub fn set_number_of_frames_in_overlay(&mut self, value: Option<i32>) {
        let tag = self.tag(tags::NUMBER_OF_FRAMES_IN_OVERLAY);
        match value {
            Some(v) => self.provider.put_int(tag, v),
            None => {
                self.provider.remove(tag);
            }
        }
    }

    pub fn set_image_frame_origin(&mut self, value: Option<u16>) {
        let tag = self.tag(tags::IMAGE_FRAME_ORIGIN);
        match value {
            Some(v) => self.provider.put_value(tag, VR::US, PrimitiveValue::from(v)),
            None => {
                self.provider.remove(tag);
            }
        }
    }

    /// Removes every attribute of this plane.
    pub fn clear(&mut self) {
        for tag in self.defined_tags() {
            self.provider.remove(tag);
        }
    }

    /// Moves this plane out of the unused pixel bits into Overlay Data.
    ///
    /// Returns `false` when the plane already has overlay data. The pixel data
    /// attribute is rewritten with the overlay bit cleared.
    pub fn extract_embedded_overlay(&mut self, pixel_data: &mut UncompressedPixelData) -> Result<bool> {
        if self.has_overlay_data() {
            return Ok(false);
        }
        let bit_position = self
            .bit_position()
            .ok_or(IodError::MissingAttribute { tag: self.tag(tags::OVERLAY_BIT_POSITION) })?;
        let overlay = embedded::extract(pixel_data, bit_position)?;
        pixel_data.update_pixel_data_attribute(&mut self.provider);

        self.set_overlay_data(&overlay)?;
        self.set_bit_position(0)?;
        self.set_bits_allocated(1)?;
        if self.rows().unwrap_or(0) == 0 {
            self.set_rows(pixel_data.rows);
        }
        if self.columns().unwrap_or(0) == 0 {
            self.set_columns(pixel_data.columns);
        }
        if pixel_data.number_of_frames > 1 && !self.is_multi_frame() {
            self.set_number_of_frames_in_overlay(Some(pixel_data.number_of_frames as i32));
        }
        info!(
            group = %format!("{:04X}", self.group()),
            bit_position,
            frames = pixel_data.number_of_frames,
            "extracted embedded overlay"
        );
        Ok(true)
    }

    /// Writes `bits` (one per pixel, all frames) into unused pixel bits,
    /// producing the legacy embedded form of this plane.
    pub fn embed_overlay(
        &mut self,
        pixel_data: &mut UncompressedPixelData,
        bit_position: u16,
        bits: &[bool],
    ) -> Result<()> {
        embedded::embed(pixel_data, bit_position, bits)?;
        pixel_data.update_pixel_data_attribute(&mut self.provider);

        self.provider.remove(self.tag(tags::OVERLAY_DATA));
        let (position, allocated) = (
            self.tag(tags::OVERLAY_BIT_POSITION),
            self.tag(tags::OVERLAY_BITS_ALLOCATED),
        );
        self.provider
            .put_value(position, VR::US, PrimitiveValue::from(bit_position));
        self.provider
            .put_value(allocated, VR::US, PrimitiveValue::from(pixel_data.bits_allocated));
        self.set_rows(pixel_data.rows);
        self.set_columns(pixel_data.columns);
        Ok(())
    }
}

/// The sixteen overlay planes of one data set.
#[derive(Debug)]
pub struct OverlayPlaneModule<P> {
    provider: P,
}

impl<P> OverlayPlaneModule<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn into_inner(self) -> P {
        self.provider
    }

    /// Tags of all sixteen groups.
    pub fn defined_tags() -> Vec<Tag> {
        (0..MAX_OVERLAY_PLANES)
            .flat_map(|index| PLANE_ELEMENTS.iter().map(move |&e| Tag(overlay_group(index), e)))
            .collect()
    }
}

impl<P: AttributeProvider> OverlayPlaneModule<P> {
    pub fn plane(&self, index: usize) -> Result<OverlayPlane<&P>> {
        OverlayPlane::new(index, &self.provider)
    }

    /// A plane exists when its Overlay Bit Position has a value.
    pub fn has_overlay_plane(&self, index: usize) -> bool {
        index < MAX_OVERLAY_PLANES
            && self
                .provider
                .has_value(Tag(overlay_group(index), tags::OVERLAY_BIT_POSITION))
    }

    pub fn planes(&self) -> Vec<OverlayPlane<&P>> {
        (0..MAX_OVERLAY_PLANES)
            .filter(|&index| self.has_overlay_plane(index))
            .map(|index| OverlayPlane {
                index,
                provider: &self.provider,
            })
            .collect()
    }
}

impl<P: AttributeProviderMut> OverlayPlaneModule<P> {
    pub fn plane_mut(&mut self, index: usize) -> Result<OverlayPlane<&mut P>> {
        OverlayPlane::new(index, &mut self.provider)
    }

    pub fn delete(&mut self, index: usize) -> Result<()> {
        self.plane_mut(index)?.clear();
        Ok(())
    }

    /// Extracts every plane still embedded in the pixel data.
    ///
    /// Returns whether anything was extracted. Missing, empty or encapsulated
    /// pixel data yields `Ok(false)`.
    pub fn extract_embedded_overlays(&mut self) -> Result<bool> {
        match self.provider.attribute(tags::PIXEL_DATA).map(|e| e.value()) {
            None => {
                debug!("no pixel data from which to extract embedded overlays");
                return Ok(false);
            }
            Some(Value::PixelSequence(_)) => {
                debug!("pixel data must be uncompressed to extract overlays");
                return Ok(false);
            }
            Some(Value::Primitive(PrimitiveValue::Empty)) => {
                debug!("pixel data has no value, nothing to extract");
                return Ok(false);
            }
            Some(_) => {}
        }

        let mut pixel_data = UncompressedPixelData::from_provider(&self.provider)?;
        let mut any_extracted = false;
        for index in 0..MAX_OVERLAY_PLANES {
            if !self.has_overlay_plane(index) {
                continue;
            }
            let mut plane = self.plane_mut(index)?;
            if plane.has_overlay_data() {
                debug!(group = %format!("{:04X}", plane.group()), "overlay plane already has overlay data");
                continue;
            }
            debug!(group = %format!("{:04X}", plane.group()), "overlay embedded in pixel data, extracting");
            plane.extract_embedded_overlay(&mut pixel_data)?;
            any_extracted = true;
        }
        Ok(any_extracted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicom::object::InMemDicomObject;

    #[test]
    fn plane_identification() {
        let obj = InMemDicomObject::new_empty();
        let module = OverlayPlaneModule::new(&obj);
        let plane = module.plane(13).unwrap();
        assert_eq!(plane.group(), 0x601A);
        assert_eq!(plane.tag_offset(), 0x1A_0000);
        assert_eq!(plane.tag(tags::OVERLAY_DATA), Tag(0x601A, 0x3000));
        assert!(matches!(
            module.plane(16),
            Err(IodError::ArgumentOutOfRange { value: 16, .. })
        ));
        assert!(!module.has_overlay_plane(16));
    }

    #[test]
    fn defined_tags_cover_sixteen_groups() {
        let tags = OverlayPlaneModule::<InMemDicomObject>::defined_tags();
        assert_eq!(tags.len(), 16 * 15);
        assert_eq!(tags[0], Tag(0x6000, 0x0102));
        assert_eq!(tags[tags.len() - 1], Tag(0x601E, 0x0051));
    }

    #[test]
    fn setters_enforce_fixed_values() {
        let mut obj = InMemDicomObject::new_empty();
        let mut module = OverlayPlaneModule::new(&mut obj);
        let mut plane = module.plane_mut(2).unwrap();
        assert!(plane.set_bits_allocated(8).is_err());
        assert!(plane.set_bit_position(3).is_err());
        assert!(plane.set_overlay_type(None).is_err());
        assert!(plane.set_origin(None).is_err());
        assert!(plane.set_overlay_data(&[]).is_err());
        plane.set_overlay_type(Some(OverlayType::Roi)).unwrap();
        plane.set_origin(Some([1, -2])).unwrap();
        plane.set_subtype(Some(OverlaySubtype::Automated));
        plane.set_roi_mean(Some(12.5));
        assert_eq!(plane.overlay_type(), Some(OverlayType::Roi));
        assert_eq!(plane.origin(), Some([1, -2]));
        assert_eq!(plane.subtype(), Some(OverlaySubtype::Automated));
        assert_eq!(plane.roi_mean(), Some(12.5));
        plane.set_roi_mean(None);
        assert_eq!(plane.roi_mean(), None);
    }

    #[test]
    fn overlay_data_keeps_existing_ob_form() {
        let mut obj = InMemDicomObject::new_empty();
        obj.put_empty(Tag(0x6000, 0x3000), VR::OB);
        let mut plane = OverlayPlane::new(0, &mut obj).unwrap();
        assert!(!plane.has_overlay_data());
        plane.set_overlay_data(&[0xAA, 0x55, 0x01]).unwrap();
        assert_eq!(plane.overlay_data_vr(), Some(VR::OB));
        assert_eq!(plane.overlay_data(), Some(vec![0xAA, 0x55, 0x01, 0x00]));
    }

    #[test]
    fn delete_removes_the_group() {
        let mut obj = InMemDicomObject::new_empty();
        let mut module = OverlayPlaneModule::new(&mut obj);
        {
            let mut plane = module.plane_mut(1).unwrap();
            plane.set_bit_position(0).unwrap();
            plane.set_label(Some("ROI"));
        }
        assert!(module.has_overlay_plane(1));
        module.delete(1).unwrap();
        assert!(!module.has_overlay_plane(1));
        assert!(module.into_inner().attribute(Tag(0x6002, 0x1500)).is_none());
    }

    fn multi_frame_plane(count: i32, origin: u16) -> InMemDicomObject {
        let mut obj = InMemDicomObject::new_empty();
        let mut plane = OverlayPlane::new(0, &mut obj).unwrap();
        plane.set_rows(2);
        plane.set_columns(2);
        plane.set_overlay_data(&[0x0F, 0x00]).unwrap();
        plane.set_number_of_frames_in_overlay(Some(count));
        plane.set_image_frame_origin(Some(origin));
        obj
    }

    #[test]
    fn multi_frame_overlay_covers_its_window() {
        let obj = multi_frame_plane(2, 3);
        let plane = OverlayPlane::new(0, &obj).unwrap();
        let mapped: Vec<_> = (1..=5)
            .map(|frame| plane.relevant_overlay_frame(frame, 5).unwrap())
            .collect();
        assert_eq!(mapped, vec![None, None, Some(1), Some(2), None]);
        assert!(plane.is_valid_multi_frame_overlay(5).unwrap());
        assert!(plane.is_valid_multi_frame_overlay(4).unwrap());
        assert!(!plane.is_valid_multi_frame_overlay(3).unwrap());
        assert!(matches!(
            plane.relevant_overlay_frame(0, 5),
            Err(IodError::ArgumentOutOfRange { value: 0, .. })
        ));
        assert!(matches!(
            plane.relevant_overlay_frame(6, 5),
            Err(IodError::ArgumentOutOfRange { value: 6, .. })
        ));
        assert_eq!(plane.try_relevant_overlay_frame(6, 5), None);
    }

    #[test]
    fn embedded_and_single_frame_overlays_map_every_frame() {
        let mut obj = InMemDicomObject::new_empty();
        obj.put_value(Tag(0x6000, 0x0102), VR::US, PrimitiveValue::from(12_u16));
        let embedded = OverlayPlane::new(0, &obj).unwrap();
        assert_eq!(embedded.relevant_overlay_frame(4, 5).unwrap(), Some(4));

        let mut obj = multi_frame_plane(1, 1);
        OverlayPlane::new(0, &mut obj)
            .unwrap()
            .set_number_of_frames_in_overlay(None);
        let single = OverlayPlane::new(0, &obj).unwrap();
        assert_eq!(single.relevant_overlay_frame(4, 5).unwrap(), Some(1));
    }

    #[test]
    fn huge_frame_counts_do_not_overflow() {
        let obj = multi_frame_plane(i32::MAX, 2);
        let plane = OverlayPlane::new(0, &obj).unwrap();
        assert!(!plane.is_valid_multi_frame_overlay(3).unwrap());
        assert!(!plane.is_valid_multi_frame_overlay(i32::MAX).unwrap());
        assert_eq!(plane.relevant_overlay_frame(1, 3).unwrap(), None);
        assert_eq!(plane.relevant_overlay_frame(3, 3).unwrap(), Some(2));
        assert_eq!(
            plane.relevant_overlay_frame(i32::MAX, i32::MAX).unwrap(),
            Some(i32::MAX - 1)
        );
    }

    #[test]
    fn missing_pixel_data_extracts_nothing() {
        let mut obj = InMemDicomObject::new_empty();
        obj.put_value(Tag(0x6000, 0x0102), VR::US, PrimitiveValue::from(15_u16));
        let mut module = OverlayPlaneModule::new(&mut obj);
        assert!(!module.extract_embedded_overlays().unwrap());
    }
}
