//
// pixel.rs
// Dicom-Iod-rs
//
// Native (uncompressed) pixel data view with per-frame access and write-back.
//
// Dicom-Iod-rs contributors - October 2026

use dicom::core::value::{PrimitiveValue, Value};
use dicom::core::VR;

use crate::dataset::{AttributeProvider, AttributeProviderMut};
use crate::error::{check_range, IodError, Result};
use crate::tags;

/// Image Pixel attributes together with a little-endian copy of the Pixel Data.
#[derive(Debug, Clone)]
pub struct UncompressedPixelData {
    pub rows: u16,
    pub columns: u16,
    pub samples_per_pixel: u16,
    pub bits_allocated: u16,
    pub bits_stored: u16,
    pub high_bit: u16,
    pub number_of_frames: usize,
    vr: VR,
    data: Vec<u8>,
}

impl UncompressedPixelData {
    pub fn from_provider<P: AttributeProvider + ?Sized>(provider: &P) -> Result<Self> {
        let element = provider
            .attribute(tags::PIXEL_DATA)
            .ok_or(IodError::MissingAttribute { tag: tags::PIXEL_DATA })?;
        let data = match element.value() {
            Value::PixelSequence(_) => return Err(IodError::EncapsulatedPixelData),
            Value::Primitive(PrimitiveValue::Empty) => {
                return Err(IodError::MissingAttribute { tag: tags::PIXEL_DATA })
            }
            Value::Primitive(PrimitiveValue::U16(words)) => {
                words.iter().flat_map(|w| w.to_le_bytes()).collect()
            }
            Value::Primitive(value) => value.to_bytes().into_owned(),
            Value::Sequence(_) => {
                return Err(IodError::InvalidValue {
                    name: "PixelData",
                    value: "sequence".to_string(),
                })
            }
        };

        let required = |tag| {
            provider
                .get_int::<u16>(tag)
                .ok_or(IodError::MissingAttribute { tag })
        };
        let bits_allocated = required(tags::BITS_ALLOCATED)?;
        let bits_stored = provider.get_int(tags::BITS_STORED).unwrap_or(bits_allocated);
        let pixel_data = UncompressedPixelData {
            rows: required(tags::ROWS)?,
            columns: required(tags::COLUMNS)?,
            samples_per_pixel: provider.get_int(tags::SAMPLES_PER_PIXEL).unwrap_or(1),
            bits_allocated,
            bits_stored,
            high_bit: provider
                .get_int(tags::HIGH_BIT)
                .unwrap_or(bits_stored.saturating_sub(1)),
            number_of_frames: provider
                .get_int::<usize>(tags::NUMBER_OF_FRAMES)
                .unwrap_or(1)
                .max(1),
            vr: element.vr(),
            data,
        };

        let needed = pixel_data
            .uncompressed_frame_size()
            .checked_mul(pixel_data.number_of_frames);
        if needed.map_or(true, |needed| pixel_data.data.len() < needed) {
            return Err(IodError::PixelDataLength {
                actual: pixel_data.data.len(),
                frames: pixel_data.number_of_frames,
                frame_size: pixel_data.uncompressed_frame_size(),
            });
        }
        Ok(pixel_data)
    }

    pub fn bytes_allocated(&self) -> usize {
        usize::from(self.bits_allocated).div_ceil(8)
    }

    pub fn low_bit(&self) -> u16 {
        self.high_bit.saturating_add(1).saturating_sub(self.bits_stored)
    }

    pub fn uncompressed_frame_size(&self) -> usize {
        usize::from(self.rows)
            * usize::from(self.columns)
            * usize::from(self.samples_per_pixel)
            * self.bytes_allocated()
    }

    pub fn vr(&self) -> VR {
        self.vr
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    fn frame_range(&self, index: usize) -> Result<std::ops::Range<usize>> {
        check_range(
            "frame",
            index as i64,
            0,
            self.number_of_frames as i64 - 1,
        )?;
        let size = self.uncompressed_frame_size();
        Ok(index * size..(index + 1) * size)
    }

    /// Bytes of the 0-based frame `index`.
    pub fn frame(&self, index: usize) -> Result<&[u8]> {
        let range = self.frame_range(index)?;
        Ok(&self.data[range])
    }

    pub fn frame_mut(&mut self, index: usize) -> Result<&mut [u8]> {
        let range = self.frame_range(index)?;
        Ok(&mut self.data[range])
    }

    pub fn set_frame(&mut self, index: usize, bytes: &[u8]) -> Result<()> {
        let frame = self.frame_mut(index)?;
        if frame.len() != bytes.len() {
            return Err(IodError::InvalidValue {
                name: "frame",
                value: format!("{} bytes, expected {}", bytes.len(), frame.len()),
            });
        }
        frame.copy_from_slice(bytes);
        Ok(())
    }

    /// Writes the (possibly modified) pixel data back. 16-bit data and data
    /// that arrived as OW are stored as words, everything else as OB bytes.
    pub fn update_pixel_data_attribute<P: AttributeProviderMut + ?Sized>(&self, provider: &mut P) {
        if self.bits_allocated > 8 || self.vr == VR::OW {
            let words = self
                .data
                .chunks(2)
                .map(|pair| u16::from_le_bytes([pair[0], pair.get(1).copied().unwrap_or(0)]))
                .collect();
            provider.put_words(tags::PIXEL_DATA, VR::OW, words);
        } else {
            provider.put_bytes(tags::PIXEL_DATA, VR::OB, self.data.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicom::object::InMemDicomObject;

    fn image(bits_allocated: u16, bits_stored: u16, frames: u16) -> InMemDicomObject {
        let mut obj = InMemDicomObject::new_empty();
        obj.put_value(tags::ROWS, VR::US, PrimitiveValue::from(2_u16));
        obj.put_value(tags::COLUMNS, VR::US, PrimitiveValue::from(3_u16));
        obj.put_value(tags::BITS_ALLOCATED, VR::US, PrimitiveValue::from(bits_allocated));
        obj.put_value(tags::BITS_STORED, VR::US, PrimitiveValue::from(bits_stored));
        obj.put_value(tags::HIGH_BIT, VR::US, PrimitiveValue::from(bits_stored - 1));
        obj.put_int(tags::NUMBER_OF_FRAMES, frames);
        obj
    }

    #[test]
    fn words_become_little_endian_frames() {
        let mut obj = image(16, 12, 2);
        obj.put_words(tags::PIXEL_DATA, VR::OW, (0..12).map(|i| 0x0100 + i).collect());
        let pd = UncompressedPixelData::from_provider(&obj).unwrap();
        assert_eq!(pd.uncompressed_frame_size(), 12);
        assert_eq!(pd.low_bit(), 0);
        assert_eq!(&pd.frame(1).unwrap()[..2], &[0x06, 0x01]);
        assert!(pd.frame(2).is_err());
    }

    #[test]
    fn frames_write_back_as_words() {
        let mut obj = image(16, 12, 1);
        obj.put_words(tags::PIXEL_DATA, VR::OW, vec![0x1FFF; 6]);
        let mut pd = UncompressedPixelData::from_provider(&obj).unwrap();
        pd.set_frame(0, &[0u8; 12]).unwrap();
        pd.update_pixel_data_attribute(&mut obj);
        assert_eq!(obj.vr(tags::PIXEL_DATA), Some(VR::OW));
        assert_eq!(obj.get_bytes(tags::PIXEL_DATA), Some(vec![0u8; 12]));
        assert!(pd.set_frame(0, &[0u8; 4]).is_err());
    }

    #[test]
    fn short_or_missing_pixel_data_is_rejected() {
        let mut obj = image(8, 7, 2);
        assert!(matches!(
            UncompressedPixelData::from_provider(&obj),
            Err(IodError::MissingAttribute { .. })
        ));
        obj.put_bytes(tags::PIXEL_DATA, VR::OB, vec![0; 6]);
        assert!(matches!(
            UncompressedPixelData::from_provider(&obj),
            Err(IodError::PixelDataLength { actual: 6, frames: 2, frame_size: 6 })
        ));
    }

    #[test]
    fn extreme_header_values_do_not_overflow() {
        let mut obj = image(16, 12, 1);
        obj.put_value(tags::HIGH_BIT, VR::US, PrimitiveValue::from(u16::MAX));
        obj.put_words(tags::PIXEL_DATA, VR::OW, vec![0; 6]);
        let pd = UncompressedPixelData::from_provider(&obj).unwrap();
        assert_eq!(pd.low_bit(), u16::MAX - 12);

        obj.put_value(tags::ROWS, VR::US, PrimitiveValue::from(u16::MAX));
        obj.put_value(tags::COLUMNS, VR::US, PrimitiveValue::from(u16::MAX));
        obj.put_value(tags::SAMPLES_PER_PIXEL, VR::US, PrimitiveValue::from(u16::MAX));
        obj.put_value(tags::BITS_ALLOCATED, VR::US, PrimitiveValue::from(u16::MAX));
        obj.put_int(tags::NUMBER_OF_FRAMES, i32::MAX);
        assert!(matches!(
            UncompressedPixelData::from_provider(&obj),
            Err(IodError::PixelDataLength { actual: 12, .. })
        ));
    }
}
