//
// embedded.rs
// Dicom-Iod-rs
//
// Bit-plane moves between pixel samples and packed overlay bitmaps.
//
// Dicom-Iod-rs contributors - October 2026

use crate::error::{embedded_overlay, Result};
use crate::pixel::UncompressedPixelData;

/// A stored pixel sample (8 or 16 bits allocated).
pub(crate) trait PixelWord: Copy {
    const WIDTH: usize;

    fn load(bytes: &[u8]) -> Self;
    fn store(self, bytes: &mut [u8]);
    fn bit(self, position: u16) -> bool;
    fn with_bit(self, position: u16, value: bool) -> Self;
}

impl PixelWord for u8 {
    const WIDTH: usize = 1;

    fn load(bytes: &[u8]) -> Self {
        bytes[0]
    }

    fn store(self, bytes: &mut [u8]) {
        bytes[0] = self;
    }

    fn bit(self, position: u16) -> bool {
        self & (1 << position) != 0
    }

    fn with_bit(self, position: u16, value: bool) -> Self {
        if value {
            self | (1 << position)
        } else {
            self & !(1 << position)
        }
    }
}

impl PixelWord for u16 {
    const WIDTH: usize = 2;

    fn load(bytes: &[u8]) -> Self {
        u16::from_le_bytes([bytes[0], bytes[1]])
    }

    fn store(self, bytes: &mut [u8]) {
        bytes[..2].copy_from_slice(&self.to_le_bytes());
    }

    fn bit(self, position: u16) -> bool {
        self & (1 << position) != 0
    }

    fn with_bit(self, position: u16, value: bool) -> Self {
        if value {
            self | (1 << position)
        } else {
            self & !(1 << position)
        }
    }
}

/// Output position in a packed bitmap: LSB first, one bit per pixel.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BitCursor {
    offset: usize,
    mask: u8,
}

impl BitCursor {
    pub(crate) fn new() -> Self {
        Self { offset: 0, mask: 0x01 }
    }

    fn advance(&mut self) {
        if self.mask == 0x80 {
            self.mask = 0x01;
            self.offset += 1;
        } else {
            self.mask <<= 1;
        }
    }
}

/// Moves the overlay bit of every sample in `frame` into `overlay`, clearing it in the sample.
pub(crate) fn extract_frame<W: PixelWord>(
    frame: &mut [u8],
    bit_position: u16,
    overlay: &mut [u8],
    cursor: &mut BitCursor,
) {
    for sample in frame.chunks_exact_mut(W::WIDTH) {
        let word = W::load(sample);
        if word.bit(bit_position) {
            overlay[cursor.offset] |= cursor.mask;
            word.with_bit(bit_position, false).store(sample);
        }
        cursor.advance();
    }
}

/// Writes one bitmap bit per sample into `frame` at `bit_position`.
pub(crate) fn embed_frame<W: PixelWord>(
    frame: &mut [u8],
    bit_position: u16,
    bits: &[bool],
) {
    for (sample, &bit) in frame.chunks_exact_mut(W::WIDTH).zip(bits) {
        W::load(sample).with_bit(bit_position, bit).store(sample);
    }
}

/// Conditions under which a bit plane can live in the pixel samples.
pub(crate) fn check_embedding(pixel_data: &UncompressedPixelData, bit_position: u16) -> Result<()> {
    if pixel_data.samples_per_pixel != 1 {
        return Err(embedded_overlay(format!(
            "samples per pixel is {}, embedded overlays need 1",
            pixel_data.samples_per_pixel
        )));
    }
    if pixel_data.bits_allocated != 8 && pixel_data.bits_allocated != 16 {
        return Err(embedded_overlay(format!(
            "bits allocated is {}, expected 8 or 16",
            pixel_data.bits_allocated
        )));
    }
    if pixel_data.bits_stored >= pixel_data.bits_allocated {
        return Err(embedded_overlay(format!(
            "no unused bits ({} stored of {} allocated)",
            pixel_data.bits_stored, pixel_data.bits_allocated
        )));
    }
    if bit_position >= pixel_data.bits_allocated {
        return Err(embedded_overlay(format!(
            "bit position {} is outside the {}-bit sample",
            bit_position, pixel_data.bits_allocated
        )));
    }
    if (pixel_data.low_bit()..=pixel_data.high_bit).contains(&bit_position) {
        return Err(embedded_overlay(format!(
            "bit position {} overlaps stored bits {}..={}",
            bit_position,
            pixel_data.low_bit(),
            pixel_data.high_bit
        )));
    }
    Ok(())
}

/// Byte length of a packed bitmap holding `pixels` bits, padded to even length.
pub fn packed_length(pixels: usize) -> usize {
    let length = pixels.div_ceil(8);
    length + length % 2
}

/// Pulls the bit plane at `bit_position` out of every frame, returning the packed bitmap.
pub(crate) fn extract(pixel_data: &mut UncompressedPixelData, bit_position: u16) -> Result<Vec<u8>> {
    check_embedding(pixel_data, bit_position)?;
    let frame_pixels = usize::from(pixel_data.rows) * usize::from(pixel_data.columns);
    let mut overlay = vec![0u8; packed_length(frame_pixels * pixel_data.number_of_frames)];
    let mut cursor = BitCursor::new();
    let wide = pixel_data.bits_allocated > 8;
    for index in 0..pixel_data.number_of_frames {
        let frame = pixel_data.frame_mut(index)?;
        if wide {
            extract_frame::<u16>(frame, bit_position, &mut overlay, &mut cursor);
        } else {
            extract_frame::<u8>(frame, bit_position, &mut overlay, &mut cursor);
        }
    }
    Ok(overlay)
}

/// Inverse of [`extract`]: `bits` holds one entry per pixel across all frames.
pub(crate) fn embed(
    pixel_data: &mut UncompressedPixelData,
    bit_position: u16,
    bits: &[bool],
) -> Result<()> {
    check_embedding(pixel_data, bit_position)?;
    let frame_pixels = usize::from(pixel_data.rows) * usize::from(pixel_data.columns);
    let expected = frame_pixels * pixel_data.number_of_frames;
    if bits.len() != expected {
        return Err(embedded_overlay(format!(
            "bitmap has {} pixels, image has {}",
            bits.len(),
            expected
        )));
    }
    let wide = pixel_data.bits_allocated > 8;
    for (index, frame_bits) in bits.chunks(frame_pixels.max(1)).enumerate() {
        let frame = pixel_data.frame_mut(index)?;
        if wide {
            embed_frame::<u16>(frame, bit_position, frame_bits);
        } else {
            embed_frame::<u8>(frame, bit_position, frame_bits);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_wraps_after_eight_bits() {
        let mut overlay = vec![0u8; 2];
        let mut frame = vec![0x80u8; 9];
        let mut cursor = BitCursor::new();
        extract_frame::<u8>(&mut frame, 7, &mut overlay, &mut cursor);
        assert_eq!(overlay, vec![0xFF, 0x01]);
        assert!(frame.iter().all(|&b| b == 0));
        assert_eq!(cursor.offset, 1);
        assert_eq!(cursor.mask, 0x02);
    }

    #[test]
    fn only_the_overlay_bit_is_cleared() {
        let mut frame = 0x8FFFu16.to_le_bytes().to_vec();
        frame.extend_from_slice(&0x0123u16.to_le_bytes());
        let mut overlay = vec![0u8; 2];
        extract_frame::<u16>(&mut frame, 15, &mut overlay, &mut BitCursor::new());
        assert_eq!(overlay[0], 0x01);
        assert_eq!(u16::load(&frame[..2]), 0x0FFF);
        assert_eq!(u16::load(&frame[2..]), 0x0123);
    }

    #[test]
    fn embed_sets_and_clears() {
        let mut frame = vec![0x00, 0x40, 0x00];
        embed_frame::<u8>(&mut frame, 6, &[true, false, true]);
        assert_eq!(frame, vec![0x40, 0x00, 0x40]);
    }

    #[test]
    fn packed_length_is_even() {
        assert_eq!(packed_length(0), 0);
        assert_eq!(packed_length(1), 2);
        assert_eq!(packed_length(16), 2);
        assert_eq!(packed_length(17), 4);
        assert_eq!(packed_length(97 * 101), 1226);
    }
}
