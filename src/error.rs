//
// error.rs
// Dicom-Iod-rs
//
// Library error type shared by the attribute layer, the IOD modules and overlay extraction.
//
// Dicom-Iod-rs contributors - October 2026

use dicom::core::Tag;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IodError {
    #[error("{name} must be between {min} and {max} inclusive (got {value})")]
    ArgumentOutOfRange {
        name: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("{name} is Type 1 required and cannot be cleared")]
    RequiredAttribute { name: &'static str },

    #[error("Invalid value `{value}` for {name}")]
    InvalidValue { name: &'static str, value: String },

    #[error("Unsupported value `{value}` for {name}")]
    Unsupported { name: &'static str, value: String },

    #[error("Missing attribute {tag}")]
    MissingAttribute { tag: Tag },

    #[error("Pixel data must be native (uncompressed) to access frames")]
    EncapsulatedPixelData,

    #[error("Pixel data length {actual} does not hold {frames} frame(s) of {frame_size} bytes")]
    PixelDataLength {
        actual: usize,
        frames: usize,
        frame_size: usize,
    },

    #[error("Unable to extract embedded overlay: {reason}")]
    EmbeddedOverlay { reason: String },

    #[error("Operation is invalid when the overlay plane is embedded in the pixel data")]
    OverlayEmbedded,
}

pub type Result<T, E = IodError> = std::result::Result<T, E>;

/// Range check used by every index-based accessor.
pub(crate) fn check_range(name: &'static str, value: i64, min: i64, max: i64) -> Result<()> {
    if value < min || value > max {
        return Err(IodError::ArgumentOutOfRange {
            name,
            value,
            min,
            max,
        });
    }
    Ok(())
}

pub(crate) fn embedded_overlay(reason: impl Into<String>) -> IodError {
    IodError::EmbeddedOverlay {
        reason: reason.into(),
    }
}
