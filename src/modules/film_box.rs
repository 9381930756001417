//
// film_box.rs
// Dicom-Iod-rs
//
// Basic Film Box module (C.13.3) with typed Image Display Format and Film Size ID.
//
// Dicom-Iod-rs contributors - October 2026

use std::fmt;
use std::str::FromStr;

use dicom::core::{Tag, VR};
use serde::Serialize;

use crate::dataset::{AttributeProvider, AttributeProviderMut};
use crate::error::{IodError, Result};
use crate::macros::sop_reference::{get_references, put_references, SopInstanceReference};
use crate::tags;
use crate::values::{defined_terms, YesNo};

const MILLIMETRES_PER_INCH: f64 = 25.4;

defined_terms! {
    pub enum FilmOrientation ("FilmOrientation") {
        Portrait => "PORTRAIT",
        Landscape => "LANDSCAPE",
    }
}

defined_terms! {
    pub enum MagnificationType ("MagnificationType") {
        Replicate => "REPLICATE",
        Bilinear => "BILINEAR",
        Cubic => "CUBIC",
        None => "NONE",
    }
}

defined_terms! {
    pub enum SmoothingType ("SmoothingType") {
        Cubic => "CUBIC",
    }
}

defined_terms! {
    /// Border Density and Empty Image Density.
    pub enum Density ("Density") {
        Black => "BLACK",
        White => "WHITE",
    }
}

defined_terms! {
    pub enum RequestedResolution ("RequestedResolutionId") {
        Standard => "STANDARD",
        High => "HIGH",
    }
}

defined_terms! {
    pub enum DisplayFormatKind ("ImageDisplayFormat") {
        Standard => "STANDARD",
        Row => "ROW",
        Col => "COL",
        Slide => "SLIDE",
        SuperSlide => "SUPERSLIDE",
        Custom => "CUSTOM",
    }
}

/// Parsed Image Display Format (2010,0010), e.g. `STANDARD\2,3` or `ROW\1,2,1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageDisplayFormat {
    pub format: DisplayFormatKind,
    pub modifiers: Vec<u32>,
}

impl ImageDisplayFormat {
    pub fn standard(columns: u32, rows: u32) -> Self {
        Self {
            format: DisplayFormatKind::Standard,
            modifiers: vec![columns, rows],
        }
    }

    pub fn maximum_image_boxes(&self) -> u32 {
        if self.modifiers.is_empty() {
            return 1;
        }
        match self.format {
            DisplayFormatKind::Standard => self
                .modifiers
                .iter()
                .fold(1_u32, |boxes, &m| boxes.saturating_mul(m)),
            _ => self
                .modifiers
                .iter()
                .fold(0_u32, |boxes, &m| boxes.saturating_add(m)),
        }
    }
}

impl FromStr for ImageDisplayFormat {
    type Err = IodError;

    fn from_str(value: &str) -> Result<Self> {
        let invalid = || IodError::InvalidValue {
            name: "ImageDisplayFormat",
            value: value.to_string(),
        };
        let (head, tail) = value.split_once('\\').unwrap_or((value, ""));
        let format: DisplayFormatKind = head.parse().map_err(|_| invalid())?;
        if matches!(
            format,
            DisplayFormatKind::Slide | DisplayFormatKind::SuperSlide | DisplayFormatKind::Custom
        ) {
            return Err(IodError::Unsupported {
                name: "ImageDisplayFormat",
                value: head.to_string(),
            });
        }
        let modifiers = if tail.is_empty() {
            Vec::new()
        } else {
            tail.split(',')
                .map(|m| m.trim().parse::<u32>())
                .collect::<std::result::Result<Vec<_>, _>>()
                .map_err(|_| invalid())?
        };
        let arity_ok = match format {
            DisplayFormatKind::Standard => modifiers.len() == 2,
            _ => modifiers.len() >= 2,
        };
        if !arity_ok {
            return Err(invalid());
        }
        Ok(Self { format, modifiers })
    }
}

impl fmt::Display for ImageDisplayFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format)?;
        if !self.modifiers.is_empty() {
            let modifiers: Vec<String> = self.modifiers.iter().map(u32::to_string).collect();
            write!(f, "\\{}", modifiers.join(","))?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FilmSizeUnit {
    Inch,
    Centimeter,
}

impl FilmSizeUnit {
    fn suffix(self) -> &'static str {
        match self {
            FilmSizeUnit::Inch => "IN",
            FilmSizeUnit::Centimeter => "CM",
        }
    }
}

/// Film Size ID (2010,0050): `14INX17IN`, `8_5INX11IN`, `24CMX30CM`, `A3`, `A4`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilmSize {
    dicom_string: String,
    unit: FilmSizeUnit,
    width: f64,
    height: f64,
}

impl FilmSize {
    pub fn as_dicom_str(&self) -> &str {
        &self.dicom_string
    }

    pub fn unit(&self) -> FilmSizeUnit {
        self.unit
    }

    pub fn width(&self, unit: FilmSizeUnit) -> f64 {
        convert(self.width, self.unit, unit)
    }

    pub fn height(&self, unit: FilmSizeUnit) -> f64 {
        convert(self.height, self.unit, unit)
    }
}

fn convert(value: f64, from: FilmSizeUnit, to: FilmSizeUnit) -> f64 {
    match (from, to) {
        (FilmSizeUnit::Inch, FilmSizeUnit::Centimeter) => value * MILLIMETRES_PER_INCH / 10.0,
        (FilmSizeUnit::Centimeter, FilmSizeUnit::Inch) => 10.0 * value / MILLIMETRES_PER_INCH,
        _ => value,
    }
}

impl FromStr for FilmSize {
    type Err = IodError;

    fn from_str(value: &str) -> Result<Self> {
        let invalid = || IodError::InvalidValue {
            name: "FilmSizeId",
            value: value.to_string(),
        };
        let (unit, width, height) = match value {
            "A3" => (FilmSizeUnit::Centimeter, 29.7, 42.0),
            "A4" => (FilmSizeUnit::Centimeter, 21.0, 29.7),
            _ => {
                let x = value.find('X').filter(|&x| x >= 3).ok_or_else(invalid)?;
                let (first, second) = (&value[..x], &value[x + 1..]);
                let unit = [FilmSizeUnit::Inch, FilmSizeUnit::Centimeter]
                    .into_iter()
                    .find(|u| first.ends_with(u.suffix()))
                    .ok_or_else(invalid)?;
                let second = second.strip_suffix(unit.suffix()).ok_or_else(invalid)?;
                let first = &first[..first.len() - 2];
                let parse = |s: &str| s.replace('_', ".").parse::<f64>().map_err(|_| invalid());
                (unit, parse(first)?, parse(second)?)
            }
        };
        Ok(Self {
            dicom_string: value.to_string(),
            unit,
            width,
            height,
        })
    }
}

impl fmt::Display for FilmSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dicom_string)
    }
}

iod_module!(
    /// Basic Film Box module.
    BasicFilmBoxModule
);

impl<P> BasicFilmBoxModule<P> {
    pub const DEFINED_TAGS: [Tag; 18] = [
        tags::IMAGE_DISPLAY_FORMAT,
        tags::ANNOTATION_DISPLAY_FORMAT_ID,
        tags::FILM_ORIENTATION,
        tags::FILM_SIZE_ID,
        tags::MAGNIFICATION_TYPE,
        tags::SMOOTHING_TYPE,
        tags::BORDER_DENSITY,
        tags::EMPTY_IMAGE_DENSITY,
        tags::MIN_DENSITY,
        tags::MAX_DENSITY,
        tags::TRIM,
        tags::CONFIGURATION_INFORMATION,
        tags::ILLUMINATION,
        tags::REFLECTED_AMBIENT_LIGHT,
        tags::REQUESTED_RESOLUTION_ID,
        tags::REFERENCED_FILM_SESSION_SEQUENCE,
        tags::REFERENCED_IMAGE_BOX_SEQUENCE,
        tags::REFERENCED_BASIC_ANNOTATION_BOX_SEQUENCE,
    ];
}

impl<P: AttributeProvider> BasicFilmBoxModule<P> {
    pub fn has_values(&self) -> bool {
        Self::DEFINED_TAGS.iter().any(|&tag| self.provider.has_value(tag))
    }

    /// `Ok(None)` when absent; unsupported or malformed strings are errors.
    pub fn image_display_format(&self) -> Result<Option<ImageDisplayFormat>> {
        self.provider
            .get_raw_string(tags::IMAGE_DISPLAY_FORMAT)
            .map(|s| s.parse())
            .transpose()
    }

    pub fn annotation_display_format_id(&self) -> Option<String> {
        self.provider.get_string(tags::ANNOTATION_DISPLAY_FORMAT_ID)
    }

    pub fn film_orientation(&self) -> Option<FilmOrientation> {
        self.provider.get_term(tags::FILM_ORIENTATION)
    }

    pub fn film_size_id(&self) -> Result<Option<FilmSize>> {
        self.provider
            .get_string(tags::FILM_SIZE_ID)
            .map(|s| s.parse())
            .transpose()
    }

    pub fn magnification_type(&self) -> Option<MagnificationType> {
        self.provider.get_term(tags::MAGNIFICATION_TYPE)
    }

    pub fn smoothing_type(&self) -> Option<SmoothingType> {
        self.provider.get_term(tags::SMOOTHING_TYPE)
    }

    /// BLACK, WHITE, or an optical density in hundredths of OD.
    pub fn border_density(&self) -> Option<String> {
        self.provider.get_string(tags::BORDER_DENSITY)
    }

    pub fn empty_image_density(&self) -> Option<String> {
        self.provider.get_string(tags::EMPTY_IMAGE_DENSITY)
    }

    pub fn min_density(&self) -> Option<u16> {
        self.provider.get_int(tags::MIN_DENSITY)
    }

    pub fn max_density(&self) -> Option<u16> {
        self.provider.get_int(tags::MAX_DENSITY)
    }

    pub fn trim(&self) -> Option<YesNo> {
        self.provider.get_term(tags::TRIM)
    }

    pub fn configuration_information(&self) -> Option<String> {
        self.provider.get_raw_string(tags::CONFIGURATION_INFORMATION)
    }

    pub fn illumination(&self) -> Option<u16> {
        self.provider.get_int(tags::ILLUMINATION)
    }

    pub fn reflected_ambient_light(&self) -> Option<u16> {
        self.provider.get_int(tags::REFLECTED_AMBIENT_LIGHT)
    }

    pub fn requested_resolution_id(&self) -> Option<RequestedResolution> {
        self.provider.get_term(tags::REQUESTED_RESOLUTION_ID)
    }

    pub fn referenced_film_sessions(&self) -> Vec<SopInstanceReference> {
        get_references(&self.provider, tags::REFERENCED_FILM_SESSION_SEQUENCE)
    }

    pub fn referenced_image_boxes(&self) -> Vec<SopInstanceReference> {
        get_references(&self.provider, tags::REFERENCED_IMAGE_BOX_SEQUENCE)
    }

    pub fn referenced_basic_annotation_boxes(&self) -> Vec<SopInstanceReference> {
        get_references(&self.provider, tags::REFERENCED_BASIC_ANNOTATION_BOX_SEQUENCE)
    }
}

impl<P: AttributeProviderMut> BasicFilmBoxModule<P> {
    pub fn set_image_display_format(&mut self, value: &ImageDisplayFormat) {
        let value = value.to_string();
        self.provider
            .put_string(tags::IMAGE_DISPLAY_FORMAT, VR::ST, &value);
    }

    pub fn set_annotation_display_format_id(&mut self, value: Option<&str>) {
        self.provider
            .put_string_or_remove(tags::ANNOTATION_DISPLAY_FORMAT_ID, VR::CS, value);
    }

    pub fn set_film_orientation(&mut self, value: Option<FilmOrientation>) {
        self.provider.put_term_or_remove(tags::FILM_ORIENTATION, value);
    }

    pub fn set_film_size_id(&mut self, value: Option<&FilmSize>) {
        self.provider.put_string_or_remove(
            tags::FILM_SIZE_ID,
            VR::CS,
            value.map(FilmSize::as_dicom_str),
        );
    }

    pub fn set_magnification_type(&mut self, value: Option<MagnificationType>) {
        self.provider.put_term_or_remove(tags::MAGNIFICATION_TYPE, value);
    }

    pub fn set_smoothing_type(&mut self, value: Option<SmoothingType>) {
        self.provider.put_term_or_remove(tags::SMOOTHING_TYPE, value);
    }

    pub fn set_border_density(&mut self, value: Option<Density>) {
        self.provider.put_term_or_remove(tags::BORDER_DENSITY, value);
    }

    pub fn set_empty_image_density(&mut self, value: Option<Density>) {
        self.provider.put_term_or_remove(tags::EMPTY_IMAGE_DENSITY, value);
    }

    pub fn set_min_density(&mut self, value: Option<u16>) {
        self.put_us(tags::MIN_DENSITY, value);
    }

    pub fn set_max_density(&mut self, value: Option<u16>) {
        self.put_us(tags::MAX_DENSITY, value);
    }

    pub fn set_trim(&mut self, value: Option<YesNo>) {
        self.provider.put_term_or_remove(tags::TRIM, value);
    }

    pub fn set_configuration_information(&mut self, value: Option<&str>) {
        self.provider
            .put_string_or_remove(tags::CONFIGURATION_INFORMATION, VR::ST, value);
    }

    pub fn set_illumination(&mut self, value: Option<u16>) {
        self.put_us(tags::ILLUMINATION, value);
    }

    pub fn set_reflected_ambient_light(&mut self, value: Option<u16>) {
        self.put_us(tags::REFLECTED_AMBIENT_LIGHT, value);
    }

    pub fn set_requested_resolution_id(&mut self, value: Option<RequestedResolution>) {
        self.provider.put_term_or_remove(tags::REQUESTED_RESOLUTION_ID, value);
    }

    pub fn set_referenced_film_sessions(&mut self, references: &[SopInstanceReference]) {
        put_references(
            &mut self.provider,
            tags::REFERENCED_FILM_SESSION_SEQUENCE,
            references,
        );
    }

    pub fn set_referenced_image_boxes(&mut self, references: &[SopInstanceReference]) {
        put_references(&mut self.provider, tags::REFERENCED_IMAGE_BOX_SEQUENCE, references);
    }

    pub fn set_referenced_basic_annotation_boxes(&mut self, references: &[SopInstanceReference]) {
        put_references(
            &mut self.provider,
            tags::REFERENCED_BASIC_ANNOTATION_BOX_SEQUENCE,
            references,
        );
    }

    fn put_us(&mut self, tag: Tag, value: Option<u16>) {
        match value {
            Some(v) => self.provider.put_value(tag, VR::US, v),
            None => {
                self.provider.remove(tag);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicom::object::InMemDicomObject;

    #[test]
    fn display_formats_count_boxes() {
        let standard: ImageDisplayFormat = "STANDARD\\3,4".parse().unwrap();
        assert_eq!(standard.maximum_image_boxes(), 12);
        let row: ImageDisplayFormat = "ROW\\1,2,3".parse().unwrap();
        assert_eq!(row.maximum_image_boxes(), 6);
        assert_eq!(row.to_string(), "ROW\\1,2,3");
        let huge: ImageDisplayFormat = "STANDARD\\100000,100000".parse().unwrap();
        assert_eq!(huge.maximum_image_boxes(), u32::MAX);
        let wide: ImageDisplayFormat = "ROW\\4294967295,1".parse().unwrap();
        assert_eq!(wide.maximum_image_boxes(), u32::MAX);
    }

    #[test]
    fn display_format_errors() {
        assert!(matches!(
            "STANDARD\\1".parse::<ImageDisplayFormat>(),
            Err(IodError::InvalidValue { .. })
        ));
        assert!(matches!(
            "COL\\2".parse::<ImageDisplayFormat>(),
            Err(IodError::InvalidValue { .. })
        ));
        assert!(matches!(
            "STANDARD\\a,b".parse::<ImageDisplayFormat>(),
            Err(IodError::InvalidValue { .. })
        ));
        assert!(matches!(
            "SLIDE".parse::<ImageDisplayFormat>(),
            Err(IodError::Unsupported { .. })
        ));
        assert!(matches!(
            "CUSTOM\\7".parse::<ImageDisplayFormat>(),
            Err(IodError::Unsupported { .. })
        ));
    }

    #[test]
    fn film_sizes_parse_and_convert() {
        let size: FilmSize = "8_5INX11IN".parse().unwrap();
        assert_eq!(size.unit(), FilmSizeUnit::Inch);
        assert_eq!(size.width(FilmSizeUnit::Inch), 8.5);
        assert!((size.height(FilmSizeUnit::Centimeter) - 27.94).abs() < 1e-9);

        let a4: FilmSize = "A4".parse().unwrap();
        assert_eq!(a4.width(FilmSizeUnit::Centimeter), 21.0);
        assert!((a4.height(FilmSizeUnit::Inch) - 11.692913).abs() < 1e-5);

        let cm: FilmSize = "24CMX30CM".parse().unwrap();
        assert_eq!(cm.height(FilmSizeUnit::Centimeter), 30.0);
    }

    #[test]
    fn film_size_errors() {
        for bad in ["8X10IN", "14INX17CM", "14MMX17MM", "A5", "XXINX10IN"] {
            assert!(bad.parse::<FilmSize>().is_err(), "{bad}");
        }
    }

    #[test]
    fn module_round_trip() {
        let mut module = BasicFilmBoxModule::new(InMemDicomObject::new_empty());
        module.set_image_display_format(&ImageDisplayFormat::standard(2, 2));
        module.set_film_size_id(Some(&"14INX17IN".parse().unwrap()));
        module.set_film_orientation(Some(FilmOrientation::Landscape));
        module.set_max_density(Some(320));
        module.set_trim(Some(YesNo::No));

        let format = module.image_display_format().unwrap().unwrap();
        assert_eq!(format.maximum_image_boxes(), 4);
        assert_eq!(
            module.film_size_id().unwrap().map(|s| s.to_string()).as_deref(),
            Some("14INX17IN")
        );
        assert_eq!(module.film_orientation(), Some(FilmOrientation::Landscape));
        assert_eq!(module.max_density(), Some(320));
        assert_eq!(module.trim(), Some(YesNo::No));
        assert_eq!(module.min_density(), None);
    }
}
