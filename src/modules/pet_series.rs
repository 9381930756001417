//
// pet_series.rs
// Dicom-Iod-rs
//
// PET Series module (C.8.9.1).
//
// Dicom-Iod-rs contributors - October 2026

use chrono::NaiveDateTime;
use dicom::core::{Tag, VR};

use crate::dataset::{AttributeProvider, AttributeProviderMut};
use crate::error::{IodError, Result};
use crate::tags;
use crate::values::datetime::{get_date_time, put_date_time};
use crate::values::defined_terms;

defined_terms! {
    pub enum PetUnits ("Units") {
        Counts => "CNTS",
        None => "NONE",
        SquareCentimetres => "CM2",
        Percent => "PCNT",
        CountsPerSecond => "CPS",
        BecquerelsPerMillilitre => "BQML",
        MilligramsPerMinutePerMillilitre => "MGMINML",
        MicromolesPerMinutePerMillilitre => "UMOLMINML",
        MillilitresPerMinutePerGram => "MLMING",
        MillilitresPerGram => "MLG",
        PerCentimetre => "1CM",
        MicromolesPerMillilitre => "UMOLML",
        ProportionalToCounts => "PROPCNTS",
        ProportionalToCountsPerSecond => "PROPCPS",
        MillilitresPerMinutePerMillilitre => "MLMINML",
        MillilitresPerMillilitre => "MLML",
        GramsPerMillilitre => "GML",
        StandardDeviations => "STDDEV",
    }
}

defined_terms! {
    pub enum CountsSource ("CountsSource") {
        Emission => "EMISSION",
        Transmission => "TRANSMISSION",
    }
}

defined_terms! {
    pub enum DecayCorrection ("DecayCorrection") {
        None => "NONE",
        Start => "START",
        Admin => "ADMIN",
    }
}

defined_terms! {
    pub enum SuvType ("SuvType") {
        BodyWeight => "BW",
        BodySurfaceArea => "BSA",
        LeanBodyMass => "LBM",
        IdealBodyWeight => "IBW",
    }
}

defined_terms! {
    pub enum RandomsCorrectionMethod ("RandomsCorrectionMethod") {
        None => "NONE",
        DelayedEventSubtraction => "DLYD",
        SinglesEstimation => "SING",
    }
}

defined_terms! {
    pub enum CorrectedImage ("CorrectedImage") {
        Uniformity => "UNIF",
        Vertical => "VERT",
        Head => "HEAD",
        Decay => "DECY",
        Attenuation => "ATTN",
        Scatter => "SCAT",
        DeadTime => "DTIM",
        Energy => "NRGY",
        Linearity => "LIN",
        Motion => "MOTN",
        CardiacLeftNormal => "CLN",
        Randoms => "RAN",
        Radial => "RADL",
        DoseCalibration => "DCAL",
        Normalization => "NORM",
    }
}

iod_module!(
    /// PET Series module.
    PetSeriesModule
);

impl<P> PetSeriesModule<P> {
    pub const DEFINED_TAGS: [Tag; 37] = [
        tags::SERIES_DATE,
        tags::SERIES_TIME,
        tags::UNITS,
        tags::SUV_TYPE,
        tags::COUNTS_SOURCE,
        tags::SERIES_TYPE,
        tags::REPROJECTION_METHOD,
        tags::NUMBER_OF_R_R_INTERVALS,
        tags::NUMBER_OF_TIME_SLOTS,
        tags::NUMBER_OF_TIME_SLICES,
        tags::NUMBER_OF_SLICES,
        tags::CORRECTED_IMAGE,
        tags::RANDOMS_CORRECTION_METHOD,
        tags::ATTENUATION_CORRECTION_METHOD,
        tags::SCATTER_CORRECTION_METHOD,
        tags::DECAY_CORRECTION,
        tags::RECONSTRUCTION_DIAMETER,
        tags::CONVOLUTION_KERNEL,
        tags::RECONSTRUCTION_METHOD,
        tags::DETECTOR_LINES_OF_RESPONSE_USED,
        tags::ACQUISITION_START_CONDITION,
        tags::ACQUISITION_START_CONDITION_DATA,
        tags::ACQUISITION_TERMINATION_CONDITION,
        tags::ACQUISITION_TERMINATION_CONDITION_DATA,
        tags::FIELD_OF_VIEW_SHAPE,
        tags::FIELD_OF_VIEW_DIMENSIONS,
        tags::GANTRY_DETECTOR_TILT,
        tags::GANTRY_DETECTOR_SLEW,
        tags::TYPE_OF_DETECTOR_MOTION,
        tags::COLLIMATOR_TYPE,
        tags::COLLIMATOR_GRID_NAME,
        tags::AXIAL_ACCEPTANCE,
        tags::AXIAL_MASH,
        tags::TRANSVERSE_MASH,
        tags::DETECTOR_ELEMENT_SIZE,
        tags::COINCIDENCE_WINDOW_WIDTH,
        tags::SECONDARY_COUNTS_TYPE,
    ];

    /// Type 1 attributes left alone by [`PetSeriesModule::initialize_attributes`].
    const REQUIRED_TAGS: [Tag; 8] = [
        tags::SERIES_DATE,
        tags::SERIES_TIME,
        tags::UNITS,
        tags::COUNTS_SOURCE,
        tags::SERIES_TYPE,
        tags::NUMBER_OF_SLICES,
        tags::DECAY_CORRECTION,
        tags::CORRECTED_IMAGE,
    ];
}

impl<P: AttributeProvider> PetSeriesModule<P> {
    pub fn has_values(&self) -> bool {
        Self::DEFINED_TAGS.iter().any(|&tag| self.provider.has_value(tag))
    }

    pub fn series_date_time(&self) -> Option<NaiveDateTime> {
        get_date_time(&self.provider, tags::SERIES_DATE, tags::SERIES_TIME)
    }

    pub fn units(&self) -> Option<PetUnits> {
        self.provider.get_term(tags::UNITS)
    }

    pub fn suv_type(&self) -> Option<SuvType> {
        self.provider.get_term(tags::SUV_TYPE)
    }

    pub fn counts_source(&self) -> Option<CountsSource> {
        self.provider.get_term(tags::COUNTS_SOURCE)
    }

    /// Both values, e.g. `STATIC\IMAGE`.
    pub fn series_type(&self) -> Option<String> {
        self.provider.get_raw_string(tags::SERIES_TYPE)
    }

    pub fn reprojection_method(&self) -> Option<String> {
        self.provider.get_string(tags::REPROJECTION_METHOD)
    }

    pub fn number_of_r_r_intervals(&self) -> Option<i32> {
        self.provider.get_int(tags::NUMBER_OF_R_R_INTERVALS)
    }

    pub fn number_of_time_slots(&self) -> Option<i32> {
        self.provider.get_int(tags::NUMBER_OF_TIME_SLOTS)
    }

    pub fn number_of_time_slices(&self) -> Option<i32> {
        self.provider.get_int(tags::NUMBER_OF_TIME_SLICES)
    }

    pub fn number_of_slices(&self) -> Option<i32> {
        self.provider.get_int(tags::NUMBER_OF_SLICES)
    }

    pub fn corrected_image(&self) -> Vec<CorrectedImage> {
        self.provider.get_terms(tags::CORRECTED_IMAGE)
    }

    pub fn randoms_correction_method(&self) -> Option<RandomsCorrectionMethod> {
        self.provider.get_term(tags::RANDOMS_CORRECTION_METHOD)
    }

    pub fn attenuation_correction_method(&self) -> Option<String> {
        self.provider.get_string(tags::ATTENUATION_CORRECTION_METHOD)
    }

    pub fn scatter_correction_method(&self) -> Option<String> {
        self.provider.get_string(tags::SCATTER_CORRECTION_METHOD)
    }

    pub fn decay_correction(&self) -> Option<DecayCorrection> {
        self.provider.get_term(tags::DECAY_CORRECTION)
    }

    pub fn reconstruction_diameter(&self) -> Option<f64> {
        self.provider.get_f64(tags::RECONSTRUCTION_DIAMETER)
    }

    pub fn convolution_kernel(&self) -> Option<String> {
        self.provider.get_raw_string(tags::CONVOLUTION_KERNEL)
    }

    pub fn reconstruction_method(&self) -> Option<String> {
        self.provider.get_string(tags::RECONSTRUCTION_METHOD)
    }

    pub fn detector_lines_of_response_used(&self) -> Option<String> {
        self.provider.get_string(tags::DETECTOR_LINES_OF_RESPONSE_USED)
    }

    pub fn acquisition_start_condition(&self) -> Option<String> {
        self.provider.get_string(tags::ACQUISITION_START_CONDITION)
    }

    pub fn acquisition_start_condition_data(&self) -> Option<i32> {
        self.provider.get_int(tags::ACQUISITION_START_CONDITION_DATA)
    }

    pub fn acquisition_termination_condition(&self) -> Option<String> {
        self.provider.get_string(tags::ACQUISITION_TERMINATION_CONDITION)
    }

    pub fn acquisition_termination_condition_data(&self) -> Option<i32> {
        self.provider.get_int(tags::ACQUISITION_TERMINATION_CONDITION_DATA)
    }

    pub fn field_of_view_shape(&self) -> Option<String> {
        self.provider.get_string(tags::FIELD_OF_VIEW_SHAPE)
    }

    pub fn field_of_view_dimensions(&self) -> Vec<f64> {
        self.provider.get_f64s(tags::FIELD_OF_VIEW_DIMENSIONS)
    }

    pub fn gantry_detector_tilt(&self) -> Option<f64> {
        self.provider.get_f64(tags::GANTRY_DETECTOR_TILT)
    }

    pub fn gantry_detector_slew(&self) -> Option<f64> {
        self.provider.get_f64(tags::GANTRY_DETECTOR_SLEW)
    }

    pub fn type_of_detector_motion(&self) -> Option<String> {
        self.provider.get_string(tags::TYPE_OF_DETECTOR_MOTION)
    }

    pub fn collimator_type(&self) -> Option<String> {
        self.provider.get_string(tags::COLLIMATOR_TYPE)
    }

    pub fn collimator_grid_name(&self) -> Option<String> {
        self.provider.get_string(tags::COLLIMATOR_GRID_NAME)
    }

    pub fn axial_acceptance(&self) -> Option<f64> {
        self.provider.get_f64(tags::AXIAL_ACCEPTANCE)
    }

    /// Both values must be present.
    pub fn axial_mash(&self) -> Option<[i32; 2]> {
        Some([
            self.provider.get_int_at(tags::AXIAL_MASH, 0)?,
            self.provider.get_int_at(tags::AXIAL_MASH, 1)?,
        ])
    }

    pub fn transverse_mash(&self) -> Option<i32> {
        self.provider.get_int(tags::TRANSVERSE_MASH)
    }

    pub fn detector_element_size(&self) -> Option<[f64; 2]> {
        Some([
            self.provider.get_f64_at(tags::DETECTOR_ELEMENT_SIZE, 0)?,
            self.provider.get_f64_at(tags::DETECTOR_ELEMENT_SIZE, 1)?,
        ])
    }

    pub fn coincidence_window_width(&self) -> Option<f64> {
        self.provider.get_f64(tags::COINCIDENCE_WINDOW_WIDTH)
    }

    pub fn secondary_counts_type(&self) -> Option<String> {
        self.provider.get_raw_string(tags::SECONDARY_COUNTS_TYPE)
    }
}

impl<P: AttributeProviderMut> PetSeriesModule<P> {
    /// Removes every optional attribute; Type 1 attributes keep their values.
    pub fn initialize_attributes(&mut self) {
        for tag in Self::DEFINED_TAGS {
            if !Self::REQUIRED_TAGS.contains(&tag) {
                self.provider.remove(tag);
            }
        }
        self.provider.put_empty(tags::COLLIMATOR_TYPE, VR::CS);
        if !self.provider.has_value(tags::CORRECTED_IMAGE) {
            self.provider.put_empty(tags::CORRECTED_IMAGE, VR::CS);
        }
    }

    pub fn set_series_date_time(&mut self, value: Option<NaiveDateTime>) -> Result<()> {
        let value = value.ok_or(IodError::RequiredAttribute {
            name: "SeriesDateTime",
        })?;
        put_date_time(
            &mut self.provider,
            tags::SERIES_DATE,
            tags::SERIES_TIME,
            Some(value),
        );
        Ok(())
    }

    pub fn set_units(&mut self, value: Option<PetUnits>) -> Result<()> {
        self.provider.put_required_term(tags::UNITS, value)
    }

    pub fn set_suv_type(&mut self, value: Option<SuvType>) {
        self.provider.put_term_or_remove(tags::SUV_TYPE, value);
    }

    pub fn set_counts_source(&mut self, value: Option<CountsSource>) -> Result<()> {
        self.provider.put_required_term(tags::COUNTS_SOURCE, value)
    }

    /// Two values: the temporal type (STATIC, DYNAMIC, ...) and the image type.
    pub fn set_series_type(&mut self, temporal: &str, image: &str) -> Result<()> {
        if temporal.trim().is_empty() || image.trim().is_empty() {
            return Err(IodError::RequiredAttribute { name: "SeriesType" });
        }
        self.provider
            .put_strings(tags::SERIES_TYPE, VR::CS, &[temporal, image]);
        Ok(())
    }

    pub fn set_reprojection_method(&mut self, value: Option<&str>) {
        self.provider
            .put_string_or_remove(tags::REPROJECTION_METHOD, VR::LO, value);
    }

    pub fn set_number_of_r_r_intervals(&mut self, value: Option<u16>) {
        self.put_us_or_remove(tags::NUMBER_OF_R_R_INTERVALS, value);
    }

    pub fn set_number_of_time_slots(&mut self, value: Option<u16>) {
        self.put_us_or_remove(tags::NUMBER_OF_TIME_SLOTS, value);
    }

    pub fn set_number_of_time_slices(&mut self, value: Option<u16>) {
        self.put_us_or_remove(tags::NUMBER_OF_TIME_SLICES, value);
    }

    pub fn set_number_of_slices(&mut self, value: u16) {
        self.provider.put_value(tags::NUMBER_OF_SLICES, VR::US, value);
    }

    /// Type 2: an empty list leaves the attribute present and empty.
    pub fn set_corrected_image(&mut self, values: &[CorrectedImage]) {
        if values.is_empty() {
            self.provider.put_empty(tags::CORRECTED_IMAGE, VR::CS);
        } else {
            self.provider.put_terms_or_remove(tags::CORRECTED_IMAGE, values);
        }
    }

    pub fn set_randoms_correction_method(&mut self, value: Option<RandomsCorrectionMethod>) {
        self.provider
            .put_term_or_remove(tags::RANDOMS_CORRECTION_METHOD, value);
    }

    pub fn set_attenuation_correction_method(&mut self, value: Option<&str>) {
        self.provider
            .put_string_or_remove(tags::ATTENUATION_CORRECTION_METHOD, VR::LO, value);
    }

    pub fn set_scatter_correction_method(&mut self, value: Option<&str>) {
        self.provider
            .put_string_or_remove(tags::SCATTER_CORRECTION_METHOD, VR::LO, value);
    }

    pub fn set_decay_correction(&mut self, value: Option<DecayCorrection>) -> Result<()> {
        self.provider.put_required_term(tags::DECAY_CORRECTION, value)
    }

    pub fn set_reconstruction_diameter(&mut self, value: Option<f64>) {
        self.put_ds_or_remove(tags::RECONSTRUCTION_DIAMETER, value);
    }

    pub fn set_convolution_kernel(&mut self, value: Option<&str>) {
        self.provider
            .put_string_or_remove(tags::CONVOLUTION_KERNEL, VR::SH, value);
    }

    pub fn set_reconstruction_method(&mut self, value: Option<&str>) {
        self.provider
            .put_string_or_remove(tags::RECONSTRUCTION_METHOD, VR::LO, value);
    }

    pub fn set_detector_lines_of_response_used(&mut self, value: Option<&str>) {
        self.provider
            .put_string_or_remove(tags::DETECTOR_LINES_OF_RESPONSE_USED, VR::LO, value);
    }

    pub fn set_acquisition_start_condition(&mut self, value: Option<&str>) {
        self.provider
            .put_string_or_remove(tags::ACQUISITION_START_CONDITION, VR::CS, value);
    }

    pub fn set_acquisition_start_condition_data(&mut self, value: Option<i32>) {
        self.put_is_or_remove(tags::ACQUISITION_START_CONDITION_DATA, value);
    }

    pub fn set_acquisition_termination_condition(&mut self, value: Option<&str>) {
        self.provider
            .put_string_or_remove(tags::ACQUISITION_TERMINATION_CONDITION, VR::CS, value);
    }

    pub fn set_acquisition_termination_condition_data(&mut self, value: Option<i32>) {
        self.put_is_or_remove(tags::ACQUISITION_TERMINATION_CONDITION_DATA, value);
    }

    pub fn set_field_of_view_shape(&mut self, value: Option<&str>) {
        self.provider
            .put_string_or_remove(tags::FIELD_OF_VIEW_SHAPE, VR::CS, value);
    }

    pub fn set_field_of_view_dimensions(&mut self, values: &[f64]) {
        if values.is_empty() {
            self.provider.remove(tags::FIELD_OF_VIEW_DIMENSIONS);
        } else {
            self.provider
                .put_f64s(tags::FIELD_OF_VIEW_DIMENSIONS, VR::IS, values);
        }
    }

    pub fn set_gantry_detector_tilt(&mut self, value: Option<f64>) {
        self.put_ds_or_remove(tags::GANTRY_DETECTOR_TILT, value);
    }

    pub fn set_gantry_detector_slew(&mut self, value: Option<f64>) {
        self.put_ds_or_remove(tags::GANTRY_DETECTOR_SLEW, value);
    }

    pub fn set_type_of_detector_motion(&mut self, value: Option<&str>) {
        self.provider
            .put_string_or_remove(tags::TYPE_OF_DETECTOR_MOTION, VR::CS, value);
    }

    /// Type 2.
    pub fn set_collimator_type(&mut self, value: Option<&str>) {
        self.provider
            .put_string_or_empty(tags::COLLIMATOR_TYPE, VR::CS, value);
    }

    pub fn set_collimator_grid_name(&mut self, value: Option<&str>) {
        self.provider
            .put_string_or_remove(tags::COLLIMATOR_GRID_NAME, VR::SH, value);
    }

    pub fn set_axial_acceptance(&mut self, value: Option<f64>) {
        self.put_ds_or_remove(tags::AXIAL_ACCEPTANCE, value);
    }

    pub fn set_axial_mash(&mut self, value: Option<[i32; 2]>) {
        match value {
            Some(mash) => self.provider.put_ints(tags::AXIAL_MASH, &mash),
            None => {
                self.provider.remove(tags::AXIAL_MASH);
            }
        }
    }

    pub fn set_transverse_mash(&mut self, value: Option<i32>) {
        self.put_is_or_remove(tags::TRANSVERSE_MASH, value);
    }

    pub fn set_detector_element_size(&mut self, value: Option<[f64; 2]>) {
        match value {
            Some(size) => self
                .provider
                .put_f64s(tags::DETECTOR_ELEMENT_SIZE, VR::DS, &size),
            None => {
                self.provider.remove(tags::DETECTOR_ELEMENT_SIZE);
            }
        }
    }

    pub fn set_coincidence_window_width(&mut self, value: Option<f64>) {
        self.put_ds_or_remove(tags::COINCIDENCE_WINDOW_WIDTH, value);
    }

    pub fn set_secondary_counts_type(&mut self, value: Option<&str>) {
        self.provider
            .put_string_or_remove(tags::SECONDARY_COUNTS_TYPE, VR::CS, value);
    }

    fn put_us_or_remove(&mut self, tag: Tag, value: Option<u16>) {
        match value {
            Some(v) => self.provider.put_value(tag, VR::US, v),
            None => {
                self.provider.remove(tag);
            }
        }
    }

    fn put_is_or_remove(&mut self, tag: Tag, value: Option<i32>) {
        match value {
            Some(v) => self.provider.put_int(tag, v),
            None => {
                self.provider.remove(tag);
            }
        }
    }

    fn put_ds_or_remove(&mut self, tag: Tag, value: Option<f64>) {
        match value {
            Some(v) => self.provider.put_f64(tag, VR::DS, v),
            None => {
                self.provider.remove(tag);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use dicom::object::InMemDicomObject;

    fn populated() -> PetSeriesModule<InMemDicomObject> {
        let mut module = PetSeriesModule::new(InMemDicomObject::new_empty());
        let when = NaiveDate::from_ymd_opt(2012, 9, 1)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap();
        module.set_series_date_time(Some(when)).unwrap();
        module.set_units(Some(PetUnits::BecquerelsPerMillilitre)).unwrap();
        module.set_counts_source(Some(CountsSource::Emission)).unwrap();
        module.set_series_type("STATIC", "IMAGE").unwrap();
        module.set_number_of_slices(47);
        module.set_decay_correction(Some(DecayCorrection::Start)).unwrap();
        module.set_corrected_image(&[CorrectedImage::Decay, CorrectedImage::Attenuation]);
        module
    }

    #[test]
    fn required_attributes_reject_none() {
        let mut module = PetSeriesModule::new(InMemDicomObject::new_empty());
        assert!(module.set_units(None).is_err());
        assert!(module.set_decay_correction(None).is_err());
        assert!(module.set_series_date_time(None).is_err());
        assert!(module.set_series_type("STATIC", "").is_err());
        assert!(!module.has_values());
    }

    #[test]
    fn typed_values_round_trip() {
        let mut module = populated();
        module.set_axial_mash(Some([5, 6]));
        module.set_detector_element_size(Some([4.0, 4.5]));
        module.set_field_of_view_dimensions(&[250.0, 150.0]);
        module.set_suv_type(Some(SuvType::LeanBodyMass));

        assert!(module.has_values());
        assert_eq!(module.units(), Some(PetUnits::BecquerelsPerMillilitre));
        assert_eq!(module.series_type().as_deref(), Some("STATIC\\IMAGE"));
        assert_eq!(module.number_of_slices(), Some(47));
        assert_eq!(
            module.corrected_image(),
            vec![CorrectedImage::Decay, CorrectedImage::Attenuation]
        );
        assert_eq!(module.axial_mash(), Some([5, 6]));
        assert_eq!(module.detector_element_size(), Some([4.0, 4.5]));
        assert_eq!(module.field_of_view_dimensions(), vec![250.0, 150.0]);
        assert_eq!(module.suv_type(), Some(SuvType::LeanBodyMass));
        assert_eq!("1CM".parse::<PetUnits>().unwrap(), PetUnits::PerCentimetre);
    }

    #[test]
    fn initialize_keeps_required_values() {
        let mut module = populated();
        module.set_transverse_mash(Some(3));
        module.set_reconstruction_diameter(Some(600.0));
        module.initialize_attributes();

        assert_eq!(module.transverse_mash(), None);
        assert_eq!(module.reconstruction_diameter(), None);
        assert_eq!(module.decay_correction(), Some(DecayCorrection::Start));
        assert!(module.provider().attribute(tags::COLLIMATOR_TYPE).is_some());
        assert_eq!(module.collimator_type(), None);
    }
}
