//
// general_series.rs
// Dicom-Iod-rs
//
// General Series module (C.7.3.1).
//
// Dicom-Iod-rs contributors - October 2026

use chrono::NaiveDateTime;
use dicom::core::value::PrimitiveValue;
use dicom::core::{Tag, VR};

use crate::dataset::{AttributeProvider, AttributeProviderMut};
use crate::error::Result;
use crate::macros::sop_reference::{get_reference, put_references};
use crate::macros::{PerformedProcedureStepSummary, RequestAttributes, SopInstanceReference};
use crate::tags;
use crate::values::datetime::{get_date_time, put_date_time_or_remove};
use crate::values::{defined_terms, PatientDirection};

defined_terms! {
    pub enum Modality ("Modality") {
        Ar => "AR",
        Au => "AU",
        Bdus => "BDUS",
        Bi => "BI",
        Bmd => "BMD",
        Cr => "CR",
        Ct => "CT",
        Dg => "DG",
        Doc => "DOC",
        Dx => "DX",
        Ecg => "ECG",
        Eps => "EPS",
        Es => "ES",
        Gm => "GM",
        Hc => "HC",
        Hd => "HD",
        Io => "IO",
        Ivoct => "IVOCT",
        Ivus => "IVUS",
        Ker => "KER",
        Ko => "KO",
        Len => "LEN",
        Ls => "LS",
        Mg => "MG",
        Mr => "MR",
        Nm => "NM",
        Oam => "OAM",
        Oct => "OCT",
        Op => "OP",
        Opm => "OPM",
        Opt => "OPT",
        Opv => "OPV",
        Ot => "OT",
        Plan => "PLAN",
        Pr => "PR",
        Pt => "PT",
        Px => "PX",
        Reg => "REG",
        Resp => "RESP",
        Rf => "RF",
        Rg => "RG",
        RtDose => "RTDOSE",
        RtImage => "RTIMAGE",
        RtPlan => "RTPLAN",
        RtRecord => "RTRECORD",
        RtStruct => "RTSTRUCT",
        Seg => "SEG",
        Sm => "SM",
        Smr => "SMR",
        Sr => "SR",
        Srf => "SRF",
        Tg => "TG",
        Us => "US",
        Va => "VA",
        Xa => "XA",
        Xc => "XC",
    }
}

defined_terms! {
    pub enum Laterality ("Laterality") {
        Right => "R",
        Left => "L",
    }
}

defined_terms! {
    pub enum AnatomicalOrientationType ("AnatomicalOrientationType") {
        Biped => "BIPED",
        Quadruped => "QUADRUPED",
    }
}

iod_module!(
    /// General Series module.
    GeneralSeriesModule
);

impl<P> GeneralSeriesModule<P> {
    pub const DEFINED_TAGS: [Tag; 23] = [
        tags::BODY_PART_EXAMINED,
        tags::COMMENTS_ON_THE_PERFORMED_PROCEDURE_STEP,
        tags::LARGEST_PIXEL_VALUE_IN_SERIES,
        tags::LATERALITY,
        tags::MODALITY,
        tags::OPERATORS_NAME,
        tags::PATIENT_POSITION,
        tags::PERFORMED_PROCEDURE_STEP_DESCRIPTION,
        tags::PERFORMED_PROCEDURE_STEP_ID,
        tags::PERFORMED_PROCEDURE_STEP_START_DATE,
        tags::PERFORMED_PROCEDURE_STEP_START_TIME,
        tags::PERFORMED_PROTOCOL_CODE_SEQUENCE,
        tags::PERFORMING_PHYSICIAN_NAME,
        tags::PROTOCOL_NAME,
        tags::REFERENCED_PERFORMED_PROCEDURE_STEP_SEQUENCE,
        tags::REQUEST_ATTRIBUTES_SEQUENCE,
        tags::SERIES_DATE,
        tags::SERIES_TIME,
        tags::SERIES_DESCRIPTION,
        tags::SERIES_INSTANCE_UID,
        tags::SERIES_NUMBER,
        tags::SMALLEST_PIXEL_VALUE_IN_SERIES,
        tags::ANATOMICAL_ORIENTATION_TYPE,
    ];
}

impl<P: AttributeProvider> GeneralSeriesModule<P> {
    pub fn has_values(&self) -> bool {
        Self::DEFINED_TAGS.iter().any(|&tag| self.provider.has_value(tag))
    }

    pub fn modality(&self) -> Option<Modality> {
        self.provider.get_term(tags::MODALITY)
    }

    pub fn series_instance_uid(&self) -> Option<String> {
        self.provider.get_string(tags::SERIES_INSTANCE_UID)
    }

    pub fn series_number(&self) -> Option<i32> {
        self.provider.get_int(tags::SERIES_NUMBER)
    }

    pub fn laterality(&self) -> Option<Laterality> {
        self.provider.get_term(tags::LATERALITY)
    }

    pub fn series_date_time(&self) -> Option<NaiveDateTime> {
        get_date_time(&self.provider, tags::SERIES_DATE, tags::SERIES_TIME)
    }

    /// Backslash separated when several physicians are listed.
    pub fn performing_physicians_name(&self) -> Option<String> {
        self.provider.get_raw_string(tags::PERFORMING_PHYSICIAN_NAME)
    }

    pub fn protocol_name(&self) -> Option<String> {
        self.provider.get_string(tags::PROTOCOL_NAME)
    }

    pub fn series_description(&self) -> Option<String> {
        self.provider.get_string(tags::SERIES_DESCRIPTION)
    }

    pub fn operators_name(&self) -> Option<String> {
        self.provider.get_raw_string(tags::OPERATORS_NAME)
    }

    pub fn referenced_performed_procedure_step(&self) -> Option<SopInstanceReference> {
        get_reference(
            &self.provider,
            tags::REFERENCED_PERFORMED_PROCEDURE_STEP_SEQUENCE,
        )
    }

    pub fn body_part_examined(&self) -> Option<String> {
        self.provider.get_string(tags::BODY_PART_EXAMINED)
    }

    pub fn patient_position(&self) -> Option<String> {
        self.provider.get_string(tags::PATIENT_POSITION)
    }

    pub fn smallest_pixel_value_in_series(&self) -> Option<i32> {
        self.provider.get_int(tags::SMALLEST_PIXEL_VALUE_IN_SERIES)
    }

    pub fn largest_pixel_value_in_series(&self) -> Option<i32> {
        self.provider.get_int(tags::LARGEST_PIXEL_VALUE_IN_SERIES)
    }

    pub fn request_attributes(&self) -> Vec<RequestAttributes> {
        self.provider
            .get_items(tags::REQUEST_ATTRIBUTES_SEQUENCE)
            .map(|items| items.iter().map(RequestAttributes::from_item).collect())
            .unwrap_or_default()
    }

    pub fn performed_procedure_step_summary(&self) -> PerformedProcedureStepSummary {
        PerformedProcedureStepSummary::read(&self.provider)
    }

    pub fn anatomical_orientation_type(&self) -> Option<AnatomicalOrientationType> {
        self.provider.get_term(tags::ANATOMICAL_ORIENTATION_TYPE)
    }

    /// Reads a Patient Orientation component under this series' anatomical
    /// orientation type (biped when absent).
    pub fn patient_direction(&self, code: &str) -> PatientDirection {
        PatientDirection::parse(code, self.anatomical_orientation_type())
    }
}

impl<P: AttributeProviderMut> GeneralSeriesModule<P> {
    /// Clears every optional attribute; Series Number stays present and empty.
    /// Modality and Series Instance UID are left untouched.
    pub fn initialize_attributes(&mut self) {
        for tag in Self::DEFINED_TAGS {
            if tag != tags::MODALITY && tag != tags::SERIES_INSTANCE_UID {
                self.provider.remove(tag);
            }
        }
        self.set_series_number(None);
    }

    pub fn set_modality(&mut self, value: Option<Modality>) -> Result<()> {
        self.provider.put_required_term(tags::MODALITY, value)
    }

    pub fn set_series_instance_uid(&mut self, value: &str) -> Result<()> {
        self.provider.put_required_string(
            tags::SERIES_INSTANCE_UID,
            VR::UI,
            "SeriesInstanceUid",
            value,
        )
    }

    pub fn set_series_number(&mut self, value: Option<i32>) {
        match value {
            Some(number) => self.provider.put_int(tags::SERIES_NUMBER, number),
            None => self.provider.put_empty(tags::SERIES_NUMBER, VR::IS),
        }
    }

    pub fn set_laterality(&mut self, value: Option<Laterality>) {
        self.provider.put_term_or_remove(tags::LATERALITY, value);
    }

    pub fn set_series_date_time(&mut self, value: Option<NaiveDateTime>) {
        put_date_time_or_remove(&mut self.provider, tags::SERIES_DATE, tags::SERIES_TIME, value);
    }

    pub fn set_performing_physicians_name(&mut self, value: Option<&str>) {
        self.provider
            .put_string_or_remove(tags::PERFORMING_PHYSICIAN_NAME, VR::PN, value);
    }

    pub fn set_protocol_name(&mut self, value: Option<&str>) {
        self.provider.put_string_or_remove(tags::PROTOCOL_NAME, VR::LO, value);
    }

    pub fn set_series_description(&mut self, value: Option<&str>) {
        self.provider
            .put_string_or_remove(tags::SERIES_DESCRIPTION, VR::LO, value);
    }

    pub fn set_operators_name(&mut self, value: Option<&str>) {
        self.provider.put_string_or_remove(tags::OPERATORS_NAME, VR::PN, value);
    }

    pub fn set_referenced_performed_procedure_step(&mut self, value: Option<&SopInstanceReference>) {
        let references: Vec<SopInstanceReference> = value.into_iter().cloned().collect();
        put_references(
            &mut self.provider,
            tags::REFERENCED_PERFORMED_PROCEDURE_STEP_SEQUENCE,
            &references,
        );
    }

    pub fn set_body_part_examined(&mut self, value: Option<&str>) {
        self.provider
            .put_string_or_remove(tags::BODY_PART_EXAMINED, VR::CS, value);
    }

    pub fn set_patient_position(&mut self, value: Option<&str>) {
        self.provider.put_string_or_remove(tags::PATIENT_POSITION, VR::CS, value);
    }

    pub fn set_smallest_pixel_value_in_series(&mut self, value: Option<i32>) {
        self.put_pixel_value(tags::SMALLEST_PIXEL_VALUE_IN_SERIES, value);
    }

    pub fn set_largest_pixel_value_in_series(&mut self, value: Option<i32>) {
        self.put_pixel_value(tags::LARGEST_PIXEL_VALUE_IN_SERIES, value);
    }

    /// US when the value fits, SS otherwise.
    fn put_pixel_value(&mut self, tag: Tag, value: Option<i32>) {
        match value {
            Some(v) => match u16::try_from(v) {
                Ok(unsigned) => self.provider.put_value(tag, VR::US, PrimitiveValue::from(unsigned)),
                Err(_) => self
                    .provider
                    .put_value(tag, VR::SS, PrimitiveValue::from(v.clamp(i16::MIN.into(), i16::MAX.into()) as i16)),
            },
            None => {
                self.provider.remove(tag);
            }
        }
    }

    pub fn set_request_attributes(&mut self, values: &[RequestAttributes]) {
        self.provider.put_items_or_remove(
            tags::REQUEST_ATTRIBUTES_SEQUENCE,
            values.iter().map(RequestAttributes::to_item).collect(),
        );
    }

    pub fn set_performed_procedure_step_summary(&mut self, value: &PerformedProcedureStepSummary) {
        value.write(&mut self.provider);
    }

    /// Type 1C: `None` leaves the attribute present and empty.
    pub fn set_anatomical_orientation_type(&mut self, value: Option<AnatomicalOrientationType>) {
        self.provider
            .put_term_or_empty(tags::ANATOMICAL_ORIENTATION_TYPE, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use dicom::object::InMemDicomObject;

    #[test]
    fn required_attributes_reject_empty() {
        let mut module = GeneralSeriesModule::new(InMemDicomObject::new_empty());
        assert!(module.set_modality(None).is_err());
        assert!(module.set_series_instance_uid("").is_err());
        module.set_modality(Some(Modality::Mg)).unwrap();
        module.set_series_instance_uid("1.2.840.1").unwrap();
        assert_eq!(module.modality(), Some(Modality::Mg));
        assert_eq!(module.series_instance_uid().as_deref(), Some("1.2.840.1"));
    }

    #[test]
    fn series_date_time_is_type_three() {
        let mut obj = InMemDicomObject::new_empty();
        let mut module = GeneralSeriesModule::new(&mut obj);
        let when = NaiveDate::from_ymd_opt(2020, 1, 31)
            .unwrap()
            .and_hms_opt(23, 59, 1)
            .unwrap();
        module.set_series_date_time(Some(when));
        assert_eq!(module.series_date_time(), Some(when));
        module.set_series_date_time(None);
        assert!(module.into_inner().attribute(tags::SERIES_DATE).is_none());
    }

    #[test]
    fn request_attributes_and_summary() {
        let mut module = GeneralSeriesModule::new(InMemDicomObject::new_empty());
        let request = RequestAttributes {
            requested_procedure_id: Some("RP1".into()),
            ..Default::default()
        };
        module.set_request_attributes(&[request.clone(), request]);
        assert_eq!(module.request_attributes().len(), 2);

        let summary = PerformedProcedureStepSummary {
            performed_procedure_step_id: Some("PPS9".into()),
            comments: Some("ok".into()),
            ..Default::default()
        };
        module.set_performed_procedure_step_summary(&summary);
        assert_eq!(module.performed_procedure_step_summary(), summary);
    }

    #[test]
    fn patient_directions_follow_the_orientation_type() {
        let mut module = GeneralSeriesModule::new(InMemDicomObject::new_empty());
        assert_eq!(module.patient_direction("LP").component_count(), 2);
        assert!(!module.patient_direction("CR").is_valid());
        module.set_anatomical_orientation_type(Some(AnatomicalOrientationType::Quadruped));
        let plantar = module.patient_direction("PL");
        assert!(plantar.is_valid());
        assert_eq!(plantar.orientation_type(), Some(AnatomicalOrientationType::Quadruped));
        assert_eq!(plantar.description(), "Plantar");
    }

    #[test]
    fn pixel_values_pick_a_vr() {
        let mut obj = InMemDicomObject::new_empty();
        let mut module = GeneralSeriesModule::new(&mut obj);
        module.set_smallest_pixel_value_in_series(Some(-100));
        module.set_largest_pixel_value_in_series(Some(4095));
        assert_eq!(module.smallest_pixel_value_in_series(), Some(-100));
        assert_eq!(module.largest_pixel_value_in_series(), Some(4095));
        let obj = module.into_inner();
        assert_eq!(obj.vr(tags::SMALLEST_PIXEL_VALUE_IN_SERIES), Some(VR::SS));
        assert_eq!(obj.vr(tags::LARGEST_PIXEL_VALUE_IN_SERIES), Some(VR::US));
    }
}
