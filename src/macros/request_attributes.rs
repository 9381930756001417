//
// request_attributes.rs
// Dicom-Iod-rs
//
// Request Attributes macro (Table 10-9), carried by the General Series Request Attributes Sequence.
//
// Dicom-Iod-rs contributors - October 2026

use dicom::core::VR;
use dicom::object::InMemDicomObject;
use serde::Serialize;

use crate::dataset::{AttributeProvider, AttributeProviderMut};
use crate::macros::sop_reference::{get_references, put_references, SopInstanceReference};
use crate::tags;
use crate::values::code_sequence::{get_codes, put_codes};
use crate::values::CodeSequenceMacro;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RequestAttributes {
    pub requested_procedure_id: Option<String>,
    pub accession_number: Option<String>,
    pub study_instance_uid: Option<String>,
    pub referenced_studies: Vec<SopInstanceReference>,
    pub requested_procedure_description: Option<String>,
    pub requested_procedure_code: Option<CodeSequenceMacro>,
    pub reason_for_the_requested_procedure: Option<String>,
    pub reason_for_requested_procedure_code: Option<CodeSequenceMacro>,
    pub scheduled_procedure_step_id: Option<String>,
    pub scheduled_procedure_step_description: Option<String>,
    pub scheduled_protocol_codes: Vec<CodeSequenceMacro>,
}

impl RequestAttributes {
    pub fn from_item(item: &InMemDicomObject) -> Self {
        Self {
            requested_procedure_id: item.get_string(tags::REQUESTED_PROCEDURE_ID),
            accession_number: item.get_string(tags::ACCESSION_NUMBER),
            study_instance_uid: item.get_string(tags::STUDY_INSTANCE_UID),
            referenced_studies: get_references(item, tags::REFERENCED_STUDY_SEQUENCE),
            requested_procedure_description: item.get_string(tags::REQUESTED_PROCEDURE_DESCRIPTION),
            requested_procedure_code: get_codes(item, tags::REQUESTED_PROCEDURE_CODE_SEQUENCE)
                .into_iter()
                .next(),
            reason_for_the_requested_procedure: item
                .get_string(tags::REASON_FOR_THE_REQUESTED_PROCEDURE),
            reason_for_requested_procedure_code: get_codes(
                item,
                tags::REASON_FOR_REQUESTED_PROCEDURE_CODE_SEQUENCE,
            )
            .into_iter()
            .next(),
            scheduled_procedure_step_id: item.get_string(tags::SCHEDULED_PROCEDURE_STEP_ID),
            scheduled_procedure_step_description: item
                .get_string(tags::SCHEDULED_PROCEDURE_STEP_DESCRIPTION),
            scheduled_protocol_codes: get_codes(item, tags::SCHEDULED_PROTOCOL_CODE_SEQUENCE),
        }
    }

    pub fn to_item(&self) -> InMemDicomObject {
        let mut item = InMemDicomObject::new_empty();
        item.put_string_or_remove(
            tags::REQUESTED_PROCEDURE_ID,
            VR::SH,
            self.requested_procedure_id.as_deref(),
        );
        item.put_string_or_remove(tags::ACCESSION_NUMBER, VR::SH, self.accession_number.as_deref());
        item.put_string_or_remove(
            tags::STUDY_INSTANCE_UID,
            VR::UI,
            self.study_instance_uid.as_deref(),
        );
        put_references(&mut item, tags::REFERENCED_STUDY_SEQUENCE, &self.referenced_studies);
        item.put_string_or_remove(
            tags::REQUESTED_PROCEDURE_DESCRIPTION,
            VR::LO,
            self.requested_procedure_description.as_deref(),
        );
        put_codes(
            &mut item,
            tags::REQUESTED_PROCEDURE_CODE_SEQUENCE,
            self.requested_procedure_code.as_slice(),
        );
        item.put_string_or_remove(
            tags::REASON_FOR_THE_REQUESTED_PROCEDURE,
            VR::LO,
            self.reason_for_the_requested_procedure.as_deref(),
        );
        put_codes(
            &mut item,
            tags::REASON_FOR_REQUESTED_PROCEDURE_CODE_SEQUENCE,
            self.reason_for_requested_procedure_code.as_slice(),
        );
        item.put_string_or_remove(
            tags::SCHEDULED_PROCEDURE_STEP_ID,
            VR::SH,
            self.scheduled_procedure_step_id.as_deref(),
        );
        item.put_string_or_remove(
            tags::SCHEDULED_PROCEDURE_STEP_DESCRIPTION,
            VR::LO,
            self.scheduled_procedure_step_description.as_deref(),
        );
        put_codes(
            &mut item,
            tags::SCHEDULED_PROTOCOL_CODE_SEQUENCE,
            &self.scheduled_protocol_codes,
        );
        item
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_are_not_written() {
        let request = RequestAttributes {
            accession_number: Some("A123".into()),
            scheduled_protocol_codes: vec![CodeSequenceMacro::new("P1", "99LOCAL", "Protocol one")],
            ..Default::default()
        };
        let item = request.to_item();
        assert!(item.attribute(tags::REQUESTED_PROCEDURE_ID).is_none());
        assert!(item.attribute(tags::REQUESTED_PROCEDURE_CODE_SEQUENCE).is_none());
        assert_eq!(RequestAttributes::from_item(&item), request);
    }
}
