//
// procedure_step.rs
// Dicom-Iod-rs
//
// Performed Procedure Step Summary macro (Table 10-16).
//
// Dicom-Iod-rs contributors - October 2026

use chrono::NaiveDateTime;
use dicom::core::{Tag, VR};
use serde::Serialize;

use crate::dataset::{AttributeProvider, AttributeProviderMut};
use crate::tags;
use crate::values::code_sequence::{get_codes, put_codes};
use crate::values::datetime::{get_date_time, put_date_time_or_remove};
use crate::values::CodeSequenceMacro;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PerformedProcedureStepSummary {
    pub performed_procedure_step_id: Option<String>,
    pub start_date_time: Option<NaiveDateTime>,
    pub description: Option<String>,
    pub performed_protocol_codes: Vec<CodeSequenceMacro>,
    pub comments: Option<String>,
}

impl PerformedProcedureStepSummary {
    pub const DEFINED_TAGS: [Tag; 6] = [
        tags::PERFORMED_PROCEDURE_STEP_ID,
        tags::PERFORMED_PROCEDURE_STEP_START_DATE,
        tags::PERFORMED_PROCEDURE_STEP_START_TIME,
        tags::PERFORMED_PROCEDURE_STEP_DESCRIPTION,
        tags::PERFORMED_PROTOCOL_CODE_SEQUENCE,
        tags::COMMENTS_ON_THE_PERFORMED_PROCEDURE_STEP,
    ];

    /// The macro is embedded directly in its host data set, not in a sequence item.
    pub fn read<P: AttributeProvider + ?Sized>(provider: &P) -> Self {
        Self {
            performed_procedure_step_id: provider.get_string(tags::PERFORMED_PROCEDURE_STEP_ID),
            start_date_time: get_date_time(
                provider,
                tags::PERFORMED_PROCEDURE_STEP_START_DATE,
                tags::PERFORMED_PROCEDURE_STEP_START_TIME,
            ),
            description: provider.get_string(tags::PERFORMED_PROCEDURE_STEP_DESCRIPTION),
            performed_protocol_codes: get_codes(provider, tags::PERFORMED_PROTOCOL_CODE_SEQUENCE),
            comments: provider.get_string(tags::COMMENTS_ON_THE_PERFORMED_PROCEDURE_STEP),
        }
    }

    /// All attributes are Type 3: missing values are removed.
    pub fn write<P: AttributeProviderMut + ?Sized>(&self, provider: &mut P) {
        provider.put_string_or_remove(
            tags::PERFORMED_PROCEDURE_STEP_ID,
            VR::SH,
            self.performed_procedure_step_id.as_deref(),
        );
        put_date_time_or_remove(
            provider,
            tags::PERFORMED_PROCEDURE_STEP_START_DATE,
            tags::PERFORMED_PROCEDURE_STEP_START_TIME,
            self.start_date_time,
        );
        provider.put_string_or_remove(
            tags::PERFORMED_PROCEDURE_STEP_DESCRIPTION,
            VR::LO,
            self.description.as_deref(),
        );
        put_codes(
            provider,
            tags::PERFORMED_PROTOCOL_CODE_SEQUENCE,
            &self.performed_protocol_codes,
        );
        provider.put_string_or_remove(
            tags::COMMENTS_ON_THE_PERFORMED_PROCEDURE_STEP,
            VR::ST,
            self.comments.as_deref(),
        );
    }
}
