//
// sop_common.rs
// Dicom-Iod-rs
//
// SOP Common module (C.12.1).
//
// Dicom-Iod-rs contributors - October 2026

use chrono::NaiveDateTime;
use dicom::core::{Tag, VR};
use dicom::object::InMemDicomObject;
use serde::Serialize;

use crate::dataset::{AttributeProvider, AttributeProviderMut};
use crate::error::Result;
use crate::tags;
use crate::values::datetime::{get_date_time, get_dt, put_date_time_or_remove, put_dt};
use crate::values::defined_terms;

defined_terms! {
    pub enum SopInstanceStatus ("SopInstanceStatus") {
        NotSpecified => "NS",
        Original => "OR",
        AuthorizedOriginal => "AO",
        AuthorizedCopy => "AC",
    }
}

/// Item of the Coding Scheme Identification Sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CodingSchemeIdentification {
    pub coding_scheme_designator: String,
    pub coding_scheme_registry: Option<String>,
    pub coding_scheme_uid: Option<String>,
    pub coding_scheme_external_id: Option<String>,
    pub coding_scheme_name: Option<String>,
    pub coding_scheme_version: Option<String>,
    pub coding_scheme_responsible_organization: Option<String>,
}

impl CodingSchemeIdentification {
    pub fn from_item(item: &InMemDicomObject) -> Self {
        Self {
            coding_scheme_designator: item
                .get_string(tags::CODING_SCHEME_DESIGNATOR)
                .unwrap_or_default(),
            coding_scheme_registry: item.get_string(tags::CODING_SCHEME_REGISTRY),
            coding_scheme_uid: item.get_string(tags::CODING_SCHEME_UID),
            coding_scheme_external_id: item.get_string(tags::CODING_SCHEME_EXTERNAL_ID),
            coding_scheme_name: item.get_string(tags::CODING_SCHEME_NAME),
            coding_scheme_version: item.get_string(tags::CODING_SCHEME_VERSION),
            coding_scheme_responsible_organization: item
                .get_string(tags::CODING_SCHEME_RESPONSIBLE_ORGANIZATION),
        }
    }

    pub fn to_item(&self) -> InMemDicomObject {
        let mut item = InMemDicomObject::new_empty();
        item.put_string(
            tags::CODING_SCHEME_DESIGNATOR,
            VR::SH,
            &self.coding_scheme_designator,
        );
        let optional = [
            (tags::CODING_SCHEME_REGISTRY, VR::LO, &self.coding_scheme_registry),
            (tags::CODING_SCHEME_UID, VR::UI, &self.coding_scheme_uid),
            (tags::CODING_SCHEME_EXTERNAL_ID, VR::ST, &self.coding_scheme_external_id),
            (tags::CODING_SCHEME_NAME, VR::ST, &self.coding_scheme_name),
            (tags::CODING_SCHEME_VERSION, VR::SH, &self.coding_scheme_version),
            (
                tags::CODING_SCHEME_RESPONSIBLE_ORGANIZATION,
                VR::ST,
                &self.coding_scheme_responsible_organization,
            ),
        ];
        for (tag, vr, value) in optional {
            item.put_string_or_remove(tag, vr, value.as_deref());
        }
        item
    }
}

iod_module!(
    /// SOP Common module.
    SopCommonModule
);

impl<P> SopCommonModule<P> {
    pub const DEFINED_TAGS: [Tag; 15] = [
        tags::SOP_CLASS_UID,
        tags::SOP_INSTANCE_UID,
        tags::SPECIFIC_CHARACTER_SET,
        tags::INSTANCE_CREATION_DATE,
        tags::INSTANCE_CREATION_TIME,
        tags::INSTANCE_CREATOR_UID,
        tags::RELATED_GENERAL_SOP_CLASS_UID,
        tags::ORIGINAL_SPECIALIZED_SOP_CLASS_UID,
        tags::CODING_SCHEME_IDENTIFICATION_SEQUENCE,
        tags::TIMEZONE_OFFSET_FROM_UTC,
        tags::INSTANCE_NUMBER,
        tags::SOP_INSTANCE_STATUS,
        tags::SOP_AUTHORIZATION_DATE_TIME,
        tags::SOP_AUTHORIZATION_COMMENT,
        tags::AUTHORIZATION_EQUIPMENT_CERTIFICATION_NUMBER,
    ];
}

impl<P: AttributeProvider> SopCommonModule<P> {
    pub fn has_values(&self) -> bool {
        Self::DEFINED_TAGS.iter().any(|&tag| self.provider.has_value(tag))
    }

    pub fn sop_class_uid(&self) -> Option<String> {
        self.provider.get_string(tags::SOP_CLASS_UID)
    }

    pub fn sop_instance_uid(&self) -> Option<String> {
        self.provider.get_string(tags::SOP_INSTANCE_UID)
    }

    /// Backslash separated when code extensions are used.
    pub fn specific_character_set(&self) -> Option<String> {
        self.provider.get_raw_string(tags::SPECIFIC_CHARACTER_SET)
    }

    pub fn instance_creation_date_time(&self) -> Option<NaiveDateTime> {
        get_date_time(
            &self.provider,
            tags::INSTANCE_CREATION_DATE,
            tags::INSTANCE_CREATION_TIME,
        )
    }

    pub fn instance_creator_uid(&self) -> Option<String> {
        self.provider.get_string(tags::INSTANCE_CREATOR_UID)
    }

    pub fn related_general_sop_class_uids(&self) -> Vec<String> {
        self.provider.get_strings(tags::RELATED_GENERAL_SOP_CLASS_UID)
    }

    pub fn original_specialized_sop_class_uid(&self) -> Option<String> {
        self.provider.get_string(tags::ORIGINAL_SPECIALIZED_SOP_CLASS_UID)
    }

    pub fn coding_scheme_identification(&self) -> Vec<CodingSchemeIdentification> {
        self.provider
            .get_items(tags::CODING_SCHEME_IDENTIFICATION_SEQUENCE)
            .map(|items| items.iter().map(CodingSchemeIdentification::from_item).collect())
            .unwrap_or_default()
    }

    pub fn timezone_offset_from_utc(&self) -> Option<String> {
        self.provider.get_string(tags::TIMEZONE_OFFSET_FROM_UTC)
    }

    pub fn instance_number(&self) -> Option<i32> {
        self.provider.get_int(tags::INSTANCE_NUMBER)
    }

    pub fn sop_instance_status(&self) -> Option<SopInstanceStatus> {
        self.provider.get_term(tags::SOP_INSTANCE_STATUS)
    }

    pub fn sop_authorization_date_time(&self) -> Option<NaiveDateTime> {
        get_dt(&self.provider, tags::SOP_AUTHORIZATION_DATE_TIME)
    }

    pub fn sop_authorization_comment(&self) -> Option<String> {
        self.provider.get_raw_string(tags::SOP_AUTHORIZATION_COMMENT)
    }

    pub fn authorization_equipment_certification_number(&self) -> Option<String> {
        self.provider
            .get_string(tags::AUTHORIZATION_EQUIPMENT_CERTIFICATION_NUMBER)
    }
}

impl<P: AttributeProviderMut> SopCommonModule<P> {
    pub fn set_sop_class_uid(&mut self, value: &str) -> Result<()> {
        self.provider
            .put_required_string(tags::SOP_CLASS_UID, VR::UI, "SopClassUid", value)
    }

    pub fn set_sop_instance_uid(&mut self, value: &str) -> Result<()> {
        self.provider
            .put_required_string(tags::SOP_INSTANCE_UID, VR::UI, "SopInstanceUid", value)
    }

    /// `Some("")` is kept as an empty value (default repertoire); `None` removes it.
    pub fn set_specific_character_set(&mut self, value: Option<&str>) {
        match value {
            Some("") => self.provider.put_empty(tags::SPECIFIC_CHARACTER_SET, VR::CS),
            Some(value) => {
                let terms: Vec<&str> = value.split('\\').collect();
                self.provider
                    .put_strings(tags::SPECIFIC_CHARACTER_SET, VR::CS, &terms);
            }
            None => {
                self.provider.remove(tags::SPECIFIC_CHARACTER_SET);
            }
        }
    }

    pub fn set_instance_creation_date_time(&mut self, value: Option<NaiveDateTime>) {
        put_date_time_or_remove(
            &mut self.provider,
            tags::INSTANCE_CREATION_DATE,
            tags::INSTANCE_CREATION_TIME,
            value,
        );
    }

    pub fn set_instance_creator_uid(&mut self, value: Option<&str>) {
        self.provider
            .put_string_or_remove(tags::INSTANCE_CREATOR_UID, VR::UI, value);
    }

    pub fn set_related_general_sop_class_uids(&mut self, values: &[&str]) {
        if values.is_empty() {
            self.provider.remove(tags::RELATED_GENERAL_SOP_CLASS_UID);
        } else {
            self.provider
                .put_strings(tags::RELATED_GENERAL_SOP_CLASS_UID, VR::UI, values);
        }
    }

    pub fn set_original_specialized_sop_class_uid(&mut self, value: Option<&str>) {
        self.provider
            .put_string_or_remove(tags::ORIGINAL_SPECIALIZED_SOP_CLASS_UID, VR::UI, value);
    }

    pub fn set_coding_scheme_identification(&mut self, values: &[CodingSchemeIdentification]) {
        self.provider.put_items_or_remove(
            tags::CODING_SCHEME_IDENTIFICATION_SEQUENCE,
            values.iter().map(CodingSchemeIdentification::to_item).collect(),
        );
    }

    pub fn set_timezone_offset_from_utc(&mut self, value: Option<&str>) {
        self.provider
            .put_string_or_remove(tags::TIMEZONE_OFFSET_FROM_UTC, VR::SH, value);
    }

    pub fn set_instance_number(&mut self, value: Option<i32>) {
        match value {
            Some(number) => self.provider.put_int(tags::INSTANCE_NUMBER, number),
            None => {
                self.provider.remove(tags::INSTANCE_NUMBER);
            }
        }
    }

    pub fn set_sop_instance_status(&mut self, value: Option<SopInstanceStatus>) {
        self.provider.put_term_or_remove(tags::SOP_INSTANCE_STATUS, value);
    }

    pub fn set_sop_authorization_date_time(&mut self, value: Option<NaiveDateTime>) {
        put_dt(&mut self.provider, tags::SOP_AUTHORIZATION_DATE_TIME, value);
    }

    pub fn set_sop_authorization_comment(&mut self, value: Option<&str>) {
        self.provider
            .put_string_or_remove(tags::SOP_AUTHORIZATION_COMMENT, VR::LT, value);
    }

    pub fn set_authorization_equipment_certification_number(&mut self, value: Option<&str>) {
        self.provider.put_string_or_remove(
            tags::AUTHORIZATION_EQUIPMENT_CERTIFICATION_NUMBER,
            VR::LO,
            value,
        );
    }
}
