//
// patient.rs
// Dicom-Iod-rs
//
// Patient module (C.7.1.1).
//
// Dicom-Iod-rs contributors - October 2026

use chrono::NaiveDateTime;
use dicom::core::{Tag, VR};

use crate::dataset::{AttributeProvider, AttributeProviderMut};
use crate::macros::sop_reference::{get_reference, put_references};
use crate::macros::SopInstanceReference;
use crate::tags;
use crate::values::code_sequence::{get_codes, put_codes};
use crate::values::datetime::{get_date_time, put_date_time};
use crate::values::{defined_terms, CodeSequenceMacro, PersonName, YesNo};

defined_terms! {
    pub enum PatientSex ("PatientSex") {
        Male => "M",
        Female => "F",
        Other => "O",
    }
}

defined_terms! {
    pub enum ResponsiblePersonRole ("ResponsiblePersonRole") {
        Owner => "OWNER",
        Parent => "PARENT",
        Child => "CHILD",
        Spouse => "SPOUSE",
        Sibling => "SIBLING",
        Relative => "RELATIVE",
        Guardian => "GUARDIAN",
        Custodian => "CUSTODIAN",
        Agent => "AGENT",
    }
}

iod_module!(
    /// Patient module. Name, ID, birth date/time and sex are Type 2; the rest is optional.
    PatientModule
);

impl<P> PatientModule<P> {
    pub const DEFINED_TAGS: [Tag; 22] = [
        tags::DEIDENTIFICATION_METHOD,
        tags::DEIDENTIFICATION_METHOD_CODE_SEQUENCE,
        tags::ETHNIC_GROUP,
        tags::ISSUER_OF_PATIENT_ID,
        tags::OTHER_PATIENT_IDS,
        tags::OTHER_PATIENT_IDS_SEQUENCE,
        tags::OTHER_PATIENT_NAMES,
        tags::PATIENT_BREED_CODE_SEQUENCE,
        tags::PATIENT_BREED_DESCRIPTION,
        tags::PATIENT_COMMENTS,
        tags::PATIENT_ID,
        tags::PATIENT_IDENTITY_REMOVED,
        tags::PATIENT_BIRTH_DATE,
        tags::PATIENT_BIRTH_TIME,
        tags::PATIENT_NAME,
        tags::PATIENT_SPECIES_CODE_SEQUENCE,
        tags::PATIENT_SPECIES_DESCRIPTION,
        tags::PATIENT_SEX,
        tags::REFERENCED_PATIENT_SEQUENCE,
        tags::RESPONSIBLE_ORGANIZATION,
        tags::RESPONSIBLE_PERSON,
        tags::RESPONSIBLE_PERSON_ROLE,
    ];
}

impl<P: AttributeProvider> PatientModule<P> {
    pub fn has_values(&self) -> bool {
        Self::DEFINED_TAGS.iter().any(|&tag| self.provider.has_value(tag))
    }

    pub fn patients_name(&self) -> Option<PersonName> {
        self.provider
            .get_raw_string(tags::PATIENT_NAME)
            .and_then(|name| name.parse().ok())
    }

    pub fn patient_id(&self) -> Option<String> {
        self.provider.get_string(tags::PATIENT_ID)
    }

    pub fn issuer_of_patient_id(&self) -> Option<String> {
        self.provider.get_string(tags::ISSUER_OF_PATIENT_ID)
    }

    pub fn patients_birth_date_time(&self) -> Option<NaiveDateTime> {
        get_date_time(&self.provider, tags::PATIENT_BIRTH_DATE, tags::PATIENT_BIRTH_TIME)
    }

    pub fn patients_sex(&self) -> Option<PatientSex> {
        self.provider.get_term(tags::PATIENT_SEX)
    }

    pub fn referenced_patient(&self) -> Option<SopInstanceReference> {
        get_reference(&self.provider, tags::REFERENCED_PATIENT_SEQUENCE)
    }

    /// The whole multi-valued attribute, backslash separated.
    pub fn other_patient_ids(&self) -> Option<String> {
        self.provider.get_raw_string(tags::OTHER_PATIENT_IDS)
    }

    pub fn other_patient_names(&self) -> Option<String> {
        self.provider.get_raw_string(tags::OTHER_PATIENT_NAMES)
    }

    pub fn ethnic_group(&self) -> Option<String> {
        self.provider.get_string(tags::ETHNIC_GROUP)
    }

    pub fn patient_comments(&self) -> Option<String> {
        self.provider.get_raw_string(tags::PATIENT_COMMENTS)
    }

    pub fn patient_species_description(&self) -> Option<String> {
        self.provider.get_string(tags::PATIENT_SPECIES_DESCRIPTION)
    }

    pub fn patient_species_code(&self) -> Option<CodeSequenceMacro> {
        get_codes(&self.provider, tags::PATIENT_SPECIES_CODE_SEQUENCE)
            .into_iter()
            .next()
    }

    pub fn patient_breed_description(&self) -> Option<String> {
        self.provider.get_string(tags::PATIENT_BREED_DESCRIPTION)
    }

    pub fn patient_breed_codes(&self) -> Vec<CodeSequenceMacro> {
        get_codes(&self.provider, tags::PATIENT_BREED_CODE_SEQUENCE)
    }

    pub fn responsible_person(&self) -> Option<PersonName> {
        self.provider
            .get_raw_string(tags::RESPONSIBLE_PERSON)
            .and_then(|name| name.parse().ok())
    }

    pub fn responsible_person_role(&self) -> Option<ResponsiblePersonRole> {
        self.provider.get_term(tags::RESPONSIBLE_PERSON_ROLE)
    }

    pub fn responsible_organization(&self) -> Option<String> {
        self.provider.get_string(tags::RESPONSIBLE_ORGANIZATION)
    }

    pub fn patient_identity_removed(&self) -> Option<YesNo> {
        self.provider.get_term(tags::PATIENT_IDENTITY_REMOVED)
    }

    pub fn deidentification_method(&self) -> Option<String> {
        self.provider.get_raw_string(tags::DEIDENTIFICATION_METHOD)
    }

    pub fn deidentification_method_codes(&self) -> Vec<CodeSequenceMacro> {
        get_codes(&self.provider, tags::DEIDENTIFICATION_METHOD_CODE_SEQUENCE)
    }
}

impl<P: AttributeProviderMut> PatientModule<P> {
    /// Type 2 attributes become present and empty, everything else is removed.
    pub fn initialize_attributes(&mut self) {
        for tag in Self::DEFINED_TAGS {
            self.provider.remove(tag);
        }
        self.set_patients_name(None);
        self.set_patient_id(None);
        self.set_patients_birth_date_time(None);
        self.set_patients_sex(None);
    }

    pub fn set_patients_name(&mut self, value: Option<&PersonName>) {
        let name = value.map(PersonName::to_string);
        self.provider
            .put_string_or_empty(tags::PATIENT_NAME, VR::PN, name.as_deref());
    }

    pub fn set_patient_id(&mut self, value: Option<&str>) {
        self.provider.put_string_or_empty(tags::PATIENT_ID, VR::LO, value);
    }

    pub fn set_issuer_of_patient_id(&mut self, value: Option<&str>) {
        self.provider
            .put_string_or_remove(tags::ISSUER_OF_PATIENT_ID, VR::LO, value);
    }

    pub fn set_patients_birth_date_time(&mut self, value: Option<NaiveDateTime>) {
        put_date_time(
            &mut self.provider,
            tags::PATIENT_BIRTH_DATE,
            tags::PATIENT_BIRTH_TIME,
            value,
        );
    }

    pub fn set_patients_sex(&mut self, value: Option<PatientSex>) {
        self.provider.put_term_or_empty(tags::PATIENT_SEX, value);
    }

    pub fn set_referenced_patient(&mut self, value: Option<&SopInstanceReference>) {
        let references: Vec<SopInstanceReference> = value.into_iter().cloned().collect();
        put_references(&mut self.provider, tags::REFERENCED_PATIENT_SEQUENCE, &references);
    }

    pub fn set_other_patient_ids(&mut self, value: Option<&str>) {
        self.provider
            .put_string_or_remove(tags::OTHER_PATIENT_IDS, VR::LO, value);
    }

    pub fn set_other_patient_names(&mut self, value: Option<&str>) {
        self.provider
            .put_string_or_remove(tags::OTHER_PATIENT_NAMES, VR::PN, value);
    }

    pub fn set_ethnic_group(&mut self, value: Option<&str>) {
        self.provider.put_string_or_remove(tags::ETHNIC_GROUP, VR::SH, value);
    }

    pub fn set_patient_comments(&mut self, value: Option<&str>) {
        self.provider
            .put_string_or_remove(tags::PATIENT_COMMENTS, VR::LT, value);
    }

    pub fn set_patient_species_description(&mut self, value: Option<&str>) {
        self.provider
            .put_string_or_remove(tags::PATIENT_SPECIES_DESCRIPTION, VR::LO, value);
    }

    pub fn set_patient_species_code(&mut self, value: Option<&CodeSequenceMacro>) {
        let codes: Vec<CodeSequenceMacro> = value.into_iter().cloned().collect();
        put_codes(&mut self.provider, tags::PATIENT_SPECIES_CODE_SEQUENCE, &codes);
    }

    /// Type 2C: `None` leaves the attribute present and empty.
    pub fn set_patient_breed_description(&mut self, value: Option<&str>) {
        self.provider
            .put_string_or_empty(tags::PATIENT_BREED_DESCRIPTION, VR::LO, value);
    }

    pub fn set_patient_breed_codes(&mut self, codes: &[CodeSequenceMacro]) {
        put_codes(&mut self.provider, tags::PATIENT_BREED_CODE_SEQUENCE, codes);
    }

    pub fn set_responsible_person(&mut self, value: Option<&PersonName>) {
        let name = value.map(PersonName::to_string);
        self.provider
            .put_string_or_remove(tags::RESPONSIBLE_PERSON, VR::PN, name.as_deref());
    }

    pub fn set_responsible_person_role(&mut self, value: Option<ResponsiblePersonRole>) {
        self.provider
            .put_term_or_remove(tags::RESPONSIBLE_PERSON_ROLE, value);
    }

    pub fn set_responsible_organization(&mut self, value: Option<&str>) {
        self.provider
            .put_string_or_remove(tags::RESPONSIBLE_ORGANIZATION, VR::LO, value);
    }

    pub fn set_patient_identity_removed(&mut self, value: Option<YesNo>) {
        self.provider
            .put_term_or_remove(tags::PATIENT_IDENTITY_REMOVED, value);
    }

    pub fn set_deidentification_method(&mut self, value: Option<&str>) {
        self.provider
            .put_string_or_remove(tags::DEIDENTIFICATION_METHOD, VR::LO, value);
    }

    pub fn set_deidentification_method_codes(&mut self, codes: &[CodeSequenceMacro]) {
        put_codes(
            &mut self.provider,
            tags::DEIDENTIFICATION_METHOD_CODE_SEQUENCE,
            codes,
        );
    }
}
