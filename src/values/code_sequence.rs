//
// code_sequence.rs
// Dicom-Iod-rs
//
// Code Sequence Macro (Table 8.8-1) items.
//
// Dicom-Iod-rs contributors - October 2026

use dicom::core::VR;
use dicom::object::InMemDicomObject;
use serde::Serialize;

use crate::dataset::{AttributeProvider, AttributeProviderMut};
use crate::tags;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CodeSequenceMacro {
    pub code_value: String,
    pub coding_scheme_designator: String,
    pub coding_scheme_version: Option<String>,
    pub code_meaning: String,
}

impl CodeSequenceMacro {
    pub fn new(
        code_value: impl Into<String>,
        coding_scheme_designator: impl Into<String>,
        code_meaning: impl Into<String>,
    ) -> Self {
        Self {
            code_value: code_value.into(),
            coding_scheme_designator: coding_scheme_designator.into(),
            coding_scheme_version: None,
            code_meaning: code_meaning.into(),
        }
    }

    pub fn from_item(item: &InMemDicomObject) -> Self {
        Self {
            code_value: item.get_string(tags::CODE_VALUE).unwrap_or_default(),
            coding_scheme_designator: item
                .get_string(tags::CODING_SCHEME_DESIGNATOR)
                .unwrap_or_default(),
            coding_scheme_version: item.get_string(tags::CODING_SCHEME_VERSION),
            code_meaning: item.get_string(tags::CODE_MEANING).unwrap_or_default(),
        }
    }

    pub fn to_item(&self) -> InMemDicomObject {
        let mut item = InMemDicomObject::new_empty();
        item.put_string(tags::CODE_VALUE, VR::SH, &self.code_value);
        item.put_string(tags::CODING_SCHEME_DESIGNATOR, VR::SH, &self.coding_scheme_designator);
        item.put_string_or_remove(
            tags::CODING_SCHEME_VERSION,
            VR::SH,
            self.coding_scheme_version.as_deref(),
        );
        item.put_string(tags::CODE_MEANING, VR::LO, &self.code_meaning);
        item
    }
}

/// Reads every item of a code sequence attribute.
pub fn get_codes<P: AttributeProvider + ?Sized>(
    provider: &P,
    tag: dicom::core::Tag,
) -> Vec<CodeSequenceMacro> {
    provider
        .get_items(tag)
        .map(|items| items.iter().map(CodeSequenceMacro::from_item).collect())
        .unwrap_or_default()
}

/// Writes a code sequence; an empty list removes the attribute.
pub fn put_codes<P: AttributeProviderMut + ?Sized>(
    provider: &mut P,
    tag: dicom::core::Tag,
    codes: &[CodeSequenceMacro],
) {
    provider.put_items_or_remove(tag, codes.iter().map(CodeSequenceMacro::to_item).collect());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_round_trip_keeps_optional_version() {
        let mut code = CodeSequenceMacro::new("113100", "DCM", "Basic Application Confidentiality Profile");
        let item = code.to_item();
        assert!(item.attribute(tags::CODING_SCHEME_VERSION).is_none());
        assert_eq!(CodeSequenceMacro::from_item(&item), code);

        code.coding_scheme_version = Some("01".into());
        assert_eq!(CodeSequenceMacro::from_item(&code.to_item()), code);
    }
}
