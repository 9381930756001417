//
// multi_frame_dimension.rs
// Dicom-Iod-rs
//
// Multi-frame Dimension module (C.7.6.17).
//
// Dicom-Iod-rs contributors - October 2026

use dicom::core::{Tag, VR};
use dicom::object::InMemDicomObject;
use serde::Serialize;

use crate::dataset::{AttributeProvider, AttributeProviderMut};
use crate::error::{IodError, Result};
use crate::tags;

/// Item of the Dimension Index Sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DimensionIndex {
    #[serde(serialize_with = "serialize_tag")]
    pub dimension_index_pointer: Tag,
    pub dimension_index_private_creator: Option<String>,
    #[serde(serialize_with = "serialize_optional_tag")]
    pub functional_group_pointer: Option<Tag>,
    pub functional_group_private_creator: Option<String>,
    pub dimension_organization_uid: Option<String>,
    pub dimension_description_label: Option<String>,
}

fn serialize_tag<S: serde::Serializer>(tag: &Tag, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_str(tag)
}

fn serialize_optional_tag<S: serde::Serializer>(
    tag: &Option<Tag>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    match tag {
        Some(tag) => serializer.collect_str(tag),
        None => serializer.serialize_none(),
    }
}

impl DimensionIndex {
    pub fn new(dimension_index_pointer: Tag) -> Self {
        Self {
            dimension_index_pointer,
            dimension_index_private_creator: None,
            functional_group_pointer: None,
            functional_group_private_creator: None,
            dimension_organization_uid: None,
            dimension_description_label: None,
        }
    }

    pub fn with_functional_group(mut self, functional_group_pointer: Tag) -> Self {
        self.functional_group_pointer = Some(functional_group_pointer);
        self
    }

    /// `None` when the item has no Dimension Index Pointer.
    pub fn from_item(item: &InMemDicomObject) -> Option<Self> {
        Some(Self {
            dimension_index_pointer: item.get_tag(tags::DIMENSION_INDEX_POINTER)?,
            dimension_index_private_creator: item.get_string(tags::DIMENSION_INDEX_PRIVATE_CREATOR),
            functional_group_pointer: item.get_tag(tags::FUNCTIONAL_GROUP_POINTER),
            functional_group_private_creator: item
                .get_string(tags::FUNCTIONAL_GROUP_PRIVATE_CREATOR),
            dimension_organization_uid: item.get_string(tags::DIMENSION_ORGANIZATION_UID),
            dimension_description_label: item.get_string(tags::DIMENSION_DESCRIPTION_LABEL),
        })
    }

    pub fn to_item(&self) -> InMemDicomObject {
        let mut item = InMemDicomObject::new_empty();
        item.put_tag(tags::DIMENSION_INDEX_POINTER, self.dimension_index_pointer);
        if let Some(pointer) = self.functional_group_pointer {
            item.put_tag(tags::FUNCTIONAL_GROUP_POINTER, pointer);
        }
        item.put_string_or_remove(
            tags::DIMENSION_INDEX_PRIVATE_CREATOR,
            VR::LO,
            self.dimension_index_private_creator.as_deref(),
        );
        item.put_string_or_remove(
            tags::FUNCTIONAL_GROUP_PRIVATE_CREATOR,
            VR::LO,
            self.functional_group_private_creator.as_deref(),
        );
        item.put_string_or_remove(
            tags::DIMENSION_ORGANIZATION_UID,
            VR::UI,
            self.dimension_organization_uid.as_deref(),
        );
        item.put_string_or_remove(
            tags::DIMENSION_DESCRIPTION_LABEL,
            VR::LO,
            self.dimension_description_label.as_deref(),
        );
        item
    }

    fn matches(
        &self,
        pointer: Tag,
        functional_group_pointer: Option<Tag>,
        index_private_creator: Option<&str>,
        functional_group_private_creator: Option<&str>,
    ) -> bool {
        let creator_matches = |expected: Option<&str>, actual: &Option<String>| {
            expected.map_or(true, |e| actual.as_deref() == Some(e))
        };
        self.dimension_index_pointer == pointer
            && functional_group_pointer.map_or(true, |fg| self.functional_group_pointer == Some(fg))
            && creator_matches(index_private_creator, &self.dimension_index_private_creator)
            && creator_matches(
                functional_group_private_creator,
                &self.functional_group_private_creator,
            )
    }
}

iod_module!(
    /// Multi-frame Dimension module.
    MultiFrameDimensionModule
);

impl<P> MultiFrameDimensionModule<P> {
    pub const DEFINED_TAGS: [Tag; 3] = [
        tags::DIMENSION_ORGANIZATION_SEQUENCE,
        tags::DIMENSION_ORGANIZATION_TYPE,
        tags::DIMENSION_INDEX_SEQUENCE,
    ];
}

impl<P: AttributeProvider> MultiFrameDimensionModule<P> {
    pub fn has_values(&self) -> bool {
        Self::DEFINED_TAGS.iter().any(|&tag| self.provider.has_value(tag))
    }

    pub fn dimension_organization_uids(&self) -> Vec<String> {
        self.provider
            .get_items(tags::DIMENSION_ORGANIZATION_SEQUENCE)
            .unwrap_or_default()
            .iter()
            .filter_map(|item| item.get_string(tags::DIMENSION_ORGANIZATION_UID))
            .collect()
    }

    /// 3D, 3D_TEMPORAL or TILED_FULL.
    pub fn dimension_organization_type(&self) -> Option<String> {
        self.provider.get_string(tags::DIMENSION_ORGANIZATION_TYPE)
    }

    pub fn dimension_indices(&self) -> Vec<DimensionIndex> {
        self.provider
            .get_items(tags::DIMENSION_INDEX_SEQUENCE)
            .unwrap_or_default()
            .iter()
            .filter_map(DimensionIndex::from_item)
            .collect()
    }

    /// Position of the first dimension indexing `pointer`; the optional criteria narrow the match.
    pub fn find_dimension_index(
        &self,
        pointer: Tag,
        functional_group_pointer: Option<Tag>,
        index_private_creator: Option<&str>,
        functional_group_private_creator: Option<&str>,
    ) -> Option<(usize, DimensionIndex)> {
        self.dimension_indices()
            .into_iter()
            .enumerate()
            .find(|(_, index)| {
                index.matches(
                    pointer,
                    functional_group_pointer,
                    index_private_creator,
                    functional_group_private_creator,
                )
            })
    }
}

impl<P: AttributeProviderMut> MultiFrameDimensionModule<P> {
    pub fn set_dimension_organization_uids(&mut self, uids: &[&str]) -> Result<()> {
        if uids.is_empty() || uids.iter().any(|uid| uid.trim().is_empty()) {
            return Err(IodError::RequiredAttribute {
                name: "DimensionOrganizationSequence",
            });
        }
        let items = uids
            .iter()
            .map(|uid| {
                let mut item = InMemDicomObject::new_empty();
                item.put_string(tags::DIMENSION_ORGANIZATION_UID, VR::UI, uid);
                item
            })
            .collect();
        self.provider
            .put_items(tags::DIMENSION_ORGANIZATION_SEQUENCE, items);
        Ok(())
    }

    pub fn set_dimension_organization_type(&mut self, value: Option<&str>) {
        self.provider
            .put_string_or_remove(tags::DIMENSION_ORGANIZATION_TYPE, VR::CS, value);
    }

    pub fn set_dimension_indices(&mut self, indices: &[DimensionIndex]) -> Result<()> {
        if indices.is_empty() {
            return Err(IodError::RequiredAttribute {
                name: "DimensionIndexSequence",
            });
        }
        self.provider.put_items(
            tags::DIMENSION_INDEX_SEQUENCE,
            indices.iter().map(DimensionIndex::to_item).collect(),
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STACK_ID: Tag = Tag(0x0020, 0x9056);
    const IN_STACK_POSITION: Tag = Tag(0x0020, 0x9057);
    const TEMPORAL_POSITION: Tag = Tag(0x0020, 0x9128);

    fn module() -> MultiFrameDimensionModule<InMemDicomObject> {
        let mut module = MultiFrameDimensionModule::new(InMemDicomObject::new_empty());
        module.set_dimension_organization_uids(&["1.2.3.4"]).unwrap();
        module.set_dimension_organization_type(Some("3D"));
        let mut private = DimensionIndex::new(IN_STACK_POSITION)
            .with_functional_group(tags::FRAME_CONTENT_SEQUENCE);
        private.dimension_index_private_creator = Some("ACME 1.0".into());
        module
            .set_dimension_indices(&[
                DimensionIndex::new(STACK_ID).with_functional_group(tags::FRAME_CONTENT_SEQUENCE),
                DimensionIndex::new(IN_STACK_POSITION)
                    .with_functional_group(tags::FRAME_CONTENT_SEQUENCE),
                private,
            ])
            .unwrap();
        module
    }

    #[test]
    fn reads_back_sequences() {
        let module = module();
        assert!(module.has_values());
        assert_eq!(module.dimension_organization_uids(), vec!["1.2.3.4"]);
        assert_eq!(module.dimension_organization_type().as_deref(), Some("3D"));
        assert_eq!(module.dimension_indices().len(), 3);
    }

    #[test]
    fn finds_by_pointer_and_criteria() {
        let module = module();
        let (position, _) = module
            .find_dimension_index(IN_STACK_POSITION, None, None, None)
            .unwrap();
        assert_eq!(position, 1);
        let (position, found) = module
            .find_dimension_index(IN_STACK_POSITION, None, Some("ACME 1.0"), None)
            .unwrap();
        assert_eq!(position, 2);
        assert_eq!(found.functional_group_pointer, Some(tags::FRAME_CONTENT_SEQUENCE));
        assert!(module
            .find_dimension_index(STACK_ID, Some(tags::PLANE_POSITION_SEQUENCE), None, None)
            .is_none());
        assert!(module
            .find_dimension_index(TEMPORAL_POSITION, None, None, None)
            .is_none());
    }

    #[test]
    fn required_sequences_reject_empty() {
        let mut module = MultiFrameDimensionModule::new(InMemDicomObject::new_empty());
        assert!(module.set_dimension_organization_uids(&[]).is_err());
        assert!(module.set_dimension_indices(&[]).is_err());
        assert!(!module.has_values());
    }
}
