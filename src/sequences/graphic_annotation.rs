//
// graphic_annotation.rs
// Dicom-Iod-rs
//
// Graphic Annotation Sequence item (C.10.5) with its text and graphic objects.
//
// Dicom-Iod-rs contributors - October 2026

use dicom::core::{Tag, VR};
use dicom::object::InMemDicomObject;
use serde::Serialize;

use crate::dataset::{AttributeProvider, AttributeProviderMut};
use crate::error::{IodError, Result};
use crate::macros::sop_reference::{get_image_references, put_image_references, ImageSopInstanceReference};
use crate::tags;
use crate::values::{defined_terms, DefinedTerm, Flag};

defined_terms! {
    /// Units of bounding boxes, anchor points and graphic data.
    pub enum AnnotationUnits ("AnnotationUnits") {
        Pixel => "PIXEL",
        Display => "DISPLAY",
    }
}

defined_terms! {
    pub enum HorizontalJustification ("BoundingBoxTextHorizontalJustification") {
        Left => "LEFT",
        Right => "RIGHT",
        Center => "CENTER",
    }
}

defined_terms! {
    pub enum GraphicType ("GraphicType") {
        Point => "POINT",
        Polyline => "POLYLINE",
        Interpolated => "INTERPOLATED",
        Circle => "CIRCLE",
        Ellipse => "ELLIPSE",
    }
}

/// Column/row coordinate pair stored as FL.
pub type Point = [f32; 2];

fn get_point<P: AttributeProvider + ?Sized>(provider: &P, tag: Tag) -> Option<Point> {
    Some([
        provider.get_f64_at(tag, 0)? as f32,
        provider.get_f64_at(tag, 1)? as f32,
    ])
}

fn put_point<P: AttributeProviderMut + ?Sized>(provider: &mut P, tag: Tag, point: Option<Point>) {
    match point {
        Some([x, y]) => provider.put_f64s(tag, VR::FL, &[f64::from(x), f64::from(y)]),
        None => {
            provider.remove(tag);
        }
    }
}

/// Item of the Text Object Sequence.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TextObject {
    pub bounding_box_annotation_units: Option<AnnotationUnits>,
    pub anchor_point_annotation_units: Option<AnnotationUnits>,
    pub unformatted_text_value: String,
    pub bounding_box_top_left_hand_corner: Option<Point>,
    pub bounding_box_bottom_right_hand_corner: Option<Point>,
    pub bounding_box_text_horizontal_justification: Option<HorizontalJustification>,
    pub anchor_point: Option<Point>,
    pub anchor_point_visibility: Option<Flag>,
}

impl TextObject {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            unformatted_text_value: text.into(),
            ..Default::default()
        }
    }

    pub fn from_item(item: &InMemDicomObject) -> Self {
        Self {
            bounding_box_annotation_units: item.get_term(tags::BOUNDING_BOX_ANNOTATION_UNITS),
            anchor_point_annotation_units: item.get_term(tags::ANCHOR_POINT_ANNOTATION_UNITS),
            unformatted_text_value: item
                .get_raw_string(tags::UNFORMATTED_TEXT_VALUE)
                .unwrap_or_default(),
            bounding_box_top_left_hand_corner: get_point(
                item,
                tags::BOUNDING_BOX_TOP_LEFT_HAND_CORNER,
            ),
            bounding_box_bottom_right_hand_corner: get_point(
                item,
                tags::BOUNDING_BOX_BOTTOM_RIGHT_HAND_CORNER,
            ),
            bounding_box_text_horizontal_justification: item
                .get_term(tags::BOUNDING_BOX_TEXT_HORIZONTAL_JUSTIFICATION),
            anchor_point: get_point(item, tags::ANCHOR_POINT),
            anchor_point_visibility: item.get_term(tags::ANCHOR_POINT_VISIBILITY),
        }
    }

    /// Fails when the text is empty (Type 1).
    pub fn to_item(&self) -> Result<InMemDicomObject> {
        let mut item = InMemDicomObject::new_empty();
        item.put_required_string(
            tags::UNFORMATTED_TEXT_VALUE,
            VR::ST,
            "UnformattedTextValue",
            &self.unformatted_text_value,
        )?;
        item.put_term_or_remove(
            tags::BOUNDING_BOX_ANNOTATION_UNITS,
            self.bounding_box_annotation_units,
        );
        item.put_term_or_remove(
            tags::ANCHOR_POINT_ANNOTATION_UNITS,
            self.anchor_point_annotation_units,
        );
        put_point(
            &mut item,
            tags::BOUNDING_BOX_TOP_LEFT_HAND_CORNER,
            self.bounding_box_top_left_hand_corner,
        );
        put_point(
            &mut item,
            tags::BOUNDING_BOX_BOTTOM_RIGHT_HAND_CORNER,
            self.bounding_box_bottom_right_hand_corner,
        );
        item.put_term_or_remove(
            tags::BOUNDING_BOX_TEXT_HORIZONTAL_JUSTIFICATION,
            self.bounding_box_text_horizontal_justification,
        );
        put_point(&mut item, tags::ANCHOR_POINT, self.anchor_point);
        item.put_term_or_remove(tags::ANCHOR_POINT_VISIBILITY, self.anchor_point_visibility);
        Ok(item)
    }
}

/// Item of the Graphic Object Sequence. Graphic dimensions are always 2.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphicObject {
    pub graphic_annotation_units: AnnotationUnits,
    pub graphic_type: GraphicType,
    pub graphic_data: Vec<Point>,
    pub graphic_filled: Option<Flag>,
}

impl GraphicObject {
    pub const GRAPHIC_DIMENSIONS: u16 = 2;

    pub fn new(units: AnnotationUnits, graphic_type: GraphicType, data: Vec<Point>) -> Self {
        Self {
            graphic_annotation_units: units,
            graphic_type,
            graphic_data: data,
            graphic_filled: None,
        }
    }

    pub fn number_of_graphic_points(&self) -> usize {
        self.graphic_data.len()
    }

    /// `None` when a Type 1 attribute is missing or the item is not two-dimensional.
    pub fn from_item(item: &InMemDicomObject) -> Option<Self> {
        let dimensions = item
            .get_int::<u16>(tags::GRAPHIC_DIMENSIONS)
            .unwrap_or(Self::GRAPHIC_DIMENSIONS);
        if dimensions != Self::GRAPHIC_DIMENSIONS {
            return None;
        }
        let values = item.get_f64s(tags::GRAPHIC_DATA);
        let graphic_data = values
            .chunks_exact(2)
            .map(|pair| [pair[0] as f32, pair[1] as f32])
            .collect();
        Some(Self {
            graphic_annotation_units: item.get_term(tags::GRAPHIC_ANNOTATION_UNITS)?,
            graphic_type: item.get_term(tags::GRAPHIC_TYPE)?,
            graphic_data,
            graphic_filled: item.get_term(tags::GRAPHIC_FILLED),
        })
    }

    /// Fails when there is no graphic data (Type 1).
    pub fn to_item(&self) -> Result<InMemDicomObject> {
        if self.graphic_data.is_empty() {
            return Err(IodError::RequiredAttribute {
                name: "GraphicData",
            });
        }
        let points = u16::try_from(self.graphic_data.len()).map_err(|_| {
            IodError::ArgumentOutOfRange {
                name: "NumberOfGraphicPoints",
                value: self.graphic_data.len() as i64,
                min: 1,
                max: i64::from(u16::MAX),
            }
        })?;
        let mut item = InMemDicomObject::new_empty();
        item.put_string(
            tags::GRAPHIC_ANNOTATION_UNITS,
            VR::CS,
            self.graphic_annotation_units.as_dicom_str(),
        );
        item.put_value(tags::GRAPHIC_DIMENSIONS, VR::US, Self::GRAPHIC_DIMENSIONS);
        item.put_value(tags::NUMBER_OF_GRAPHIC_POINTS, VR::US, points);
        let data: Vec<f64> = self
            .graphic_data
            .iter()
            .flat_map(|[x, y]| [f64::from(*x), f64::from(*y)])
            .collect();
        item.put_f64s(tags::GRAPHIC_DATA, VR::FL, &data);
        item.put_string(tags::GRAPHIC_TYPE, VR::CS, self.graphic_type.as_dicom_str());
        item.put_term_or_remove(tags::GRAPHIC_FILLED, self.graphic_filled);
        Ok(item)
    }
}

iod_module!(
    /// A Graphic Annotation Sequence item wrapping its provider.
    GraphicAnnotationSequenceItem
);

impl GraphicAnnotationSequenceItem<InMemDicomObject> {
    pub fn empty() -> Self {
        Self::new(InMemDicomObject::new_empty())
    }
}

impl<P: AttributeProvider> GraphicAnnotationSequenceItem<P> {
    pub fn referenced_images(&self) -> Vec<ImageSopInstanceReference> {
        get_image_references(&self.provider, tags::REFERENCED_IMAGE_SEQUENCE)
    }

    pub fn graphic_layer(&self) -> Option<String> {
        self.provider.get_string(tags::GRAPHIC_LAYER)
    }

    pub fn text_objects(&self) -> Vec<TextObject> {
        self.provider
            .get_items(tags::TEXT_OBJECT_SEQUENCE)
            .unwrap_or_default()
            .iter()
            .map(TextObject::from_item)
            .collect()
    }

    /// Items missing Type 1 attributes are skipped.
    pub fn graphic_objects(&self) -> Vec<GraphicObject> {
        self.provider
            .get_items(tags::GRAPHIC_OBJECT_SEQUENCE)
            .unwrap_or_default()
            .iter()
            .filter_map(GraphicObject::from_item)
            .collect()
    }
}

impl<P: AttributeProviderMut> GraphicAnnotationSequenceItem<P> {
    pub fn set_referenced_images(&mut self, references: &[ImageSopInstanceReference]) {
        put_image_references(&mut self.provider, tags::REFERENCED_IMAGE_SEQUENCE, references);
    }

    pub fn set_graphic_layer(&mut self, layer: &str) -> Result<()> {
        self.provider
            .put_required_string(tags::GRAPHIC_LAYER, VR::CS, "GraphicLayer", layer)
    }

    /// An empty list removes the sequence.
    pub fn set_text_objects(&mut self, objects: &[TextObject]) -> Result<()> {
        let items = objects
            .iter()
            .map(TextObject::to_item)
            .collect::<Result<Vec<_>>>()?;
        self.provider
            .put_items_or_remove(tags::TEXT_OBJECT_SEQUENCE, items);
        Ok(())
    }

    pub fn append_text_object(&mut self, object: &TextObject) -> Result<()> {
        let item = object.to_item()?;
        self.provider.append_item(tags::TEXT_OBJECT_SEQUENCE, item);
        Ok(())
    }

    /// An empty list removes the sequence.
    pub fn set_graphic_objects(&mut self, objects: &[GraphicObject]) -> Result<()> {
        let items = objects
            .iter()
            .map(GraphicObject::to_item)
            .collect::<Result<Vec<_>>>()?;
        self.provider
            .put_items_or_remove(tags::GRAPHIC_OBJECT_SEQUENCE, items);
        Ok(())
    }

    pub fn append_graphic_object(&mut self, object: &GraphicObject) -> Result<()> {
        let item = object.to_item()?;
        self.provider.append_item(tags::GRAPHIC_OBJECT_SEQUENCE, item);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label() -> TextObject {
        TextObject {
            anchor_point_annotation_units: Some(AnnotationUnits::Pixel),
            anchor_point: Some([10.5, 20.0]),
            anchor_point_visibility: Some(Flag::Y),
            ..TextObject::new("Lesion 1")
        }
    }

    #[test]
    fn text_objects_append_in_order() {
        let mut item = GraphicAnnotationSequenceItem::empty();
        item.set_graphic_layer("LAYER1").unwrap();
        item.append_text_object(&label()).unwrap();
        item.append_text_object(&TextObject::new("Second")).unwrap();
        let texts = item.text_objects();
        assert_eq!(texts.len(), 2);
        assert_eq!(texts[0], label());
        assert_eq!(texts[1].unformatted_text_value, "Second");
        assert_eq!(item.graphic_layer().as_deref(), Some("LAYER1"));
    }

    #[test]
    fn graphic_objects_carry_points() {
        let mut item = GraphicAnnotationSequenceItem::empty();
        let polyline = GraphicObject::new(
            AnnotationUnits::Pixel,
            GraphicType::Polyline,
            vec![[1.0, 2.0], [3.5, 4.0], [1.0, 2.0]],
        );
        item.append_graphic_object(&polyline).unwrap();
        let read = item.graphic_objects();
        assert_eq!(read, vec![polyline]);
        assert_eq!(read[0].number_of_graphic_points(), 3);
        let stored = item.into_inner();
        let object = stored.get_item(tags::GRAPHIC_OBJECT_SEQUENCE, 0).unwrap();
        assert_eq!(object.get_int::<u16>(tags::NUMBER_OF_GRAPHIC_POINTS), Some(3));
        assert_eq!(object.vr(tags::GRAPHIC_DATA), Some(VR::FL));
        assert_eq!(object.get_string(tags::GRAPHIC_TYPE).as_deref(), Some("POLYLINE"));
        assert_eq!(
            object.get_string(tags::GRAPHIC_ANNOTATION_UNITS).as_deref(),
            Some("PIXEL")
        );
    }

    #[test]
    fn type_one_values_are_enforced() {
        let mut item = GraphicAnnotationSequenceItem::empty();
        assert!(item.set_graphic_layer("").is_err());
        assert!(item.append_text_object(&TextObject::default()).is_err());
        let empty = GraphicObject::new(AnnotationUnits::Display, GraphicType::Point, Vec::new());
        assert!(item.append_graphic_object(&empty).is_err());
    }

    #[test]
    fn empty_lists_remove_sequences() {
        let mut item = GraphicAnnotationSequenceItem::empty();
        item.set_text_objects(&[label()]).unwrap();
        item.set_text_objects(&[]).unwrap();
        assert!(item
            .into_inner()
            .attribute(tags::TEXT_OBJECT_SEQUENCE)
            .is_none());
    }
}
