//
// mod.rs
// Dicom-Iod-rs
//
// Typed sequence items.
//
// Dicom-Iod-rs contributors - October 2026

pub mod graphic_annotation;

pub use graphic_annotation::{
    AnnotationUnits, GraphicAnnotationSequenceItem, GraphicObject, GraphicType,
    HorizontalJustification, TextObject,
};
