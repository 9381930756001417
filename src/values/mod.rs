//
// mod.rs
// Dicom-Iod-rs
//
// Native types for DICOM string encodings.
//
// Dicom-Iod-rs contributors - October 2026

pub mod code_sequence;
pub mod datetime;
pub mod image_orientation;
pub mod patient_direction;
pub mod person_name;
pub mod terms;

pub use code_sequence::CodeSequenceMacro;
pub use datetime::{format_date, format_datetime, format_time, parse_date, parse_date_and_time, parse_datetime, parse_time};
pub use image_orientation::{AxisDirection, ImageOrientationPatient, PatientOrientation};
pub use patient_direction::{DirectionComponent, PatientDirection};
pub use person_name::PersonName;
pub(crate) use terms::defined_terms;
pub use terms::{DefinedTerm, Flag, YesNo};
