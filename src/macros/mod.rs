//
// mod.rs
// Dicom-Iod-rs
//
// Attribute macros shared between modules. Each one is a plain value read from and written to a data set.
//
// Dicom-Iod-rs contributors - October 2026

pub mod procedure_step;
pub mod request_attributes;
pub mod sop_reference;

pub use procedure_step::PerformedProcedureStepSummary;
pub use request_attributes::RequestAttributes;
pub use sop_reference::{ImageSopInstanceReference, SopInstanceReference};
