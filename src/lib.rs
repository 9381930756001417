//
// lib.rs
// Dicom-Iod-rs
//
// Typed DICOM IOD modules over in-memory data sets, embedded overlay extraction, and the
// CLI and web layers built on them.
//
// Dicom-Iod-rs contributors - October 2026

pub mod error;
pub mod tags;
pub mod dataset;
pub mod values;
pub mod macros;
#[macro_use]
pub mod modules;
pub mod sequences;
pub mod pixel;

pub mod batch;
pub mod cli;
pub mod dump;
pub mod extract;
pub mod models;
pub mod storage;
pub mod summary;
pub mod validate;
pub mod web;

pub use cli::{run as run_cli, Cli, Commands};
pub use dataset::{AttributeProvider, AttributeProviderMut};
pub use error::{IodError, Result};
