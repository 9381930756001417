//
// main.rs
// Dicom-Iod-rs
//
// Tokio entry point; argument parsing and dispatch live in the CLI module.
//
// Dicom-Iod-rs contributors - October 2026

use dicom_iod::cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    cli::run().await
}
