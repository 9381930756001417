//
// cli.rs
// Dicom-Iod-rs
//
// Defines the CLI surface with Clap and dispatches each verb to the library layer.
//
// Dicom-Iod-rs contributors - October 2026

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::Level;

use crate::{batch, dump, extract, summary, validate, web};

#[derive(Parser)]
#[command(name = "dicom-iod")]
#[command(about = "Typed DICOM IOD modules and overlay extraction", long_about = None)]
pub struct Cli {
    /// Log debug output (skipped planes, extraction details)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Summarize the modules present in a file
    Info { file: PathBuf },
    /// List the overlay planes of a file
    Overlays { file: PathBuf },
    /// Move overlays embedded in the pixel data into Overlay Data
    ExtractOverlays {
        input: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Check Type 1 attributes and overlay planes
    Validate { file: PathBuf },
    /// Process every .dcm file below a directory
    Batch {
        #[arg(short, long)]
        directory: PathBuf,
        #[arg(short, long, value_enum)]
        operation: BatchOperation,
        /// Where derived files are written (defaults to next to each input)
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
    /// Dump the attributes of each module present
    Dump {
        file: PathBuf,
        #[arg(long, default_value_t = 4)]
        max_depth: usize,
        #[arg(long, default_value_t = 64)]
        max_value_len: usize,
    },
    /// Write the module summary as JSON
    ToJson {
        file: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Start the web server
    Web {
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
        #[arg(long, default_value = "target/uploads")]
        upload_dir: PathBuf,
    },
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum BatchOperation {
    ExtractOverlays,
    Validate,
    Summarize,
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Info { file } => summary::print_info(&file)?,
        Commands::Overlays { file } => {
            let summary = summary::read_summary(&file)?;
            if summary.overlays.is_empty() {
                println!("No overlay planes in {}", file.display());
            }
            for overlay in &summary.overlays {
                summary::print_overlay(overlay);
            }
        }
        Commands::ExtractOverlays { input, output } => {
            let report = extract::extract_file(&input, output.as_deref())?;
            match &report.output {
                Some(path) => println!(
                    "Extracted {} overlay plane(s) to {}",
                    report.planes.len(),
                    path
                ),
                None => println!("No embedded overlays in {}", input.display()),
            }
        }
        Commands::Validate { file } => {
            validate::check_file(&file)?;
        }
        Commands::Batch {
            directory,
            operation,
            output_dir,
        } => {
            let report = batch::process_directory(&directory, operation, output_dir.as_deref())?;
            println!(
                "{} file(s): {} ok, {} failed, {} changed",
                report.files, report.succeeded, report.failed, report.changed
            );
        }
        Commands::Dump {
            file,
            max_depth,
            max_value_len,
        } => dump::dump_file(&file, max_depth, max_value_len)?,
        Commands::ToJson { file, output } => {
            let summary = summary::read_summary(&file)?;
            let json = serde_json::to_string_pretty(&summary)?;
            match output {
                Some(path) => fs::write(&path, json)
                    .with_context(|| format!("Failed to write {}", path.display()))?,
                None => println!("{json}"),
            }
        }
        Commands::Web {
            host,
            port,
            upload_dir,
        } => web::start_server(&host, port, &upload_dir).await?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_batch_with_global_verbose() {
        let cli = Cli::try_parse_from([
            "dicom-iod",
            "batch",
            "-d",
            "/data",
            "-o",
            "extract-overlays",
            "--verbose",
        ])
        .expect("parse");
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Batch {
                operation: BatchOperation::ExtractOverlays,
                output_dir: None,
                ..
            }
        ));
    }

    #[test]
    fn web_defaults() {
        let cli = Cli::try_parse_from(["dicom-iod", "web"]).expect("parse");
        match cli.command {
            Commands::Web {
                host,
                port,
                upload_dir,
            } => {
                assert_eq!(host, "127.0.0.1");
                assert_eq!(port, 3000);
                assert_eq!(upload_dir, PathBuf::from("target/uploads"));
            }
            _ => panic!("expected web"),
        }
    }
}
