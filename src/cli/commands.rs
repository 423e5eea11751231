use crate::core::collector::collect;
use crate::domain::models::{BundleConfig, ExtensionSet, IgnoreSet};
use crate::infra::file_system::{normalise_source_dir, normalise_target_path};
use crate::infra::logger::setup_logger;
use crate::infra::output::{FileWriter, write_output};
use anyhow::Context;
use clap::Parser;
use log::{debug, info, warn};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "srcbundle")]
#[command(about = "Bundle a source tree into a single text file", long_about = None)]
pub struct Cli {
    /// Directory to scan
    pub source_dir: PathBuf,

    /// File to write to
    #[arg(short, long, default_value = "./file.txt")]
    pub file: String,

    /// File extensions to read, separated by comma
    #[arg(short, long, default_value = "kt")]
    pub extension: String,

    /// Directory names to ignore, separated by comma
    #[arg(short, long, default_value = "")]
    pub ignore: String,

    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn into_config(self) -> anyhow::Result<BundleConfig> {
        Ok(BundleConfig {
            source_dir: normalise_source_dir(&self.source_dir)?,
            target_file: normalise_target_path(&self.file)?,
            extensions: ExtensionSet::from_csv(&self.extension),
            ignored: IgnoreSet::from_csv(&self.ignore),
        })
    }
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logger(cli.verbose)?;

    info!("Starting bundle command");
    debug!(
        "Command parameters: source_dir={}, file={}, extension={}, ignore={}",
        cli.source_dir.display(),
        cli.file,
        cli.extension,
        cli.ignore
    );

    let config = cli.into_config()?;
    bundle_sources(&config)
}

fn bundle_sources(config: &BundleConfig) -> anyhow::Result<()> {
    if config.extensions.is_empty() {
        warn!("No extensions given, no file will be included");
    }

    let bundle = collect(&config.source_dir, &config.extensions, &config.ignored)
        .inspect_err(|e| debug!("Collection stopped at {}", e.path().display()))
        .with_context(|| {
            format!(
                "failed to collect sources from {}",
                config.source_dir.display()
            )
        })?;

    if bundle.is_empty() {
        info!("No files found with the specified extensions");
    }

    info!("Writing output");
    let writer = FileWriter::new(config.target_file.clone());
    write_output(&writer, &bundle).with_context(|| {
        format!(
            "failed to write to target file {}",
            config.target_file.display()
        )
    })
}
