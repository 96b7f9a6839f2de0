//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::cli::server::{serve, ServerConfig};
use crate::config::PipelineConfig;
use crate::error::{Error, Result, ResultExt};
use crate::pipeline::Pipeline;
use crate::render::LocaleCatalog;
use crate::types::OrderDocument;
use crate::upload::{self, RawUpload};
use serde_json::json;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Process { file, language } => self.process(file, language),
            Commands::Languages => self.languages(),
            Commands::Serve {
                port,
                max_upload_bytes,
            } => {
                let config = ServerConfig {
                    pipeline: self.build_pipeline()?,
                    max_upload_bytes: *max_upload_bytes,
                };
                serve(config, *port).await
            }
        }
    }

    /// Load pipeline configuration
    fn load_config(&self) -> Result<PipelineConfig> {
        match &self.cli.config {
            Some(path) => PipelineConfig::from_file(path),
            None => Ok(PipelineConfig::default()),
        }
    }

    /// Load locale catalog
    fn load_catalog(&self) -> Result<LocaleCatalog> {
        match &self.cli.locales {
            Some(path) => LocaleCatalog::from_file(path),
            None => LocaleCatalog::builtin(),
        }
    }

    /// Build the pipeline from config and catalog
    fn build_pipeline(&self) -> Result<Pipeline> {
        let config = self.load_config()?;
        let catalog = Arc::new(self.load_catalog()?);
        Ok(Pipeline::new(&config, catalog))
    }

    /// Process a CSV file
    fn process(&self, file: &Path, language: &str) -> Result<()> {
        let pipeline = self.build_pipeline()?;

        let bytes =
            fs::read(file).with_context(|| format!("Failed to read '{}'", file.display()))?;
        let filename = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned());
        let upload = RawUpload { filename, bytes };

        let document = upload::process(&pipeline, Some(&upload), language);
        self.output_document(&document)?;

        if document.success {
            Ok(())
        } else {
            Err(Error::Other(
                document.error.unwrap_or_else(|| "Processing failed".to_string()),
            ))
        }
    }

    /// List languages in the catalog
    fn languages(&self) -> Result<()> {
        let catalog = self.load_catalog()?;
        match self.cli.format {
            OutputFormat::Json => {
                println!(
                    "{}",
                    json!({
                        "default": catalog.default_language(),
                        "languages": catalog.languages(),
                    })
                );
            }
            OutputFormat::Pretty => {
                for code in catalog.languages() {
                    let marker = if code == catalog.default_language() {
                        " (default)"
                    } else {
                        ""
                    };
                    println!("{code}{marker}");
                }
            }
        }
        Ok(())
    }

    /// Print a document in the selected format
    fn output_document(&self, document: &OrderDocument) -> Result<()> {
        match self.cli.format {
            OutputFormat::Json => println!("{}", serde_json::to_string(document)?),
            OutputFormat::Pretty => {
                if let Some(content) = &document.content {
                    println!("{content}");
                }
            }
        }
        Ok(())
    }
}
