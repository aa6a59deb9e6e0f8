//! `mailmark check-config`

use std::path::Path;

use mailmark_core::config::PipelineConfig;
use mailmark_core::error::Result;
use mailmark_core::pipeline::Pipeline;
use serde::Serialize;

use crate::cli::{Cli, OutputFormat};

#[derive(Serialize)]
struct ConfigReport<'a> {
    enabled: bool,
    error_strategy: &'a str,
    pipeline_order: Vec<&'a str>,
}

pub fn execute(cli: &Cli, config_path: &Path) -> Result<()> {
    let config = PipelineConfig::load(config_path)?;
    let pipeline = Pipeline::from_config(&config)?;

    let report = ConfigReport {
        enabled: pipeline.is_enabled(),
        error_strategy: pipeline.error_strategy().as_str(),
        pipeline_order: pipeline.names(),
    };

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Human => {
            println!("enabled: {}", report.enabled);
            println!("error_strategy: {}", report.error_strategy);
            println!("stages:");
            for (i, name) in report.pipeline_order.iter().enumerate() {
                println!("  {}. {}", i + 1, name);
            }
        }
    }
    Ok(())
}
